//! # Tape Sizing Equations
//!
//! This module contains all formulas used to size structural glazing tape.
//! Having equations in one place enables:
//! - Easy verification against the tape manufacturer's design guide
//! - Documentation of assumptions and unit conventions
//! - Consistent implementation across the calculator, sweep and reports
//!
//! ## Modules
//!
//! - [`bond`] - Bite formulas (wind, dead load, thermal) and the governing rule
//! - [`registry`] - Equation metadata and tracking for report appendices
//!
//! ## Conventions
//!
//! - **Wind pressure**: Magnitude only, suction and pressure size alike
//! - **Bite**: Measured across the bond line, in millimeters
//! - **Panel sides**: "Shorter" and "longer" refer to plan dimensions
//!
//! ## References
//!
//! - 3M VHB Structural Glazing Tape Technical Guide
//! - ASTM C1401: Standard Guide for Structural Sealant Glazing

pub mod bond;
pub mod registry;

// Re-export commonly used items
pub use bond::{
    admissible_dynamic_stress,
    admissible_static_stress,
    governing_width,
    movement_limited_width_mm,
    panel_weight_kgf,
    thermal_movement_mm,
    thermal_required_width_mm,
    weight_required_width_mm,
    wind_required_width_mm,
    GoverningCriterion,
    WidthRounding,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
