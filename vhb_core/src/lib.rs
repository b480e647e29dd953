//! # vhb_core - Structural Glazing Tape Sizing Engine
//!
//! `vhb_core` sizes the bite (bonded width) of double-sided structural
//! glazing tape holding a panel to its frame. All inputs and outputs are
//! JSON-serializable, so the same calls serve the CLI, scripts and
//! LLM tool integrations.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use vhb_core::{compute, GoverningCriterion, LoadConfig, PanelConfig};
//!
//! let panel = PanelConfig::default(); // 1.2 m x 2.4 m, 6 mm glass
//! let load = LoadConfig {
//!     wind_pressure_kgf_m2: 450.0,
//!     ..LoadConfig::default()
//! };
//!
//! let result = compute(&panel, &load).unwrap();
//! assert_eq!(result.final_width_mm, 39.0);
//! assert_eq!(result.governing_criterion, GoverningCriterion::Wind);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The tape sizing calculation
//! - [`equations`] - Bite formulas and the equation registry
//! - [`materials`] - Tape constants and substrate properties
//! - [`sensitivity`] - Wind pressure sweeps
//! - [`report`] - Markdown calculation summaries
//! - [`project`] - Panel schedules sized in one pass
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod project;
pub mod report;
pub mod sensitivity;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    compute, compute_tracked, compute_with_rules, DesignRules, GoverningCriterion, LoadConfig,
    PanelConfig, PanelItem, SizingResult, WidthRounding,
};
pub use errors::{CalcError, CalcResult};
pub use project::{GlobalSettings, Project, ProjectMetadata, ScheduleRow, ScheduleSummary};
