//! # Materials Database
//!
//! Material definitions for structural glazing bonds: the tape itself and
//! the substrates it joins.
//!
//! ## Material Types
//!
//! - **Tape**: VHB structural glazing tape design constants and glueline thicknesses
//! - **Substrates**: Glass, aluminum and other panel/frame materials
//!
//! ## Example
//!
//! ```rust
//! use vhb_core::materials::{Substrate, TapeThickness, ULTIMATE_DYNAMIC_CAPACITY_KGF_M2};
//!
//! let mismatch = Substrate::Glass.expansion_mismatch(Substrate::Aluminum);
//! println!("Δα = {:.1e} 1/°C", mismatch);
//!
//! let gt = TapeThickness::Mm2_3;
//! println!("Glueline {} at {} kgf/m² ultimate", gt, ULTIMATE_DYNAMIC_CAPACITY_KGF_M2);
//! ```

pub mod substrate;
pub mod tape;

pub use substrate::{Substrate, GLASS_DENSITY_KG_M3};
pub use tape::{
    TapeThickness, DYNAMIC_SAFETY_FACTOR, MAX_MOVEMENT_RATIO, MINIMUM_CONSTRUCTIVE_WIDTH_MM,
    STATIC_SAFETY_FACTOR, ULTIMATE_DYNAMIC_CAPACITY_KGF_M2, ULTIMATE_STATIC_CAPACITY_KGF_M2,
};
