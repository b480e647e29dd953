//! # Unit Types
//!
//! Type-safe wrappers for the units used in tape sizing. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Glazing tape sizing uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Technical Metric Units (Primary)
//!
//! Bondline follows the facade-engineering practice of the tape datasheets it
//! was calibrated against:
//! - Length: meters (m) for panels, millimeters (mm) for bite and thickness
//! - Force: kilogram-force (kgf)
//! - Pressure / stress: kilogram-force per square meter (kgf/m²)
//!
//! Psi and kPa are provided for cross-checking against imperial datasheets
//! and SI wind codes.
//!
//! ## Example
//!
//! ```rust
//! use vhb_core::units::{KgfPerM2, Meters, Millimeters, Psi};
//!
//! let side = Meters(1.2);
//! let side_mm: Millimeters = side.into();
//! assert!((side_mm.0 - 1200.0).abs() < 1e-9);
//!
//! let capacity: Psi = KgfPerM2(35150.0).into();
//! assert!((capacity.0 - 50.0).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// 1 psi expressed in kgf/m² (6894.757 Pa / 9.80665 m/s²)
pub const KGF_M2_PER_PSI: f64 = 703.069_6;

/// Standard gravity, used for kgf ↔ N conversions
pub const STANDARD_GRAVITY: f64 = 9.806_65;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilogram-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kgf(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

impl From<Kgf> for Newtons {
    fn from(kgf: Kgf) -> Self {
        Newtons(kgf.0 * STANDARD_GRAVITY)
    }
}

impl From<Newtons> for Kgf {
    fn from(n: Newtons) -> Self {
        Kgf(n.0 / STANDARD_GRAVITY)
    }
}

// ============================================================================
// Pressure / Stress Units
// ============================================================================

/// Pressure or stress in kilogram-force per square meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfPerM2(pub f64);

/// Pressure or stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Pressure or stress in kilopascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kpa(pub f64);

impl From<Psi> for KgfPerM2 {
    fn from(psi: Psi) -> Self {
        KgfPerM2(psi.0 * KGF_M2_PER_PSI)
    }
}

impl From<KgfPerM2> for Psi {
    fn from(p: KgfPerM2) -> Self {
        Psi(p.0 / KGF_M2_PER_PSI)
    }
}

impl From<Kpa> for KgfPerM2 {
    fn from(kpa: Kpa) -> Self {
        KgfPerM2(kpa.0 * 1000.0 / STANDARD_GRAVITY)
    }
}

impl From<KgfPerM2> for Kpa {
    fn from(p: KgfPerM2) -> Self {
        Kpa(p.0 * STANDARD_GRAVITY / 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Kgf);
impl_arithmetic!(Newtons);
impl_arithmetic!(KgfPerM2);
impl_arithmetic!(Psi);
impl_arithmetic!(Kpa);
