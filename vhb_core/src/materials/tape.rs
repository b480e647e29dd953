//! Structural Glazing Tape (3M VHB)
//!
//! Canonical design constants for VHB structural glazing tape and the
//! glueline thicknesses offered for facade work.
//!
//! Published datasheet values have drifted between revisions (admissible
//! dynamic stresses of 1734, 7030, 8435 and 8500 kgf/m² all circulate).
//! Bondline standardizes on a single set:
//!
//! | Quantity | Value |
//! |----------|-------|
//! | Ultimate dynamic tensile capacity | 35150 kgf/m² (≈ 50 psi) |
//! | Dynamic (wind) safety factor | 5.0 |
//! | Ultimate static (dead-load) capacity | 1735 kgf/m² |
//! | Static safety factor | 10.0 |
//! | Minimum constructive bite | 15 mm |
//! | Allowed movement / bite ratio | 0.15 |

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Nominal ultimate dynamic tensile capacity of the tape (kgf/m²)
pub const ULTIMATE_DYNAMIC_CAPACITY_KGF_M2: f64 = 35150.0;

/// Safety factor applied to short-term (wind) loads
pub const DYNAMIC_SAFETY_FACTOR: f64 = 5.0;

/// Nominal ultimate static (sustained shear) capacity of the tape (kgf/m²)
pub const ULTIMATE_STATIC_CAPACITY_KGF_M2: f64 = 1735.0;

/// Safety factor applied to sustained dead load
pub const STATIC_SAFETY_FACTOR: f64 = 10.0;

/// Minimum bite recommended for structural facade applications (mm)
pub const MINIMUM_CONSTRUCTIVE_WIDTH_MM: f64 = 15.0;

/// Differential movement may not exceed this fraction of the bonded width
pub const MAX_MOVEMENT_RATIO: f64 = 0.15;

/// Glueline thickness of the tape.
///
/// Serializes as the plain thickness in millimeters (`1.1`, `1.6`, `2.3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum TapeThickness {
    /// 1.1 mm glueline
    Mm1_1,
    /// 1.6 mm glueline
    Mm1_6,
    /// 2.3 mm glueline (the usual structural glazing choice)
    Mm2_3,
}

impl TapeThickness {
    /// All thicknesses for UI selection
    pub const ALL: [TapeThickness; 3] = [
        TapeThickness::Mm1_1,
        TapeThickness::Mm1_6,
        TapeThickness::Mm2_3,
    ];

    /// Thickness in millimeters
    pub fn mm(&self) -> f64 {
        match self {
            TapeThickness::Mm1_1 => 1.1,
            TapeThickness::Mm1_6 => 1.6,
            TapeThickness::Mm2_3 => 2.3,
        }
    }

    /// Match a thickness value against the available set.
    ///
    /// Tolerates float noise from UI spinners (±0.01 mm).
    pub fn from_mm(mm: f64) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| (t.mm() - mm).abs() < 0.01)
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "tape_thickness_mm",
                    mm.to_string(),
                    "Tape thickness must be one of 1.1, 1.6 or 2.3 mm",
                )
            })
    }

    /// Parse from common string representations ("2.3", "2.3mm", "2,3")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let cleaned = s.trim().trim_end_matches("mm").trim().replace(',', ".");
        let mm: f64 = cleaned.parse().map_err(|_| {
            CalcError::invalid_input("tape_thickness_mm", s, "Not a number")
        })?;
        Self::from_mm(mm)
    }
}

impl TryFrom<f64> for TapeThickness {
    type Error = CalcError;

    fn try_from(mm: f64) -> Result<Self, Self::Error> {
        Self::from_mm(mm)
    }
}

impl From<TapeThickness> for f64 {
    fn from(t: TapeThickness) -> Self {
        t.mm()
    }
}

impl std::fmt::Display for TapeThickness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} mm", self.mm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admissible_constants() {
        assert!((ULTIMATE_DYNAMIC_CAPACITY_KGF_M2 / DYNAMIC_SAFETY_FACTOR - 7030.0).abs() < 1e-9);
        assert!((ULTIMATE_STATIC_CAPACITY_KGF_M2 / STATIC_SAFETY_FACTOR - 173.5).abs() < 1e-9);
    }

    #[test]
    fn test_from_mm() {
        assert_eq!(TapeThickness::from_mm(2.3).unwrap(), TapeThickness::Mm2_3);
        assert_eq!(TapeThickness::from_mm(1.6000001).unwrap(), TapeThickness::Mm1_6);
        assert!(TapeThickness::from_mm(2.0).is_err());
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(TapeThickness::from_str_flexible("1.1").unwrap(), TapeThickness::Mm1_1);
        assert_eq!(TapeThickness::from_str_flexible("2,3 mm").unwrap(), TapeThickness::Mm2_3);
        assert!(TapeThickness::from_str_flexible("thick").is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&TapeThickness::Mm1_6).unwrap();
        assert_eq!(json, "1.6");

        let parsed: TapeThickness = serde_json::from_str("2.3").unwrap();
        assert_eq!(parsed, TapeThickness::Mm2_3);

        assert!(serde_json::from_str::<TapeThickness>("3.0").is_err());
    }
}
