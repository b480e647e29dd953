//! Bonded Substrates
//!
//! Panel and frame materials the tape bonds to. Only the properties the
//! sizing needs are tabulated: linear thermal expansion and density.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Density of soda-lime float glass (kg/m³)
pub const GLASS_DENSITY_KG_M3: f64 = 2500.0;

/// Substrate materials found on either side of a structural glazing bond
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Substrate {
    /// Soda-lime float glass
    #[default]
    Glass,
    /// Extruded aluminum (6063-T5/T6 frames)
    Aluminum,
    /// Carbon steel
    Steel,
    /// Austenitic stainless steel
    StainlessSteel,
    /// Aluminum composite panel
    Acm,
    /// Polycarbonate sheet
    Polycarbonate,
}

impl Substrate {
    /// All substrates for UI selection
    pub const ALL: [Substrate; 6] = [
        Substrate::Glass,
        Substrate::Aluminum,
        Substrate::Steel,
        Substrate::StainlessSteel,
        Substrate::Acm,
        Substrate::Polycarbonate,
    ];

    /// Linear coefficient of thermal expansion (1/°C)
    pub fn thermal_expansion_per_c(&self) -> f64 {
        match self {
            Substrate::Glass => 9.0e-6,
            Substrate::Aluminum => 23.0e-6,
            Substrate::Steel => 12.0e-6,
            Substrate::StainlessSteel => 17.3e-6,
            Substrate::Acm => 24.0e-6,
            Substrate::Polycarbonate => 65.0e-6,
        }
    }

    /// Typical density (kg/m³)
    pub fn density_kg_m3(&self) -> f64 {
        match self {
            Substrate::Glass => GLASS_DENSITY_KG_M3,
            Substrate::Aluminum => 2700.0,
            Substrate::Steel => 7850.0,
            Substrate::StainlessSteel => 7900.0,
            Substrate::Acm => 1500.0,
            Substrate::Polycarbonate => 1200.0,
        }
    }

    /// Absolute difference in thermal expansion against another substrate
    pub fn expansion_mismatch(&self, other: Substrate) -> f64 {
        (self.thermal_expansion_per_c() - other.thermal_expansion_per_c()).abs()
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "glass" | "vidrio" => Ok(Substrate::Glass),
            "aluminum" | "aluminium" | "al" => Ok(Substrate::Aluminum),
            "steel" => Ok(Substrate::Steel),
            "stainless" | "stainlesssteel" | "ss" => Ok(Substrate::StainlessSteel),
            "acm" => Ok(Substrate::Acm),
            "polycarbonate" | "pc" => Ok(Substrate::Polycarbonate),
            _ => Err(CalcError::invalid_input("substrate", s, "Unknown substrate")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Substrate::Glass => "Glass",
            Substrate::Aluminum => "Aluminum",
            Substrate::Steel => "Steel",
            Substrate::StainlessSteel => "Stainless Steel",
            Substrate::Acm => "Aluminum Composite",
            Substrate::Polycarbonate => "Polycarbonate",
        }
    }
}

impl std::fmt::Display for Substrate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glass_aluminum_mismatch() {
        let mismatch = Substrate::Glass.expansion_mismatch(Substrate::Aluminum);
        assert!((mismatch - 14.0e-6).abs() < 1e-12);
        assert_eq!(mismatch, Substrate::Aluminum.expansion_mismatch(Substrate::Glass));
    }

    #[test]
    fn test_same_substrate_has_no_mismatch() {
        for s in Substrate::ALL {
            assert_eq!(s.expansion_mismatch(s), 0.0);
        }
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(Substrate::from_str_flexible("Aluminium").unwrap(), Substrate::Aluminum);
        assert_eq!(
            Substrate::from_str_flexible("stainless-steel").unwrap(),
            Substrate::StainlessSteel
        );
        assert!(Substrate::from_str_flexible("granite").is_err());
    }

    #[test]
    fn test_default_is_glass() {
        assert_eq!(Substrate::default(), Substrate::Glass);
        assert_eq!(Substrate::default().density_kg_m3(), 2500.0);
    }
}
