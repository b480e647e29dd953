//! # Structural Glazing Bond Formulas
//!
//! Closed-form sizing rules for the bite (bondline width) of structural
//! glazing tape along a panel edge.
//!
//! ## Notation
//!
//! - `p` = Design wind pressure (kgf/m²)
//! - `a` = Shorter panel side (m), `b` = longer panel side (m)
//! - `σ_dyn` = Admissible dynamic (wind) stress of the tape (kgf/m²)
//! - `σ_st` = Admissible static (dead-load shear) stress of the tape (kgf/m²)
//! - `W` = Panel self-weight (kgf)
//! - `P` = Bonded perimeter (m)
//! - `Δα` = Thermal expansion mismatch between substrates (1/°C)
//! - `ΔT` = Design temperature differential (°C)
//!
//! ## References
//!
//! - 3M VHB Structural Glazing Tape Technical Guide (dynamic and static design stresses)
//! - ASTM C1401: Standard Guide for Structural Sealant Glazing (tributary width method)

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::MAX_MOVEMENT_RATIO;
use crate::units::{Meters, Millimeters};

// =============================================================================
// ADMISSIBLE STRESSES
// =============================================================================

fn admissible_stress(
    operation: &str,
    ultimate_field: &str,
    ultimate_kgf_m2: f64,
    safety_factor: f64,
) -> CalcResult<f64> {
    require_positive(ultimate_field, ultimate_kgf_m2)?;
    if safety_factor == 0.0 {
        return Err(CalcError::division_by_zero(operation));
    }
    require_positive("safety_factor", safety_factor)?;
    Ok(ultimate_kgf_m2 / safety_factor)
}

/// Admissible dynamic (short-term wind) stress of the tape
///
/// # Formula
/// σ_dyn = σ_ult / FS
///
/// # Errors
/// * `DivisionByZero` when `safety_factor == 0`
/// * `InvalidInput` when either argument is negative or non-finite
///
/// # Example
/// ```rust
/// use vhb_core::equations::bond::admissible_dynamic_stress;
///
/// let sigma = admissible_dynamic_stress(35150.0, 5.0).unwrap();
/// assert!((sigma - 7030.0).abs() < 1e-9);
/// ```
pub fn admissible_dynamic_stress(
    ultimate_capacity_kgf_m2: f64,
    safety_factor: f64,
) -> CalcResult<f64> {
    admissible_stress(
        "admissible dynamic stress",
        "ultimate_capacity_kgf_m2",
        ultimate_capacity_kgf_m2,
        safety_factor,
    )
}

/// Admissible static (sustained dead-load shear) stress of the tape
///
/// Same rule as [`admissible_dynamic_stress`] with the static capacity and
/// the larger static safety factor.
pub fn admissible_static_stress(
    ultimate_static_capacity_kgf_m2: f64,
    static_safety_factor: f64,
) -> CalcResult<f64> {
    admissible_stress(
        "admissible static stress",
        "ultimate_static_capacity_kgf_m2",
        ultimate_static_capacity_kgf_m2,
        static_safety_factor,
    )
}

// =============================================================================
// WIND
// =============================================================================

/// Bite required to carry wind suction on the shorter panel side
///
/// ```text
///   ┌──────────────────┐  ← bond line
///   │                  │
///   │    p (kgf/m²)    │ a (shorter side)
///   │                  │
///   └──────────────────┘  ← bond line
/// ```
///
/// # Formula
/// w_wind = p · a / (2 · σ_dyn) · 1000
///
/// The tributary load of the shorter side is shared by two opposing bond lines.
///
/// # Errors
/// `InvalidInput` when `admissible_stress_kgf_m2 <= 0`.
///
/// # Example
/// ```rust
/// use vhb_core::equations::bond::wind_required_width_mm;
///
/// let w = wind_required_width_mm(450.0, 1.2, 7030.0).unwrap();
/// assert!((w - 38.41).abs() < 0.01);
/// ```
pub fn wind_required_width_mm(
    pressure_kgf_m2: f64,
    shorter_side_m: f64,
    admissible_stress_kgf_m2: f64,
) -> CalcResult<f64> {
    require_positive("admissible_stress_kgf_m2", admissible_stress_kgf_m2)?;
    let width_m = (pressure_kgf_m2 * shorter_side_m) / (2.0 * admissible_stress_kgf_m2);
    Ok(Millimeters::from(Meters(width_m)).0)
}

// =============================================================================
// DEAD LOAD
// =============================================================================

/// Panel self-weight
///
/// # Formula
/// W = width · height · (t / 1000) · ρ
///
/// # Example
/// ```rust
/// use vhb_core::equations::bond::panel_weight_kgf;
///
/// let w = panel_weight_kgf(1.2, 2.4, 6.0, 2500.0);
/// assert!((w - 43.2).abs() < 1e-9);
/// ```
#[inline]
pub fn panel_weight_kgf(
    width_m: f64,
    height_m: f64,
    thickness_mm: f64,
    density_kg_m3: f64,
) -> f64 {
    let thickness_m = Meters::from(Millimeters(thickness_mm)).0;
    width_m * height_m * thickness_m * density_kg_m3
}

/// Bite required to carry the panel weight in sustained shear
///
/// Applies only when no setting blocks support the panel; the caller
/// decides that and uses 0 otherwise.
///
/// # Formula
/// w_weight = W / (P · σ_st) · 1000
///
/// # Errors
/// `InvalidInput` when the perimeter or admissible stress is not positive.
pub fn weight_required_width_mm(
    panel_weight_kgf: f64,
    perimeter_m: f64,
    admissible_static_stress_kgf_m2: f64,
) -> CalcResult<f64> {
    require_positive("perimeter_m", perimeter_m)?;
    require_positive("admissible_static_stress_kgf_m2", admissible_static_stress_kgf_m2)?;
    let width_m = panel_weight_kgf / (perimeter_m * admissible_static_stress_kgf_m2);
    Ok(Millimeters::from(Meters(width_m)).0)
}

// =============================================================================
// THERMAL MOVEMENT
// =============================================================================

/// Differential thermal movement along the longer side
///
/// # Formula
/// ΔL = b · 1000 · |Δα| · ΔT
#[inline]
pub fn thermal_movement_mm(longer_side_m: f64, delta_alpha: f64, delta_t_c: f64) -> f64 {
    Millimeters::from(Meters(longer_side_m)).0 * delta_alpha.abs() * delta_t_c
}

/// Bite needed so that a movement stays within `max_ratio` of the bonded width
///
/// # Formula
/// w = ΔL / ratio
pub fn movement_limited_width_mm(movement_mm: f64, max_ratio: f64) -> CalcResult<f64> {
    require_positive("max_movement_ratio", max_ratio)?;
    require_non_negative("thermal_movement_mm", movement_mm)?;
    Ok(movement_mm / max_ratio)
}

/// Bite required to absorb differential thermal movement
///
/// Empirical rule: movement may not exceed 15% of the bonded width.
///
/// # Formula
/// w_thermal = b · 1000 · |Δα| · ΔT / 0.15
///
/// # Example
/// ```rust
/// use vhb_core::equations::bond::thermal_required_width_mm;
///
/// // 2.40 m glass on aluminum, ΔT = 40 °C
/// let w = thermal_required_width_mm(2.4, 14.0e-6, 40.0).unwrap();
/// assert!((w - 8.96).abs() < 1e-6);
/// ```
pub fn thermal_required_width_mm(
    longer_side_m: f64,
    delta_alpha: f64,
    delta_t_c: f64,
) -> CalcResult<f64> {
    let movement = thermal_movement_mm(longer_side_m, delta_alpha, delta_t_c);
    movement_limited_width_mm(movement, MAX_MOVEMENT_RATIO)
}

// =============================================================================
// GOVERNING WIDTH
// =============================================================================

/// How the governing bite is rounded up to a buildable value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WidthRounding {
    /// Round up to the next whole millimeter
    #[default]
    NextMillimeter,
    /// Round up to the next multiple of 5 mm
    NextMultipleOf5,
}

impl WidthRounding {
    /// Apply the rounding to a width in millimeters
    pub fn round_up(&self, width_mm: f64) -> f64 {
        match self {
            WidthRounding::NextMillimeter => width_mm.ceil(),
            WidthRounding::NextMultipleOf5 => (width_mm / 5.0).ceil() * 5.0,
        }
    }
}

/// The criterion that produced the final bite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoverningCriterion {
    /// Wind suction on the shorter side
    Wind,
    /// Dead load in sustained shear (no setting blocks)
    Weight,
    /// Differential thermal movement
    Thermal,
    /// Minimum constructive width
    MinimumConstructive,
}

impl GoverningCriterion {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            GoverningCriterion::Wind => "Wind",
            GoverningCriterion::Weight => "Dead Load",
            GoverningCriterion::Thermal => "Thermal Movement",
            GoverningCriterion::MinimumConstructive => "Minimum Constructive",
        }
    }
}

impl std::fmt::Display for GoverningCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Pick the governing bite among all criteria and round it up
///
/// Unused criteria are passed as 0 (or `None` for thermal). On exact ties
/// the earlier criterion wins: Wind, Weight, Thermal, then Minimum.
///
/// # Example
/// ```rust
/// use vhb_core::equations::bond::{governing_width, GoverningCriterion, WidthRounding};
///
/// let (w, by) = governing_width(12.8, 0.0, None, 15.0, WidthRounding::NextMillimeter);
/// assert_eq!(w, 15.0);
/// assert_eq!(by, GoverningCriterion::MinimumConstructive);
/// ```
pub fn governing_width(
    wind_mm: f64,
    weight_mm: f64,
    thermal_mm: Option<f64>,
    minimum_mm: f64,
    rounding: WidthRounding,
) -> (f64, GoverningCriterion) {
    let candidates = [
        (wind_mm, GoverningCriterion::Wind),
        (weight_mm, GoverningCriterion::Weight),
        (thermal_mm.unwrap_or(0.0), GoverningCriterion::Thermal),
        (minimum_mm, GoverningCriterion::MinimumConstructive),
    ];

    let (mut governing_mm, mut criterion) = candidates[0];
    for &(value, by) in &candidates[1..] {
        // strict: ties stay with the earlier criterion
        if value > governing_mm {
            governing_mm = value;
            criterion = by;
        }
    }

    (rounding.round_up(governing_mm), criterion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admissible_dynamic_stress() {
        let sigma = admissible_dynamic_stress(35150.0, 5.0).unwrap();
        assert!((sigma - 7030.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_safety_factor_is_division_by_zero() {
        let err = admissible_dynamic_stress(35150.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_negative_safety_factor_is_invalid() {
        let err = admissible_static_stress(1735.0, -10.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("safety_factor"));
    }

    #[test]
    fn test_wind_width_default_panel() {
        // (150 * 1.20) / (2 * 7030) * 1000 = 12.80 mm
        let w = wind_required_width_mm(150.0, 1.2, 7030.0).unwrap();
        assert!((w - 12.802).abs() < 0.001);
    }

    #[test]
    fn test_wind_width_rejects_zero_stress() {
        assert!(wind_required_width_mm(150.0, 1.2, 0.0).is_err());
        assert!(wind_required_width_mm(150.0, 1.2, -7030.0).is_err());
    }

    #[test]
    fn test_zero_pressure_needs_no_wind_bite() {
        assert_eq!(wind_required_width_mm(0.0, 1.2, 7030.0).unwrap(), 0.0);
    }

    #[test]
    fn test_weight_width() {
        // 43.2 / (7.2 * 173.5) * 1000 = 34.58 mm
        let w = weight_required_width_mm(43.2, 7.2, 173.5).unwrap();
        assert!((w - 34.58).abs() < 0.01);
    }

    #[test]
    fn test_thermal_movement_ignores_sign_of_mismatch() {
        let a = thermal_movement_mm(2.4, 14.0e-6, 40.0);
        let b = thermal_movement_mm(2.4, -14.0e-6, 40.0);
        assert!((a - 1.344).abs() < 1e-9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_movement_ratio_must_be_positive() {
        assert!(movement_limited_width_mm(1.0, 0.0).is_err());
        assert!((movement_limited_width_mm(1.5, 0.15).unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounding_modes() {
        assert_eq!(WidthRounding::NextMillimeter.round_up(38.41), 39.0);
        assert_eq!(WidthRounding::NextMillimeter.round_up(15.0), 15.0);
        assert_eq!(WidthRounding::NextMultipleOf5.round_up(38.41), 40.0);
        assert_eq!(WidthRounding::NextMultipleOf5.round_up(15.0), 15.0);
        assert_eq!(WidthRounding::NextMultipleOf5.round_up(15.2), 20.0);
    }

    #[test]
    fn test_governing_wind() {
        let (w, by) = governing_width(38.41, 0.0, None, 15.0, WidthRounding::NextMillimeter);
        assert_eq!(w, 39.0);
        assert_eq!(by, GoverningCriterion::Wind);
    }

    #[test]
    fn test_governing_thermal() {
        let (w, by) = governing_width(12.8, 0.0, Some(18.2), 15.0, WidthRounding::NextMillimeter);
        assert_eq!(w, 19.0);
        assert_eq!(by, GoverningCriterion::Thermal);
    }

    #[test]
    fn test_tie_break_order() {
        let (_, by) = governing_width(20.0, 20.0, Some(20.0), 15.0, WidthRounding::NextMillimeter);
        assert_eq!(by, GoverningCriterion::Wind);

        let (_, by) = governing_width(10.0, 20.0, Some(20.0), 15.0, WidthRounding::NextMillimeter);
        assert_eq!(by, GoverningCriterion::Weight);

        let (_, by) = governing_width(10.0, 0.0, Some(15.0), 15.0, WidthRounding::NextMillimeter);
        assert_eq!(by, GoverningCriterion::Thermal);

        let (_, by) = governing_width(15.0, 0.0, None, 15.0, WidthRounding::NextMillimeter);
        assert_eq!(by, GoverningCriterion::Wind);
    }
}
