//! # Structural Glazing Tape Sizing
//!
//! Sizes the bite (bondline width) of VHB structural glazing tape holding a
//! glass or metal panel to its frame.
//!
//! ## Assumptions
//!
//! - Four-sided bond along the full panel perimeter
//! - Wind governs on the shorter side (two opposing bond lines share it)
//! - Dead load is carried by setting blocks unless stated otherwise
//! - Thermal movement is checked only when a temperature differential is given
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use vhb_core::calculations::tape_sizing::{compute, GoverningCriterion, LoadConfig, PanelConfig};
//!
//! let panel = PanelConfig::default(); // 1.20 x 2.40 m, 6 mm glass
//! let load = LoadConfig {
//!     wind_pressure_kgf_m2: 450.0,
//!     ..LoadConfig::default()
//! };
//!
//! let result = compute(&panel, &load).unwrap();
//! assert_eq!(result.final_width_mm, 39.0);
//! assert_eq!(result.governing_criterion, GoverningCriterion::Wind);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equations::bond::{
    admissible_dynamic_stress, admissible_static_stress, governing_width,
    movement_limited_width_mm, panel_weight_kgf, thermal_movement_mm, weight_required_width_mm,
    wind_required_width_mm,
};
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::{
    Substrate, TapeThickness, DYNAMIC_SAFETY_FACTOR, GLASS_DENSITY_KG_M3, MAX_MOVEMENT_RATIO,
    MINIMUM_CONSTRUCTIVE_WIDTH_MM, STATIC_SAFETY_FACTOR, ULTIMATE_DYNAMIC_CAPACITY_KGF_M2,
    ULTIMATE_STATIC_CAPACITY_KGF_M2,
};

pub use crate::equations::bond::{GoverningCriterion, WidthRounding};

/// Panel geometry and material.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-01",
///   "width_m": 1.2,
///   "height_m": 2.4,
///   "thickness_mm": 6.0,
///   "density_kg_m3": 2500.0,
///   "panel_substrate": "Glass",
///   "frame_substrate": "Aluminum"
/// }
/// ```
///
/// Every field has a default, so `{}` is a valid panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// User label for this panel (e.g., "P-01", "Level 3 Vision Glass")
    pub label: String,

    /// Panel width in meters
    pub width_m: f64,

    /// Panel height in meters
    pub height_m: f64,

    /// Panel thickness in millimeters
    pub thickness_mm: f64,

    /// Panel density in kg/m³ (2500 for glass)
    pub density_kg_m3: f64,

    /// Panel material (thermal expansion on the panel side of the bond)
    pub panel_substrate: Substrate,

    /// Frame material (thermal expansion on the frame side of the bond)
    pub frame_substrate: Substrate,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            label: String::new(),
            width_m: 1.20,
            height_m: 2.40,
            thickness_mm: 6.0,
            density_kg_m3: GLASS_DENSITY_KG_M3,
            panel_substrate: Substrate::Glass,
            frame_substrate: Substrate::Aluminum,
        }
    }
}

impl PanelConfig {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_m", self.width_m)?;
        require_positive("height_m", self.height_m)?;
        require_positive("thickness_mm", self.thickness_mm)?;
        require_positive("density_kg_m3", self.density_kg_m3)?;
        Ok(())
    }

    /// Shorter plan dimension (carries the tributary wind load)
    pub fn shorter_side_m(&self) -> f64 {
        self.width_m.min(self.height_m)
    }

    /// Longer plan dimension (governs thermal movement)
    pub fn longer_side_m(&self) -> f64 {
        self.width_m.max(self.height_m)
    }

    /// Bonded perimeter 2(w + h)
    pub fn perimeter_m(&self) -> f64 {
        2.0 * (self.width_m + self.height_m)
    }

    /// Plan area w·h
    pub fn area_m2(&self) -> f64 {
        self.width_m * self.height_m
    }

    /// Panel self-weight in kgf
    pub fn weight_kgf(&self) -> f64 {
        panel_weight_kgf(self.width_m, self.height_m, self.thickness_mm, self.density_kg_m3)
    }

    /// Thermal expansion mismatch between panel and frame (1/°C)
    pub fn expansion_mismatch(&self) -> f64 {
        self.panel_substrate.expansion_mismatch(self.frame_substrate)
    }
}

/// Loads, safety factors and tape capacities.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wind_pressure_kgf_m2": 150.0,
///   "safety_factor": 5.0,
///   "ultimate_capacity_kgf_m2": 35150.0,
///   "uses_setting_blocks": true,
///   "thermal_delta_c": 40.0,
///   "tape_thickness_mm": 2.3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Design wind pressure (kgf/m²), magnitude only
    pub wind_pressure_kgf_m2: f64,

    /// Safety factor on the dynamic (wind) capacity
    pub safety_factor: f64,

    /// Ultimate dynamic tensile capacity of the tape (kgf/m²)
    pub ultimate_capacity_kgf_m2: f64,

    /// Setting blocks carry the dead load, so the tape sees no sustained shear
    pub uses_setting_blocks: bool,

    /// Design temperature differential (°C); enables the thermal criterion
    pub thermal_delta_c: Option<f64>,

    /// Glueline thickness, carried through to the result and reports
    pub tape_thickness_mm: Option<TapeThickness>,

    /// Safety factor on the static (dead-load) capacity
    pub static_safety_factor: f64,

    /// Ultimate static shear capacity of the tape (kgf/m²)
    pub ultimate_static_capacity_kgf_m2: f64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        LoadConfig {
            wind_pressure_kgf_m2: 150.0,
            safety_factor: DYNAMIC_SAFETY_FACTOR,
            ultimate_capacity_kgf_m2: ULTIMATE_DYNAMIC_CAPACITY_KGF_M2,
            uses_setting_blocks: true,
            thermal_delta_c: None,
            tape_thickness_mm: None,
            static_safety_factor: STATIC_SAFETY_FACTOR,
            ultimate_static_capacity_kgf_m2: ULTIMATE_STATIC_CAPACITY_KGF_M2,
        }
    }
}

impl LoadConfig {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("wind_pressure_kgf_m2", self.wind_pressure_kgf_m2)?;
        require_positive("safety_factor", self.safety_factor)?;
        require_positive("ultimate_capacity_kgf_m2", self.ultimate_capacity_kgf_m2)?;
        require_positive("static_safety_factor", self.static_safety_factor)?;
        require_positive("ultimate_static_capacity_kgf_m2", self.ultimate_static_capacity_kgf_m2)?;
        if let Some(delta) = self.thermal_delta_c {
            require_non_negative("thermal_delta_c", delta)?;
        }
        Ok(())
    }
}

/// Rules for turning the criterion widths into a buildable bite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignRules {
    /// Minimum constructive bite (mm)
    pub minimum_width_mm: f64,

    /// Rounding applied to the governing width
    pub rounding: WidthRounding,

    /// Allowed differential movement as a fraction of the bite
    pub max_movement_ratio: f64,
}

impl Default for DesignRules {
    fn default() -> Self {
        DesignRules {
            minimum_width_mm: MINIMUM_CONSTRUCTIVE_WIDTH_MM,
            rounding: WidthRounding::NextMillimeter,
            max_movement_ratio: MAX_MOVEMENT_RATIO,
        }
    }
}

impl DesignRules {
    /// Validate the rule set.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("minimum_width_mm", self.minimum_width_mm)?;
        require_positive("max_movement_ratio", self.max_movement_ratio)?;
        if self.max_movement_ratio > 1.0 {
            return Err(CalcError::invalid_input(
                "max_movement_ratio",
                self.max_movement_ratio.to_string(),
                "Movement ratio is a fraction of the bite and cannot exceed 1.0",
            ));
        }
        Ok(())
    }
}

/// Results from tape sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "panel_weight_kgf": 43.2,
///   "wind_required_width_mm": 12.80,
///   "weight_required_width_mm": 0.0,
///   "thermal_required_width_mm": null,
///   "governing_criterion": "MinimumConstructive",
///   "final_width_mm": 15.0,
///   "admissible_dynamic_stress_kgf_m2": 7030.0,
///   "admissible_static_stress_kgf_m2": 173.5,
///   "shorter_side_m": 1.2,
///   "longer_side_m": 2.4,
///   "perimeter_m": 7.2,
///   "thermal_movement_mm": null,
///   "tape_thickness_mm": 2.3,
///   "minimum_width_mm": 15.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    // === Criterion Widths ===
    /// Panel self-weight (kgf)
    pub panel_weight_kgf: f64,

    /// Bite required for wind (mm)
    pub wind_required_width_mm: f64,

    /// Bite required for dead load (mm), zero with setting blocks
    pub weight_required_width_mm: f64,

    /// Bite required for thermal movement (mm), only with a temperature differential
    pub thermal_required_width_mm: Option<f64>,

    // === Governing ===
    /// The criterion that produced the final bite
    pub governing_criterion: GoverningCriterion,

    /// Final bite, rounded up and floored at the minimum (mm)
    pub final_width_mm: f64,

    // === Supporting Values ===
    /// Admissible dynamic stress σ_ult / FS (kgf/m²)
    pub admissible_dynamic_stress_kgf_m2: f64,

    /// Admissible static stress σ_ult,st / FS_st (kgf/m²)
    pub admissible_static_stress_kgf_m2: f64,

    /// Shorter panel side (m)
    pub shorter_side_m: f64,

    /// Longer panel side (m)
    pub longer_side_m: f64,

    /// Bonded perimeter (m)
    pub perimeter_m: f64,

    /// Differential thermal movement (mm)
    pub thermal_movement_mm: Option<f64>,

    /// Glueline thickness (mm)
    pub tape_thickness_mm: Option<TapeThickness>,

    /// Minimum constructive bite that applied (mm)
    pub minimum_width_mm: f64,
}

impl SizingResult {
    /// Largest criterion width before rounding (mm)
    pub fn required_width_mm(&self) -> f64 {
        self.criterion_widths()
            .into_iter()
            .map(|(_, w)| w)
            .fold(self.minimum_width_mm, f64::max)
    }

    /// Width per evaluated criterion, in tie-break order
    pub fn criterion_widths(&self) -> Vec<(GoverningCriterion, f64)> {
        let mut widths = vec![
            (GoverningCriterion::Wind, self.wind_required_width_mm),
            (GoverningCriterion::Weight, self.weight_required_width_mm),
        ];
        if let Some(thermal) = self.thermal_required_width_mm {
            widths.push((GoverningCriterion::Thermal, thermal));
        }
        widths
    }

    /// Share of the final bite demanded by wind alone (never above 1.0)
    pub fn wind_utilization(&self) -> f64 {
        if self.final_width_mm > 0.0 {
            self.wind_required_width_mm / self.final_width_mm
        } else {
            0.0
        }
    }
}

/// Size the tape with the default design rules.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Arguments
///
/// * `panel` - Panel geometry and material
/// * `load` - Wind pressure, safety factors and tape capacities
///
/// # Returns
///
/// * `Ok(SizingResult)` - All criterion widths and the governing bite
/// * `Err(CalcError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use vhb_core::calculations::tape_sizing::{compute, LoadConfig, PanelConfig};
///
/// let result = compute(&PanelConfig::default(), &LoadConfig::default()).unwrap();
/// assert_eq!(result.final_width_mm, 15.0);
/// ```
pub fn compute(panel: &PanelConfig, load: &LoadConfig) -> CalcResult<SizingResult> {
    compute_with_rules(panel, load, &DesignRules::default())
}

/// Size the tape with explicit design rules (minimum, rounding, movement ratio).
pub fn compute_with_rules(
    panel: &PanelConfig,
    load: &LoadConfig,
    rules: &DesignRules,
) -> CalcResult<SizingResult> {
    let mut tracker = EquationTracker::new();
    compute_tracked(panel, load, rules, &mut tracker)
}

/// Size the tape and record each equation applied in `tracker`.
pub fn compute_tracked(
    panel: &PanelConfig,
    load: &LoadConfig,
    rules: &DesignRules,
    tracker: &mut EquationTracker,
) -> CalcResult<SizingResult> {
    panel.validate()?;
    load.validate()?;
    rules.validate()?;

    let label = panel.label.as_str();

    // === Design Stresses ===
    let admissible_dynamic =
        admissible_dynamic_stress(load.ultimate_capacity_kgf_m2, load.safety_factor)?;
    tracker.record_for_member(Equation::AdmissibleDynamicStress, "Wind design stress", label);

    let admissible_static = admissible_static_stress(
        load.ultimate_static_capacity_kgf_m2,
        load.static_safety_factor,
    )?;

    // === Wind ===
    let shorter_side_m = panel.shorter_side_m();
    let wind_mm = wind_required_width_mm(
        load.wind_pressure_kgf_m2,
        shorter_side_m,
        admissible_dynamic,
    )?;
    tracker.record_for_member(Equation::WindBite, "Wind criterion", label);

    // === Dead Load ===
    let weight_kgf = panel.weight_kgf();
    tracker.record_for_member(Equation::PanelWeight, "Panel self-weight", label);

    let perimeter_m = panel.perimeter_m();
    let weight_mm = if load.uses_setting_blocks {
        0.0
    } else {
        tracker.record_for_member(
            Equation::AdmissibleStaticStress,
            "Dead load design stress",
            label,
        );
        tracker.record_for_member(Equation::DeadLoadBite, "Dead load criterion", label);
        weight_required_width_mm(weight_kgf, perimeter_m, admissible_static)?
    };

    // === Thermal ===
    let longer_side_m = panel.longer_side_m();
    let (thermal_movement, thermal_mm) = match load.thermal_delta_c {
        Some(delta_t) => {
            let movement = thermal_movement_mm(longer_side_m, panel.expansion_mismatch(), delta_t);
            let width = movement_limited_width_mm(movement, rules.max_movement_ratio)?;
            tracker.record_for_member(Equation::ThermalMovement, "Differential movement", label);
            tracker.record_for_member(Equation::ThermalBite, "Thermal criterion", label);
            (Some(movement), Some(width))
        }
        None => (None, None),
    };

    // === Governing ===
    let (final_width_mm, governing_criterion) = governing_width(
        wind_mm,
        weight_mm,
        thermal_mm,
        rules.minimum_width_mm,
        rules.rounding,
    );
    tracker.record_for_member(Equation::GoverningBite, "Final bite", label);

    if !final_width_mm.is_finite() {
        return Err(CalcError::calculation_failed(
            "TapeSizing",
            format!("Governing width is not finite ({})", final_width_mm),
        ));
    }

    debug!(
        panel = label,
        wind_mm,
        weight_mm,
        thermal_mm = ?thermal_mm,
        final_width_mm,
        governing = %governing_criterion,
        "tape sized"
    );
    if governing_criterion == GoverningCriterion::Weight {
        warn!(
            panel = label,
            weight_kgf,
            "dead load governs the bite; setting blocks would relieve the tape"
        );
    }

    Ok(SizingResult {
        panel_weight_kgf: weight_kgf,
        wind_required_width_mm: wind_mm,
        weight_required_width_mm: weight_mm,
        thermal_required_width_mm: thermal_mm,
        governing_criterion,
        final_width_mm,
        admissible_dynamic_stress_kgf_m2: admissible_dynamic,
        admissible_static_stress_kgf_m2: admissible_static,
        shorter_side_m,
        longer_side_m,
        perimeter_m,
        thermal_movement_mm: thermal_movement,
        tape_thickness_mm: load.tape_thickness_mm,
        minimum_width_mm: rules.minimum_width_mm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_panel() -> PanelConfig {
        PanelConfig {
            label: "Test Panel".to_string(),
            ..PanelConfig::default()
        }
    }

    fn no_blocks() -> LoadConfig {
        LoadConfig {
            uses_setting_blocks: false,
            ..LoadConfig::default()
        }
    }

    #[test]
    fn test_derived_geometry() {
        let p = test_panel();
        assert_eq!(p.shorter_side_m(), 1.2);
        assert_eq!(p.longer_side_m(), 2.4);
        assert!((p.perimeter_m() - 7.2).abs() < 1e-9);
        assert!((p.area_m2() - 2.88).abs() < 1e-9);
    }

    #[test]
    fn test_default_panel_minimum_governs() {
        let result = compute(&test_panel(), &LoadConfig::default()).unwrap();

        assert!((result.admissible_dynamic_stress_kgf_m2 - 7030.0).abs() < 1e-9);
        assert!((result.wind_required_width_mm - 12.80).abs() < 0.01);
        assert_eq!(result.weight_required_width_mm, 0.0);
        assert_eq!(result.final_width_mm, 15.0);
        assert_eq!(result.governing_criterion, GoverningCriterion::MinimumConstructive);
    }

    #[test]
    fn test_high_wind_governs() {
        let load = LoadConfig {
            wind_pressure_kgf_m2: 450.0,
            ..LoadConfig::default()
        };
        let result = compute(&test_panel(), &load).unwrap();

        assert!((result.wind_required_width_mm - 38.41).abs() < 0.01);
        assert_eq!(result.final_width_mm, 39.0);
        assert_eq!(result.governing_criterion, GoverningCriterion::Wind);
    }

    #[test]
    fn test_dead_load_without_setting_blocks() {
        let result = compute(&test_panel(), &no_blocks()).unwrap();

        assert!((result.panel_weight_kgf - 43.2).abs() < 1e-9);
        assert!((result.admissible_static_stress_kgf_m2 - 173.5).abs() < 1e-9);
        assert!((result.weight_required_width_mm - 34.58).abs() < 0.01);
        assert_eq!(result.final_width_mm, 35.0);
        assert_eq!(result.governing_criterion, GoverningCriterion::Weight);
    }

    #[test]
    fn test_setting_blocks_ignore_weight() {
        let light = compute(&test_panel(), &LoadConfig::default()).unwrap();
        let heavy_panel = PanelConfig {
            thickness_mm: 24.0,
            ..test_panel()
        };
        let heavy = compute(&heavy_panel, &LoadConfig::default()).unwrap();

        assert!(heavy.panel_weight_kgf > light.panel_weight_kgf);
        assert_eq!(heavy.weight_required_width_mm, 0.0);
        assert_eq!(heavy.final_width_mm, light.final_width_mm);
    }

    #[test]
    fn test_thermal_criterion() {
        let load = LoadConfig {
            thermal_delta_c: Some(40.0),
            ..LoadConfig::default()
        };
        let result = compute(&test_panel(), &load).unwrap();

        // 2400 mm * 14e-6 * 40 = 1.344 mm; 1.344 / 0.15 = 8.96 mm
        assert!((result.thermal_movement_mm.unwrap() - 1.344).abs() < 1e-9);
        assert!((result.thermal_required_width_mm.unwrap() - 8.96).abs() < 1e-6);
        assert_eq!(result.governing_criterion, GoverningCriterion::MinimumConstructive);
    }

    #[test]
    fn test_thermal_governs_large_differential() {
        let load = LoadConfig {
            thermal_delta_c: Some(100.0),
            ..LoadConfig::default()
        };
        let result = compute(&test_panel(), &load).unwrap();

        // 2400 * 14e-6 * 100 / 0.15 = 22.4 mm
        assert_eq!(result.governing_criterion, GoverningCriterion::Thermal);
        assert_eq!(result.final_width_mm, 23.0);
    }

    #[test]
    fn test_same_substrate_has_no_thermal_demand() {
        let panel = PanelConfig {
            frame_substrate: Substrate::Glass,
            ..test_panel()
        };
        let load = LoadConfig {
            thermal_delta_c: Some(60.0),
            ..LoadConfig::default()
        };
        let result = compute(&panel, &load).unwrap();
        assert_eq!(result.thermal_required_width_mm, Some(0.0));
    }

    #[test]
    fn test_round_to_five() {
        let load = LoadConfig {
            wind_pressure_kgf_m2: 450.0,
            ..LoadConfig::default()
        };
        let rules = DesignRules {
            rounding: WidthRounding::NextMultipleOf5,
            ..DesignRules::default()
        };
        let result = compute_with_rules(&test_panel(), &load, &rules).unwrap();
        assert_eq!(result.final_width_mm, 40.0);
    }

    #[test]
    fn test_tape_thickness_carried_through() {
        let load = LoadConfig {
            tape_thickness_mm: Some(TapeThickness::Mm2_3),
            ..LoadConfig::default()
        };
        let result = compute(&test_panel(), &load).unwrap();
        assert_eq!(result.tape_thickness_mm, Some(TapeThickness::Mm2_3));
    }

    #[test]
    fn test_idempotent() {
        let load = LoadConfig {
            wind_pressure_kgf_m2: 275.0,
            thermal_delta_c: Some(55.0),
            uses_setting_blocks: false,
            ..LoadConfig::default()
        };
        let a = compute(&test_panel(), &load).unwrap();
        let b = compute(&test_panel(), &load).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_required_width_before_rounding() {
        let load = LoadConfig {
            wind_pressure_kgf_m2: 450.0,
            ..LoadConfig::default()
        };
        let result = compute(&test_panel(), &load).unwrap();
        assert!((result.required_width_mm() - 38.41).abs() < 0.01);
        assert!(result.wind_utilization() < 1.0);
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut panel = test_panel();
        panel.width_m = 0.0;
        let err = compute(&panel, &LoadConfig::default()).unwrap_err();
        assert_eq!(err.field(), Some("width_m"));

        let mut panel = test_panel();
        panel.thickness_mm = -6.0;
        assert!(compute(&panel, &LoadConfig::default()).is_err());
    }

    #[test]
    fn test_invalid_loads() {
        let load = LoadConfig {
            safety_factor: 0.0,
            ..LoadConfig::default()
        };
        let err = compute(&test_panel(), &load).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let load = LoadConfig {
            wind_pressure_kgf_m2: -10.0,
            ..LoadConfig::default()
        };
        assert!(compute(&test_panel(), &load).is_err());

        let load = LoadConfig {
            thermal_delta_c: Some(f64::NAN),
            ..LoadConfig::default()
        };
        assert!(compute(&test_panel(), &load).is_err());
    }

    #[test]
    fn test_invalid_rules() {
        let rules = DesignRules {
            max_movement_ratio: 1.5,
            ..DesignRules::default()
        };
        assert!(compute_with_rules(&test_panel(), &LoadConfig::default(), &rules).is_err());
    }

    #[test]
    fn test_tracker_records_applied_equations() {
        let mut tracker = EquationTracker::new();
        compute_tracked(
            &test_panel(),
            &LoadConfig::default(),
            &DesignRules::default(),
            &mut tracker,
        )
        .unwrap();

        let used = tracker.unique_equations();
        assert!(used.contains(&Equation::WindBite));
        assert!(used.contains(&Equation::GoverningBite));
        assert!(!used.contains(&Equation::DeadLoadBite));
        assert!(!used.contains(&Equation::ThermalBite));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let panel: PanelConfig =
            serde_json::from_str(r#"{ "label": "P-07", "width_m": 1.5 }"#).unwrap();
        assert_eq!(panel.height_m, 2.4);
        assert_eq!(panel.frame_substrate, Substrate::Aluminum);

        let load: LoadConfig = serde_json::from_str(r#"{ "tape_thickness_mm": 1.6 }"#).unwrap();
        assert_eq!(load.tape_thickness_mm, Some(TapeThickness::Mm1_6));
        assert_eq!(load.safety_factor, 5.0);
    }

    #[test]
    fn test_result_serialization() {
        let result = compute(&test_panel(), &LoadConfig::default()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"governing_criterion\": \"MinimumConstructive\""));
        let roundtrip: SizingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.final_width_mm, roundtrip.final_width_mm);
        assert_eq!(result.governing_criterion, roundtrip.governing_criterion);
        assert_eq!(roundtrip.thermal_required_width_mm, None);
    }
}
