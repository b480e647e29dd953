//! # Wind Pressure Sensitivity
//!
//! Evaluates the bite over a sweep of design wind pressures with every
//! other input held fixed. The front end plots the points; this module only
//! produces the data.
//!
//! ## Example
//!
//! ```rust
//! use vhb_core::calculations::tape_sizing::{DesignRules, LoadConfig, PanelConfig};
//! use vhb_core::sensitivity::{wind_pressure_sweep, SweepRange};
//!
//! let points = wind_pressure_sweep(
//!     &PanelConfig::default(),
//!     &LoadConfig::default(),
//!     &DesignRules::default(),
//!     &SweepRange::default(),
//! ).unwrap();
//!
//! assert_eq!(points.len(), 30);
//! assert_eq!(points[0].wind_pressure_kgf_m2, 50.0);
//! assert_eq!(points[29].wind_pressure_kgf_m2, 450.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::tape_sizing::{
    compute_with_rules, DesignRules, GoverningCriterion, LoadConfig, PanelConfig,
};
use crate::equations::bond::admissible_dynamic_stress;
use crate::errors::{require_non_negative, CalcError, CalcResult};

/// Largest number of samples a sweep accepts
pub const MAX_SWEEP_SAMPLES: usize = 10_000;

/// Pressure range of a sweep, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepRange {
    /// First pressure (kgf/m²)
    pub start_kgf_m2: f64,
    /// Last pressure (kgf/m²)
    pub end_kgf_m2: f64,
    /// Number of evenly spaced samples
    pub samples: usize,
}

impl Default for SweepRange {
    fn default() -> Self {
        SweepRange {
            start_kgf_m2: 50.0,
            end_kgf_m2: 450.0,
            samples: 30,
        }
    }
}

impl SweepRange {
    /// Validate the range.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("start_kgf_m2", self.start_kgf_m2)?;
        require_non_negative("end_kgf_m2", self.end_kgf_m2)?;
        if self.end_kgf_m2 < self.start_kgf_m2 {
            return Err(CalcError::invalid_input(
                "end_kgf_m2",
                self.end_kgf_m2.to_string(),
                "Sweep end must not be below its start",
            ));
        }
        if self.samples < 2 {
            return Err(CalcError::invalid_input(
                "samples",
                self.samples.to_string(),
                "A sweep needs at least 2 samples",
            ));
        }
        if self.samples > MAX_SWEEP_SAMPLES {
            return Err(CalcError::invalid_input(
                "samples",
                self.samples.to_string(),
                format!("A sweep takes at most {} samples", MAX_SWEEP_SAMPLES),
            ));
        }
        Ok(())
    }

    /// Evenly spaced pressures from start to end inclusive
    pub fn pressures(&self) -> CalcResult<Vec<f64>> {
        self.validate()?;

        let last = self.samples - 1;
        let step = (self.end_kgf_m2 - self.start_kgf_m2) / last as f64;
        let pressures = (0..self.samples)
            .map(|i| {
                // pin the last sample so float drift never overshoots the range
                if i == last {
                    self.end_kgf_m2
                } else {
                    self.start_kgf_m2 + step * i as f64
                }
            })
            .collect();
        Ok(pressures)
    }
}

/// One point of a pressure sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Design wind pressure at this sample (kgf/m²)
    pub wind_pressure_kgf_m2: f64,
    /// Bite required by wind alone (mm)
    pub wind_required_width_mm: f64,
    /// Governing bite after all criteria and rounding (mm)
    pub final_width_mm: f64,
    /// Criterion that produced `final_width_mm`
    pub governing_criterion: GoverningCriterion,
}

/// Size the tape at every pressure of `range`.
///
/// The `wind_pressure_kgf_m2` of `load` is ignored; all other inputs are kept.
pub fn wind_pressure_sweep(
    panel: &PanelConfig,
    load: &LoadConfig,
    rules: &DesignRules,
    range: &SweepRange,
) -> CalcResult<Vec<SensitivityPoint>> {
    let pressures = range.pressures()?;
    let mut points = Vec::with_capacity(pressures.len());
    for pressure in pressures {
        let sample_load = LoadConfig {
            wind_pressure_kgf_m2: pressure,
            ..load.clone()
        };
        let result = compute_with_rules(panel, &sample_load, rules)?;
        points.push(SensitivityPoint {
            wind_pressure_kgf_m2: pressure,
            wind_required_width_mm: result.wind_required_width_mm,
            final_width_mm: result.final_width_mm,
            governing_criterion: result.governing_criterion,
        });
    }

    tracing::debug!(samples = points.len(), panel = %panel.label, "pressure sweep done");
    Ok(points)
}

/// Pressure above which wind needs more than the minimum constructive bite.
///
/// # Formula
/// p* = w_min · 2 · σ_dyn / (a · 1000)
///
/// # Example
/// ```rust
/// use vhb_core::calculations::tape_sizing::{DesignRules, LoadConfig, PanelConfig};
/// use vhb_core::sensitivity::minimum_width_crossover_kgf_m2;
///
/// let (panel, load) = (PanelConfig::default(), LoadConfig::default());
/// let p = minimum_width_crossover_kgf_m2(&panel, &load, &DesignRules::default()).unwrap();
/// // 15 * 2 * 7030 / 1200 = 175.75 kgf/m²
/// assert!((p - 175.75).abs() < 1e-9);
/// ```
pub fn minimum_width_crossover_kgf_m2(
    panel: &PanelConfig,
    load: &LoadConfig,
    rules: &DesignRules,
) -> CalcResult<f64> {
    panel.validate()?;
    load.validate()?;
    rules.validate()?;

    let admissible = admissible_dynamic_stress(load.ultimate_capacity_kgf_m2, load.safety_factor)?;
    Ok(rules.minimum_width_mm * 2.0 * admissible / (panel.shorter_side_m() * 1000.0))
}
