//! # Sizing Report
//!
//! Renders a tape sizing as a markdown summary for calculation packages.
//!
//! ## Architecture
//!
//! - The report recomputes the sizing with an [`EquationTracker`] so the
//!   appendix lists exactly the equations that were applied
//! - Output is a `String`; writing it anywhere is the caller's job
//!
//! ## Example
//!
//! ```rust
//! use vhb_core::calculations::tape_sizing::{DesignRules, LoadConfig, PanelConfig};
//! use vhb_core::report::{render_summary, ReportMeta};
//!
//! let meta = ReportMeta::new("Jane Engineer", "25-042", "Tower A Facade");
//! let panel = PanelConfig::default();
//! let load = LoadConfig::default();
//! let text = render_summary(&panel, &load, &DesignRules::default(), &meta).unwrap();
//!
//! assert!(text.contains("Final bite: 15 mm"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::tape_sizing::{
    compute_tracked, DesignRules, LoadConfig, PanelConfig, SizingResult,
};
use crate::equations::registry::EquationTracker;
use crate::errors::CalcResult;
use crate::units::{KgfPerM2, Kgf, Kpa, Newtons, Psi};

/// Header information printed at the top of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Responsible engineer
    pub engineer: String,
    /// Job/project number
    pub job_id: String,
    /// Project name
    pub project_name: String,
    /// Timestamp printed on the report
    pub generated: DateTime<Utc>,
}

impl ReportMeta {
    /// Create report metadata stamped with the current time
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        project_name: impl Into<String>,
    ) -> Self {
        ReportMeta {
            engineer: engineer.into(),
            job_id: job_id.into(),
            project_name: project_name.into(),
            generated: Utc::now(),
        }
    }
}

/// Size the panel and render the markdown summary.
pub fn render_summary(
    panel: &PanelConfig,
    load: &LoadConfig,
    rules: &DesignRules,
    meta: &ReportMeta,
) -> CalcResult<String> {
    let mut tracker = EquationTracker::new();
    let result = compute_tracked(panel, load, rules, &mut tracker)?;
    Ok(render_result(panel, load, &result, &tracker, meta))
}

/// Render an already computed result.
pub fn render_result(
    panel: &PanelConfig,
    load: &LoadConfig,
    result: &SizingResult,
    tracker: &EquationTracker,
    meta: &ReportMeta,
) -> String {
    let mut out = String::with_capacity(2_048);

    let title = if panel.label.is_empty() {
        "Structural Glazing Tape Sizing"
    } else {
        panel.label.as_str()
    };
    out.push_str(&format!("# {}\n\n", title));
    out.push_str(&format!("- Project: {} ({})\n", meta.project_name, meta.job_id));
    out.push_str(&format!("- Engineer: {}\n", meta.engineer));
    out.push_str(&format!("- Date: {}\n\n", meta.generated.format("%Y-%m-%d %H:%M UTC")));

    // === Inputs ===
    out.push_str("## Inputs\n\n");
    out.push_str(&format!(
        "- Panel: {:.2} x {:.2} m, {:.1} mm {} ({:.0} kg/m³) on {}\n",
        panel.width_m,
        panel.height_m,
        panel.thickness_mm,
        panel.panel_substrate,
        panel.density_kg_m3,
        panel.frame_substrate
    ));
    let pressure = KgfPerM2(load.wind_pressure_kgf_m2);
    out.push_str(&format!(
        "- Design wind pressure: {:.1} kgf/m² ({:.2} kPa)\n",
        pressure.0,
        Kpa::from(pressure).0
    ));
    let blocks = if load.uses_setting_blocks {
        "yes, dead load on blocks"
    } else {
        "no, tape carries dead load"
    };
    out.push_str(&format!("- Setting blocks: {}\n", blocks));
    if let Some(delta) = load.thermal_delta_c {
        out.push_str(&format!("- Temperature differential: {:.1} °C\n", delta));
    }
    out.push('\n');

    // === Design Stresses ===
    out.push_str("## Design Stresses\n\n");
    let ultimate = KgfPerM2(load.ultimate_capacity_kgf_m2);
    out.push_str(&format!(
        "- Dynamic: {:.0} kgf/m² ({:.1} psi) / FS {:.1} = {:.1} kgf/m²\n",
        ultimate.0,
        Psi::from(ultimate).0,
        load.safety_factor,
        result.admissible_dynamic_stress_kgf_m2
    ));
    out.push_str(&format!(
        "- Static: {:.0} kgf/m² / FS {:.1} = {:.1} kgf/m²\n\n",
        load.ultimate_static_capacity_kgf_m2,
        load.static_safety_factor,
        result.admissible_static_stress_kgf_m2
    ));

    // === Criteria ===
    out.push_str("## Required Bite\n\n");
    out.push_str("| Criterion | Bite (mm) |\n");
    out.push_str("|-----------|-----------|\n");
    for (criterion, width) in result.criterion_widths() {
        out.push_str(&format!("| {} | {:.2} |\n", criterion, width));
    }
    out.push_str(&format!("| Minimum Constructive | {:.2} |\n\n", result.minimum_width_mm));

    let weight_n = Newtons::from(Kgf(result.panel_weight_kgf));
    out.push_str(&format!(
        "Panel weight: {:.2} kgf ({:.0} N)\n",
        result.panel_weight_kgf, weight_n.0
    ));
    if let Some(movement) = result.thermal_movement_mm {
        out.push_str(&format!("Differential thermal movement: {:.3} mm\n", movement));
    }
    out.push('\n');

    // === Result ===
    out.push_str("## Result\n\n");
    out.push_str(&format!(
        "Final bite: {:.0} mm (governed by {})\n",
        result.final_width_mm, result.governing_criterion
    ));
    match result.tape_thickness_mm {
        Some(gt) => out.push_str(&format!("Tape thickness: {}\n", gt)),
        None => out.push_str("Tape thickness: not specified\n"),
    }
    if load.uses_setting_blocks {
        out.push_str("Setting blocks are mandatory for this design.\n");
    }
    out.push('\n');

    out.push_str(&tracker.generate_appendix_markdown());
    out
}
