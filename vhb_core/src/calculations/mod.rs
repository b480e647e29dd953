//! # Tape Calculations
//!
//! This module contains the tape sizing calculation. It follows the pattern:
//!
//! - `*Config` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `compute(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization with defaults for every input
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`tape_sizing`] - Structural glazing tape bite (wind, dead load, thermal)

pub mod tape_sizing;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use tape_sizing::{
    compute, compute_tracked, compute_with_rules, DesignRules, GoverningCriterion, LoadConfig,
    PanelConfig, SizingResult, WidthRounding,
};

/// A panel and the loads it is sized for.
///
/// This is the unit stored in a project schedule. Items without their own
/// `load` are sized with the schedule's default loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelItem {
    /// Panel geometry and material
    pub panel: PanelConfig,
    /// Loads, safety factors and tape capacities for this panel only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load: Option<LoadConfig>,
}

impl PanelItem {
    /// Create an item with its own loads
    pub fn new(panel: PanelConfig, load: LoadConfig) -> Self {
        PanelItem {
            panel,
            load: Some(load),
        }
    }

    /// Create an item that follows the schedule's default loads
    pub fn with_default_load(panel: PanelConfig) -> Self {
        PanelItem { panel, load: None }
    }

    /// Get the user-provided label for this panel
    pub fn label(&self) -> &str {
        &self.panel.label
    }

    /// The item's own loads, or `default_load` when it has none
    pub fn load_or<'a>(&'a self, default_load: &'a LoadConfig) -> &'a LoadConfig {
        self.load.as_ref().unwrap_or(default_load)
    }

    /// Size this panel
    pub fn calculate(
        &self,
        rules: &DesignRules,
        default_load: &LoadConfig,
    ) -> CalcResult<SizingResult> {
        compute_with_rules(&self.panel, self.load_or(default_load), rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_load_overrides_default() {
        let default_load = LoadConfig {
            wind_pressure_kgf_m2: 450.0,
            ..LoadConfig::default()
        };
        let rules = DesignRules::default();

        let follows = PanelItem::with_default_load(PanelConfig::default());
        assert_eq!(follows.calculate(&rules, &default_load).unwrap().final_width_mm, 39.0);

        let own = PanelItem::new(PanelConfig::default(), LoadConfig::default());
        assert_eq!(own.calculate(&rules, &default_load).unwrap().final_width_mm, 15.0);
    }

    #[test]
    fn test_missing_load_stays_missing_in_json() {
        let item: PanelItem = serde_json::from_str(r#"{ "panel": { "label": "P-01" } }"#).unwrap();
        assert_eq!(item.load, None);
        assert!(!serde_json::to_string(&item).unwrap().contains("load"));
    }
}
