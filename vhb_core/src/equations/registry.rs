//! # Equation Registry
//!
//! Central registry of all equations used in tape sizing.
//! Each equation has metadata including references, formulas, and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for report generation and audit trails
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use vhb_core::equations::registry::{Equation, EquationUsage};
//!
//! // Track equation usage during calculation
//! let usage = EquationUsage::new(Equation::WindBite, "P-01");
//!
//! // Get metadata for the report
//! let meta = Equation::WindBite.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Reference to a standard or manufacturer document.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// 3M VHB Structural Glazing Tape Technical Guide
    VhbTechnicalGuide { section: &'static str },
    /// ASTM C1401 - Standard Guide for Structural Sealant Glazing
    AstmC1401 { year: u16, section: &'static str },
    /// Facade practice rule of thumb without a formal code clause
    Empirical { note: &'static str },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::VhbTechnicalGuide { section } => {
                format!("3M VHB Structural Glazing Tape Technical Guide, {}", section)
            }
            CodeReference::AstmC1401 { year, section } => {
                format!("ASTM C1401-{} Section {}", year % 100, section)
            }
            CodeReference::Empirical { note } => format!("Empirical rule ({})", note),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::VhbTechnicalGuide { .. } => "3M VHB",
            CodeReference::AstmC1401 { .. } => "ASTM C1401",
            CodeReference::Empirical { .. } => "Empirical",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the report appendix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Design stresses of the tape (σ_dyn, σ_st)
    DesignStresses,
    /// Loads acting on the bond (self-weight)
    Loads,
    /// Required bite per criterion
    BiteCriteria,
    /// Selection of the final bite
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::DesignStresses => "Design Stresses",
            EquationCategory::Loads => "Loads",
            EquationCategory::BiteCriteria => "Bite Criteria",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order for the appendix (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::DesignStresses => 1,
            EquationCategory::Loads => 2,
            EquationCategory::BiteCriteria => 3,
            EquationCategory::DesignChecks => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "p", "a", "σ_dyn")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kgf/m²", "mm")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a sizing equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Wind Bite")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text (human-readable)
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping in appendix
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation (for linking)
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used in Bondline.
///
/// Each variant maps to a specific formula with full metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// σ_dyn = σ_ult / FS
    AdmissibleDynamicStress,
    /// σ_st = σ_ult,st / FS_st
    AdmissibleStaticStress,
    /// W = width · height · t · ρ
    PanelWeight,
    /// w = p·a / (2·σ_dyn) · 1000
    WindBite,
    /// w = W / (P·σ_st) · 1000
    DeadLoadBite,
    /// ΔL = b · 1000 · |Δα| · ΔT
    ThermalMovement,
    /// w = ΔL / 0.15
    ThermalBite,
    /// w = round_up(max(...))
    GoverningBite,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::AdmissibleDynamicStress => EquationMetadata {
                name: "Admissible Dynamic Stress",
                description: "Design tensile stress of the tape under short-term wind load",
                formula_plain: "sigma_dyn = sigma_ult / FS",
                reference: CodeReference::VhbTechnicalGuide {
                    section: "Dynamic Load Design",
                },
                variables: vec![
                    Variable::new("sigma_ult", "Ultimate dynamic tensile capacity", "kgf/m²"),
                    Variable::new("FS", "Dynamic safety factor", "-"),
                    Variable::new("sigma_dyn", "Admissible dynamic stress", "kgf/m²"),
                ],
                assumptions: vec!["Short-term load duration", "FS = 5 unless overridden"],
                category: EquationCategory::DesignStresses,
                source_module: "equations/bond.rs",
                source_function: "admissible_dynamic_stress",
            },

            Equation::AdmissibleStaticStress => EquationMetadata {
                name: "Admissible Static Stress",
                description: "Design shear stress of the tape under sustained dead load",
                formula_plain: "sigma_st = sigma_ult,st / FS_st",
                reference: CodeReference::VhbTechnicalGuide {
                    section: "Static Load Design",
                },
                variables: vec![
                    Variable::new("sigma_ult,st", "Ultimate static shear capacity", "kgf/m²"),
                    Variable::new("FS_st", "Static safety factor", "-"),
                    Variable::new("sigma_st", "Admissible static stress", "kgf/m²"),
                ],
                assumptions: vec!["Sustained load", "FS = 10 unless overridden"],
                category: EquationCategory::DesignStresses,
                source_module: "equations/bond.rs",
                source_function: "admissible_static_stress",
            },

            Equation::PanelWeight => EquationMetadata {
                name: "Panel Self-Weight",
                description: "Weight of a monolithic panel from its size, thickness and density",
                formula_plain: "W = width * height * (t / 1000) * rho",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("width, height", "Panel plan dimensions", "m"),
                    Variable::new("t", "Panel thickness", "mm"),
                    Variable::new("rho", "Panel density", "kg/m³"),
                    Variable::new("W", "Panel weight", "kgf"),
                ],
                assumptions: vec!["Monolithic panel of uniform thickness"],
                category: EquationCategory::Loads,
                source_module: "equations/bond.rs",
                source_function: "panel_weight_kgf",
            },

            Equation::WindBite => EquationMetadata {
                name: "Wind Bite",
                description: "Bite needed for the tape to carry wind suction on the shorter side",
                formula_plain: "w_wind = p * a / (2 * sigma_dyn) * 1000",
                reference: CodeReference::AstmC1401 {
                    year: 2022,
                    section: "Structural Bite",
                },
                variables: vec![
                    Variable::new("p", "Design wind pressure", "kgf/m²"),
                    Variable::new("a", "Shorter panel side", "m"),
                    Variable::new("sigma_dyn", "Admissible dynamic stress", "kgf/m²"),
                    Variable::new("w_wind", "Required bite", "mm"),
                ],
                assumptions: vec![
                    "Trapezoidal tributary area, load concentrates on the shorter side",
                    "Two opposing bond lines share the load",
                ],
                category: EquationCategory::BiteCriteria,
                source_module: "equations/bond.rs",
                source_function: "wind_required_width_mm",
            },

            Equation::DeadLoadBite => EquationMetadata {
                name: "Dead Load Bite",
                description: "Bite carrying the panel weight in sustained shear",
                formula_plain: "w_weight = W / (P * sigma_st) * 1000",
                reference: CodeReference::VhbTechnicalGuide {
                    section: "Dead Load",
                },
                variables: vec![
                    Variable::new("W", "Panel weight", "kgf"),
                    Variable::new("P", "Bonded perimeter", "m"),
                    Variable::new("sigma_st", "Admissible static stress", "kgf/m²"),
                    Variable::new("w_weight", "Required bite", "mm"),
                ],
                assumptions: vec![
                    "Weight shared by the full bonded perimeter",
                    "Zero when setting blocks are used",
                ],
                category: EquationCategory::BiteCriteria,
                source_module: "equations/bond.rs",
                source_function: "weight_required_width_mm",
            },

            Equation::ThermalMovement => EquationMetadata {
                name: "Differential Thermal Movement",
                description: "Relative movement between panel and frame along the longer side",
                formula_plain: "dL = b * 1000 * |alpha_a - alpha_b| * dT",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("b", "Longer panel side", "m"),
                    Variable::new("alpha_a, alpha_b", "Panel and frame expansion", "1/°C"),
                    Variable::new("dT", "Temperature differential", "°C"),
                    Variable::new("dL", "Differential movement", "mm"),
                ],
                assumptions: vec!["Linear expansion", "Movement measured from the panel center"],
                category: EquationCategory::Loads,
                source_module: "equations/bond.rs",
                source_function: "thermal_movement_mm",
            },

            Equation::ThermalBite => EquationMetadata {
                name: "Thermal Bite",
                description: "Bite keeping differential movement within 15% of the bonded width",
                formula_plain: "w_thermal = dL / 0.15",
                reference: CodeReference::Empirical {
                    note: "movement <= 15% of bite",
                },
                variables: vec![
                    Variable::new("dL", "Differential movement", "mm"),
                    Variable::new("w_thermal", "Required bite", "mm"),
                ],
                assumptions: vec!["Ratio configurable through the design rules"],
                category: EquationCategory::BiteCriteria,
                source_module: "equations/bond.rs",
                source_function: "movement_limited_width_mm",
            },

            Equation::GoverningBite => EquationMetadata {
                name: "Governing Bite",
                description: "Largest required bite, floored at the minimum width and rounded up",
                formula_plain: "w = ceil(max(w_wind, w_weight, w_thermal, w_min))",
                reference: CodeReference::VhbTechnicalGuide {
                    section: "Structural Glazing Design",
                },
                variables: vec![
                    Variable::new("w_min", "Minimum constructive width (15 mm)", "mm"),
                    Variable::new("w", "Final bite", "mm"),
                ],
                assumptions: vec![
                    "Ties resolve as Wind, Weight, Thermal, Minimum",
                    "Rounding may be to the next multiple of 5 mm",
                ],
                category: EquationCategory::DesignChecks,
                source_module: "equations/bond.rs",
                source_function: "governing_width",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in appendix order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![DesignStresses, Loads, BiteCriteria, DesignChecks];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::AdmissibleDynamicStress,
    Equation::AdmissibleStaticStress,
    Equation::PanelWeight,
    Equation::WindBite,
    Equation::DeadLoadBite,
    Equation::ThermalMovement,
    Equation::ThermalBite,
    Equation::GoverningBite,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used
    pub context: String,
    /// Optional: the panel label this equation was applied to
    pub member_label: Option<String>,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            member_label: None,
        }
    }

    /// Create usage record with panel label
    pub fn for_member(
        equation: Equation,
        context: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            equation,
            context: context.into(),
            member_label: Some(label.into()),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Record equation usage for a specific panel
    pub fn record_for_member(
        &mut self,
        equation: Equation,
        context: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.usages.push(EquationUsage::for_member(equation, context, label));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used (deduplicated, first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category for the appendix
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

fn push_equation_markdown(output: &mut String, equation: Equation) {
    let meta = equation.metadata();

    output.push_str(&format!("### {}\n\n", meta.name));
    output.push_str(&format!("{}\n\n", meta.description));
    output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

    if !meta.variables.is_empty() {
        output.push_str("**Variables:**\n\n");
        output.push_str("| Symbol | Description | Units |\n");
        output.push_str("|--------|-------------|-------|\n");
        for var in &meta.variables {
            output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
        }
        output.push('\n');
    }

    output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
    output.push_str(&format!(
        "**Source:** [`{}`]({})\n\n",
        meta.source_function, meta.source_module
    ));

    if !meta.assumptions.is_empty() {
        output.push_str("**Assumptions:**\n");
        for assumption in &meta.assumptions {
            output.push_str(&format!("- {}\n", assumption));
        }
        output.push('\n');
    }

    output.push_str("---\n\n");
}

impl EquationTracker {
    /// Generate the "List of Equations" appendix in markdown.
    ///
    /// Only equations recorded in this tracker are listed, grouped by category.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vhb_core::equations::registry::{Equation, EquationTracker};
    ///
    /// let mut tracker = EquationTracker::new();
    /// tracker.record_for_member(Equation::WindBite, "Wind criterion", "P-01");
    ///
    /// let appendix = tracker.generate_appendix_markdown();
    /// assert!(appendix.contains("Wind Bite"));
    /// ```
    pub fn generate_appendix_markdown(&self) -> String {
        let mut output = String::from("## Appendix: List of Equations\n\n");

        let groups = self.by_category();
        if groups.is_empty() {
            output.push_str("_No equations recorded._\n");
            return output;
        }

        for (category, equations) in groups {
            output.push_str(&format!("### {}\n\n", category.display_name()));
            for eq in equations {
                let meta = eq.metadata();
                output.push_str(&format!(
                    "- **{}**: `{}` ({})\n",
                    meta.name,
                    meta.formula_plain,
                    meta.reference.short_form()
                ));
            }
            output.push('\n');
        }
        output
    }
}

/// Generate a complete EQUATIONS.md file for documentation.
///
/// # Example
///
/// ```rust
/// use vhb_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Bondline Equations Reference"));
/// assert!(markdown.contains("Bite Criteria"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(r#"# Bondline Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists all formulas used to size structural glazing tape.
Each equation includes its formula, reference, source location, and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Panel dimensions | m |
| Thickness, bite | mm |
| Pressure, stress | kgf/m² |
| Weight | kgf |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));
        for equation in equations {
            push_equation_markdown(&mut output, equation);
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 8);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(meta.source_module.ends_with(".rs"), "Equation {:?} has bad source", eq);
        }
    }

    #[test]
    fn test_code_reference_citation() {
        let r = CodeReference::AstmC1401 {
            year: 2022,
            section: "Structural Bite",
        };
        assert_eq!(r.citation(), "ASTM C1401-22 Section Structural Bite");
        assert_eq!(r.short_form(), "ASTM C1401");
    }

    #[test]
    fn test_equation_tracker_dedupes() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::WindBite, "P-01");
        tracker.record(Equation::WindBite, "P-02");
        tracker.record(Equation::AdmissibleDynamicStress, "P-01");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::WindBite, Equation::AdmissibleDynamicStress]
        );
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::GoverningBite, "final");
        tracker.record(Equation::WindBite, "wind");
        tracker.record(Equation::AdmissibleDynamicStress, "stress");

        let cats: Vec<_> = tracker.by_category().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            cats,
            vec![
                EquationCategory::DesignStresses,
                EquationCategory::BiteCriteria,
                EquationCategory::DesignChecks
            ]
        );
    }

    #[test]
    fn test_empty_appendix() {
        let appendix = EquationTracker::new().generate_appendix_markdown();
        assert!(appendix.contains("No equations recorded"));
    }

    #[test]
    fn test_generate_equations_markdown() {
        let md = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(md.contains(eq.metadata().name), "Missing {:?}", eq);
        }
        assert!(md.contains("**Total Equations:** 8"));
    }
}
