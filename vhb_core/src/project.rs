//! # Project Data Structures
//!
//! The `Project` struct is the root container for a facade schedule: every
//! panel type on a job, sized in one pass. Projects serialize to
//! human-readable JSON; reading and writing documents is left to the caller.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (design rules, default loads)
//! └── items: HashMap<Uuid, PanelItem> (all panels)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use vhb_core::calculations::PanelConfig;
//! use vhb_core::project::Project;
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! project.add_panel(PanelConfig { label: "P-01".to_string(), ..PanelConfig::default() });
//!
//! let rows = project.calculate_all();
//! assert_eq!(rows[0].label, "P-01");
//!
//! let json = project.to_json().unwrap();
//! let restored = Project::from_json(&json).unwrap();
//! assert_eq!(restored.item_count(), 1);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calculations::{
    DesignRules, GoverningCriterion, LoadConfig, PanelConfig, PanelItem, SizingResult,
};
use crate::errors::{CalcError, CalcResult};

/// Current schema version for project documents
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings (design rules, default loads)
    #[serde(default)]
    pub settings: GlobalSettings,

    /// All panel items, keyed by UUID
    #[serde(default)]
    pub items: HashMap<Uuid, PanelItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vhb_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a panel item to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: PanelItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Add a panel that follows the project's default loads.
    pub fn add_panel(&mut self, panel: PanelConfig) -> Uuid {
        self.add_item(PanelItem::with_default_load(panel))
    }

    /// Remove a panel item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<PanelItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a panel item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&PanelItem> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Size a single item with the project's design rules.
    pub fn calculate_item(&self, id: &Uuid) -> CalcResult<SizingResult> {
        let item = self
            .get_item(id)
            .ok_or_else(|| CalcError::missing_field(format!("items.{}", id)))?;
        item.calculate(&self.settings.rules, &self.settings.default_load)
    }

    /// Size every item.
    ///
    /// Rows are sorted by label (then id). A failing item does not stop the
    /// others; its row carries the error.
    pub fn calculate_all(&self) -> Vec<ScheduleRow> {
        let mut rows: Vec<ScheduleRow> = self
            .items
            .iter()
            .map(|(id, item)| ScheduleRow {
                id: *id,
                label: item.label().to_string(),
                result: item.calculate(&self.settings.rules, &self.settings.default_load),
            })
            .collect();
        rows.sort_by(|a, b| a.label.cmp(&b.label).then(a.id.cmp(&b.id)));

        let failed = rows.iter().filter(|r| r.result.is_err()).count();
        info!(panels = rows.len(), failed, job = %self.meta.job_id, "schedule sized");
        rows
    }

    /// Serialize the project to pretty JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a project document and check its schema version.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let project: Project = serde_json::from_str(json)?;
        validate_version(&project.meta.version)?;
        Ok(project)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Validate that a document version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

/// Project metadata stored in the document header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Minimum bite, rounding and movement ratio for every panel
    pub rules: DesignRules,

    /// Loads for items that carry none of their own
    pub default_load: LoadConfig,
}

/// One line of a sized schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Item id in the project
    pub id: Uuid,
    /// Panel label
    pub label: String,
    /// Sizing result, or why the panel could not be sized
    pub result: CalcResult<SizingResult>,
}

/// Totals over a sized schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Number of panels
    pub panels: usize,
    /// Panels that failed to size
    pub failed: usize,
    /// Widest final bite in the schedule (mm)
    pub widest_bite_mm: Option<f64>,
    /// Label of the panel with the widest bite
    pub widest_label: Option<String>,
    /// Panel count per governing criterion
    pub governed_by: HashMap<GoverningCriterion, usize>,
}

impl ScheduleSummary {
    /// Summarize sized rows.
    pub fn from_rows(rows: &[ScheduleRow]) -> Self {
        let mut summary = ScheduleSummary {
            panels: rows.len(),
            failed: 0,
            widest_bite_mm: None,
            widest_label: None,
            governed_by: HashMap::new(),
        };

        for row in rows {
            match &row.result {
                Ok(result) => {
                    *summary.governed_by.entry(result.governing_criterion).or_default() += 1;
                    if summary.widest_bite_mm.map_or(true, |w| result.final_width_mm > w) {
                        summary.widest_bite_mm = Some(result.final_width_mm);
                        summary.widest_label = Some(row.label.clone());
                    }
                }
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }
}
