//! CLI argument definitions for the tape sizing tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use vhb_core::calculations::tape_sizing::{DesignRules, LoadConfig, PanelConfig, WidthRounding};
use vhb_core::materials::{Substrate, TapeThickness};

#[derive(Parser)]
#[command(
    name = "vhb",
    version,
    about = "Bondline - structural glazing tape sizing",
    long_about = "Size the bite of structural glazing tape for wind, dead load and\n\
                  thermal movement, sweep wind pressures, and size whole panel schedules."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Size the tape for one panel.
    Size(SizeArgs),

    /// Sweep the design wind pressure and tabulate the bite.
    Sweep(SweepArgs),

    /// Size every panel of a project schedule file.
    Schedule(ScheduleArgs),

    /// Print the equations reference.
    Equations,
}

/// Panel geometry. Omitted values take the calculator defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct PanelArgs {
    /// Panel label shown in output.
    #[arg(long)]
    pub label: Option<String>,

    /// Panel width in meters [default: 1.2].
    #[arg(long = "width-m", value_name = "M")]
    pub width_m: Option<f64>,

    /// Panel height in meters [default: 2.4].
    #[arg(long = "height-m", value_name = "M")]
    pub height_m: Option<f64>,

    /// Panel thickness in millimeters [default: 6].
    #[arg(long = "thickness-mm", value_name = "MM")]
    pub thickness_mm: Option<f64>,

    /// Panel density in kg/m³ [default: typical density of the panel substrate].
    #[arg(long, value_name = "KG_M3")]
    pub density: Option<f64>,

    /// Panel material [default: glass].
    #[arg(long = "panel-substrate", value_parser = parse_substrate)]
    pub panel_substrate: Option<Substrate>,

    /// Frame material [default: aluminum].
    #[arg(long = "frame-substrate", value_parser = parse_substrate)]
    pub frame_substrate: Option<Substrate>,
}

impl PanelArgs {
    pub fn to_config(&self) -> PanelConfig {
        let defaults = PanelConfig::default();
        let panel_substrate = self.panel_substrate.unwrap_or(defaults.panel_substrate);
        PanelConfig {
            label: self.label.clone().unwrap_or(defaults.label),
            width_m: self.width_m.unwrap_or(defaults.width_m),
            height_m: self.height_m.unwrap_or(defaults.height_m),
            thickness_mm: self.thickness_mm.unwrap_or(defaults.thickness_mm),
            density_kg_m3: self.density.unwrap_or_else(|| panel_substrate.density_kg_m3()),
            panel_substrate,
            frame_substrate: self.frame_substrate.unwrap_or(defaults.frame_substrate),
        }
    }
}

/// Loads and tape capacity.
#[derive(Args, Debug, Clone, Default)]
pub struct LoadArgs {
    /// Design wind pressure in kgf/m² [default: 150].
    #[arg(long, value_name = "KGF_M2")]
    pub pressure: Option<f64>,

    /// Safety factor on the dynamic capacity [default: 5].
    #[arg(long = "safety-factor")]
    pub safety_factor: Option<f64>,

    /// Ultimate dynamic capacity of the tape in kgf/m² [default: 35150].
    #[arg(long = "ultimate-capacity", value_name = "KGF_M2")]
    pub ultimate_capacity: Option<f64>,

    /// The tape carries the dead load (no setting blocks).
    #[arg(long = "no-setting-blocks")]
    pub no_setting_blocks: bool,

    /// Temperature differential in °C; enables the thermal criterion.
    #[arg(long = "thermal-delta", value_name = "DEG_C")]
    pub thermal_delta: Option<f64>,

    /// Glueline thickness (1.1, 1.6 or 2.3 mm).
    #[arg(long = "tape-thickness", value_name = "MM", value_parser = parse_tape_thickness)]
    pub tape_thickness: Option<TapeThickness>,
}

impl LoadArgs {
    pub fn to_config(&self) -> LoadConfig {
        let defaults = LoadConfig::default();
        LoadConfig {
            wind_pressure_kgf_m2: self.pressure.unwrap_or(defaults.wind_pressure_kgf_m2),
            safety_factor: self.safety_factor.unwrap_or(defaults.safety_factor),
            ultimate_capacity_kgf_m2: self
                .ultimate_capacity
                .unwrap_or(defaults.ultimate_capacity_kgf_m2),
            uses_setting_blocks: !self.no_setting_blocks,
            thermal_delta_c: self.thermal_delta,
            tape_thickness_mm: self.tape_thickness,
            ..defaults
        }
    }
}

/// Minimum bite and rounding.
#[derive(Args, Debug, Clone, Default)]
pub struct RulesArgs {
    /// Minimum constructive bite in millimeters [default: 15].
    #[arg(long = "minimum-mm", value_name = "MM")]
    pub minimum_mm: Option<f64>,

    /// Round the bite up to a multiple of 5 mm instead of 1 mm.
    #[arg(long = "round-to-5")]
    pub round_to_5: bool,
}

impl RulesArgs {
    pub fn to_rules(&self) -> DesignRules {
        let defaults = DesignRules::default();
        DesignRules {
            minimum_width_mm: self.minimum_mm.unwrap_or(defaults.minimum_width_mm),
            rounding: if self.round_to_5 {
                WidthRounding::NextMultipleOf5
            } else {
                WidthRounding::NextMillimeter
            },
            ..defaults
        }
    }
}

#[derive(Args)]
pub struct SizeArgs {
    #[command(flatten)]
    pub panel: PanelArgs,

    #[command(flatten)]
    pub load: LoadArgs,

    #[command(flatten)]
    pub rules: RulesArgs,

    /// Prompt for panel size and wind pressure.
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Print the result as JSON.
    #[arg(long, conflicts_with = "report")]
    pub json: bool,

    /// Print a markdown calculation summary.
    #[arg(long)]
    pub report: bool,

    /// Engineer named in the report header.
    #[arg(long, default_value = "")]
    pub engineer: String,

    /// Job number in the report header.
    #[arg(long = "job-id", default_value = "")]
    pub job_id: String,

    /// Project name in the report header.
    #[arg(long, default_value = "")]
    pub project: String,
}

#[derive(Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub panel: PanelArgs,

    #[command(flatten)]
    pub load: LoadArgs,

    #[command(flatten)]
    pub rules: RulesArgs,

    /// First pressure in kgf/m².
    #[arg(long, default_value_t = 50.0)]
    pub from: f64,

    /// Last pressure in kgf/m².
    #[arg(long, default_value_t = 450.0)]
    pub to: f64,

    /// Number of samples, endpoints included.
    #[arg(long, default_value_t = 30)]
    pub samples: usize,

    /// Print the points as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ScheduleArgs {
    /// Project schedule JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the rows as JSON.
    #[arg(long)]
    pub json: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_substrate(s: &str) -> Result<Substrate, String> {
    Substrate::from_str_flexible(s).map_err(|e| e.to_string())
}

fn parse_tape_thickness(s: &str) -> Result<TapeThickness, String> {
    TapeThickness::from_str_flexible(s).map_err(|e| e.to_string())
}
