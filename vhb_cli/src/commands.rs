//! Subcommand implementations.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::debug;
use vhb_core::calculations::tape_sizing::{
    compute_with_rules, DesignRules, GoverningCriterion, LoadConfig, PanelConfig, SizingResult,
};
use vhb_core::equations::generate_equations_markdown;
use vhb_core::project::{Project, ScheduleRow, ScheduleSummary};
use vhb_core::report::{render_summary, ReportMeta};
use vhb_core::sensitivity::{
    minimum_width_crossover_kgf_m2, wind_pressure_sweep, SensitivityPoint, SweepRange,
};
use vhb_core::units::{KgfPerM2, Kpa};

use crate::cli::{ScheduleArgs, SizeArgs, SweepArgs};

/// `vhb size`
pub fn run_size(args: &SizeArgs) -> Result<()> {
    let mut panel = args.panel.to_config();
    let mut load = args.load.to_config();
    let rules = args.rules.to_rules();

    if args.interactive {
        let stdin = io::stdin();
        prompt_inputs(&mut stdin.lock(), &mut io::stderr(), &mut panel, &mut load)?;
    }

    print!("{}", size_output(args, &panel, &load, &rules)?);
    Ok(())
}

/// Text printed by `vhb size`: a report, JSON, or the result block.
fn size_output(
    args: &SizeArgs,
    panel: &PanelConfig,
    load: &LoadConfig,
    rules: &DesignRules,
) -> Result<String> {
    if args.report {
        let meta = ReportMeta::new(
            args.engineer.as_str(),
            args.job_id.as_str(),
            args.project.as_str(),
        );
        return Ok(render_summary(panel, load, rules, &meta)?);
    }

    let result = compute_with_rules(panel, load, rules)?;
    if args.json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&result)?))
    } else {
        Ok(format_result(panel, load, &result)?)
    }
}

/// `vhb sweep`
pub fn run_sweep(args: &SweepArgs) -> Result<()> {
    let panel = args.panel.to_config();
    let load = args.load.to_config();
    let rules = args.rules.to_rules();
    let range = SweepRange {
        start_kgf_m2: args.from,
        end_kgf_m2: args.to,
        samples: args.samples,
    };

    let points = wind_pressure_sweep(&panel, &load, &rules, &range)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("{}", sweep_table(&points));
    let crossover = minimum_width_crossover_kgf_m2(&panel, &load, &rules)?;
    println!(
        "Wind exceeds the {:.0} mm minimum above {:.1} kgf/m² ({:.2} kPa)",
        rules.minimum_width_mm,
        crossover,
        Kpa::from(KgfPerM2(crossover)).0
    );
    Ok(())
}

/// `vhb schedule`. Returns whether any panel failed to size.
pub fn run_schedule(args: &ScheduleArgs) -> Result<bool> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read schedule {}", args.file.display()))?;
    let project = Project::from_json(&text)
        .with_context(|| format!("failed to parse schedule {}", args.file.display()))?;
    debug!(items = project.item_count(), file = %args.file.display(), "schedule loaded");

    let rows = project.calculate_all();
    let summary = ScheduleSummary::from_rows(&rows);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("Job: {} ({})", project.meta.job_id, project.meta.client);
        println!("{}", schedule_table(&rows));
        print_schedule_summary(&summary);
    }
    Ok(summary.failed > 0)
}

/// `vhb equations`
pub fn run_equations() {
    print!("{}", generate_equations_markdown());
}

/// Ask for a number until one parses. Empty input or end of input keeps
/// `default`.
fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: f64,
) -> io::Result<f64> {
    loop {
        write!(output, "{} [{}]: ", prompt, default)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(default);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "'{}' is not a number, try again", trimmed)?,
        }
    }
}

fn prompt_inputs<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    panel: &mut PanelConfig,
    load: &mut LoadConfig,
) -> io::Result<()> {
    panel.width_m = prompt_f64(input, output, "Panel width (m)", panel.width_m)?;
    panel.height_m = prompt_f64(input, output, "Panel height (m)", panel.height_m)?;
    panel.thickness_mm = prompt_f64(input, output, "Panel thickness (mm)", panel.thickness_mm)?;
    load.wind_pressure_kgf_m2 = prompt_f64(
        input,
        output,
        "Design wind pressure (kgf/m²)",
        load.wind_pressure_kgf_m2,
    )?;
    Ok(())
}

fn format_result(
    panel: &PanelConfig,
    load: &LoadConfig,
    result: &SizingResult,
) -> std::result::Result<String, std::fmt::Error> {
    const RULE: &str = "═══════════════════════════════════════";
    let title = if panel.label.is_empty() {
        "TAPE SIZING RESULTS".to_string()
    } else {
        panel.label.to_uppercase()
    };
    let mut out = String::new();

    writeln!(out, "{}", RULE)?;
    writeln!(out, "  {}", title)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "Input:")?;
    writeln!(
        out,
        "  Panel:    {:.2} x {:.2} m, {:.1} mm {}",
        panel.width_m, panel.height_m, panel.thickness_mm, panel.panel_substrate
    )?;
    writeln!(out, "  Frame:    {}", panel.frame_substrate)?;
    writeln!(out, "  Wind:     {:.1} kgf/m²", load.wind_pressure_kgf_m2)?;
    let blocks = if load.uses_setting_blocks {
        "yes"
    } else {
        "no"
    };
    writeln!(out, "  Blocks:   {}", blocks)?;
    writeln!(out)?;
    writeln!(out, "Design stresses:")?;
    writeln!(out, "  σ_dyn = {:.1} kgf/m²", result.admissible_dynamic_stress_kgf_m2)?;
    writeln!(out, "  σ_st  = {:.1} kgf/m²", result.admissible_static_stress_kgf_m2)?;
    writeln!(out)?;
    writeln!(out, "Required bite:")?;
    for (criterion, width) in result.criterion_widths() {
        writeln!(out, "  {:<18} {:>7.2} mm", criterion.display_name(), width)?;
    }
    writeln!(
        out,
        "  {:<18} {:>7.2} mm",
        GoverningCriterion::MinimumConstructive.display_name(),
        result.minimum_width_mm
    )?;
    writeln!(out, "  Panel weight:      {:>7.2} kgf", result.panel_weight_kgf)?;
    if let Some(movement) = result.thermal_movement_mm {
        writeln!(out, "  Thermal movement:  {:>7.3} mm", movement)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "  BITE: {:.0} mm (governs: {})",
        result.final_width_mm, result.governing_criterion
    )?;
    if let Some(gt) = result.tape_thickness_mm {
        writeln!(out, "  TAPE: {}", gt)?;
    }
    writeln!(out, "{}", RULE)?;
    Ok(out)
}

fn sweep_table(points: &[SensitivityPoint]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            header_cell("Pressure (kgf/m²)"),
            header_cell("Wind bite (mm)"),
            header_cell("Final bite (mm)"),
            header_cell("Governs"),
        ]);

    for point in points {
        table.add_row(vec![
            number_cell(format!("{:.1}", point.wind_pressure_kgf_m2)),
            number_cell(format!("{:.2}", point.wind_required_width_mm)),
            number_cell(format!("{:.0}", point.final_width_mm)),
            Cell::new(point.governing_criterion.display_name()),
        ]);
    }
    table
}

fn schedule_table(rows: &[ScheduleRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            header_cell("Panel"),
            header_cell("Wind (mm)"),
            header_cell("Dead load (mm)"),
            header_cell("Thermal (mm)"),
            header_cell("Bite (mm)"),
            header_cell("Governs"),
        ]);

    for row in rows {
        match &row.result {
            Ok(result) => {
                let thermal = result
                    .thermal_required_width_mm
                    .map_or("-".to_string(), |w| format!("{:.2}", w));
                table.add_row(vec![
                    Cell::new(&row.label),
                    number_cell(format!("{:.2}", result.wind_required_width_mm)),
                    number_cell(format!("{:.2}", result.weight_required_width_mm)),
                    number_cell(thermal),
                    number_cell(format!("{:.0}", result.final_width_mm))
                        .add_attribute(Attribute::Bold),
                    Cell::new(result.governing_criterion.display_name()),
                ])
            }
            Err(error) => table.add_row(vec![
                Cell::new(&row.label),
                Cell::new(error.to_string()).fg(Color::Red),
                Cell::new(""),
                Cell::new(""),
                Cell::new(""),
                Cell::new(error.error_code()).fg(Color::Red),
            ]),
        };
    }
    table
}

fn print_schedule_summary(summary: &ScheduleSummary) {
    println!("Panels: {} ({} failed)", summary.panels, summary.failed);
    if let (Some(width), Some(label)) = (summary.widest_bite_mm, &summary.widest_label) {
        println!("Widest bite: {:.0} mm ({})", width, label);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn number_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::io::Cursor;

    fn size_args(flags: &[&str]) -> SizeArgs {
        let argv = ["vhb", "size"].iter().chain(flags.iter()).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Size(args) => args,
            _ => panic!("expected size command"),
        }
    }

    fn size_text(flags: &[&str]) -> String {
        let args = size_args(flags);
        let panel = args.panel.to_config();
        let load = args.load.to_config();
        size_output(&args, &panel, &load, &args.rules.to_rules()).unwrap()
    }

    #[test]
    fn test_size_report_carries_header_flags() {
        let text = size_text(&[
            "--report",
            "--engineer",
            "J. Engineer",
            "--job-id",
            "25-042",
            "--project",
            "Tower A",
            "--label",
            "P-07",
        ]);
        assert!(text.starts_with("# P-07"));
        assert!(text.contains("- Project: Tower A (25-042)"));
        assert!(text.contains("- Engineer: J. Engineer"));
        assert!(text.contains("Final bite: 15 mm (governed by Minimum Constructive)"));
    }

    #[test]
    fn test_size_json_parses_back() {
        let text = size_text(&["--json", "--pressure", "450"]);
        let result: SizingResult = serde_json::from_str(&text).unwrap();
        assert_eq!(result.final_width_mm, 39.0);
        assert_eq!(result.governing_criterion, GoverningCriterion::Wind);
    }

    #[test]
    fn test_size_text_block() {
        let text = size_text(&["--no-setting-blocks", "--tape-thickness", "1.6"]);
        assert!(text.contains("Blocks:   no"));
        assert!(text.contains("BITE: 35 mm (governs: Dead Load)"));
        assert!(text.contains("TAPE: 1.6 mm"));
    }

    #[test]
    fn test_size_invalid_input_is_error() {
        let args = size_args(&["--width-m", "0"]);
        let panel = args.panel.to_config();
        let load = args.load.to_config();
        let err = size_output(&args, &panel, &load, &args.rules.to_rules()).unwrap_err();
        let calc = err.downcast_ref::<vhb_core::CalcError>().unwrap();
        assert_eq!(calc.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_prompt_reasks_until_number() {
        let mut input = Cursor::new("abc\n2.5\n");
        let mut output = Vec::new();
        let value = prompt_f64(&mut input, &mut output, "Panel width (m)", 1.2).unwrap();

        assert_eq!(value, 2.5);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("'abc' is not a number"));
        assert_eq!(shown.matches("Panel width (m) [1.2]: ").count(), 2);
    }

    #[test]
    fn test_prompt_keeps_default_on_empty_or_eof() {
        let mut output = Vec::new();
        let mut empty = Cursor::new("\n");
        assert_eq!(prompt_f64(&mut empty, &mut output, "x", 6.0).unwrap(), 6.0);
        let mut eof = Cursor::new("");
        assert_eq!(prompt_f64(&mut eof, &mut output, "x", 6.0).unwrap(), 6.0);
    }

    #[test]
    fn test_prompt_inputs_fill_panel_and_load() {
        let mut input = Cursor::new("1.5\n\n8\n300\n");
        let mut output = Vec::new();
        let mut panel = PanelConfig::default();
        let mut load = LoadConfig::default();
        prompt_inputs(&mut input, &mut output, &mut panel, &mut load).unwrap();

        assert_eq!(panel.width_m, 1.5);
        assert_eq!(panel.height_m, 2.4);
        assert_eq!(panel.thickness_mm, 8.0);
        assert_eq!(load.wind_pressure_kgf_m2, 300.0);
    }

    #[test]
    fn test_sweep_table_rows() {
        let points = wind_pressure_sweep(
            &PanelConfig::default(),
            &LoadConfig::default(),
            &DesignRules::default(),
            &SweepRange {
                start_kgf_m2: 100.0,
                end_kgf_m2: 450.0,
                samples: 3,
            },
        )
        .unwrap();
        let rendered = sweep_table(&points).to_string();
        assert!(rendered.contains("450.0"));
        assert!(rendered.contains("39"));
        assert!(rendered.contains("Minimum Constructive"));
    }

    #[test]
    fn test_schedule_table_shows_errors() {
        let mut project = Project::new("E", "25-001", "C");
        project.add_panel(PanelConfig {
            label: "P-01".to_string(),
            ..PanelConfig::default()
        });
        project.add_panel(PanelConfig {
            label: "P-02".to_string(),
            width_m: 0.0,
            ..PanelConfig::default()
        });

        let rendered = schedule_table(&project.calculate_all()).to_string();
        assert!(rendered.contains("P-01"));
        assert!(rendered.contains("INVALID_INPUT"));
    }

    #[test]
    fn test_schedule_file_roundtrip() {
        let mut project = Project::new("E", "25-001", "C");
        project.add_panel(PanelConfig {
            label: "P-01".to_string(),
            ..PanelConfig::default()
        });

        let path = std::env::temp_dir().join(format!("vhb-schedule-{}.json", std::process::id()));
        fs::write(&path, project.to_json().unwrap()).unwrap();
        let failed = run_schedule(&ScheduleArgs {
            file: path.clone(),
            json: true,
        })
        .unwrap();
        fs::remove_file(&path).unwrap();
        assert!(!failed);
    }

    #[test]
    fn test_missing_schedule_file() {
        let args = ScheduleArgs {
            file: "does/not/exist.json".into(),
            json: false,
        };
        let err = run_schedule(&args).unwrap_err();
        assert!(err.to_string().contains("failed to read schedule"));
    }
}
