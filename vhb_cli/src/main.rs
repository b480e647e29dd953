//! # Bondline CLI
//!
//! Terminal front end for the tape sizing engine in `vhb_core`.
//!
//! ```text
//! vhb size --pressure 450 --tape-thickness 2.3
//! vhb sweep --from 50 --to 450 --samples 9
//! vhb schedule tower-a.json --json
//! vhb equations > EQUATIONS.md
//! ```

use std::io::{self, IsTerminal};

use clap::Parser;
use vhb_core::CalcError;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_equations, run_schedule, run_size, run_sweep};
use crate::logging::{init_logging, LogConfig, LogFormat};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let outcome = match &cli.command {
        Command::Size(args) => run_size(args).map(|()| false),
        Command::Sweep(args) => run_sweep(args).map(|()| false),
        Command::Schedule(args) => run_schedule(args),
        Command::Equations => {
            run_equations();
            Ok(false)
        }
    };

    let exit_code = match outcome {
        Ok(false) => 0,
        Ok(true) => 1,
        Err(error) => {
            report_error(&error);
            1
        }
    };
    std::process::exit(exit_code);
}

/// Print the error chain, plus the structured form for calculation errors.
fn report_error(error: &anyhow::Error) {
    eprintln!("error: {error:#}");
    if let Some(calc) = error.downcast_ref::<CalcError>() {
        if let Ok(json) = serde_json::to_string_pretty(calc) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
    }
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: io::stderr().is_terminal(),
    }
}
