//! CLI command handlers.
//!
//! Execution logic for each CLI command.

use std::path::Path;
use std::process::ExitCode;

use crate::config::{ForageConfig, ForageConfigBuilder};
use crate::error::ForageResult;
use crate::estimation;

use super::output::{format_config, print_help, print_report, print_version};
use super::{Args, Command, RunOptions};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run(options) => run_estimation(&options),
        Command::Validate { config_path } => validate_config(&config_path),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Build the run configuration: file (or defaults) with flag overrides applied.
///
/// # Errors
///
/// Returns error if the file cannot be loaded or the result is invalid.
pub fn resolve_config(options: &RunOptions) -> ForageResult<ForageConfig> {
    let base = match &options.config_path {
        Some(path) => ForageConfig::load(path)?,
        None => ForageConfig::default(),
    };

    let mut builder = ForageConfigBuilder::from_config(base);
    if let Some(seed) = options.seed {
        builder = builder.seed(seed);
    }
    if let Some(level) = options.confidence_level {
        builder = builder.confidence_level(level);
    }
    if let Some(digits) = options.digits {
        builder = builder.digits(digits);
    }
    if let Some(estimator) = options.estimator {
        builder = builder.estimator(estimator);
    }
    if let Some(max_simulations) = options.max_simulations {
        builder = builder.max_simulations(max_simulations);
    }
    if let Some(max_steps) = options.max_steps {
        builder = builder.max_steps_per_walk(max_steps);
    }

    builder.build_checked()
}

/// Run the sequential estimation and print the result.
#[must_use]
pub fn run_estimation(options: &RunOptions) -> ExitCode {
    let config = match resolve_config(options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    match estimation::run(&config) {
        Ok(report) => {
            if options.json {
                match report.to_json() {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::from(1);
                    }
                }
            } else {
                print_report(&report, options.verbose);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Validate a configuration file without running it.
#[must_use]
pub fn validate_config(path: &Path) -> ExitCode {
    println!("Validating: {}\n", path.display());

    match ForageConfig::load(path) {
        Ok(config) => {
            println!("✓ Configuration is valid\n");
            println!("{}", format_config(&config));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Invalid configuration: {e}");
            ExitCode::from(1)
        }
    }
}
