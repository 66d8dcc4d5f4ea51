//! CLI output formatting.
//!
//! Formatting is split from printing so the report text can be tested.

use crate::config::ForageConfig;
use crate::estimation::EstimationReport;
use crate::stats::interval::IntervalEstimator;

/// Print version information.
pub fn print_version() {
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => {
            println!("forage {} ({hash})", env!("CARGO_PKG_VERSION"));
        }
        _ => println!("forage {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"forage - Monte Carlo estimate of an ant's time to find food

USAGE:
    forage <COMMAND> [OPTIONS]

COMMANDS:
    run                         Estimate the mean steps from the anthill to food
        -c, --config <FILE>     Load settings from a YAML file
        --confidence <P>        Confidence level in (0, 1) (default: 0.999)
        -d, --digits <N>        Decimal places the interval must agree on (default: 0)
        --seed <N>              Master seed (default: 42)
        --estimator <NAME>      normal | student-t (default: normal)
        --max-simulations <N>   Give up after N walks
        --max-steps <N>         Abandon any walk longer than N steps
        --json                  Print the report as JSON
        -v, --verbose           Show run statistics and debug logs

    validate <config.yaml>      Check a configuration file

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    forage run
    forage run --confidence 0.95 --digits 1 --seed 7
    forage run --config field.yaml --json

LOGGING:
    Set FORAGE_LOG (e.g. FORAGE_LOG=forage=debug) to control log output.
"
    );
}

/// Confidence level as a percentage without float noise (0.999 -> "99.9").
#[must_use]
pub fn format_percent(level: f64) -> String {
    let text = format!("{:.6}", level * 100.0);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// One-line human readable result.
#[must_use]
pub fn format_summary(report: &EstimationReport) -> String {
    format!(
        "The average time to find food is {} seconds with {}% confidence.",
        report.formatted_estimate(),
        format_percent(report.confidence_level)
    )
}

/// Multi-line run statistics shown with `--verbose`.
#[must_use]
pub fn format_details(report: &EstimationReport) -> String {
    format!(
        "  Simulations: {}\n  Interval:    [{:.6}, {:.6}]\n  Sample mean: {:.6} (sd {:.6})\n  Estimator:   {}\n  Seed:        {}",
        report.simulations,
        report.interval.low,
        report.interval.high,
        report.sample_mean,
        report.sample_std_dev,
        report.estimator,
        report.seed
    )
}

/// Print an estimation report.
pub fn print_report(report: &EstimationReport, verbose: bool) {
    println!("{}", format_summary(report));
    if verbose {
        println!();
        println!("{}", format_details(report));
    }
}

/// Summary of a validated configuration.
#[must_use]
pub fn format_config(config: &ForageConfig) -> String {
    let estimator = config.estimation.estimator;
    let warmup = config
        .estimation
        .warmup
        .unwrap_or_else(|| estimator.warmup());
    let limit = |v: Option<u64>| v.map_or_else(|| "unbounded".to_string(), |n| n.to_string());
    format!(
        "  Seed:             {}\n  Confidence:       {}%\n  Digits:           {}\n  Estimator:        {} (warm-up {})\n  Step length:      {}\n  Food ellipse:     centre ({}, {}), semi-axes ({}, {})\n  Max simulations:  {}\n  Max walk steps:   {}",
        config.reproducibility.seed,
        format_percent(config.estimation.confidence_level),
        config.estimation.digits,
        estimator.name(),
        warmup,
        config.walk.step_length,
        config.food.center.0,
        config.food.center.1,
        config.food.semi_axes.0,
        config.food.semi_axes.1,
        limit(config.limits.max_simulations),
        limit(config.limits.max_steps_per_walk),
    )
}
