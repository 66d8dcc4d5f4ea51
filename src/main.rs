//! forage CLI
//!
//! Command-line interface for the anthill random-walk estimator.

use std::process::ExitCode;

use forage::cli::{run_cli, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    forage::logging::init_tracing(args.verbose());
    run_cli(args)
}
