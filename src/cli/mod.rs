//! CLI module for forage.
//!
//! All CLI logic lives here rather than in main.rs so it can be tested.
//! The entry point `run_cli` takes already parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOptions};
pub use commands::{resolve_config, run_cli};
pub use output::{format_percent, format_summary, print_help, print_report, print_version};
