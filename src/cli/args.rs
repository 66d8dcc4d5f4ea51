//! CLI argument parsing.
//!
//! The parser accepts any iterator of strings, not just `std::env::args()`,
//! so every flag combination can be unit tested.

use std::path::PathBuf;

use crate::stats::interval::EstimatorKind;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Estimate the mean steps to food.
    Run(RunOptions),
    /// Validate a configuration file.
    Validate {
        /// Path to the configuration YAML file.
        config_path: PathBuf,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

/// Options of the `run` command. Flags override the configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Optional configuration YAML file.
    pub config_path: Option<PathBuf>,
    /// Confidence level override.
    pub confidence_level: Option<f64>,
    /// Rounding digits override.
    pub digits: Option<i32>,
    /// Seed override.
    pub seed: Option<u64>,
    /// Estimator override.
    pub estimator: Option<EstimatorKind>,
    /// Simulation budget override.
    pub max_simulations: Option<u64>,
    /// Per-walk step ceiling override.
    pub max_steps: Option<u64>,
    /// Print the report as JSON.
    pub json: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Whether verbose output was requested.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        matches!(&self.command, Command::Run(options) if options.verbose)
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(&args[2..]),
            "validate" => Self::parse_validate_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command flags.
    fn parse_run_command(flags: &[String]) -> Command {
        let mut options = RunOptions::default();

        let mut i = 0;
        while i < flags.len() {
            let flag = flags[i].as_str();
            match flag {
                "-v" | "--verbose" => options.verbose = true,
                "--json" => options.json = true,
                "-c" | "--config" | "--confidence" | "-d" | "--digits" | "--seed"
                | "--estimator" | "--max-simulations" | "--max-steps" => {
                    let Some(value) = flags.get(i + 1) else {
                        eprintln!("Error: '{flag}' requires a value");
                        return Command::Help;
                    };
                    if !Self::apply_value(&mut options, flag, value) {
                        eprintln!("Error: invalid value '{value}' for '{flag}'");
                        return Command::Help;
                    }
                    i += 1;
                }
                unknown => {
                    eprintln!("Error: unknown option '{unknown}' for 'run'");
                    return Command::Help;
                }
            }
            i += 1;
        }

        Command::Run(options)
    }

    /// Store a flag's value; false if it does not parse.
    fn apply_value(options: &mut RunOptions, flag: &str, value: &str) -> bool {
        match flag {
            "-c" | "--config" => {
                options.config_path = Some(PathBuf::from(value));
                true
            }
            "--confidence" => store(&mut options.confidence_level, value.parse().ok()),
            "-d" | "--digits" => store(&mut options.digits, value.parse().ok()),
            "--seed" => store(&mut options.seed, value.parse().ok()),
            "--estimator" => store(&mut options.estimator, EstimatorKind::from_name(value)),
            "--max-simulations" => store(&mut options.max_simulations, value.parse().ok()),
            "--max-steps" => store(&mut options.max_steps, value.parse().ok()),
            _ => false,
        }
    }

    /// Parse the 'validate' command arguments.
    fn parse_validate_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'validate' command requires a configuration path");
            return Command::Help;
        }

        Command::Validate {
            config_path: PathBuf::from(&args[2]),
        }
    }
}

fn store<T>(slot: &mut Option<T>, parsed: Option<T>) -> bool {
    match parsed {
        Some(v) => {
            *slot = Some(v);
            true
        }
        None => false,
    }
}
