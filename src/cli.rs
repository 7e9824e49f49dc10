// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `plandag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "plandag",
    version,
    about = "Search task DAGs for a precedence-valid sequence meeting a value target within a deadline.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a single instance file; runs one search and prints its report.
    ///
    /// Without this flag, plandag runs an experiment batch of random
    /// instances driven by the config file.
    #[arg(long, value_name = "PATH")]
    pub input: Option<String>,

    /// Path to the experiment config file (TOML).
    ///
    /// Default: `Plandag.toml` in the current working directory. If the
    /// default path does not exist, built-in experiment defaults are used.
    #[arg(long, value_name = "PATH", default_value = "Plandag.toml")]
    pub config: String,

    /// RNG seed for the random instance generator; overrides the config file.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print a per-run block for every trial in experiment mode.
    #[arg(long)]
    pub verbose: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PLANDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
