//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Display filters for dashboards
#[derive(Parser)]
#[command(
    name = "dashfilters",
    version,
    about = "Display filters for dashboards",
    long_about = "Applies dashboard display filters (HTML escaping, auto-linking, stack trace \
                  formatting, relative time, ...) to a JSON value read from stdin."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// How filter results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON value (default)
    #[default]
    Json,
    /// Strings written raw, other values as JSON
    Text,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Apply a filter to the JSON value on stdin (alias: run)
    #[command(alias = "run")]
    Apply {
        /// Output format
        #[arg(long, short = 'o', default_value = "json")]
        output: OutputFormat,

        /// Filter name or alias (see `list`)
        filter: String,

        /// Filter arguments, parsed as JSON with plain-string fallback
        /// (use `--` before arguments that start with a hyphen)
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
    },
    /// List available filters and their aliases
    List,
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}
