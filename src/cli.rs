//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation. Path flags are optional so that values from
//! `.deployscan.toml` can fill the gaps.

use clap::Parser;
use std::path::PathBuf;

/// DeployScan - turn a boxed deployment listing into plain lists
///
/// Reads the captured console output of a functions listing command,
/// writes a pipe-delimited function list and a name list, and prints
/// counts by region, trigger type and runtime.
///
/// Examples:
///   deployscan
///   deployscan --input raw.txt --list-output list.txt --names-output names.txt
///   deployscan --input raw.txt --summary-json summary.json --show-skipped
///   deployscan --init-config
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Captured listing to parse
    ///
    /// Defaults to functions_raw.txt or the value in .deployscan.toml.
    #[arg(short, long, value_name = "FILE", env = "DEPLOYSCAN_INPUT")]
    pub input: Option<PathBuf>,

    /// Output path for the pipe-delimited function list
    #[arg(short, long, value_name = "FILE")]
    pub list_output: Option<PathBuf>,

    /// Output path for the function name list
    #[arg(short, long, value_name = "FILE")]
    pub names_output: Option<PathBuf>,

    /// Also write the summary as JSON to this path
    #[arg(long, value_name = "FILE")]
    pub summary_json: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .deployscan.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print how many lines were skipped, by reason
    #[arg(long)]
    pub show_skipped: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only on stderr)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .deployscan.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    ///
    /// The default stays at WARN so stdout carries only the summary.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
