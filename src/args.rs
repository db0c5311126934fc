//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

/// newsdeck - a terminal UI for searching, filtering, and exporting news
#[derive(Parser, Debug)]
#[command(name = "newsdeck")]
#[command(version)]
#[command(about = "Search news, filter results by source, and export a selection", long_about = None)]
pub struct Args {
    /// Path to the configuration file (default: ~/.config/newsdeck/newsdeck.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the news search service (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the log_level argument.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
