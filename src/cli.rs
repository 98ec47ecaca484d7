//! CLI argument parsing for netpath
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

use clap::{Parser, Subcommand};

pub use netpath_core::format::OutputFormat;
use netpath_core::graph::NodeId;

/// Netpath - minimum-delay route finder
#[derive(Parser, Debug)]
#[command(name = "netpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_parser = parse_log_level)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the minimum-delay route between two nodes
    Route {
        /// Starting node id
        from: NodeId,

        /// Target node id
        to: NodeId,
    },

    /// Show the built-in demonstration topology
    Topology,
}

/// Parse output format from string
///
/// `OutputFormat` lives in netpath-core, so clap gets a parser function
/// rather than a `ValueEnum` impl.
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse and validate a log level name
fn parse_log_level(s: &str) -> Result<String, String> {
    let level = s.to_lowercase();
    match level.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" => Ok(level),
        other => Err(format!(
            "invalid log level '{}' (expected: error, warn, info, debug, trace)",
            other
        )),
    }
}
