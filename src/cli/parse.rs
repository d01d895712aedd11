//! CLI parse: clap types for pagebundle. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Restructure a Markdown tree into page bundles
#[derive(Parser, Debug)]
#[command(name = "pagebundle")]
#[command(about = "Restructure a Markdown tree into a page-bundle layout")]
pub struct Cli {
    /// Source Markdown tree
    pub source: PathBuf,

    /// Destination root (must already contain _index.md)
    pub destination: PathBuf,

    /// Debug-level logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable progress logging
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Never color log lines (color is already off when output is not a terminal)
    #[arg(long)]
    pub no_color: bool,
}
