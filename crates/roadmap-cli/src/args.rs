//! Command-line argument definitions for the roadmap CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input source, output path,
//! configuration file selection, validation strictness and logging verbosity.

use clap::Parser;

/// Command-line arguments for the roadmap layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a generated roadmap JSON file (`{"title": ..., "nodes": [...]}`)
    #[arg(required_unless_present = "sample")]
    pub input: Option<String>,

    /// Path to the output roadmap JSON file
    #[arg(short, long, default_value = "roadmap.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Lay out the bundled "Frontend Developer" roadmap instead of an input file
    #[arg(long, conflicts_with = "input")]
    pub sample: bool,

    /// Reject input with duplicate ids, dangling parents or cycles
    #[arg(long)]
    pub strict: bool,

    /// Title to use when the generated roadmap has none
    #[arg(long)]
    pub topic: Option<String>,

    /// Roadmap id (defaults to the current time in milliseconds)
    #[arg(long)]
    pub id: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
