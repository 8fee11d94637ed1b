//! Configuration management for the editor.
//!
//! Handles:
//! - Command-line argument parsing
//! - Startup file selection
//! - Log level selection

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Command-line arguments for the editor
#[derive(Debug, Parser)]
#[command(name = "linedit")]
#[command(about = "Menu-driven console editor for line-oriented text documents")]
#[command(version)]
pub struct Args {
    /// File to load into the document before the first menu
    #[arg(help = "File to load at startup")]
    pub file: Option<PathBuf>,

    /// Log level for the editor
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// File to load before the first menu, if any
    pub startup_file: Option<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            startup_file: args.file,
            log_level: args.log_level,
        })
    }
}
