//! Configuration for the rexword command line.
//!
//! Handles:
//! - Command-line argument parsing
//! - Operating-mode selection

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::session::Mode;

/// Command-line arguments for the puzzle validator
#[derive(Debug, Parser)]
#[command(name = "rexword")]
#[command(about = "Validate regex crossword puzzles, rectangular or hexagonal")]
#[command(version)]
pub struct Args {
    /// Puzzle description file (TOML, or JSON with a .json extension)
    pub file: PathBuf,

    /// Operating mode
    #[arg(
        long,
        value_enum,
        default_value = "click",
        help = "click validates once and exits; live re-validates whenever the file changes"
    )]
    pub mode: ModeArg,

    /// Log level for the validator
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Operating mode as written on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Click,
    Live,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Click => Mode::Click,
            ModeArg::Live => Mode::Live,
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Puzzle file to validate (and watch, in live mode)
    pub file: PathBuf,
    /// Operating mode
    pub mode: Mode,
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
            file: args.file,
            mode: args.mode.into(),
            log_level: args.log_level,
        })
    }
}
