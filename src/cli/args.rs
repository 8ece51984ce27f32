//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Resolved, Settings};
use crate::ui::OutputMode;

/// Stepflow - Build and replay interactive console flows.
#[derive(Debug, Parser)]
#[command(name = "stepflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a YAML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Read answers line by line from stdin, even on a terminal
    #[arg(long)]
    pub non_interactive: bool,
}

impl Cli {
    /// Merge file settings with the flags; flags win.
    pub fn resolve(&self, settings: &Settings) -> Resolved {
        let mut resolved = settings.resolve();
        if self.verbose {
            resolved.output = OutputMode::Verbose;
        } else if self.quiet {
            resolved.output = OutputMode::Quiet;
        }
        if self.no_color {
            resolved.color = false;
        }
        if self.non_interactive {
            resolved.interactive = false;
        }
        resolved
    }
}
