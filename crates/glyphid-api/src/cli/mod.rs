//! CLI command definitions and dispatch for the `glyphid` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod compare;
pub mod config;
pub mod render;
pub mod show;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Preview workspace identicons in the terminal.
#[derive(Parser)]
#[command(name = "glyphid", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Grid side length (odd, 1-19). Defaults to `default_grid_size` from config.toml.
    #[arg(short, long, global = true, env = "GLYPHID_GRID_SIZE")]
    pub grid_size: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the identicon for one or more names.
    Show {
        /// Workspace names to render.
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Compare identicons across names and report collisions.
    Compare {
        /// Names to compare (defaults to `sample_names` from config.toml).
        names: Vec<String>,
    },

    /// Show the resolved data directory and effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
