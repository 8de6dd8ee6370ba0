//! CLI command definitions for the `skillhub` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod skill;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Serve and browse the skill catalog.
#[derive(Parser)]
#[command(name = "skillhub", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Store connection URI (postgres://... or sqlite://...).
    /// Defaults to a SQLite file in ~/.skillhub.
    #[arg(long, global = true, env = "POSTGRES_URI", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Path to an optional skillhub.toml with store tunables.
    #[arg(long, global = true, env = "SKILLHUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(long, short, default_value = "8080")]
        port: u16,

        /// Host address to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// List all skills.
    #[command(alias = "ls")]
    List,

    /// Show one skill with its levels.
    Show {
        /// Skill key to display.
        key: String,
    },

    /// Register a skill from a JSON document.
    Create {
        /// Path to the JSON file, or `-` to read from stdin.
        file: PathBuf,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
