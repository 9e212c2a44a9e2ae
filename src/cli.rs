//! CLI argument parsing using clap v4
//!
//! Defines the command-line interface for the decision console.

use clap::{Parser, Subcommand};

/// Decision Console - terminal client for the decision support backend
///
/// Renders task, process, and impact boards from local stores, keeps them
/// fresh against the backend on an interval, and drives the decision
/// review workflow (summary, chat, white paper, approval).
#[derive(Parser, Debug)]
#[command(name = "decision-console")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the console
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the boards (optionally watching for changes)
    Run {
        /// Path to configuration file
        #[arg(short, long, env = "DCONSOLE_CONFIG")]
        config: Option<String>,

        /// Project to show the decision review for
        #[arg(short, long, env = "DCONSOLE_PROJECT")]
        project: Option<String>,

        /// Keep running and refresh the boards on the configured interval
        #[arg(short, long)]
        watch: bool,

        /// Submit the project's white paper for approval
        #[arg(long, requires = "project")]
        submit: bool,

        /// Post a note to the project's advisory chat
        #[arg(long, value_name = "TEXT", requires = "project")]
        note: Option<String>,

        /// Export the project's white paper as PDF to the given path
        #[arg(long, value_name = "PATH", requires = "project")]
        export: Option<String>,
    },

    /// Display version and build information
    Version,

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the current configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}

/// Default operator name based on hostname
pub fn default_operator_name() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "decision-console".to_string())
}
