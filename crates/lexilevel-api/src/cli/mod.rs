//! CLI command definitions for the `lexi` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod assess;
pub mod history;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Assess reading difficulty and get learning recommendations.
#[derive(Parser)]
#[command(name = "lexi", version, about, long_about = None)]
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

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(long, short, default_value = "5000", env = "LEXILEVEL_PORT")]
        port: u16,

        /// Host address to bind to.
        #[arg(long, default_value = "127.0.0.1", env = "LEXILEVEL_HOST")]
        host: String,
    },

    /// Assess a text sample without signing in or saving anything.
    Assess {
        /// Text to assess. Read from stdin when omitted.
        text: Option<String>,

        /// Comma-separated interests (e.g. "music, travel").
        #[arg(long, default_value = "")]
        hobbies: String,
    },

    /// Show the stored history of a user.
    History {
        /// User id as issued by the identity provider.
        user_id: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
