//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Toolbar Buttons - inspect and serve editor toolbar button manifests
#[derive(Parser, Debug)]
#[command(name = "buttons")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the button manifest
    #[arg(short, long, global = true, env = "BUTTONS_MANIFEST", default_value = "buttons.toml")]
    pub manifest: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate the manifest and summarize registered buttons
    Check,

    /// Show which buttons land on which toolbar row
    Rows {
        /// Only show this row
        #[arg(long)]
        row: Option<u32>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the client bootstrap payload
    Bootstrap {
        /// Print the full bootstrap script instead of the JSON payload
        #[arg(long)]
        script: bool,
    },

    /// Render the secondary view of a button
    ///
    /// Prints nothing when the button or index does not exist.
    View {
        /// Button id
        id: String,

        /// Position within the button's variant group
        index: String,
    },

    /// List the per-button plugin script URLs
    Plugins,

    /// Answer a raw host request query
    ///
    /// Examples:
    ///   buttons request "action=button_bootstrap"
    ///   buttons request "action=button_view&plugin=shortcode&index=0"
    Request {
        /// Query string of the request
        query: String,
    },
}
