//! Toolbar Buttons CLI
//!
//! Loads a button manifest and exercises the registry, the bootstrap emitter
//! and the host request handler from the command line.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose; keep stdout for command output
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    } else if let Err(e) = buttons_host::logging::init("warn") {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }

    match cli.command {
        Some(cmd) => execute_command(&cli.manifest, cmd),
        None => {
            println!("{} Toolbar Buttons CLI", "buttons".green().bold());
            println!();
            println!("Run {} for available commands.", "buttons --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(manifest: &std::path::Path, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Check => commands::run_check(manifest),
        Commands::Rows { row, json } => commands::run_rows(manifest, row, json),
        Commands::Bootstrap { script } => commands::run_bootstrap(manifest, script),
        Commands::View { id, index } => commands::run_view(manifest, &id, &index),
        Commands::Plugins => commands::run_plugins(manifest),
        Commands::Request { query } => commands::run_request(manifest, &query),
    }
}
