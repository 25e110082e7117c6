//! Read-only commands: check, rows, plugins

use std::collections::BTreeMap;
use std::path::Path;

use buttons_host::{host_rows, merge_row, plugin_script_urls};
use colored::Colorize;

use crate::context::load_handler;
use crate::error::Result;

/// Run the check command
pub fn run_check(manifest: &Path) -> Result<()> {
    let handler = load_handler(manifest)?;
    let registry = handler.registry();

    println!(
        "{} {} is valid",
        "OK".green().bold(),
        manifest.display()
    );
    println!();

    for group in registry.groups() {
        let representative = group.representative();
        let kind = if group.is_composite() {
            format!("split, {} items", group.len())
        } else if representative.rich_content {
            "view".to_string()
        } else {
            "insert".to_string()
        };
        println!(
            "  {:<16} row {}  {} ({})",
            group.id().green(),
            group.placement(),
            representative.title,
            kind.as_str().dimmed()
        );
    }

    println!();
    println!("{} {} buttons registered.", "Total:".dimmed(), registry.len());
    Ok(())
}

/// Run the rows command
pub fn run_rows(manifest: &Path, row: Option<u32>, json: bool) -> Result<()> {
    let handler = load_handler(manifest)?;

    let rows: Vec<(u32, Vec<String>)> = match row {
        Some(row) => vec![(row, merge_row(handler.registry(), Vec::new(), row))],
        None => host_rows(handler.registry(), handler.config()),
    };

    if json {
        let map: BTreeMap<String, Vec<String>> = rows
            .into_iter()
            .map(|(row, ids)| (row.to_string(), ids))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    for (row, ids) in rows {
        if ids.is_empty() {
            println!("{} {}", format!("Row {}:", row).as_str().cyan().bold(), "(empty)".dimmed());
        } else {
            println!("{} {}", format!("Row {}:", row).as_str().cyan().bold(), ids.join(", "));
        }
    }
    Ok(())
}

/// Run the plugins command
pub fn run_plugins(manifest: &Path) -> Result<()> {
    let handler = load_handler(manifest)?;

    for (id, url) in plugin_script_urls(handler.registry(), handler.config()) {
        println!("{:<16} {}", id.as_str().green(), url);
    }
    Ok(())
}
