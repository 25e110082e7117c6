//! Toolbar row placement and plugin registration for the host.

use buttons_core::ExtensionRegistry;
use tracing::warn;

use crate::config::HostConfig;
use crate::request::ACTION_BOOTSTRAP;

/// What the current user is allowed to edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub edit_posts: bool,
    pub edit_pages: bool,
}

impl Capabilities {
    pub fn editor() -> Self {
        Self {
            edit_posts: true,
            edit_pages: true,
        }
    }
}

/// Whether the editor plugins should be registered for this user at all.
///
/// Requires both edit capabilities and at least one registered button.
pub fn should_register_plugins(capabilities: &Capabilities, registry: &ExtensionRegistry) -> bool {
    capabilities.edit_posts && capabilities.edit_pages && !registry.is_empty()
}

/// Merge the groups placed on `row` into the host's existing button row.
///
/// Each matching id is pushed onto the front of the row in registration
/// order, so the merged row starts with the matching ids reversed.
pub fn merge_row(registry: &ExtensionRegistry, existing: Vec<String>, row: u32) -> Vec<String> {
    let mut merged: Vec<String> = registry
        .groups_on_row(row)
        .into_iter()
        .rev()
        .map(str::to_string)
        .collect();
    merged.extend(existing);
    merged
}

/// Ids for each row the host renders, in the configured row order.
///
/// Groups placed on a row the host does not render are reported and left out.
pub fn host_rows(registry: &ExtensionRegistry, config: &HostConfig) -> Vec<(u32, Vec<String>)> {
    for group in registry.groups() {
        if !config.rows.contains(&group.placement()) {
            warn!(
                id = group.id(),
                row = group.placement(),
                "Button placed on a row the host does not render"
            );
        }
    }

    config
        .rows
        .iter()
        .map(|&row| (row, merge_row(registry, Vec::new(), row)))
        .collect()
}

/// `(id, script url)` for every group, in registration order.
pub fn plugin_script_urls(registry: &ExtensionRegistry, config: &HostConfig) -> Vec<(String, String)> {
    let separator = if config.endpoint.contains('?') { '&' } else { '?' };
    registry
        .groups()
        .map(|group| {
            (
                group.id().to_string(),
                format!(
                    "{}{}action={}&button={}",
                    config.endpoint,
                    separator,
                    ACTION_BOOTSTRAP,
                    group.id()
                ),
            )
        })
        .collect()
}
