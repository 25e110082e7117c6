//! Declarative button manifests.
//!
//! A manifest is a TOML file that registers buttons without writing Rust:
//!
//! ```toml
//! [defaults]
//! row = 3
//!
//! [[button]]
//! id = "clear"
//! title = "Clear"
//! rich_content = false
//! insert = "[clear]"
//!
//! [[shortcode_list]]
//! id = "shortcode"
//! title = "Shortcodes List"
//! entries = [{ name = "Clear Floatings", insert = "[clear]" }]
//! ```
//!
//! Tables not listed here (such as `[host]`) are ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::callbacks::CallbackTable;
use crate::descriptor::{Action, DEFAULT_PLACEMENT, ExtensionDescriptor, ExtensionInfo, validate_id};
use crate::error::{Error, Result};
use crate::registry::ExtensionRegistry;
use crate::shortcodes::ShortcodeList;

/// Manifest-wide defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestDefaults {
    /// Row used by entries that do not name one.
    #[serde(default = "default_row")]
    pub row: u32,
}

fn default_row() -> u32 {
    DEFAULT_PLACEMENT
}

impl Default for ManifestDefaults {
    fn default() -> Self {
        Self { row: default_row() }
    }
}

/// A `[[button]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub row: Option<u32>,
    /// Required: whether activation opens a secondary view.
    pub rich_content: bool,
    /// Literal payload; also the fallback when `callback` is not available.
    #[serde(default)]
    pub insert: String,
    /// Name of a callback in the [`CallbackTable`].
    #[serde(default)]
    pub callback: Option<String>,
    #[serde(default)]
    pub info: ExtensionInfo,
}

/// One shortcode of a `[[shortcode_list]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortcodeEntry {
    pub name: String,
    pub insert: String,
}

/// A `[[shortcode_list]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortcodeListEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub row: Option<u32>,
    #[serde(default)]
    pub info: ExtensionInfo,
    #[serde(default)]
    pub entries: Vec<ShortcodeEntry>,
}

/// Parsed button manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonManifest {
    #[serde(default)]
    pub defaults: ManifestDefaults,
    #[serde(default, rename = "button")]
    pub buttons: Vec<ButtonEntry>,
    #[serde(default, rename = "shortcode_list")]
    pub shortcode_lists: Vec<ShortcodeListEntry>,
}

impl ButtonManifest {
    /// Parse a manifest from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::from_toml(&content)?;
        debug!(
            path = %path.display(),
            buttons = manifest.buttons.len(),
            shortcode_lists = manifest.shortcode_lists.len(),
            "Loaded button manifest"
        );
        Ok(manifest)
    }

    /// Register every entry: buttons in file order, then shortcode lists.
    ///
    /// All ids are checked first, so an invalid entry leaves `registry`
    /// untouched.
    pub fn install(&self, registry: &mut ExtensionRegistry, callbacks: &CallbackTable) -> Result<()> {
        self.validate()?;

        for entry in &self.buttons {
            registry.register(self.descriptor_for(entry, callbacks))?;
        }

        for list in &self.shortcode_lists {
            let mut builder = ShortcodeList::new(&list.id, &list.title)
                .icon(&list.icon)
                .placement(list.row.unwrap_or(self.defaults.row))
                .info(list.info.clone());
            for shortcode in &list.entries {
                builder = builder.add(&shortcode.name, &shortcode.insert);
            }
            builder.install(registry)?;
        }

        Ok(())
    }

    /// Check every button and shortcode list id.
    pub fn validate(&self) -> Result<()> {
        self.buttons
            .iter()
            .map(|entry| entry.id.as_str())
            .chain(self.shortcode_lists.iter().map(|list| list.id.as_str()))
            .try_for_each(validate_id)
    }

    /// Build a registry holding only this manifest's buttons.
    pub fn build_registry(&self, callbacks: &CallbackTable) -> Result<ExtensionRegistry> {
        let mut registry = ExtensionRegistry::new();
        self.install(&mut registry, callbacks)?;
        Ok(registry)
    }

    fn descriptor_for(&self, entry: &ButtonEntry, callbacks: &CallbackTable) -> ExtensionDescriptor {
        let action = match entry.callback.as_deref() {
            Some(name) => match callbacks.get(name) {
                Some(callback) => Action::Callback(callback),
                None => {
                    warn!(
                        id = %entry.id,
                        callback = name,
                        "Callback not registered, falling back to literal insert"
                    );
                    Action::literal(&entry.insert)
                }
            },
            None => Action::literal(&entry.insert),
        };

        ExtensionDescriptor::new(&entry.id, entry.rich_content, action)
            .with_title(&entry.title)
            .with_icon(&entry.icon)
            .with_placement(entry.row.unwrap_or(self.defaults.row))
            .with_info(entry.info.clone())
    }
}
