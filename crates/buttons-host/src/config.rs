//! Host configuration read from the `[host]` table of the button manifest.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Host-side settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// URL the client sends bootstrap and view requests to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Toolbar rows the host renders.
    #[serde(default = "default_rows")]
    pub rows: Vec<u32>,
}

fn default_endpoint() -> String {
    "/buttons".to_string()
}

fn default_rows() -> Vec<u32> {
    vec![1, 2, 3, 4]
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            rows: default_rows(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct HostSection {
    #[serde(default)]
    host: HostConfig,
}

impl HostConfig {
    /// Read the `[host]` table from a TOML document; other tables are ignored.
    pub fn from_toml(content: &str) -> Result<Self> {
        let section: HostSection = toml::from_str(content)?;
        Ok(section.host)
    }

    /// Read the `[host]` table from a file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
