//! Loading of the manifest into a ready-to-serve registry.

use std::path::Path;
use std::sync::Arc;

use buttons_core::{ButtonManifest, CallbackTable, Error as CoreError};
use buttons_host::{HostConfig, RequestHandler};

use crate::error::{CliError, Result};

/// Load the manifest at `path` and build a request handler over it.
///
/// The CLI has no application code to contribute callbacks, so manifest
/// callbacks fall back to their literal `insert` values.
pub fn load_handler(path: &Path) -> Result<RequestHandler> {
    let manifest = ButtonManifest::load(path).map_err(|e| match e {
        CoreError::ManifestNotFound(p) => CliError::user(format!(
            "No button manifest at {}. Pass --manifest <path> or create buttons.toml.",
            p.display()
        )),
        other => other.into(),
    })?;
    let config = HostConfig::load(path)?;
    let registry = manifest.build_registry(&CallbackTable::new())?;

    tracing::debug!(groups = registry.len(), "Registry ready");
    Ok(RequestHandler::new(Arc::new(registry), config))
}
