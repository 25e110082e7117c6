//! On-demand rendering of secondary views.

use tracing::debug;

use crate::registry::ExtensionRegistry;

/// Render the view for the descriptor at (`id`, `index`).
///
/// The descriptor's action is resolved here and nowhere earlier. A miss
/// renders nothing; callers answer with an empty body.
pub fn render_view(registry: &ExtensionRegistry, id: &str, index: usize) -> Option<String> {
    match registry.lookup(id, index) {
        Ok(descriptor) => {
            debug!(id, index, "Rendering secondary view");
            Some(descriptor.action.resolve())
        }
        Err(e) => {
            debug!("Nothing to render: {}", e);
            None
        }
    }
}
