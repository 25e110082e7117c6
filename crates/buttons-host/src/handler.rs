//! Request handling for the bootstrap script and secondary views.

use std::sync::Arc;

use buttons_core::{BootstrapEmitter, ExtensionRegistry, render_view};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::HostConfig;
use crate::error::Result;
use crate::request::{ACTION_VIEW, HostRequest};

/// Static client runtime that interprets the bootstrap payload.
pub const CLIENT_RUNTIME: &str = include_str!("../assets/runtime.js");

/// Payload format version the bundled runtime understands.
pub const CLIENT_RUNTIME_VERSION: u32 = buttons_core::BOOTSTRAP_FORMAT_VERSION;

const JAVASCRIPT: &str = "application/javascript";
const HTML: &str = "text/html";

/// Response handed back to the host transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostResponse {
    pub content_type: &'static str,
    pub body: String,
}

impl HostResponse {
    fn javascript(body: String) -> Self {
        Self {
            content_type: JAVASCRIPT,
            body,
        }
    }

    fn html(body: String) -> Self {
        Self {
            content_type: HTML,
            body,
        }
    }

    /// Whether nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientConfig<'a> {
    endpoint: &'a str,
    view_action: &'a str,
}

/// Answers client requests from a fully populated registry.
#[derive(Debug, Clone)]
pub struct RequestHandler {
    registry: Arc<ExtensionRegistry>,
    config: HostConfig,
}

impl RequestHandler {
    pub fn new(registry: Arc<ExtensionRegistry>, config: HostConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Parse a raw query string and handle it.
    pub fn handle_query(&self, query: &str) -> Result<HostResponse> {
        let request = HostRequest::from_query(query)?;
        self.handle(&request)
    }

    /// Handle a parsed request.
    pub fn handle(&self, request: &HostRequest) -> Result<HostResponse> {
        match request {
            HostRequest::BootstrapScript => Ok(HostResponse::javascript(self.bootstrap_script()?)),
            HostRequest::View { id, index } => Ok(self.view(id, *index)),
        }
    }

    /// Data assignments for the payload followed by the static runtime.
    pub fn bootstrap_script(&self) -> Result<String> {
        let payload = BootstrapEmitter::new(&self.registry).to_json()?;
        let client_config = serde_json::to_string(&ClientConfig {
            endpoint: &self.config.endpoint,
            view_action: ACTION_VIEW,
        })
        .map_err(buttons_core::Error::from)?;

        info!(groups = self.registry.len(), "Serving bootstrap script");

        Ok(format!(
            "window.ToolbarButtons = window.ToolbarButtons || {{}};\n\
             window.ToolbarButtons.config = {};\n\
             window.ToolbarButtons.payload = {};\n\
             {}",
            client_config, payload, CLIENT_RUNTIME
        ))
    }

    /// Secondary view for (`id`, `index`); empty when nothing resolves.
    pub fn view(&self, id: &str, index: Option<usize>) -> HostResponse {
        let body = match index {
            Some(index) => render_view(&self.registry, id, index).unwrap_or_default(),
            None => {
                debug!(id, "View request without a usable index");
                String::new()
            }
        };
        HostResponse::html(body)
    }
}
