//! Parsing of client requests.

use url::form_urlencoded;

use crate::error::{Error, Result};

/// Action name of the bootstrap script request.
pub const ACTION_BOOTSTRAP: &str = "button_bootstrap";
/// Action name of the secondary view request.
pub const ACTION_VIEW: &str = "button_view";

/// A request from the client runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    /// Fetch the bootstrap script.
    BootstrapScript,
    /// Fetch the secondary view of one descriptor.
    ///
    /// `index` is `None` when the client sent no usable index; such a request
    /// renders nothing.
    View { id: String, index: Option<usize> },
}

impl HostRequest {
    /// Parse a query string such as `action=button_view&plugin=shortcode&index=0`.
    ///
    /// A leading `?` is ignored. Keys and values are percent-decoded; the
    /// first occurrence of a repeated key wins.
    pub fn from_query(query: &str) -> Result<Self> {
        let pairs: Vec<(String, String)> =
            form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
                .into_owned()
                .collect();
        let param = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        match param("action") {
            Some(ACTION_BOOTSTRAP) => Ok(HostRequest::BootstrapScript),
            Some(ACTION_VIEW) => Ok(HostRequest::View {
                id: param("plugin").unwrap_or_default().to_string(),
                index: param("index").and_then(|v| v.parse().ok()),
            }),
            Some(other) => Err(Error::UnknownAction(other.to_string())),
            None => Err(Error::MissingAction),
        }
    }

    /// Render this request back into a query string.
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        match self {
            HostRequest::BootstrapScript => {
                query.append_pair("action", ACTION_BOOTSTRAP);
            }
            HostRequest::View { id, index } => {
                query.append_pair("action", ACTION_VIEW);
                query.append_pair("plugin", id);
                if let Some(index) = index {
                    query.append_pair("index", &index.to_string());
                }
            }
        }
        query.finish()
    }
}
