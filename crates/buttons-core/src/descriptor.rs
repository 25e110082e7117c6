//! Extension descriptor model.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Row a descriptor lands on when none is given.
pub const DEFAULT_PLACEMENT: u32 = 3;

/// Lazily evaluated payload producer.
pub type Callback = Arc<dyn Fn() -> String + Send + Sync>;

/// What a button produces when it is activated.
#[derive(Clone)]
pub enum Action {
    /// Fixed payload inserted as-is.
    Literal(String),
    /// Payload produced on demand. Never evaluated at registration time.
    Callback(Callback),
}

impl Action {
    /// Create a literal action.
    pub fn literal(payload: impl Into<String>) -> Self {
        Self::Literal(payload.into())
    }

    /// Create a callback action.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    /// Produce the payload, invoking the callback if there is one.
    pub fn resolve(&self) -> String {
        match self {
            Action::Literal(payload) => payload.clone(),
            Action::Callback(callback) => callback(),
        }
    }

    /// Whether resolving this action runs a callback.
    pub fn is_callback(&self) -> bool {
        matches!(self, Action::Callback(_))
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Literal(payload) => f.debug_tuple("Literal").field(payload).finish(),
            Action::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::Literal(String::new())
    }
}

/// Plugin information shown by the client runtime.
///
/// Always serialized with exactly the four keys `longname`, `author`,
/// `authorurl` and `version`; unset fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionInfo {
    #[serde(default, rename = "longname")]
    pub long_name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "authorurl")]
    pub author_url: String,
    #[serde(default)]
    pub version: String,
}

impl ExtensionInfo {
    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = long_name.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_author_url(mut self, author_url: impl Into<String>) -> Self {
        self.author_url = author_url.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// One registrable toolbar button.
///
/// Several descriptors may share an `id`; together they form a variant group
/// whose first member is the representative.
#[derive(Debug, Clone)]
pub struct ExtensionDescriptor {
    /// Group identifier.
    pub id: String,
    /// Display label.
    pub title: String,
    /// URL or path of the button image.
    pub icon: String,
    /// Toolbar row the group is placed on.
    pub placement: u32,
    /// Activation opens a secondary view instead of inserting the payload.
    pub rich_content: bool,
    /// Payload producer.
    pub action: Action,
    /// Plugin information.
    pub info: ExtensionInfo,
}

impl ExtensionDescriptor {
    /// Create a descriptor with empty title, icon and info on the default row.
    ///
    /// `rich_content` has no default and must be chosen by the caller.
    pub fn new(id: impl Into<String>, rich_content: bool, action: Action) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            icon: String::new(),
            placement: DEFAULT_PLACEMENT,
            rich_content,
            action,
            info: ExtensionInfo::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_placement(mut self, placement: u32) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_info(mut self, info: ExtensionInfo) -> Self {
        self.info = info;
        self
    }

    /// Check that the id is usable as a client plugin name.
    pub fn validate(&self) -> Result<()> {
        validate_id(&self.id)
    }
}

/// Check that `id` is usable as a button id.
pub(crate) fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::invalid(id, "button id must not be empty"));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(Error::invalid(
            id,
            "button id must contain only alphanumeric characters, hyphens, or underscores",
        ));
    }
    Ok(())
}
