//! Extension registry and bootstrap emitter for editor toolbar buttons.
//!
//! This crate holds the host-independent core:
//!
//! - [`ExtensionDescriptor`] - one registrable button with its metadata and
//!   the [`Action`] producing inserted content.
//! - [`ExtensionRegistry`] - insertion-ordered variant groups keyed by id.
//! - [`BootstrapEmitter`] - row layout and the data-only client payload.
//! - [`render_view`] - on-demand rendering of a secondary view.
//! - [`ShortcodeList`] and [`ButtonManifest`] - ways of populating a registry.
//!
//! # Example
//!
//! ```
//! use buttons_core::{Action, BootstrapEmitter, ExtensionDescriptor, ExtensionRegistry};
//!
//! let mut registry = ExtensionRegistry::new();
//! registry
//!     .register(ExtensionDescriptor::new("clear", false, Action::literal("[clear]")).with_title("Clear"))
//!     .unwrap();
//!
//! let payload = BootstrapEmitter::new(&registry).emit();
//! assert_eq!(payload.plugins.len(), 1);
//! ```

pub mod bootstrap;
pub mod callbacks;
pub mod descriptor;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod shortcodes;
pub mod view;

pub use bootstrap::{
    Activation, BOOTSTRAP_FORMAT_VERSION, BootstrapEmitter, BootstrapPayload, Control, MenuEntry,
    PluginBootstrap, RowLayout, ViewRef,
};
pub use callbacks::CallbackTable;
pub use descriptor::{Action, Callback, DEFAULT_PLACEMENT, ExtensionDescriptor, ExtensionInfo};
pub use error::{Error, Result};
pub use manifest::{ButtonEntry, ButtonManifest, ManifestDefaults, ShortcodeEntry, ShortcodeListEntry};
pub use registry::{ExtensionGroup, ExtensionRegistry};
pub use shortcodes::ShortcodeList;
pub use view::render_view;
