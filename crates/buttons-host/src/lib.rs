//! Host integration layer for editor toolbar buttons.
//!
//! Sits between a host application and [`buttons_core`]. It answers the two
//! client requests (bootstrap script and secondary view), decides which ids
//! go on which toolbar row, and lists the per-plugin script URLs. It does not
//! own a transport: requests arrive as query strings and leave as
//! [`HostResponse`] values.

pub mod config;
pub mod error;
pub mod handler;
pub mod layout;
pub mod logging;
pub mod request;

pub use config::HostConfig;
pub use error::{Error, Result};
pub use handler::{CLIENT_RUNTIME, CLIENT_RUNTIME_VERSION, HostResponse, RequestHandler};
pub use layout::{Capabilities, host_rows, merge_row, plugin_script_urls, should_register_plugins};
pub use request::{ACTION_BOOTSTRAP, ACTION_VIEW, HostRequest};
