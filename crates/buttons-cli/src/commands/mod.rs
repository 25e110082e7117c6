//! Command implementations for buttons-cli

pub mod inspect;
pub mod serve;

pub use inspect::{run_check, run_plugins, run_rows};
pub use serve::{run_bootstrap, run_request, run_view};
