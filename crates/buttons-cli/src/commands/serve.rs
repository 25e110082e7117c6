//! Commands answering client requests: bootstrap, view, request

use std::path::Path;

use buttons_core::BootstrapEmitter;
use buttons_host::HostRequest;

use crate::context::load_handler;
use crate::error::Result;

/// Run the bootstrap command
pub fn run_bootstrap(manifest: &Path, script: bool) -> Result<()> {
    let handler = load_handler(manifest)?;

    if script {
        print!("{}", handler.bootstrap_script()?);
    } else {
        println!("{}", BootstrapEmitter::new(handler.registry()).to_json_pretty()?);
    }
    Ok(())
}

/// Run the view command
///
/// The index is taken as untrusted text, like a request parameter.
pub fn run_view(manifest: &Path, id: &str, index: &str) -> Result<()> {
    let handler = load_handler(manifest)?;
    let response = handler.view(id, index.parse().ok());
    print!("{}", response.body);
    Ok(())
}

/// Run the request command
pub fn run_request(manifest: &Path, query: &str) -> Result<()> {
    let handler = load_handler(manifest)?;
    let request = HostRequest::from_query(query)?;
    let response = handler.handle(&request)?;

    tracing::debug!(
        content_type = response.content_type,
        bytes = response.body.len(),
        "Handled request"
    );
    eprintln!("Content-Type: {}", response.content_type);
    print!("{}", response.body);
    Ok(())
}
