//! End-to-end tests: manifest -> registry -> host handler.
//!
//! Each test starts from the shortcodes fixture manifest, the way a host would
//! during initialisation, then drives the request layer as the client would.

use std::path::Path;
use std::sync::Arc;

use buttons_core::{ButtonManifest, CallbackTable, ExtensionRegistry};
use buttons_host::{
    Capabilities, HostConfig, HostRequest, RequestHandler, merge_row, plugin_script_urls,
    should_register_plugins,
};
use pretty_assertions::assert_eq;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../test-fixtures/manifests/shortcodes.toml"
);

fn callbacks() -> CallbackTable {
    let mut callbacks = CallbackTable::new();
    callbacks.register("current_year", || "2013".to_string());
    callbacks
}

fn boot() -> RequestHandler {
    let path = Path::new(FIXTURE);
    let manifest = ButtonManifest::load(path).unwrap();
    let config = HostConfig::load(path).unwrap();
    let registry = manifest.build_registry(&callbacks()).unwrap();
    RequestHandler::new(Arc::new(registry), config)
}

fn payload_of(script: &str) -> serde_json::Value {
    let line = script
        .lines()
        .find(|l| l.starts_with("window.ToolbarButtons.payload = "))
        .expect("payload assignment");
    let json = line
        .trim_start_matches("window.ToolbarButtons.payload = ")
        .trim_end_matches(';');
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_editor_page_render() {
    let handler = boot();
    let registry = handler.registry();

    assert!(should_register_plugins(&Capabilities::editor(), registry));

    let first_row = merge_row(
        registry,
        vec!["bold".to_string(), "italic".to_string()],
        1,
    );
    assert_eq!(first_row, vec!["clear", "bold", "italic"]);

    let third_row = merge_row(registry, vec!["outdent".to_string()], 3);
    assert_eq!(third_row, vec!["shortcode", "year", "outdent"]);

    let urls = plugin_script_urls(registry, handler.config());
    let ids: Vec<&str> = urls.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["clear", "year", "shortcode"]);
    assert_eq!(
        urls[0].1,
        "/wp-admin/admin-ajax.php?action=button_bootstrap&button=clear"
    );
}

#[test]
fn test_client_bootstrap_then_view() {
    let handler = boot();

    let script = handler
        .handle_query(&HostRequest::BootstrapScript.to_query())
        .unwrap();
    assert_eq!(script.content_type, "application/javascript");

    let payload = payload_of(&script.body);
    let plugins = payload["plugins"].as_array().unwrap();
    assert_eq!(plugins.len(), 3);

    // Callback supplied by the host application
    assert_eq!(
        plugins[1]["control"]["activation"],
        serde_json::json!({"type": "insert", "payload": "2013"})
    );

    let shortcode = &plugins[2];
    assert_eq!(shortcode["info"]["longname"], "This are my list of shortcodes");
    assert_eq!(shortcode["info"]["authorurl"], "");
    let menu = shortcode["control"]["menu"].as_array().unwrap();
    assert_eq!(menu.len(), 8);
    assert_eq!(menu[0]["title"], "Shortcodes List");
    assert_eq!(menu[1]["title"], "Clear Floatings");
    assert_eq!(menu[7]["title"], "Checklist Style 3");

    // The client follows the anchor's view reference
    let view = &shortcode["control"]["activation"]["view"];
    let request = HostRequest::View {
        id: view["id"].as_str().unwrap().to_string(),
        index: view["index"].as_u64().map(|i| i as usize),
    };
    let response = handler.handle(&request).unwrap();
    assert_eq!(response.content_type, "text/html");
    assert_eq!(response.body.matches("<option ").count(), 7);
}

#[test]
fn test_tampered_view_requests_render_nothing() {
    let handler = boot();
    for query in [
        "action=button_view&plugin=shortcode&index=8",
        "action=button_view&plugin=shortcode&index=18446744073709551616",
        "action=button_view&plugin=../etc&index=0",
        "action=button_view&plugin=&index=",
    ] {
        let response = handler.handle_query(query).unwrap();
        assert!(response.is_empty(), "{} should render nothing", query);
    }
}

#[test]
fn test_empty_registry_registers_no_plugins() {
    let registry = ExtensionRegistry::new();
    assert!(!should_register_plugins(&Capabilities::editor(), &registry));
    assert!(plugin_script_urls(&registry, &HostConfig::default()).is_empty());
}
