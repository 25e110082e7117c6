//! Bootstrap emission tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use buttons_core::{
    Action, Activation, BootstrapEmitter, Control, ExtensionDescriptor, ExtensionInfo,
    ExtensionRegistry, ViewRef, render_view,
};
use pretty_assertions::assert_eq;

fn counting_action(calls: &Arc<AtomicUsize>, payload: &'static str) -> Action {
    let counter = Arc::clone(calls);
    Action::callback(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        payload.to_string()
    })
}

#[test]
fn test_literal_button_inserts_payload() {
    let mut registry = ExtensionRegistry::new();
    registry
        .register(ExtensionDescriptor::new("clear", false, Action::literal("[clear]")).with_title("Clear"))
        .unwrap();

    let payload = BootstrapEmitter::new(&registry).emit();
    assert_eq!(
        payload.plugins[0].control,
        Control::Button {
            title: "Clear".to_string(),
            icon: String::new(),
            activation: Activation::Insert {
                payload: "[clear]".to_string()
            },
        }
    );
}

#[test]
fn test_rich_button_references_view_without_evaluating() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = ExtensionRegistry::new();
    registry
        .register(
            ExtensionDescriptor::new("gallery", true, counting_action(&calls, "<form/>"))
                .with_title("Gallery"),
        )
        .unwrap();

    let payload = BootstrapEmitter::new(&registry).emit();
    assert_eq!(
        payload.plugins[0].control,
        Control::Button {
            title: "Gallery".to_string(),
            icon: String::new(),
            activation: Activation::ShowView {
                title: "Gallery".to_string(),
                view: ViewRef {
                    id: "gallery".to_string(),
                    index: 0
                },
            },
        }
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(render_view(&registry, "gallery", 0).as_deref(), Some("<form/>"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_insert_callback_resolved_once_per_emit() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = ExtensionRegistry::new();
    registry
        .register(ExtensionDescriptor::new("date", false, counting_action(&calls, "[date]")))
        .unwrap();
    registry
        .register(ExtensionDescriptor::new("date", false, Action::literal("[time]")))
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    let payload = BootstrapEmitter::new(&registry).emit();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    match &payload.plugins[0].control {
        Control::SplitButton { activation, .. } => assert_eq!(
            activation,
            &Activation::Insert {
                payload: "[date]".to_string()
            }
        ),
        other => panic!("expected split button, got {:?}", other),
    }
}

#[test]
fn test_three_variants_make_split_button() {
    let mut registry = ExtensionRegistry::new();
    for (title, code) in [("One", "[one]"), ("Two", "[two]"), ("Three", "[three]")] {
        registry
            .register(
                ExtensionDescriptor::new("shortcode", false, Action::literal(code))
                    .with_title(title)
                    .with_icon(format!("{}.png", code)),
            )
            .unwrap();
    }

    let payload = BootstrapEmitter::new(&registry).emit();
    assert_eq!(payload.plugins.len(), 1);

    match &payload.plugins[0].control {
        Control::SplitButton { title, icon, menu, .. } => {
            assert_eq!(title, "One");
            assert_eq!(icon, "[one].png");
            let titles: Vec<&str> = menu.iter().map(|e| e.title.as_str()).collect();
            assert_eq!(titles, vec!["One", "Two", "Three"]);
            assert_eq!(
                menu[2].activation,
                Activation::Insert {
                    payload: "[three]".to_string()
                }
            );
        }
        other => panic!("expected split button, got {:?}", other),
    }
}

#[test]
fn test_menu_view_entries_use_their_own_index() {
    let mut registry = ExtensionRegistry::new();
    registry
        .register(ExtensionDescriptor::new("forms", false, Action::literal("[a]")).with_title("A"))
        .unwrap();
    registry
        .register(ExtensionDescriptor::new("forms", true, Action::literal("<b/>")).with_title("B"))
        .unwrap();

    let payload = BootstrapEmitter::new(&registry).emit();
    let Control::SplitButton { menu, .. } = &payload.plugins[0].control else {
        panic!("expected split button");
    };
    assert_eq!(
        menu[1].activation,
        Activation::ShowView {
            title: "B".to_string(),
            view: ViewRef {
                id: "forms".to_string(),
                index: 1
            },
        }
    );
}

#[test]
fn test_info_always_has_four_keys() {
    let mut registry = ExtensionRegistry::new();
    registry
        .register(
            ExtensionDescriptor::new("clear", false, Action::literal("[clear]"))
                .with_info(ExtensionInfo::default().with_author("X")),
        )
        .unwrap();
    registry
        .register(ExtensionDescriptor::new("bare", false, Action::literal("[bare]")))
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&BootstrapEmitter::new(&registry).to_json().unwrap()).unwrap();

    assert_eq!(
        json["plugins"][0]["info"],
        serde_json::json!({"longname": "", "author": "X", "authorurl": "", "version": ""})
    );
    assert_eq!(
        json["plugins"][1]["info"],
        serde_json::json!({"longname": "", "author": "", "authorurl": "", "version": ""})
    );
}

#[test]
fn test_group_info_comes_from_representative() {
    let mut registry = ExtensionRegistry::new();
    registry
        .register(
            ExtensionDescriptor::new("shortcode", true, Action::default())
                .with_info(ExtensionInfo::default().with_version("1.0")),
        )
        .unwrap();
    registry
        .register(
            ExtensionDescriptor::new("shortcode", false, Action::default())
                .with_info(ExtensionInfo::default().with_version("9.9")),
        )
        .unwrap();

    let payload = BootstrapEmitter::new(&registry).emit();
    assert_eq!(payload.plugins[0].info.version, "1.0");
}

#[test]
fn test_pretty_json_parses_back() {
    let mut registry = ExtensionRegistry::new();
    registry
        .register(ExtensionDescriptor::new("clear", false, Action::literal("[clear]")))
        .unwrap();

    let pretty = BootstrapEmitter::new(&registry).to_json_pretty().unwrap();
    assert!(pretty.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(value["plugins"][0]["control"]["kind"], "button");
}
