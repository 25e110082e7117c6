//! Bootstrap payload emission.
//!
//! The emitter turns a registry into plain data: which ids sit on which
//! toolbar row, and for each group the control to build plus what happens
//! when it is activated. A static client runtime interprets the payload;
//! nothing here generates client code.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::descriptor::{ExtensionDescriptor, ExtensionInfo};
use crate::error::Result;
use crate::registry::{ExtensionGroup, ExtensionRegistry};

/// Version of the payload shape understood by the client runtime.
pub const BOOTSTRAP_FORMAT_VERSION: u32 = 1;

/// Row key to group ids, in registration order within each row.
pub type RowLayout = BTreeMap<u32, Vec<String>>;

/// Address of a secondary view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRef {
    pub id: String,
    pub index: usize,
}

/// What the client does when a control or menu entry is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Activation {
    /// Insert the payload into the editor.
    Insert { payload: String },
    /// Open the secondary view at `view`, titled `title`.
    ShowView { title: String, view: ViewRef },
}

/// One entry of a split control's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub title: String,
    pub activation: Activation,
}

/// Control the client builds for a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    /// Plain button for a single-member group.
    Button {
        title: String,
        icon: String,
        activation: Activation,
    },
    /// Split button for a variant group; `menu` lists every member.
    SplitButton {
        title: String,
        icon: String,
        activation: Activation,
        menu: Vec<MenuEntry>,
    },
}

/// Client description of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginBootstrap {
    pub id: String,
    pub info: ExtensionInfo,
    pub control: Control,
}

/// Everything the client runtime needs to construct the controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapPayload {
    pub version: u32,
    pub plugins: Vec<PluginBootstrap>,
}

/// Serializes a registry for the client runtime.
pub struct BootstrapEmitter<'a> {
    registry: &'a ExtensionRegistry,
}

impl<'a> BootstrapEmitter<'a> {
    pub fn new(registry: &'a ExtensionRegistry) -> Self {
        Self { registry }
    }

    /// Row placement of every group.
    pub fn row_layout(&self) -> RowLayout {
        let mut layout = RowLayout::new();
        for group in self.registry.groups() {
            layout
                .entry(group.placement())
                .or_default()
                .push(group.id().to_string());
        }
        layout
    }

    /// Build the payload.
    ///
    /// Insert-type callbacks run here, once each. View-type callbacks are left
    /// for [`render_view`](crate::render_view).
    pub fn emit(&self) -> BootstrapPayload {
        let plugins: Vec<PluginBootstrap> = self.registry.groups().map(plugin_for).collect();
        debug!(plugins = plugins.len(), "Emitted bootstrap payload");

        BootstrapPayload {
            version: BOOTSTRAP_FORMAT_VERSION,
            plugins,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.emit())?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.emit())?)
    }
}

fn plugin_for(group: &ExtensionGroup) -> PluginBootstrap {
    let representative = group.representative();

    let control = if group.is_composite() {
        let menu: Vec<MenuEntry> = group
            .members()
            .iter()
            .enumerate()
            .map(|(index, member)| MenuEntry {
                title: member.title.clone(),
                activation: activation_for(member, index),
            })
            .collect();
        // The anchor does what the representative's menu entry does.
        let activation = menu[0].activation.clone();

        Control::SplitButton {
            title: representative.title.clone(),
            icon: representative.icon.clone(),
            activation,
            menu,
        }
    } else {
        Control::Button {
            title: representative.title.clone(),
            icon: representative.icon.clone(),
            activation: activation_for(representative, 0),
        }
    };

    PluginBootstrap {
        id: group.id().to_string(),
        info: representative.info.clone(),
        control,
    }
}

fn activation_for(descriptor: &ExtensionDescriptor, index: usize) -> Activation {
    if descriptor.rich_content {
        Activation::ShowView {
            title: descriptor.title.clone(),
            view: ViewRef {
                id: descriptor.id.clone(),
                index,
            },
        }
    } else {
        Activation::Insert {
            payload: descriptor.action.resolve(),
        }
    }
}
