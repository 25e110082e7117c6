//! Shortcode list buttons.
//!
//! A shortcode list installs a whole variant group at once: a representative
//! that opens a selection form over every shortcode, followed by one member
//! per shortcode that inserts it directly.

use std::sync::Arc;

use crate::descriptor::{Action, DEFAULT_PLACEMENT, ExtensionDescriptor, ExtensionInfo};
use crate::error::Result;
use crate::registry::ExtensionRegistry;

/// Builder for a shortcode list group.
///
/// # Example
///
/// ```
/// use buttons_core::{ExtensionRegistry, ShortcodeList};
///
/// let mut registry = ExtensionRegistry::new();
/// ShortcodeList::new("shortcode", "Shortcodes List")
///     .add("clear_floatings", "[clear]")
///     .install(&mut registry)
///     .unwrap();
///
/// let group = registry.group("shortcode").unwrap();
/// assert_eq!(group.len(), 2);
/// assert_eq!(group.members()[1].title, "Clear Floatings");
/// ```
#[derive(Debug, Clone)]
pub struct ShortcodeList {
    id: String,
    title: String,
    icon: String,
    placement: u32,
    info: ExtensionInfo,
    shortcodes: Vec<(String, String)>,
}

impl ShortcodeList {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: String::new(),
            placement: DEFAULT_PLACEMENT,
            info: ExtensionInfo::default(),
            shortcodes: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn placement(mut self, placement: u32) -> Self {
        self.placement = placement;
        self
    }

    pub fn info(mut self, info: ExtensionInfo) -> Self {
        self.info = info;
        self
    }

    /// Add a shortcode. Adding a name again replaces its payload in place.
    pub fn add(mut self, name: impl Into<String>, payload: impl Into<String>) -> Self {
        let name = name.into();
        let payload = payload.into();
        match self.shortcodes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = payload,
            None => self.shortcodes.push((name, payload)),
        }
        self
    }

    /// Shortcodes as `(name, payload)` pairs.
    pub fn shortcodes(&self) -> &[(String, String)] {
        &self.shortcodes
    }

    /// Register the representative and one member per shortcode.
    pub fn install(self, registry: &mut ExtensionRegistry) -> Result<()> {
        let listing = Arc::new(self.shortcodes.clone());
        let form = Action::callback(move || render_selection_form(&listing));

        registry.register(
            ExtensionDescriptor::new(&self.id, true, form)
                .with_title(&self.title)
                .with_icon(&self.icon)
                .with_placement(self.placement)
                .with_info(self.info.clone()),
        )?;

        for (name, payload) in &self.shortcodes {
            registry.register(
                ExtensionDescriptor::new(&self.id, false, Action::literal(payload))
                    .with_title(humanize(name)),
            )?;
        }

        tracing::debug!(id = %self.id, shortcodes = self.shortcodes.len(), "Installed shortcode list");
        Ok(())
    }
}

/// `heading_style-1` -> `Heading Style 1`.
pub fn humanize(name: &str) -> String {
    name.replace(['_', '-'], " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_selection_form(shortcodes: &[(String, String)]) -> String {
    let mut html = String::from(
        "<p><strong>Select a shortcode and click the add button</strong></p>\n<select name=\"shortcode\">\n",
    );
    for (name, payload) in shortcodes {
        html.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            escape_html(payload),
            escape_html(name)
        ));
    }
    html.push_str("</select>\n<input type=\"submit\" name=\"submit\" id=\"send_shortcode\" value=\"Submit\" />\n");
    html
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
