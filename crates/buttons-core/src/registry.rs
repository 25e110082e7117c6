//! Registry of toolbar buttons grouped by id.

use std::collections::BTreeSet;

use tracing::debug;

use crate::descriptor::ExtensionDescriptor;
use crate::error::{Error, Result};

/// All descriptors registered under one id, in registration order.
///
/// A group is never empty; its first member is the representative and
/// supplies the group's title, icon, placement and info.
#[derive(Debug, Clone)]
pub struct ExtensionGroup {
    id: String,
    members: Vec<ExtensionDescriptor>,
}

impl ExtensionGroup {
    fn new(first: ExtensionDescriptor) -> Self {
        Self {
            id: first.id.clone(),
            members: vec![first],
        }
    }

    /// Group identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The first-registered member.
    pub fn representative(&self) -> &ExtensionDescriptor {
        &self.members[0]
    }

    /// Members in registration order.
    pub fn members(&self) -> &[ExtensionDescriptor] {
        &self.members
    }

    /// Row the whole group is placed on.
    pub fn placement(&self) -> u32 {
        self.representative().placement
    }

    /// Whether the group renders as a split control.
    pub fn is_composite(&self) -> bool {
        self.members.len() > 1
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Registry of toolbar buttons.
///
/// Filled once during initialisation and read-only afterwards. Groups keep
/// the order in which their ids were first registered.
///
/// # Example
///
/// ```
/// use buttons_core::{Action, ExtensionDescriptor, ExtensionRegistry};
///
/// let mut registry = ExtensionRegistry::new();
/// registry.register(ExtensionDescriptor::new("clear", false, Action::literal("[clear]"))).unwrap();
/// assert!(registry.has("clear"));
/// assert!(registry.get("clear", 1).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    groups: Vec<ExtensionGroup>,
}

impl ExtensionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Append a descriptor to the group for its id, creating the group if needed.
    ///
    /// Registering the same id more than once is how variant groups are built.
    pub fn register(&mut self, descriptor: ExtensionDescriptor) -> Result<()> {
        descriptor.validate()?;

        match self.groups.iter_mut().find(|g| g.id == descriptor.id) {
            Some(group) => {
                debug!(
                    id = %descriptor.id,
                    index = group.members.len(),
                    "Adding button variant"
                );
                group.members.push(descriptor);
            }
            None => {
                debug!(id = %descriptor.id, row = descriptor.placement, "Registering button");
                self.groups.push(ExtensionGroup::new(descriptor));
            }
        }
        Ok(())
    }

    /// Check if any descriptor is registered under `id`.
    pub fn has(&self, id: &str) -> bool {
        self.group(id).is_some()
    }

    /// Look up a group by id.
    pub fn group(&self, id: &str) -> Option<&ExtensionGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Descriptor at `index` within group `id`.
    ///
    /// Safe for untrusted input: unknown ids and out-of-range indices give `None`.
    pub fn get(&self, id: &str, index: usize) -> Option<&ExtensionDescriptor> {
        self.group(id).and_then(|g| g.members.get(index))
    }

    /// Like [`get`](Self::get), but reports a miss as [`Error::NotFound`].
    pub fn lookup(&self, id: &str, index: usize) -> Result<&ExtensionDescriptor> {
        self.get(id, index).ok_or_else(|| Error::NotFound {
            id: id.to_string(),
            index,
        })
    }

    /// Ids of the groups whose representative sits on `row`, in registration order.
    pub fn groups_on_row(&self, row: u32) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|g| g.placement() == row)
            .map(|g| g.id.as_str())
            .collect()
    }

    /// Distinct rows used by any group (sorted).
    pub fn rows(&self) -> Vec<u32> {
        self.groups
            .iter()
            .map(ExtensionGroup::placement)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All groups in registration order.
    pub fn groups(&self) -> impl Iterator<Item = &ExtensionGroup> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Action;

    fn button(id: &str, title: &str, row: u32) -> ExtensionDescriptor {
        ExtensionDescriptor::new(id, false, Action::literal(format!("[{}]", id)))
            .with_title(title)
            .with_placement(row)
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = ExtensionRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.rows().is_empty());
    }

    #[test]
    fn test_register_same_id_builds_group() {
        let mut registry = ExtensionRegistry::new();
        registry.register(button("shortcode", "First", 3)).unwrap();
        registry.register(button("shortcode", "Second", 1)).unwrap();

        assert_eq!(registry.len(), 1);
        let group = registry.group("shortcode").unwrap();
        assert_eq!(group.len(), 2);
        assert!(group.is_composite());
        assert_eq!(group.representative().title, "First");
        assert_eq!(group.placement(), 3);
    }

    #[test]
    fn test_register_rejects_empty_id() {
        let mut registry = ExtensionRegistry::new();
        let err = registry.register(button("", "Nameless", 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidDescriptor { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lookup_reports_not_found() {
        let mut registry = ExtensionRegistry::new();
        registry.register(button("clear", "Clear", 1)).unwrap();

        assert!(registry.lookup("clear", 0).is_ok());
        match registry.lookup("clear", 4) {
            Err(Error::NotFound { id, index }) => {
                assert_eq!(id, "clear");
                assert_eq!(index, 4);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_rows_are_distinct_and_sorted() {
        let mut registry = ExtensionRegistry::new();
        registry.register(button("a", "A", 4)).unwrap();
        registry.register(button("b", "B", 1)).unwrap();
        registry.register(button("c", "C", 4)).unwrap();

        assert_eq!(registry.rows(), vec![1, 4]);
    }
}
