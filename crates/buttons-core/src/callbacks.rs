//! Named callbacks referenced from manifests.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::descriptor::Callback;

/// Callbacks the embedding application makes available by name.
#[derive(Clone, Default)]
pub struct CallbackTable {
    entries: HashMap<String, Callback>,
}

impl CallbackTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a callback, replacing any previous one with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Arc::new(f));
    }

    /// Look up a callback by name.
    pub fn get(&self, name: &str) -> Option<Callback> {
        self.entries.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names (sorted).
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for CallbackTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackTable")
            .field("names", &self.names())
            .finish()
    }
}
