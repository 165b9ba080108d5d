//! Identifier-keyed style registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::entry::StyleEntry;

/// Read access to compiled styles by identifier.
///
/// The applier only ever reads through this trait, so any store that can
/// hand out entries by reference can back it.
pub trait StyleLookup {
    /// Returns the entry registered for `id`.
    fn lookup(&self, id: &str) -> Option<&StyleEntry>;
}

/// A registry of compiled styles keyed by identifier.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use widthwise::{StyleEntry, StyleSheet};
///
/// let sheet = StyleSheet::new()
///     .add("card", json!({"padding": 8}))
///     .add(
///         "card-wide",
///         StyleEntry::new(json!({"padding": 16})).with_query_condition("(min-width: 768px)"),
///     );
///
/// assert!(sheet.has("card"));
/// assert_eq!(sheet.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    entries: HashMap<String, StyleEntry>,
}

impl StyleSheet {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entry, returning the updated registry for chaining.
    ///
    /// Accepts either a [`StyleEntry`] or a bare payload, which is stored
    /// unconditionally. A later registration replaces an earlier one.
    pub fn add<E: Into<StyleEntry>>(mut self, id: impl Into<String>, entry: E) -> Self {
        self.insert(id, entry);
        self
    }

    /// Registers an entry in place.
    pub fn insert<E: Into<StyleEntry>>(&mut self, id: impl Into<String>, entry: E) {
        self.entries.insert(id.into(), entry.into());
    }

    /// Returns the entry registered for `id`.
    pub fn get(&self, id: &str) -> Option<&StyleEntry> {
        self.entries.get(id)
    }

    /// Check if `id` is registered.
    pub fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads a registry from a JSON object of `{ id: { value, meta } }`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl StyleLookup for StyleSheet {
    fn lookup(&self, id: &str) -> Option<&StyleEntry> {
        self.get(id)
    }
}

impl StyleLookup for HashMap<String, StyleEntry> {
    fn lookup(&self, id: &str) -> Option<&StyleEntry> {
        self.get(id)
    }
}
