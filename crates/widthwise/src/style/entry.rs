//! Registry entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::condition::WidthCondition;

/// Concrete style data for one identifier, e.g. `{"padding": 8}`.
pub type StylePayload = serde_json::Value;

/// A style payload as stored in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleEntry {
    pub value: StylePayload,
    #[serde(default, skip_serializing_if = "StyleMeta::is_empty")]
    pub meta: StyleMeta,
}

/// Conditions attached to a style entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleMeta {
    /// Raw media condition the entry is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_condition: Option<String>,
    /// Per-theme payload overrides. Stored for consumers; the applier does
    /// not read them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_condition: Option<BTreeMap<String, StylePayload>>,
}

impl StyleMeta {
    /// Check if neither condition is set.
    pub fn is_empty(&self) -> bool {
        self.query_condition.is_none() && self.theme_condition.is_none()
    }
}

impl StyleEntry {
    /// Creates an unconditional entry.
    pub fn new(value: StylePayload) -> Self {
        Self {
            value,
            meta: StyleMeta::default(),
        }
    }

    /// Restricts the entry to a media condition such as `"(min-width: 768px)"`.
    pub fn with_query_condition(mut self, condition: impl Into<String>) -> Self {
        self.meta.query_condition = Some(condition.into());
        self
    }

    /// Adds a payload override for `theme`.
    pub fn with_theme_variant(mut self, theme: impl Into<String>, value: StylePayload) -> Self {
        self.meta
            .theme_condition
            .get_or_insert_with(BTreeMap::new)
            .insert(theme.into(), value);
        self
    }

    /// Parses the entry's query condition.
    ///
    /// Returns `None` when the entry is unconditional. An empty condition
    /// string counts as unconditional.
    pub fn width_condition(&self) -> Option<WidthCondition> {
        self.meta
            .query_condition
            .as_deref()
            .filter(|condition| !condition.is_empty())
            .map(WidthCondition::parse)
    }

    /// Returns the payload override declared for `theme`.
    pub fn theme_variant(&self, theme: &str) -> Option<&StylePayload> {
        self.meta.theme_condition.as_ref()?.get(theme)
    }
}

impl From<StylePayload> for StyleEntry {
    fn from(value: StylePayload) -> Self {
        StyleEntry::new(value)
    }
}
