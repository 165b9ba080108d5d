//! Host component props touched by the applier.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::style::StylePayload;

/// The props bag of the component being styled.
///
/// Only three keys are owned by this crate: `style`, `data-style` and the
/// `style` key of `dataSet`. Everything else is carried through untouched in
/// [`Props::rest`].
///
/// When deserializing, `style` may be a list, a single payload or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Props {
    #[serde(default, deserialize_with = "one_or_many")]
    pub style: Vec<StylePayload>,
    #[serde(rename = "data-style", default, skip_serializing_if = "Option::is_none")]
    pub data_style: Option<String>,
    #[serde(rename = "dataSet", default, skip_serializing_if = "Map::is_empty")]
    pub data_set: Map<String, Value>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Props {
    /// Creates empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pre-existing style payload.
    pub fn with_style(mut self, style: StylePayload) -> Self {
        self.style.push(style);
        self
    }

    /// Sets `data-style`.
    pub fn with_data_style(mut self, data_style: impl Into<String>) -> Self {
        self.data_style = Some(data_style.into());
        self
    }

    /// Sets `dataSet.style`.
    pub fn with_data_set_style(mut self, style: impl Into<String>) -> Self {
        self.data_set
            .insert("style".to_string(), Value::String(style.into()));
        self
    }

    /// Returns `dataSet.style` when it holds a string.
    pub fn data_set_style(&self) -> Option<&str> {
        self.data_set.get("style").and_then(Value::as_str)
    }
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<StylePayload>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(styles) => styles,
        style => vec![style],
    })
}
