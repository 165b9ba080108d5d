//! Web platforms: conditions are left to CSS media queries.

use serde_json::Value;

use super::Platform;
use crate::breakpoint::MediaQueries;
use crate::props::Props;
use crate::style::{StyleLookup, StylePayload};

/// Forwards identifiers to the rendered element instead of resolving them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Web;

impl Platform for Web {
    fn conditional_styles(
        &self,
        _ids: &[&str],
        _styles: &dyn StyleLookup,
        _media_queries: &MediaQueries,
    ) -> Vec<StylePayload> {
        Vec::new()
    }

    /// Joins any prior `data-style`, any prior `dataSet.style` and the
    /// identifiers, separated by single spaces. Empty prior values are
    /// skipped; the identifier list is always appended.
    ///
    /// A scalar `dataSet.style` is written as text; `0`, `false`, `null`,
    /// arrays and objects are skipped.
    fn data_style(&self, props: &Props, ids: &[&str]) -> String {
        let mut parts: Vec<String> = props
            .data_style
            .iter()
            .cloned()
            .chain(props.data_set.get("style").and_then(scalar_text))
            .filter(|part| !part.is_empty())
            .collect();
        parts.push(ids.join(" "));
        parts.join(" ")
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleSheet;
    use serde_json::json;

    #[test]
    fn no_styles_are_resolved() {
        let sheet = StyleSheet::new().add("base", json!({"padding": 4}));
        assert!(Web
            .conditional_styles(&["base"], &sheet, &MediaQueries::new())
            .is_empty());
    }

    #[test]
    fn data_style_from_ids_only() {
        assert_eq!(Web.data_style(&Props::new(), &["a", "b"]), "a b");
    }

    #[test]
    fn data_style_appends_to_prior_attribute() {
        let props = Props::new().with_data_style("x");
        assert_eq!(Web.data_style(&props, &["a"]), "x a");
    }

    #[test]
    fn data_style_appends_to_prior_data_set() {
        let props = Props::new().with_data_set_style("y");
        assert_eq!(Web.data_style(&props, &["a"]), "y a");
    }

    #[test]
    fn data_style_attribute_precedes_data_set() {
        let props = Props::new().with_data_style("x").with_data_set_style("y");
        assert_eq!(Web.data_style(&props, &["a", "b"]), "x y a b");
    }

    #[test]
    fn empty_prior_values_are_skipped() {
        let props = Props::new().with_data_style("").with_data_set_style("");
        assert_eq!(Web.data_style(&props, &["a"]), "a");
    }

    #[test]
    fn scalar_data_set_style_is_stringified() {
        let mut props = Props::new();
        props.data_set.insert("style".to_string(), json!(3));
        assert_eq!(Web.data_style(&props, &["a"]), "3 a");

        props.data_set.insert("style".to_string(), json!(true));
        assert_eq!(Web.data_style(&props, &["a"]), "true a");
    }

    #[test]
    fn falsy_and_structured_data_set_style_is_skipped() {
        for value in [json!(0), json!(false), json!(null), json!({"k": 1}), json!([1])] {
            let mut props = Props::new().with_data_style("x");
            props.data_set.insert("style".to_string(), value);
            assert_eq!(Web.data_style(&props, &["a"]), "x a");
        }
    }

    #[test]
    fn empty_ids_still_append_separator() {
        let props = Props::new().with_data_style("x");
        assert_eq!(Web.data_style(&props, &[]), "x ");
    }
}
