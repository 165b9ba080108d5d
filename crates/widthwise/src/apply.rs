//! Writing resolved styles into component props.

use serde_json::Value;
use tracing::debug;

use crate::breakpoint::MediaQueries;
use crate::platform::Platform;
use crate::props::Props;
use crate::style::StyleLookup;

/// Applies style identifiers to component props for one platform.
///
/// The applier holds no state between calls. Each [`apply`](Self::apply)
/// reads the registry and, on native platforms, the viewport afresh.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use widthwise::{FixedViewport, MediaQueries, Native, Props, StyleApplier, StyleEntry, StyleSheet};
///
/// let queries = MediaQueries::new()
///     .add("sm", "(min-width: 480px)")
///     .add("md", "(min-width: 768px)");
/// let sheet = StyleSheet::new()
///     .add("row", json!({"flexDirection": "row"}))
///     .add(
///         "row-md",
///         StyleEntry::new(json!({"gap": 16})).with_query_condition("(min-width: 768px)"),
///     );
///
/// let applier = StyleApplier::new(&sheet, &queries, Native::new(FixedViewport(900)));
/// let mut props = Props::new().with_style(json!({"flex": 1}));
/// applier.apply(&mut props, &["row", "row-md"]);
///
/// assert_eq!(
///     props.style,
///     vec![json!({"flexDirection": "row"}), json!({"gap": 16}), json!({"flex": 1})]
/// );
/// ```
pub struct StyleApplier<'a, P> {
    styles: &'a dyn StyleLookup,
    media_queries: &'a MediaQueries,
    platform: P,
}

impl<'a, P: Platform> StyleApplier<'a, P> {
    /// Creates an applier over a registry and the configured media queries.
    pub fn new(styles: &'a dyn StyleLookup, media_queries: &'a MediaQueries, platform: P) -> Self {
        Self {
            styles,
            media_queries,
            platform,
        }
    }

    /// Returns the platform strategy.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Resolves `ids` and writes the result into `props` in place.
    ///
    /// - `style` becomes the resolved payloads followed by the styles already
    ///   on `props`
    /// - `data-style` and `dataSet.style` both receive the platform's dataset
    ///   string; other `dataSet` keys are kept
    ///
    /// The returned reference is `props` itself.
    pub fn apply<'p, S: AsRef<str>>(&self, props: &'p mut Props, ids: &[S]) -> &'p mut Props {
        let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();

        let mut style = if ids.is_empty() {
            Vec::new()
        } else {
            self.platform
                .conditional_styles(&ids, self.styles, self.media_queries)
        };
        let data_style = self.platform.data_style(props, &ids);
        debug!(
            ids = ids.len(),
            resolved = style.len(),
            existing = props.style.len(),
            "applied style ids"
        );

        style.append(&mut props.style);
        props.style = style;
        props
            .data_set
            .insert("style".to_string(), Value::String(data_style.clone()));
        props.data_style = Some(data_style);
        props
    }
}
