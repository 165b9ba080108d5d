//! Native platforms: conditions are evaluated in-process.

use tracing::{debug, trace};

use super::Platform;
use crate::breakpoint::MediaQueries;
use crate::props::Props;
use crate::style::{StyleLookup, StylePayload};
use crate::viewport::Viewport;

/// Resolves width conditions against a viewport source.
#[derive(Debug, Clone)]
pub struct Native<V> {
    viewport: V,
}

impl<V: Viewport> Native<V> {
    /// Creates a native platform reading widths from `viewport`.
    pub fn new(viewport: V) -> Self {
        Self { viewport }
    }

    /// Returns the viewport source.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }
}

impl<V: Viewport> Platform for Native<V> {
    /// Keeps every registered entry that is unconditional or whose width
    /// condition holds at the active threshold. Unknown identifiers are
    /// dropped.
    fn conditional_styles(
        &self,
        ids: &[&str],
        styles: &dyn StyleLookup,
        media_queries: &MediaQueries,
    ) -> Vec<StylePayload> {
        let width = self.viewport.width();
        let threshold = media_queries.resolve(width);
        debug!(width, ?threshold, "resolved active breakpoint");

        ids.iter()
            .filter_map(|id| {
                let Some(entry) = styles.lookup(id) else {
                    trace!(%id, "style id not registered");
                    return None;
                };
                match entry.width_condition() {
                    Some(condition) => {
                        let active = condition.is_active(threshold);
                        debug!(%id, ?condition, active, "evaluated width condition");
                        active.then(|| entry.value.clone())
                    }
                    None => Some(entry.value.clone()),
                }
            })
            .collect()
    }

    /// Native hosts have no dataset attribute; the value is always empty.
    fn data_style(&self, _props: &Props, _ids: &[&str]) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleEntry, StyleSheet};
    use crate::viewport::FixedViewport;
    use serde_json::json;
    use std::cell::Cell;

    fn queries() -> MediaQueries {
        MediaQueries::new()
            .add("base", "(min-width: 0)")
            .add("sm", "(min-width: 480px)")
            .add("md", "(min-width: 768px)")
            .add("lg", "(min-width: 1024px)")
    }

    fn sheet() -> StyleSheet {
        StyleSheet::new()
            .add("base", json!({"padding": 4}))
            .add(
                "md-up",
                StyleEntry::new(json!({"padding": 12})).with_query_condition("(min-width: 768px)"),
            )
            .add(
                "sm-only",
                StyleEntry::new(json!({"padding": 8}))
                    .with_query_condition("(min-width: 480px) and (max-width: 767px)"),
            )
    }

    #[test]
    fn narrow_viewport_keeps_unconditional_only() {
        let native = Native::new(FixedViewport(320));
        let styles = native.conditional_styles(&["base", "md-up", "sm-only"], &sheet(), &queries());
        assert_eq!(styles, vec![json!({"padding": 4})]);
    }

    #[test]
    fn small_viewport_applies_range() {
        let native = Native::new(FixedViewport(600));
        let styles = native.conditional_styles(&["base", "md-up", "sm-only"], &sheet(), &queries());
        assert_eq!(styles, vec![json!({"padding": 4}), json!({"padding": 8})]);
    }

    #[test]
    fn wide_viewport_applies_min_width() {
        let native = Native::new(FixedViewport(1440));
        let styles = native.conditional_styles(&["sm-only", "md-up", "base"], &sheet(), &queries());
        assert_eq!(styles, vec![json!({"padding": 12}), json!({"padding": 4})]);
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let native = Native::new(FixedViewport(1440));
        let styles = native.conditional_styles(&["ghost", "base"], &sheet(), &queries());
        assert_eq!(styles, vec![json!({"padding": 4})]);
    }

    #[test]
    fn conditions_never_apply_without_media_queries() {
        let native = Native::new(FixedViewport(1440));
        let styles =
            native.conditional_styles(&["base", "md-up"], &sheet(), &MediaQueries::new());
        assert_eq!(styles, vec![json!({"padding": 4})]);
    }

    #[test]
    fn viewport_is_read_once_per_call() {
        let reads = Cell::new(0);
        let native = Native::new(|| {
            reads.set(reads.get() + 1);
            800
        });
        let _ = native.conditional_styles(&["base", "md-up", "sm-only"], &sheet(), &queries());
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn data_style_is_empty() {
        let props = Props::new().with_data_style("previous");
        assert_eq!(Native::new(FixedViewport(0)).data_style(&props, &["a"]), "");
    }
}
