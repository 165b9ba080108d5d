//! Media-query breakpoints and `min-width` extraction.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::BreakpointError;
use super::{ordered, search};

static MIN_WIDTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(\s*min-width:\s*([0-9]+)px\s*\)").expect("min-width pattern is valid")
});

/// Extracts the pixel value of the first `(min-width: Npx)` clause in a query.
///
/// Whitespace is tolerated inside the parentheses, after the colon and before
/// the closing parenthesis. A query without a matching clause yields `0`,
/// meaning no lower bound. A value too large for `u32` saturates to `u32::MAX`.
///
/// # Example
///
/// ```rust
/// use widthwise::min_width;
///
/// assert_eq!(min_width("@media screen and (min-width: 768px)"), 768);
/// assert_eq!(min_width("(min-width:  320px )"), 320);
/// assert_eq!(min_width("@media screen and (min-width: 0)"), 0);
/// ```
pub fn min_width(query: &str) -> u32 {
    MIN_WIDTH
        .captures(query)
        .map(|captures| captures[1].parse().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// An ordered set of named media queries.
///
/// Each query is reduced to its `min-width` threshold (see [`min_width`]) when
/// resolving. Thresholds should be distinct; queries that share a threshold
/// collapse into one and disable the clamp to the largest breakpoint.
///
/// # Example
///
/// ```rust
/// use widthwise::MediaQueries;
///
/// let queries = MediaQueries::new()
///     .add("base", "@media screen and (min-width: 0)")
///     .add("sm", "@media screen and (min-width: 480px)")
///     .add("md", "@media screen and (min-width: 768px)");
///
/// assert_eq!(queries.resolve(600), Some(480));
/// assert_eq!(queries.resolve(1920), Some(768));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaQueries {
    entries: Vec<(String, String)>,
}

impl MediaQueries {
    /// Creates an empty media-query set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named query, returning the updated set for chaining.
    pub fn add(mut self, name: impl Into<String>, query: impl Into<String>) -> Self {
        self.entries.push((name.into(), query.into()));
        self
    }

    /// Returns the query declared for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, query)| query.as_str())
    }

    /// Iterates `(name, query)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, query)| (name.as_str(), query.as_str()))
    }

    /// Number of declared queries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no queries are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maps each extracted `min-width` to its query, ascending by width.
    ///
    /// When two queries share a threshold the later declaration wins.
    pub fn thresholds(&self) -> BTreeMap<u32, &str> {
        self.entries
            .iter()
            .map(|(_, query)| (min_width(query), query.as_str()))
            .collect()
    }

    /// Returns the `min-width` threshold active at `point`.
    ///
    /// Uses the same search as [`Breakpoints::resolve`](crate::Breakpoints::resolve)
    /// over the extracted thresholds. Returns `None` for an empty set, and
    /// whenever the search finds no slot.
    pub fn resolve(&self, point: u32) -> Option<u32> {
        self.closest(point).map(|(threshold, _)| threshold)
    }

    /// Returns the query whose threshold is active at `point`.
    pub fn active_query(&self, point: u32) -> Option<&str> {
        self.closest(point).map(|(_, query)| query)
    }

    /// Checks that extracted thresholds are strictly ascending in declaration order.
    pub fn validate(&self) -> Result<(), BreakpointError> {
        for pair in self.entries.windows(2) {
            let (previous, previous_query) = &pair[0];
            let (name, query) = &pair[1];
            let previous_width = min_width(previous_query);
            let width = min_width(query);
            if width <= previous_width {
                return Err(BreakpointError::OutOfOrder {
                    name: name.clone(),
                    width,
                    previous: previous.clone(),
                    previous_width,
                });
            }
        }
        Ok(())
    }

    fn closest(&self, point: u32) -> Option<(u32, &str)> {
        if self.entries.is_empty() {
            return None;
        }

        let thresholds = self.thresholds();
        let widths: Vec<u32> = thresholds.keys().copied().collect();
        let index = search::closest_index(&widths, point, self.entries.len())?;
        let threshold = widths[index];
        thresholds.get(&threshold).map(|query| (threshold, *query))
    }
}

impl<N: Into<String>, Q: Into<String>> FromIterator<(N, Q)> for MediaQueries {
    fn from_iter<I: IntoIterator<Item = (N, Q)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, query)| (name.into(), query.into()))
                .collect(),
        }
    }
}

impl Serialize for MediaQueries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ordered::serialize(&self.entries, serializer)
    }
}

impl<'de> Deserialize<'de> for MediaQueries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ordered::deserialize(deserializer).map(|entries| Self { entries })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn min_width_reads_any_spacing(
            width in 0u32..100_000,
            before in " {0,3}",
            after_colon in " {0,3}",
            after_px in " {0,3}",
        ) {
            let query = format!("({}min-width:{}{}px{})", before, after_colon, width, after_px);
            prop_assert_eq!(min_width(&query), width);
        }

        #[test]
        fn resolve_agrees_with_named_breakpoints(
            widths in prop::collection::btree_set(0u32..5000, 1..8),
            point in 0u32..6000,
        ) {
            let queries: MediaQueries = widths
                .iter()
                .map(|w| (format!("bp{}", w), format!("(min-width: {}px)", w)))
                .collect();
            let breakpoints: crate::Breakpoints = widths
                .iter()
                .map(|w| (format!("bp{}", w), *w))
                .collect();

            let expected = breakpoints.resolve(point).and_then(|name| breakpoints.get(name));
            prop_assert_eq!(queries.resolve(point), expected);
        }
    }
}
