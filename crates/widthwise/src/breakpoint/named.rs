//! Named numeric breakpoints.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::BreakpointError;
use super::{ordered, search};

/// An ordered set of named breakpoint widths, in pixels.
///
/// Declaration order is the ascending rank of the breakpoints. The resolver
/// relies on it and never sorts, so widths must be added smallest first.
/// [`Breakpoints::validate`] checks this up front.
///
/// # Example
///
/// ```rust
/// use widthwise::Breakpoints;
///
/// let breakpoints = Breakpoints::new()
///     .add("sm", 0)
///     .add("md", 480)
///     .add("lg", 768)
///     .add("xl", 1024);
///
/// assert_eq!(breakpoints.resolve(600), Some("md"));
/// assert_eq!(breakpoints.resolve(2000), Some("xl"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakpoints {
    entries: Vec<(String, u32)>,
}

impl Breakpoints {
    /// Creates an empty breakpoint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a breakpoint, returning the updated set for chaining.
    pub fn add(mut self, name: impl Into<String>, width: u32) -> Self {
        self.entries.push((name.into(), width));
        self
    }

    /// Returns the width declared for `name`.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, width)| *width)
    }

    /// Iterates breakpoints in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, width)| (name.as_str(), *width))
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no breakpoints are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the name of the breakpoint active at `point`.
    ///
    /// The active breakpoint is the greatest one not exceeding `point`; an
    /// exact match wins, and a point past every breakpoint clamps to the last.
    ///
    /// A point below the first breakpoint resolves to the first breakpoint
    /// when at least two are declared (the second one is then the first to
    /// exceed the point). A single-entry set has no such successor and
    /// returns `None`, as does an empty set.
    pub fn resolve(&self, point: u32) -> Option<&str> {
        let widths: Vec<u32> = self.entries.iter().map(|(_, width)| *width).collect();
        search::closest_index(&widths, point, widths.len())
            .map(|index| self.entries[index].0.as_str())
    }

    /// Checks that widths are strictly ascending in declaration order.
    ///
    /// Resolution does not call this; it is for early error detection when
    /// breakpoints come from configuration.
    pub fn validate(&self) -> Result<(), BreakpointError> {
        for pair in self.entries.windows(2) {
            let (previous, previous_width) = &pair[0];
            let (name, width) = &pair[1];
            if width <= previous_width {
                return Err(BreakpointError::OutOfOrder {
                    name: name.clone(),
                    width: *width,
                    previous: previous.clone(),
                    previous_width: *previous_width,
                });
            }
        }
        Ok(())
    }
}

impl<N: Into<String>> FromIterator<(N, u32)> for Breakpoints {
    fn from_iter<I: IntoIterator<Item = (N, u32)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, width)| (name.into(), width))
                .collect(),
        }
    }
}

impl Serialize for Breakpoints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ordered::serialize(&self.entries, serializer)
    }
}

impl<'de> Deserialize<'de> for Breakpoints {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ordered::deserialize(deserializer).map(|entries| Self { entries })
    }
}
