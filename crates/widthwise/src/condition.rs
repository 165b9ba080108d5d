//! Width conditions attached to responsive style rules.

use once_cell::sync::Lazy;
use regex::Regex;

static WIDTH_BOUND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\((?:min-width|max-width)?\s*:\s*([0-9]+)\s*(?:px)?\s*\)")
        .expect("width bound pattern is valid")
});

/// The viewport range a style rule is declared for.
///
/// Conditions are evaluated against the active `min-width` threshold from
/// [`MediaQueries::resolve`](crate::MediaQueries::resolve), not against the raw
/// viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthCondition {
    /// No bounds were declared; the rule never applies.
    Never,
    /// Applies once the active threshold reaches the bound.
    AtLeast(u32),
    /// Applies while the active threshold lies within both bounds, inclusive.
    Within { lower: u32, upper: u32 },
}

impl WidthCondition {
    /// Parses the width bounds out of a rule's query condition.
    ///
    /// Every parenthesized `min-width`, `max-width` or bare `: N` clause
    /// contributes one bound, in order of appearance. The `px` unit is
    /// optional. Bounds too large for `u32` saturate to `u32::MAX`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use widthwise::WidthCondition;
    ///
    /// assert_eq!(
    ///     WidthCondition::parse("@media (min-width: 768px)"),
    ///     WidthCondition::AtLeast(768)
    /// );
    /// assert_eq!(
    ///     WidthCondition::parse("@media (min-width: 480px) and (max-width: 1023px)"),
    ///     WidthCondition::Within { lower: 480, upper: 1023 }
    /// );
    /// ```
    pub fn parse(query: &str) -> Self {
        let bounds: Vec<u32> = WIDTH_BOUND
            .captures_iter(query)
            .map(|captures| captures[1].parse().unwrap_or(u32::MAX))
            .collect();
        Self::from_bounds(&bounds)
    }

    /// Builds a condition from already extracted bounds.
    ///
    /// Bounds past the second are ignored.
    pub fn from_bounds(bounds: &[u32]) -> Self {
        match bounds {
            [] => WidthCondition::Never,
            [bound] => WidthCondition::AtLeast(*bound),
            [lower, upper, ..] => WidthCondition::Within {
                lower: *lower,
                upper: *upper,
            },
        }
    }

    /// Returns whether the rule applies at the active `threshold`.
    ///
    /// An unresolved threshold (`None`) satisfies no condition.
    pub fn is_active(&self, threshold: Option<u32>) -> bool {
        let Some(threshold) = threshold else {
            return false;
        };
        match *self {
            WidthCondition::Never => false,
            WidthCondition::AtLeast(bound) => bound <= threshold,
            WidthCondition::Within { lower, upper } => (lower..=upper).contains(&threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_min_width() {
        assert_eq!(
            WidthCondition::parse("(min-width: 768px)"),
            WidthCondition::AtLeast(768)
        );
    }

    #[test]
    fn parse_range() {
        assert_eq!(
            WidthCondition::parse("@media screen and (min-width: 480px) and (max-width: 768px)"),
            WidthCondition::Within {
                lower: 480,
                upper: 768
            }
        );
    }

    #[test]
    fn parse_unitless_and_bare_bounds() {
        assert_eq!(
            WidthCondition::parse("(min-width: 0)"),
            WidthCondition::AtLeast(0)
        );
        assert_eq!(
            WidthCondition::parse("( : 320 )"),
            WidthCondition::AtLeast(320)
        );
    }

    #[test]
    fn parse_ignores_other_features() {
        assert_eq!(
            WidthCondition::parse("(orientation: landscape)"),
            WidthCondition::Never
        );
        assert_eq!(
            WidthCondition::parse("(min-height: 400px) and (max-width: 900px)"),
            WidthCondition::AtLeast(900)
        );
    }

    #[test]
    fn parse_keeps_first_two_bounds() {
        assert_eq!(
            WidthCondition::parse("(min-width: 100px) and (max-width: 200px) and (max-width: 300px)"),
            WidthCondition::Within {
                lower: 100,
                upper: 200
            }
        );
    }

    #[test]
    fn parse_saturates_overflowing_bounds() {
        let condition = WidthCondition::parse("(min-width: 99999999999px) and (max-width: 900px)");
        assert_eq!(
            condition,
            WidthCondition::Within {
                lower: u32::MAX,
                upper: 900
            }
        );
        for threshold in [0, 900, 992, 1280, u32::MAX] {
            assert!(!condition.is_active(Some(threshold)));
        }

        assert_eq!(
            WidthCondition::parse("(min-width: 99999999999px)"),
            WidthCondition::AtLeast(u32::MAX)
        );
    }

    #[test]
    fn from_bounds_variants() {
        assert_eq!(WidthCondition::from_bounds(&[]), WidthCondition::Never);
        assert_eq!(WidthCondition::from_bounds(&[5]), WidthCondition::AtLeast(5));
        assert_eq!(
            WidthCondition::from_bounds(&[5, 9, 12]),
            WidthCondition::Within { lower: 5, upper: 9 }
        );
    }

    #[test]
    fn single_bound_applies_from_bound_upwards() {
        let condition = WidthCondition::AtLeast(768);
        assert!(condition.is_active(Some(768)));
        assert!(condition.is_active(Some(1024)));
        assert!(!condition.is_active(Some(320)));
    }

    #[test]
    fn range_is_inclusive() {
        let condition = WidthCondition::Within {
            lower: 480,
            upper: 768,
        };
        assert!(condition.is_active(Some(600)));
        assert!(condition.is_active(Some(480)));
        assert!(condition.is_active(Some(768)));
        assert!(!condition.is_active(Some(900)));
        assert!(!condition.is_active(Some(479)));
    }

    #[test]
    fn never_is_inactive() {
        assert!(!WidthCondition::Never.is_active(Some(0)));
        assert!(!WidthCondition::Never.is_active(Some(u32::MAX)));
    }

    #[test]
    fn unresolved_threshold_is_inactive() {
        assert!(!WidthCondition::AtLeast(0).is_active(None));
        assert!(!WidthCondition::Within {
            lower: 0,
            upper: u32::MAX
        }
        .is_active(None));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn range_matches_interval_membership(
            a in 0u32..3000,
            b in 0u32..3000,
            threshold in 0u32..3000,
        ) {
            let condition = WidthCondition::from_bounds(&[a, b]);
            prop_assert_eq!(
                condition.is_active(Some(threshold)),
                a <= threshold && threshold <= b
            );
        }
    }
}
