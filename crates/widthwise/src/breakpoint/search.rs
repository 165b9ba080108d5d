//! Interval search shared by both breakpoint resolvers.

/// Returns the index of the tightest lower bound of `point` in `thresholds`.
///
/// `thresholds` must be ascending. The scan stops at the first of:
///
/// - an exact match, which wins outright
/// - a threshold above `point` past the first slot, which selects the slot before it
/// - the slot at `declared_len - 1` still below `point`, which clamps to it
///
/// A point below the first threshold is only caught by the second rule, so a
/// single-entry set yields `None` there while longer sets yield the first slot.
///
/// `declared_len` is the number of breakpoints as declared, which can exceed
/// `thresholds.len()` when duplicate thresholds were collapsed. In that case
/// the clamp never fires.
pub(crate) fn closest_index(thresholds: &[u32], point: u32, declared_len: usize) -> Option<usize> {
    for (i, &value) in thresholds.iter().enumerate() {
        if value == point {
            return Some(i);
        } else if value > point && i != 0 {
            return Some(i - 1);
        } else if value < point && i + 1 == declared_len {
            return Some(i);
        }
    }
    None
}
