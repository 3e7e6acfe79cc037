//! Compatibility score - ideological closeness of a coalition.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A compatibility score in `[0, 100]`, kept at one decimal.
///
/// Higher is more compatible. Scores are never NaN, so the type is totally
/// ordered.
///
/// # Examples
///
/// ```
/// use coalition_core::Compatibility;
///
/// let close = Compatibility::of(87.46);
/// let far = Compatibility::of(12.0);
///
/// assert_eq!(close.value(), 87.5);
/// assert!(close > far);
/// assert_eq!(Compatibility::of(140.0), Compatibility::MAX);
/// assert_eq!(Compatibility::of(-3.0), Compatibility::MIN);
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Compatibility(f64);

impl Compatibility {
    /// No ideological overlap.
    pub const MIN: Compatibility = Compatibility(0.0);

    /// Identical positions.
    pub const MAX: Compatibility = Compatibility(100.0);

    /// Creates a score, clamping into `[0, 100]` and rounding to one decimal.
    ///
    /// NaN maps to [`Compatibility::MIN`].
    pub fn of(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        let rounded = (value.clamp(0.0, 100.0) * 10.0).round() / 10.0;
        // normalizes -0.0 so that Ord agrees with PartialEq
        Compatibility(rounded + 0.0)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Eq for Compatibility {}

impl Ord for Compatibility {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Compatibility {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Compatibility({:.1})", self.0)
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// How coalition compatibility is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CompatibilityMetric {
    /// 100 minus the mean pairwise distance, normalized by the diagonal of
    /// the position square.
    #[default]
    PairwiseDistance,

    /// 100 scaled by the uncovered share of the position square, based on
    /// the convex hull of member positions, with a small per-party penalty.
    ConvexHull,
}

impl fmt::Display for CompatibilityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatibilityMetric::PairwiseDistance => write!(f, "PairwiseDistance"),
            CompatibilityMetric::ConvexHull => write!(f, "ConvexHull"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_is_min() {
        assert_eq!(Compatibility::of(f64::NAN), Compatibility::MIN);
    }

    #[test]
    fn test_rounding_keeps_bounds_exact() {
        assert_eq!(Compatibility::of(99.99).value(), 100.0);
        assert_eq!(Compatibility::of(0.04).value(), 0.0);
    }

    #[test]
    fn test_ordering_total() {
        let mut scores = vec![Compatibility::of(50.0), Compatibility::MAX, Compatibility::MIN];
        scores.sort();
        assert_eq!(scores, vec![Compatibility::MIN, Compatibility::of(50.0), Compatibility::MAX]);
    }

    #[test]
    fn test_metric_display_and_default() {
        assert_eq!(CompatibilityMetric::default(), CompatibilityMetric::PairwiseDistance);
        assert_eq!(format!("{}", CompatibilityMetric::ConvexHull), "ConvexHull");
    }
}
