//! Compatibility metrics over member positions.
//!
//! Both metrics map a set of positions in the `[-1, 1] x [-1, 1]` square to
//! a [`Compatibility`] score. A single party always scores 100.

use std::cmp::Ordering;

use coalition_core::{Compatibility, CompatibilityMetric, Position};

/// Diagonal of the position square: the largest possible distance.
pub const MAX_DISTANCE: f64 = 2.0 * std::f64::consts::SQRT_2;

/// Area of the position square.
const MAX_AREA: f64 = 4.0;

/// Multiplier applied per member beyond two in the hull metric.
const PARTY_COUNT_PENALTY: f64 = 0.98;

/// Scores `points` with the selected metric.
pub fn compatibility(metric: CompatibilityMetric, points: &[Position]) -> Compatibility {
    match metric {
        CompatibilityMetric::PairwiseDistance => pairwise_distance(points),
        CompatibilityMetric::ConvexHull => convex_hull(points),
    }
}

/// 100 minus the mean pairwise distance, normalized so that
/// [`MAX_DISTANCE`] maps to 0.
///
/// # Examples
///
/// ```
/// use coalition_core::{Compatibility, Position};
/// use coalition_scoring::pairwise_distance;
///
/// let same = [Position::new(0.3, 0.3), Position::new(0.3, 0.3)];
/// assert_eq!(pairwise_distance(&same), Compatibility::MAX);
///
/// let corners = [Position::new(-1.0, -1.0), Position::new(1.0, 1.0)];
/// assert_eq!(pairwise_distance(&corners), Compatibility::MIN);
/// ```
pub fn pairwise_distance(points: &[Position]) -> Compatibility {
    if points.len() <= 1 {
        return Compatibility::MAX;
    }

    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            total += a.distance(b);
            pairs += 1;
        }
    }

    let mean = total / pairs as f64;
    Compatibility::of(100.0 * (1.0 - mean / MAX_DISTANCE))
}

/// Convex-hull metric.
///
/// - Two parties: normalized distance, as [`pairwise_distance`].
/// - Degenerate sets (fewer than three distinct points, or all points on a
///   line): normalized bounding spread.
/// - Otherwise: the share of the square not covered by the hull.
///
/// Sets of three or more parties are multiplied by 0.98 per party beyond
/// two.
pub fn convex_hull(points: &[Position]) -> Compatibility {
    match points.len() {
        0 | 1 => return Compatibility::MAX,
        2 => return pairwise_distance(points),
        _ => {}
    }

    let penalty = PARTY_COUNT_PENALTY.powi(points.len() as i32 - 2);
    let hull = hull(points);

    if hull.len() < 3 {
        let spread = bounding_spread(points);
        return Compatibility::of(100.0 * (1.0 - spread / MAX_DISTANCE) * penalty);
    }

    let area = shoelace_area(&hull);
    Compatibility::of(100.0 * (1.0 - area / MAX_AREA) * penalty)
}

fn cmp_points(a: &Position, b: &Position) -> Ordering {
    a.economic
        .total_cmp(&b.economic)
        .then(a.social.total_cmp(&b.social))
}

fn cross(o: &Position, a: &Position, b: &Position) -> f64 {
    (a.economic - o.economic) * (b.social - o.social)
        - (a.social - o.social) * (b.economic - o.economic)
}

/// Andrew's monotone chain; collinear points are dropped.
fn hull(points: &[Position]) -> Vec<Position> {
    let mut sorted = points.to_vec();
    sorted.sort_by(cmp_points);
    sorted.dedup_by(|a, b| cmp_points(a, b) == Ordering::Equal);

    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower: Vec<Position> = Vec::with_capacity(sorted.len());
    for p in &sorted {
        while lower.len() >= 2 && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<Position> = Vec::with_capacity(sorted.len());
    for p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

fn shoelace_area(polygon: &[Position]) -> f64 {
    let n = polygon.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let (a, b) = (&polygon[i], &polygon[(i + 1) % n]);
            a.economic * b.social - b.economic * a.social
        })
        .sum();
    twice.abs() / 2.0
}

fn bounding_spread(points: &[Position]) -> f64 {
    let (mut min_e, mut max_e) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_s, mut max_s) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_e = min_e.min(p.economic);
        max_e = max_e.max(p.economic);
        min_s = min_s.min(p.social);
        max_s = max_s.max(p.social);
    }
    (max_e - min_e).hypot(max_s - min_s)
}
