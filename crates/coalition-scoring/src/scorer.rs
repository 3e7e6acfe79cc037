//! Coalition scorer.

use std::cmp::Reverse;

use coalition_core::{Coalition, CompatibilityMetric, Dataset, Member, Position};

use crate::compatibility::compatibility;

/// Turns a subset of roster indices into a scored [`Coalition`].
///
/// The scorer does not enforce size policy; any non-empty subset is scored.
///
/// # Examples
///
/// ```
/// use coalition_core::{Dataset, Party};
/// use coalition_scoring::Scorer;
///
/// let ds = Dataset::new("s", vec![
///     Party::new("A", 50).with_position(-0.8, 0.5),
///     Party::new("B", 40).with_position(0.1, 0.1),
///     Party::new("C", 60).with_position(0.9, -0.6),
/// ]).unwrap();
///
/// let ac = Scorer::default().score(&ds, &[0, 2]);
/// assert_eq!(ac.seats, 110);
/// assert!(ac.is_majority);
/// assert!((ac.avg_economic - 0.05).abs() < 1e-9);
/// assert_eq!(ac.party_names().collect::<Vec<_>>(), vec!["C", "A"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorer {
    metric: CompatibilityMetric,
}

impl Scorer {
    pub fn new(metric: CompatibilityMetric) -> Self {
        Self { metric }
    }

    #[inline]
    pub fn metric(&self) -> CompatibilityMetric {
        self.metric
    }

    /// Scores the parties at `subset` (roster indices of `dataset`).
    pub fn score(&self, dataset: &Dataset, subset: &[usize]) -> Coalition {
        let parties = dataset.parties();

        let mut order: Vec<usize> = subset.to_vec();
        order.sort_by_key(|&i| (Reverse(parties[i].seats()), i));

        let members: Vec<Member> = order
            .iter()
            .map(|&i| Member {
                name: parties[i].name().to_string(),
                seats: parties[i].seats(),
            })
            .collect();

        let seats: u64 = members.iter().map(|m| u64::from(m.seats)).sum();
        let positions: Vec<Position> = order.iter().map(|&i| parties[i].position()).collect();

        let (avg_economic, avg_social) = if positions.is_empty() {
            (0.0, 0.0)
        } else {
            let n = positions.len() as f64;
            (
                positions.iter().map(|p| p.economic).sum::<f64>() / n,
                positions.iter().map(|p| p.social).sum::<f64>() / n,
            )
        };

        Coalition {
            members,
            seats,
            avg_economic,
            avg_social,
            compatibility: compatibility(self.metric, &positions),
            is_majority: dataset.is_majority(seats),
        }
    }
}
