//! Result ordering.

use std::cmp::Ordering;

use coalition_config::RankOrder;
use coalition_core::Coalition;

/// Orders scored coalitions.
///
/// The order is total: after the configured primary and secondary keys,
/// smaller coalitions come first, then member names compare
/// lexicographically. Two distinct subsets of one roster never tie.
///
/// # Examples
///
/// ```
/// use coalition_scoring::Scorer;
/// use coalition_solver::Ranker;
/// use coalition_core::{Dataset, Party};
///
/// let ds = Dataset::new("s", vec![
///     Party::new("A", 50),
///     Party::new("B", 40),
///     Party::new("C", 60),
/// ]).unwrap();
/// let scorer = Scorer::default();
/// let scored = vec![
///     scorer.score(&ds, &[0, 1]),
///     scorer.score(&ds, &[0, 1, 2]),
///     scorer.score(&ds, &[2]),
/// ];
///
/// let (ranked, total) = Ranker::default().rank(scored, Some(2));
/// assert_eq!(total, 3);
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].seats, 150);
/// assert_eq!(ranked[1].seats, 90);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ranker {
    order: RankOrder,
}

impl Ranker {
    pub fn new(order: RankOrder) -> Self {
        Self { order }
    }

    #[inline]
    pub fn order(&self) -> RankOrder {
        self.order
    }

    /// Compares two coalitions; `Less` ranks first.
    pub fn compare(&self, a: &Coalition, b: &Coalition) -> Ordering {
        let seats = b.seats.cmp(&a.seats);
        let compatibility = b.compatibility.cmp(&a.compatibility);
        let primary = match self.order {
            RankOrder::SeatsThenCompatibility => seats.then(compatibility),
            RankOrder::CompatibilityThenSeats => compatibility.then(seats),
        };
        primary
            .then_with(|| a.len().cmp(&b.len()))
            .then_with(|| a.party_names().cmp(b.party_names()))
    }

    /// Sorts `coalitions` and keeps at most `limit` of them.
    ///
    /// Returns the kept coalitions and the count before truncation.
    pub fn rank(&self, mut coalitions: Vec<Coalition>, limit: Option<usize>) -> (Vec<Coalition>, usize) {
        let total = coalitions.len();
        coalitions.sort_by(|a, b| self.compare(a, b));
        if let Some(limit) = limit {
            coalitions.truncate(limit);
        }
        (coalitions, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coalition_core::{Compatibility, Member};

    fn coalition(names: &[(&str, u32)], compatibility: f64) -> Coalition {
        let members: Vec<Member> = names
            .iter()
            .map(|&(name, seats)| Member { name: name.to_string(), seats })
            .collect();
        Coalition {
            seats: members.iter().map(|m| u64::from(m.seats)).sum(),
            members,
            avg_economic: 0.0,
            avg_social: 0.0,
            compatibility: Compatibility::of(compatibility),
            is_majority: false,
        }
    }

    #[test]
    fn test_seats_then_compatibility() {
        let input = vec![
            coalition(&[("A", 40)], 100.0),
            coalition(&[("B", 30), ("C", 10)], 80.0),
            coalition(&[("D", 50)], 100.0),
            coalition(&[("E", 25), ("F", 15)], 90.0),
        ];
        let (ranked, total) = Ranker::default().rank(input, None);
        assert_eq!(total, 4);
        let seats: Vec<_> = ranked.iter().map(|c| c.seats).collect();
        assert_eq!(seats, vec![50, 40, 40, 40]);
        assert_eq!(ranked[1].compatibility.value(), 100.0);
        assert_eq!(ranked[2].compatibility.value(), 90.0);
        assert_eq!(ranked[3].compatibility.value(), 80.0);
    }

    #[test]
    fn test_compatibility_then_seats() {
        let input = vec![
            coalition(&[("A", 40)], 60.0),
            coalition(&[("B", 10)], 95.0),
            coalition(&[("C", 20)], 95.0),
        ];
        let (ranked, _) = Ranker::new(RankOrder::CompatibilityThenSeats).rank(input, None);
        let names: Vec<_> = ranked.iter().map(|c| c.members[0].name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_ties_break_on_size_then_names() {
        let input = vec![
            coalition(&[("B", 20), ("C", 20)], 70.0),
            coalition(&[("X", 40)], 70.0),
            coalition(&[("A", 20), ("D", 20)], 70.0),
        ];
        let (ranked, _) = Ranker::default().rank(input, None);
        let first: Vec<_> = ranked.iter().map(|c| c.members[0].name.as_str()).collect();
        assert_eq!(first, vec!["X", "A", "B"]);
    }

    #[test]
    fn test_order_is_independent_of_input_order() {
        let input = vec![
            coalition(&[("A", 20), ("D", 20)], 70.0),
            coalition(&[("B", 20), ("C", 20)], 70.0),
            coalition(&[("X", 40)], 75.0),
        ];
        let mut reversed = input.clone();
        reversed.reverse();

        let ranker = Ranker::default();
        assert_eq!(ranker.rank(input, None), ranker.rank(reversed, None));
    }

    #[test]
    fn test_limit_keeps_total() {
        let input = (1..=5).map(|s| coalition(&[("P", s)], 50.0)).collect();
        let (ranked, total) = Ranker::default().rank(input, Some(2));
        assert_eq!(total, 5);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].seats, 5);

        let (all, _) = Ranker::default().rank(Vec::new(), Some(10));
        assert!(all.is_empty());
    }
}
