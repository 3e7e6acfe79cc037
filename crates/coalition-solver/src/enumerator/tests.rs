//! Tests for subset enumeration.

use super::*;
use crate::range::combination_count;
use coalition_core::Party;
use coalition_test::{dutch_chamber, random_dataset, three_party_dataset, two_polls};
use std::collections::BTreeSet;

fn range(min: usize, max: usize) -> SizeRange {
    SizeRange::new(min, max).unwrap()
}

fn collect(iter: impl Iterator<Item = Subset>) -> Vec<Vec<usize>> {
    iter.map(|s| s.to_vec()).collect()
}

#[test]
fn test_combinations_by_size_then_lexicographic() {
    let ds = three_party_dataset();
    let subsets = collect(Combinations::new(&ds, range(1, 3)));
    assert_eq!(
        subsets,
        vec![
            vec![0],
            vec![1],
            vec![2],
            vec![0, 1],
            vec![0, 2],
            vec![1, 2],
            vec![0, 1, 2],
        ]
    );
}

#[test]
fn test_combinations_skip_zero_seat_parties() {
    let spring = &two_polls()[0];
    let subsets = collect(Combinations::new(spring, range(1, 4)));
    // D holds no seats
    assert_eq!(subsets.len(), 7);
    assert!(subsets.iter().all(|s| !s.contains(&3)));
}

#[test]
fn test_combinations_cap_max_at_pool() {
    let ds = three_party_dataset();
    let subsets = collect(Combinations::new(&ds, range(3, 10)));
    assert_eq!(subsets, vec![vec![0, 1, 2]]);
}

#[test]
fn test_combinations_min_beyond_pool_is_empty() {
    let ds = three_party_dataset();
    assert_eq!(Combinations::new(&ds, range(4, 6)).count(), 0);
}

#[test]
fn test_combinations_count_matches_binomial() {
    let ds = dutch_chamber();
    for (min, max) in [(1, 1), (2, 3), (1, 15), (5, 7)] {
        let r = range(min, max);
        assert_eq!(
            Combinations::new(&ds, r).count() as u128,
            combination_count(ds.len(), r),
            "range {}..={}",
            min,
            max
        );
    }
}

#[test]
fn test_combinations_reset_restarts() {
    let ds = three_party_dataset();
    let mut iter = Combinations::new(&ds, range(2, 2));
    let first = collect(iter.by_ref());
    assert!(iter.next().is_none());

    iter.reset();
    assert_eq!(collect(iter), first);
}

#[test]
fn test_majority_search_matches_filtered_combinations() {
    for seed in 0..20 {
        let ds = random_dataset(seed, 10);
        for (min, max) in [(1, 3), (2, 5), (1, 10)] {
            let r = range(min, max);
            let expected: BTreeSet<Vec<usize>> = Combinations::new(&ds, r)
                .filter(|s| ds.is_majority(s.iter().map(|&i| u64::from(ds.parties()[i].seats())).sum()))
                .map(|s| s.to_vec())
                .collect();
            let found = collect(MajorityBoundSearch::new(&ds, r));
            let unique: BTreeSet<Vec<usize>> = found.iter().cloned().collect();

            assert_eq!(found.len(), unique.len(), "seed {} yielded duplicates", seed);
            assert_eq!(unique, expected, "seed {} range {}..={}", seed, min, max);
        }
    }
}

#[test]
fn test_majority_search_prunes() {
    let ds = dutch_chamber();
    let mut search = MajorityBoundSearch::new(&ds, range(2, 3));
    let found = collect(search.by_ref());

    assert!(!found.is_empty());
    assert!(search.pruned() > 0);
    assert!(found.len() < Combinations::new(&ds, range(2, 3)).count());
    for subset in &found {
        assert!(subset.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_majority_search_without_majority_is_empty() {
    let ds = Dataset::new(
        "fragmented",
        vec![
            Party::new("A", 10),
            Party::new("B", 10),
            Party::new("C", 10),
            Party::new("D", 10),
        ],
    )
    .unwrap();
    // three of four are needed
    assert_eq!(MajorityBoundSearch::new(&ds, range(1, 2)).count(), 0);
    assert_eq!(MajorityBoundSearch::new(&ds, range(1, 4)).count(), 5);
}

#[test]
fn test_majority_search_is_deterministic() {
    let ds = random_dataset(7, 12);
    let mut search = MajorityBoundSearch::new(&ds, range(1, 6));
    let first = collect(search.by_ref());
    search.reset();
    assert_eq!(collect(search), first);
    assert_eq!(collect(MajorityBoundSearch::new(&ds, range(1, 6))), first);
}

#[test]
fn test_for_query_selects_strategy() {
    let ds = three_party_dataset();
    let r = range(1, 3);

    let bound = Enumerator::for_query(&ds, r, EnumerationStrategy::MajorityBound, true);
    assert!(bound.yields_majorities_only());
    assert_eq!(bound.count(), 4);

    // without majority_only the exhaustive enumerator is used
    let fallback = Enumerator::for_query(&ds, r, EnumerationStrategy::MajorityBound, false);
    assert!(!fallback.yields_majorities_only());
    assert_eq!(fallback.count(), 7);

    let exhaustive = Enumerator::for_query(&ds, r, EnumerationStrategy::Exhaustive, true);
    assert!(!exhaustive.yields_majorities_only());
    assert_eq!(exhaustive.pruned(), 0);
}
