//! Tests for the query engine.

use super::*;
use coalition_config::{EnumerationStrategy, RankOrder};
use coalition_core::{CompatibilityMetric, Exclusion, Inclusion};
use coalition_scoring::admissible;
use coalition_test::{dutch_chamber, names, random_dataset, three_party_dataset};

fn find<'a>(result: &'a QueryResult, members: &[&str]) -> Option<&'a Coalition> {
    result.coalitions.iter().find(|c| {
        c.len() == members.len() && members.iter().all(|name| c.contains(name))
    })
}

#[test]
fn test_scenario_full_range() {
    let ds = three_party_dataset();
    let result = CoalitionEngine::default()
        .run(&ds, &CoalitionQuery::new(1, 3))
        .unwrap();

    assert_eq!(result.total_count, 7);
    assert_eq!(result.coalitions.len(), 7);
    assert_eq!(result.stats.candidates, 7);
    assert_eq!(result.stats.search_space, 7);

    let ac = find(&result, &["A", "C"]).unwrap();
    assert_eq!(ac.seats, 110);
    assert!(ac.is_majority);
    assert!((ac.avg_economic - 0.05).abs() < 1e-9);

    let abc = find(&result, &["A", "B", "C"]).unwrap();
    assert_eq!(abc.seats, 150);
    assert_eq!(result.coalitions[0], *abc);

    let b = find(&result, &["B"]).unwrap();
    assert_eq!(b.compatibility.value(), 100.0);
    assert!(!b.is_majority);
}

#[test]
fn test_pair_exclusion() {
    let ds = three_party_dataset();
    let rules = ConstraintSet::from_lists(&[names(&["A", "B"])], &[]).unwrap();
    let result = CoalitionEngine::default()
        .run(&ds, &CoalitionQuery::new(2, 2).with_constraints(rules))
        .unwrap();

    assert_eq!(result.total_count, 2);
    assert!(find(&result, &["A", "B"]).is_none());
    assert!(find(&result, &["A", "C"]).is_some());
    assert!(find(&result, &["B", "C"]).is_some());
}

#[test]
fn test_single_party_exclusion() {
    let ds = three_party_dataset();
    let rules = ConstraintSet::from_lists(&[names(&["C"])], &[]).unwrap();
    let result = CoalitionEngine::default()
        .run(&ds, &CoalitionQuery::new(1, 3).with_constraints(rules))
        .unwrap();

    assert_eq!(result.total_count, 3);
    assert!(result.coalitions.iter().all(|c| !c.contains("C")));
}

#[test]
fn test_inclusion_keeps_pair_together() {
    let ds = three_party_dataset();
    let rules = ConstraintSet::from_lists(&[], &[names(&["A", "B"])]).unwrap();
    let result = CoalitionEngine::default()
        .run(&ds, &CoalitionQuery::new(2, 2).with_constraints(rules))
        .unwrap();

    assert_eq!(result.total_count, 1);
    assert!(find(&result, &["A", "B"]).is_some());
}

#[test]
fn test_invalid_range() {
    let ds = three_party_dataset();
    let engine = CoalitionEngine::default();

    assert_eq!(
        engine.run(&ds, &CoalitionQuery::new(3, 2)).unwrap_err(),
        CoalitionError::InvalidRange { min: 3, max: 2 }
    );
    assert!(matches!(
        engine.run(&ds, &CoalitionQuery::new(0, 2)),
        Err(CoalitionError::InvalidRange { .. })
    ));
}

#[test]
fn test_range_beyond_roster() {
    let ds = three_party_dataset();
    let engine = CoalitionEngine::default();

    let capped = engine.run(&ds, &CoalitionQuery::new(2, 9)).unwrap();
    assert_eq!(capped.total_count, 4);

    let empty = engine.run(&ds, &CoalitionQuery::new(4, 9)).unwrap();
    assert_eq!(empty.total_count, 0);
    assert!(empty.coalitions.is_empty());
}

#[test]
fn test_unknown_rule_party() {
    let ds = three_party_dataset();
    let rules = ConstraintSet::from_lists(&[names(&["Z"])], &[]).unwrap();
    let err = CoalitionEngine::default()
        .run(&ds, &CoalitionQuery::new(1, 3).with_constraints(rules))
        .unwrap_err();
    assert_eq!(err, CoalitionError::PartyNotFound("Z".to_string()));
}

#[test]
fn test_majority_only_from_config_and_query() {
    let ds = three_party_dataset();
    let engine = CoalitionEngine::new(EngineConfig::default().with_majority_only(true));

    let majorities = engine.run(&ds, &CoalitionQuery::new(1, 3)).unwrap();
    assert_eq!(majorities.total_count, 4);
    assert!(majorities.coalitions.iter().all(|c| c.is_majority));

    let everything = engine
        .run(&ds, &CoalitionQuery::new(1, 3).with_majority_only(false))
        .unwrap();
    assert_eq!(everything.total_count, 7);
}

#[test]
fn test_majority_bound_reports_pruning() {
    let ds = dutch_chamber();
    let engine = CoalitionEngine::new(
        EngineConfig::default()
            .with_enumeration(EnumerationStrategy::MajorityBound)
            .with_majority_only(true),
    );
    let result = engine.run(&ds, &CoalitionQuery::new(2, 4)).unwrap();

    assert!(result.stats.pruned > 0);
    // C(15,2) + C(15,3) + C(15,4)
    assert_eq!(result.stats.search_space, 105 + 455 + 1365);
    assert!(result.stats.candidates < 1925);
    assert_eq!(result.stats.candidates, result.stats.admissible);
    assert!(result.coalitions.iter().all(|c| c.is_majority));
}

#[test]
fn test_strategies_agree_under_rules() {
    let exhaustive = CoalitionEngine::new(EngineConfig::default().with_majority_only(true));
    let bound = CoalitionEngine::new(
        EngineConfig::default()
            .with_enumeration(EnumerationStrategy::MajorityBound)
            .with_majority_only(true),
    );

    for seed in 0..10 {
        let ds = random_dataset(seed, 9);
        let mut rules = ConstraintSet::new();
        rules
            .add_exclusion(Exclusion::pair(ds.parties()[0].name(), ds.parties()[1].name()).unwrap())
            .unwrap();
        rules
            .add_inclusion(Inclusion::new(ds.parties()[2].name(), ds.parties()[3].name()).unwrap())
            .unwrap();
        let query = CoalitionQuery::new(1, 6).with_constraints(rules);

        let a = exhaustive.run(&ds, &query).unwrap();
        let b = bound.run(&ds, &query).unwrap();
        assert_eq!(a.coalitions, b.coalitions, "seed {}", seed);
        assert_eq!(a.total_count, b.total_count);
    }
}

#[test]
fn test_result_properties_hold() {
    let engine = CoalitionEngine::default();
    for seed in 0..10 {
        let ds = random_dataset(seed, 8);
        let rules = ConstraintSet::from_lists(
            &[names(&[ds.parties()[4].name()])],
            &[names(&[ds.parties()[0].name(), ds.parties()[5].name()])],
        )
        .unwrap();
        let query = CoalitionQuery::new(2, 4).with_constraints(rules.clone());
        let result = engine.run(&ds, &query).unwrap();

        for c in &result.coalitions {
            assert!((2..=4).contains(&c.len()));
            assert!(admissible(c.party_names(), &rules));
            assert_eq!(c.seats, c.members.iter().map(|m| u64::from(m.seats)).sum::<u64>());
            assert!((0.0..=100.0).contains(&c.compatibility.value()));
            assert!(c.members.iter().all(|m| m.seats > 0));
        }
        for pair in result.coalitions.windows(2) {
            assert!(pair[0].seats >= pair[1].seats);
        }
    }
}

#[test]
fn test_identical_queries_identical_output() {
    let ds = dutch_chamber();
    let engine = CoalitionEngine::new(
        EngineConfig::default().with_compatibility(CompatibilityMetric::ConvexHull),
    );
    let query = CoalitionQuery::new(2, 3);
    let first = engine.run(&ds, &query).unwrap();
    let second = engine.run(&ds, &query).unwrap();
    assert_eq!(first.coalitions, second.coalitions);
    assert_eq!(first.total_count, second.total_count);
}

#[test]
fn test_parallel_scoring_matches_sequential() {
    let ds = dutch_chamber();
    let mut parallel = EngineConfig::default();
    parallel.parallel_scoring_threshold = 0;
    let mut sequential = EngineConfig::default();
    sequential.parallel_scoring_threshold = usize::MAX;

    let query = CoalitionQuery::new(1, 4);
    let a = CoalitionEngine::new(parallel).run(&ds, &query).unwrap();
    let b = CoalitionEngine::new(sequential).run(&ds, &query).unwrap();
    assert_eq!(a.coalitions, b.coalitions);
}

#[test]
fn test_limit_from_query_and_config() {
    let ds = dutch_chamber();
    let engine = CoalitionEngine::new(EngineConfig::default().with_result_limit(10));

    let limited = engine.run(&ds, &CoalitionQuery::new(2, 2)).unwrap();
    assert_eq!(limited.coalitions.len(), 10);
    assert_eq!(limited.total_count, 105);

    let narrower = engine.run(&ds, &CoalitionQuery::new(2, 2).with_limit(3)).unwrap();
    assert_eq!(narrower.coalitions.len(), 3);
    assert_eq!(narrower.coalitions[..], limited.coalitions[..3]);
}

#[test]
fn test_compatibility_first_ranking() {
    let ds = three_party_dataset();
    let engine = CoalitionEngine::new(
        EngineConfig::default().with_ranking(RankOrder::CompatibilityThenSeats),
    );
    let result = engine.run(&ds, &CoalitionQuery::new(1, 3)).unwrap();

    // singletons all score 100; the largest comes first
    assert_eq!(result.coalitions[0].party_names().collect::<Vec<_>>(), vec!["C"]);
    for pair in result.coalitions.windows(2) {
        assert!(pair[0].compatibility >= pair[1].compatibility);
    }
}

#[test]
fn test_evaluate_selection() {
    let ds = three_party_dataset();
    let engine = CoalitionEngine::default();

    let ac = engine.evaluate(&ds, &["A", "C", "A"]).unwrap();
    assert_eq!(ac.seats, 110);
    assert!(ac.is_majority);
    assert_eq!(ac.len(), 2);

    let none: [&str; 0] = [];
    let empty = engine.evaluate(&ds, &none).unwrap();
    assert_eq!(empty.seats, 0);
    assert!(!empty.is_majority);

    assert_eq!(
        engine.evaluate(&ds, &["A", "Q"]).unwrap_err(),
        CoalitionError::PartyNotFound("Q".to_string())
    );
}
