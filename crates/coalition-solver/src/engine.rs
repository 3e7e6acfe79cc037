//! Query engine: enumerate, filter, score and rank.

use std::time::{Duration, Instant};

use coalition_config::EngineConfig;
use coalition_core::{Coalition, CoalitionError, Dataset, Result};
use coalition_scoring::{ConstraintFilter, ConstraintSet, Scorer};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::enumerator::{Enumerator, Subset};
use crate::range::{combination_count, SizeRange};
use crate::ranker::Ranker;

/// One coalition query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoalitionQuery {
    pub min_parties: usize,
    pub max_parties: usize,
    pub constraints: ConstraintSet,
    /// Overrides [`EngineConfig::majority_only`] when set.
    pub majority_only: Option<bool>,
    /// Overrides [`EngineConfig::result_limit`] when set.
    pub limit: Option<usize>,
}

impl CoalitionQuery {
    pub fn new(min_parties: usize, max_parties: usize) -> Self {
        Self {
            min_parties,
            max_parties,
            constraints: ConstraintSet::new(),
            majority_only: None,
            limit: None,
        }
    }

    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_majority_only(mut self, majority_only: bool) -> Self {
        self.majority_only = Some(majority_only);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Counters from one query run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Subsets of eligible parties within the size range.
    pub search_space: u128,
    /// Subsets produced by the enumerator.
    pub candidates: u64,
    /// Subsets that passed the rules and the majority filter.
    pub admissible: u64,
    /// Branches abandoned by the majority bound.
    pub pruned: u64,
    pub elapsed: Duration,
}

/// Ranked coalitions plus the count before truncation.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub coalitions: Vec<Coalition>,
    pub total_count: usize,
    pub stats: QueryStats,
}

/// Runs coalition queries against a dataset snapshot.
///
/// The engine holds no roster state; callers pass the dataset and the rules
/// with every query.
///
/// # Examples
///
/// ```
/// use coalition_core::{Dataset, Party};
/// use coalition_solver::{CoalitionEngine, CoalitionQuery};
///
/// let ds = Dataset::new("s", vec![
///     Party::new("A", 50).with_position(-0.8, 0.5),
///     Party::new("B", 40).with_position(0.1, 0.1),
///     Party::new("C", 60).with_position(0.9, -0.6),
/// ]).unwrap();
///
/// let result = CoalitionEngine::default()
///     .run(&ds, &CoalitionQuery::new(1, 3))
///     .unwrap();
/// assert_eq!(result.total_count, 7);
/// assert_eq!(result.coalitions[0].seats, 150);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoalitionEngine {
    config: EngineConfig,
    scorer: Scorer,
    ranker: Ranker,
}

impl CoalitionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            scorer: Scorer::new(config.compatibility),
            ranker: Ranker::new(config.ranking),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs a query.
    ///
    /// # Errors
    ///
    /// - [`CoalitionError::InvalidRange`] for a zero bound or
    ///   `min_parties > max_parties`.
    /// - [`CoalitionError::PartyNotFound`] if a rule names a party missing
    ///   from `dataset`.
    pub fn run(&self, dataset: &Dataset, query: &CoalitionQuery) -> Result<QueryResult> {
        let start = Instant::now();
        let range = SizeRange::new(query.min_parties, query.max_parties)?;
        let filter = ConstraintFilter::compile(&query.constraints, dataset)?;
        let majority_only = query.majority_only.unwrap_or(self.config.majority_only);
        let search_space = combination_count(dataset.eligible_indices().len(), range);

        info!(
            event = "query_start",
            dataset = dataset.name(),
            min_parties = range.min(),
            max_parties = range.max(),
            rules = query.constraints.len(),
            search_space = u64::try_from(search_space).unwrap_or(u64::MAX),
            majority_only = majority_only,
            enumeration = %self.config.enumeration,
        );

        let mut enumerator =
            Enumerator::for_query(dataset, range, self.config.enumeration, majority_only);
        let check_majority = majority_only && !enumerator.yields_majorities_only();

        let mut candidates = 0u64;
        let admissible: Vec<Subset> = enumerator
            .by_ref()
            .inspect(|_| candidates += 1)
            .filter(|subset| filter.admissible(subset))
            .filter(|subset| !check_majority || dataset.is_majority(seat_sum(dataset, subset)))
            .collect();

        let scored = self.score_all(dataset, &admissible);
        let limit = query.limit.or(self.config.result_limit);
        let (coalitions, total_count) = self.ranker.rank(scored, limit);

        let stats = QueryStats {
            search_space,
            candidates,
            admissible: admissible.len() as u64,
            pruned: enumerator.pruned(),
            elapsed: start.elapsed(),
        };
        info!(
            event = "query_end",
            dataset = dataset.name(),
            candidates = stats.candidates,
            admissible = stats.admissible,
            returned = coalitions.len(),
            pruned = stats.pruned,
            duration_ms = stats.elapsed.as_millis() as u64,
        );

        Ok(QueryResult {
            coalitions,
            total_count,
            stats,
        })
    }

    /// Scores an explicit selection of parties by name.
    ///
    /// Repeated names count once. No size policy or rule is applied.
    ///
    /// # Errors
    ///
    /// [`CoalitionError::PartyNotFound`] for a name missing from `dataset`.
    pub fn evaluate<S: AsRef<str>>(&self, dataset: &Dataset, names: &[S]) -> Result<Coalition> {
        let mut subset = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let index = dataset
                .index_of(name)
                .ok_or_else(|| CoalitionError::PartyNotFound(name.to_string()))?;
            if !subset.contains(&index) {
                subset.push(index);
            }
        }
        subset.sort_unstable();
        Ok(self.scorer.score(dataset, &subset))
    }

    fn score_all(&self, dataset: &Dataset, subsets: &[Subset]) -> Vec<Coalition> {
        if subsets.len() >= self.config.parallel_scoring_threshold {
            debug!(event = "parallel_scoring", subsets = subsets.len());
            subsets
                .par_iter()
                .map(|subset| self.scorer.score(dataset, subset))
                .collect()
        } else {
            subsets
                .iter()
                .map(|subset| self.scorer.score(dataset, subset))
                .collect()
        }
    }
}

fn seat_sum(dataset: &Dataset, subset: &[usize]) -> u64 {
    let parties = dataset.parties();
    subset.iter().map(|&i| u64::from(parties[i].seats())).sum()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
