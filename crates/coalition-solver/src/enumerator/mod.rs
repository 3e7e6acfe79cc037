//! Lazy subset enumeration over seat-holding parties.
//!
//! Enumerators are constraint-agnostic: they only know about seats and the
//! size range. Every yielded [`Subset`] holds roster indices in ascending
//! order, and identical input always yields the same sequence.
//!
//! # Strategies
//!
//! - [`Combinations`]: every k-combination for k in the range, by size
//!   then lexicographically.
//! - [`MajorityBoundSearch`]: depth-first branch-and-bound that yields only
//!   subsets reaching a majority, pruning branches whose best completion
//!   falls short.

mod combinations;
mod majority;

use coalition_config::EnumerationStrategy;
use coalition_core::Dataset;
use smallvec::SmallVec;

use crate::range::SizeRange;

pub use combinations::Combinations;
pub use majority::MajorityBoundSearch;

/// Roster indices of a candidate coalition, ascending.
pub type Subset = SmallVec<[usize; 8]>;

/// Either enumeration strategy behind one iterator type.
#[derive(Debug, Clone)]
pub enum Enumerator {
    Exhaustive(Combinations),
    MajorityBound(MajorityBoundSearch),
}

impl Enumerator {
    /// Picks the enumerator for a query.
    ///
    /// The branch-and-bound search only yields majorities, so it is used
    /// only when the query drops everything else.
    pub fn for_query(
        dataset: &Dataset,
        range: SizeRange,
        strategy: EnumerationStrategy,
        majority_only: bool,
    ) -> Self {
        match strategy {
            EnumerationStrategy::MajorityBound if majority_only => {
                Enumerator::MajorityBound(MajorityBoundSearch::new(dataset, range))
            }
            _ => Enumerator::Exhaustive(Combinations::new(dataset, range)),
        }
    }

    /// Whether every yielded subset is already known to be a majority.
    pub fn yields_majorities_only(&self) -> bool {
        matches!(self, Enumerator::MajorityBound(_))
    }

    /// Branches abandoned by bound checks so far.
    pub fn pruned(&self) -> u64 {
        match self {
            Enumerator::Exhaustive(_) => 0,
            Enumerator::MajorityBound(search) => search.pruned(),
        }
    }

    /// Starts the sequence over from the first subset.
    pub fn reset(&mut self) {
        match self {
            Enumerator::Exhaustive(c) => c.reset(),
            Enumerator::MajorityBound(s) => s.reset(),
        }
    }
}

impl Iterator for Enumerator {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        match self {
            Enumerator::Exhaustive(c) => c.next(),
            Enumerator::MajorityBound(s) => s.next(),
        }
    }
}

impl std::iter::FusedIterator for Enumerator {}

#[cfg(test)]
mod tests;
