//! Coalition enumeration and query engine.
//!
//! The engine pipeline for one query:
//!
//! 1. [`SizeRange`] validates the requested party-count bounds.
//! 2. An [`Enumerator`] lazily yields candidate subsets of seat-holding
//!    parties, either every combination or a majority branch-and-bound.
//! 3. [`ConstraintFilter`](coalition_scoring::ConstraintFilter) drops
//!    subsets that break a rule.
//! 4. [`Scorer`](coalition_scoring::Scorer) scores the survivors.
//! 5. [`Ranker`] orders them and applies the result limit.
//!
//! [`CoalitionEngine`] runs the whole pipeline.

pub mod engine;
pub mod enumerator;
pub mod range;
pub mod ranker;

pub use engine::{CoalitionEngine, CoalitionQuery, QueryResult, QueryStats};
pub use enumerator::{Combinations, Enumerator, MajorityBoundSearch, Subset};
pub use range::{combination_count, SizeRange};
pub use ranker::Ranker;
