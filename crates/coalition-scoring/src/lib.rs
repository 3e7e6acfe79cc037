//! Coalition Scoring - constraint filtering and coalition scoring
//!
//! This crate provides:
//! - [`ConstraintSet`]: validated exclusion and inclusion rules
//! - [`ConstraintFilter`]: rules compiled against a roster for fast checks
//! - [`compatibility`]: ideological-distance metrics
//! - [`Scorer`]: turns a subset of parties into a scored [`Coalition`]
//!
//! [`Coalition`]: coalition_core::Coalition

pub mod compatibility;
pub mod constraint_set;
pub mod filter;
pub mod scorer;

pub use compatibility::{compatibility, convex_hull, pairwise_distance, MAX_DISTANCE};
pub use constraint_set::ConstraintSet;
pub use filter::{admissible, ConstraintFilter};
pub use scorer::Scorer;
