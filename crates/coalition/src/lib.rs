//! Coalition explorer.
//!
//! Enumerate every coalition of parties within a size range, drop those that
//! break exclusion or inclusion rules, score the rest and rank them.
//!
//! # Example
//!
//! ```rust
//! use coalition::prelude::*;
//!
//! let poll = Dataset::new("poll", vec![
//!     Party::new("A", 50).with_position(-0.8, 0.5),
//!     Party::new("B", 40).with_position(0.1, 0.1),
//!     Party::new("C", 60).with_position(0.9, -0.6),
//! ]).unwrap();
//!
//! let mut explorer = Explorer::new(PartyRegistry::new(vec![poll]).unwrap());
//! let rules = ConstraintSet::from_lists(&[vec!["A".into(), "B".into()]], &[]).unwrap();
//! let result = explorer.query(&CoalitionQuery::new(2, 2).with_constraints(rules)).unwrap();
//!
//! assert_eq!(result.total_count, 2);
//! assert_eq!(result.coalitions[0].seats, 110);
//!
//! let picked = explorer.select(&["B", "C"]).unwrap();
//! assert!(picked.is_majority);
//! ```

// Domain types
pub use coalition_core::{
    clamp_axis, Coalition, CoalitionError, Compatibility, CompatibilityMetric, Dataset,
    DatasetEntry, Exclusion, Inclusion, Member, Party, PartyPair, PartyRegistry, Position, Result,
};

// Rules and scoring
pub use coalition_scoring::{admissible, ConstraintFilter, ConstraintSet, Scorer};

// Enumeration and the query engine
pub use coalition_solver::{
    CoalitionEngine, CoalitionQuery, Enumerator, QueryResult, QueryStats, Ranker, SizeRange,
};

// Configuration and dataset loading
pub use coalition_config::{catalog, AppConfig, ConfigError, EngineConfig};

mod explorer;
pub use explorer::Explorer;

/// Installs the colored console logger. See [`coalition_console::init`].
#[cfg(feature = "console")]
pub use coalition_console::init as init_console;

pub mod prelude {
    pub use super::{
        Coalition, CoalitionError, Dataset, Exclusion, Inclusion, Party, PartyRegistry,
    };
    pub use super::{CoalitionEngine, CoalitionQuery, ConstraintSet, Explorer, QueryResult};
    pub use super::{AppConfig, EngineConfig};
}
