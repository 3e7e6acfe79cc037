//! Coalition Core - Domain types for coalition analysis
//!
//! This crate provides the fundamental abstractions shared by the engine:
//! - Parties and their ideological positions
//! - Datasets (polls) and the party registry holding the active one
//! - Exclusion and inclusion rules
//! - Derived coalition values and the compatibility score

pub mod coalition;
pub mod dataset;
pub mod error;
pub mod party;
pub mod registry;
pub mod rule;
pub mod score;

pub use coalition::{Coalition, Member};
pub use dataset::Dataset;
pub use error::{CoalitionError, Result};
pub use party::{clamp_axis, Party, Position};
pub use registry::{DatasetEntry, PartyRegistry};
pub use rule::{Exclusion, Inclusion, PartyPair};
pub use score::{Compatibility, CompatibilityMetric};
