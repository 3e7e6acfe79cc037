//! Shared test fixtures for coalition crates.
//!
//! This crate provides rosters and pure helpers for testing. It depends only
//! on `coalition-core` so every other crate can use it as a dev-dependency.
//!
//! - [`scenario`] - hand-written rosters with known answers
//! - [`random`] - seeded random rosters for property checks
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! coalition-test = { workspace = true }
//! ```
//!
//! ```
//! use coalition_test::scenario::three_party_dataset;
//!
//! let ds = three_party_dataset();
//! assert_eq!(ds.total_seats(), 150);
//! ```

pub mod random;
pub mod scenario;

pub use random::random_dataset;
pub use scenario::{dutch_chamber, names, three_party_dataset, two_polls};
