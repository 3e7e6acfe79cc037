//! Error types for coalition analysis

use thiserror::Error;

/// Main error type for coalition engine operations.
///
/// Every variant is local to a single request: returning one never leaves
/// the registry or a constraint set partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoalitionError {
    /// Party-count bounds are zero or out of order
    #[error("Invalid range: min_parties ({min}) must be at least 1 and at most max_parties ({max})")]
    InvalidRange { min: usize, max: usize },

    /// Unknown dataset identifier
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    /// Unknown party name in the active dataset
    #[error("Party not found: {0}")]
    PartyNotFound(String),

    /// Rule duplicates an existing rule or contradicts one of the other kind
    #[error("Constraint conflict: {0}")]
    ConstraintConflict(String),

    /// Malformed input rejected at the boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for coalition operations
pub type Result<T> = std::result::Result<T, CoalitionError>;
