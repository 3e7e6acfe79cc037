//! Derived coalition values.
//!
//! Coalitions are computed per query and never stored.

use crate::score::Compatibility;

/// A coalition member with its seat count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub seats: u32,
}

/// A scored coalition.
///
/// Members are ordered by seats descending, ties in roster order.
#[derive(Debug, Clone, PartialEq)]
pub struct Coalition {
    pub members: Vec<Member>,
    /// Sum of member seats.
    pub seats: u64,
    /// Unweighted mean economic position.
    pub avg_economic: f64,
    /// Unweighted mean social position.
    pub avg_social: f64,
    pub compatibility: Compatibility,
    /// Whether `seats` exceeds half the chamber.
    pub is_majority: bool,
}

impl Coalition {
    /// Number of member parties.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn party_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name == name)
    }
}
