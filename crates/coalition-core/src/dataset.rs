//! Datasets (polls): a named roster with a fixed chamber size.

use std::collections::HashSet;

use crate::error::{CoalitionError, Result};
use crate::party::Party;

/// A named party roster.
///
/// The chamber size is the sum of all party seats, including parties that
/// hold none. Party names are unique within a dataset.
///
/// # Examples
///
/// ```
/// use coalition_core::{Dataset, Party};
///
/// let poll = Dataset::new("june", vec![
///     Party::new("A", 50),
///     Party::new("B", 40),
///     Party::new("C", 60),
/// ]).unwrap();
///
/// assert_eq!(poll.total_seats(), 150);
/// assert_eq!(poll.majority_threshold(), 76);
/// assert!(poll.is_majority(76));
/// assert!(!poll.is_majority(75));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    parties: Vec<Party>,
}

impl Dataset {
    /// Creates a dataset, rejecting empty rosters and duplicate names.
    pub fn new(name: impl Into<String>, parties: Vec<Party>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoalitionError::InvalidInput(
                "dataset name must not be empty".to_string(),
            ));
        }
        if parties.is_empty() {
            return Err(CoalitionError::InvalidInput(format!(
                "dataset '{}' has no parties",
                name
            )));
        }

        let mut seen = HashSet::with_capacity(parties.len());
        for party in &parties {
            if !seen.insert(party.name()) {
                return Err(CoalitionError::InvalidInput(format!(
                    "dataset '{}' lists party '{}' twice",
                    name,
                    party.name()
                )));
            }
        }

        Ok(Self { name, parties })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    /// Roster index of the named party.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.parties.iter().position(|p| p.name() == name)
    }

    pub fn party(&self, name: &str) -> Option<&Party> {
        self.parties.iter().find(|p| p.name() == name)
    }

    pub(crate) fn party_mut(&mut self, name: &str) -> Option<&mut Party> {
        self.parties.iter_mut().find(|p| p.name() == name)
    }

    /// Total chamber size.
    pub fn total_seats(&self) -> u64 {
        self.parties.iter().map(|p| u64::from(p.seats())).sum()
    }

    /// Smallest seat count that is a strict majority.
    pub fn majority_threshold(&self) -> u64 {
        self.total_seats() / 2 + 1
    }

    /// Whether `seats` strictly exceeds half the chamber.
    #[inline]
    pub fn is_majority(&self, seats: u64) -> bool {
        seats * 2 > self.total_seats()
    }

    /// Roster indices of parties holding at least one seat, in roster order.
    pub fn eligible_indices(&self) -> Vec<usize> {
        self.parties
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_eligible())
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Party> {
        vec![
            Party::new("A", 50),
            Party::new("B", 0),
            Party::new("C", 61),
        ]
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Dataset::new("dup", vec![Party::new("A", 1), Party::new("A", 2)]).unwrap_err();
        assert!(matches!(err, CoalitionError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert!(Dataset::new("empty", Vec::new()).is_err());
    }

    #[test]
    fn test_odd_chamber_threshold() {
        let ds = Dataset::new("odd", roster()).unwrap();
        assert_eq!(ds.total_seats(), 111);
        assert_eq!(ds.majority_threshold(), 56);
        assert!(ds.is_majority(56));
        assert!(!ds.is_majority(55));
    }

    #[test]
    fn test_eligible_skips_zero_seats() {
        let ds = Dataset::new("z", roster()).unwrap();
        assert_eq!(ds.eligible_indices(), vec![0, 2]);
        assert_eq!(ds.index_of("C"), Some(2));
        assert!(ds.party("B").is_some());
    }
}
