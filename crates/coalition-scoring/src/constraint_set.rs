//! Validated collection of exclusion and inclusion rules.

use coalition_core::{CoalitionError, Dataset, Exclusion, Inclusion, Result};

/// The user's exclusion and inclusion rules.
///
/// Insertion rejects duplicates and rules that name the same pair as a rule
/// of the other kind. A rejected insertion leaves the set unchanged.
///
/// # Examples
///
/// ```
/// use coalition_core::{Exclusion, Inclusion};
/// use coalition_scoring::ConstraintSet;
///
/// let mut rules = ConstraintSet::new();
/// rules.add_exclusion(Exclusion::pair("A", "B").unwrap()).unwrap();
///
/// // Same unordered pair as an inclusion is a conflict.
/// assert!(rules.add_inclusion(Inclusion::new("B", "A").unwrap()).is_err());
/// assert_eq!(rules.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    exclusions: Vec<Exclusion>,
    inclusions: Vec<Inclusion>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from request lists, validating every rule in order.
    ///
    /// Exclusions are inserted first, then inclusions.
    pub fn from_lists(exclusions: &[Vec<String>], inclusions: &[Vec<String>]) -> Result<Self> {
        let mut set = Self::new();
        for names in exclusions {
            set.add_exclusion(Exclusion::from_names(names)?)?;
        }
        for names in inclusions {
            set.add_inclusion(Inclusion::from_names(names)?)?;
        }
        Ok(set)
    }

    /// Adds an exclusion.
    ///
    /// # Errors
    ///
    /// [`CoalitionError::ConstraintConflict`] if the rule is already present
    /// or an inclusion names the same pair.
    pub fn add_exclusion(&mut self, exclusion: Exclusion) -> Result<()> {
        if self.exclusions.contains(&exclusion) {
            return Err(CoalitionError::ConstraintConflict(format!(
                "duplicate rule: {}",
                exclusion
            )));
        }
        if let Exclusion::Pair(pair) = &exclusion {
            if let Some(existing) = self.inclusions.iter().find(|inc| inc.pair() == pair) {
                return Err(CoalitionError::ConstraintConflict(format!(
                    "{} contradicts {}",
                    exclusion, existing
                )));
            }
        }
        self.exclusions.push(exclusion);
        Ok(())
    }

    /// Adds an inclusion.
    ///
    /// # Errors
    ///
    /// [`CoalitionError::ConstraintConflict`] if the rule is already present
    /// or an exclusion names the same pair.
    pub fn add_inclusion(&mut self, inclusion: Inclusion) -> Result<()> {
        if self.inclusions.contains(&inclusion) {
            return Err(CoalitionError::ConstraintConflict(format!(
                "duplicate rule: {}",
                inclusion
            )));
        }
        let conflicting = self.exclusions.iter().find(|exc| match exc {
            Exclusion::Pair(pair) => pair == inclusion.pair(),
            Exclusion::Party(_) => false,
        });
        if let Some(existing) = conflicting {
            return Err(CoalitionError::ConstraintConflict(format!(
                "{} contradicts {}",
                inclusion, existing
            )));
        }
        self.inclusions.push(inclusion);
        Ok(())
    }

    #[inline]
    pub fn exclusions(&self) -> &[Exclusion] {
        &self.exclusions
    }

    #[inline]
    pub fn inclusions(&self) -> &[Inclusion] {
        &self.inclusions
    }

    pub fn len(&self) -> usize {
        self.exclusions.len() + self.inclusions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exclusions.is_empty() && self.inclusions.is_empty()
    }

    /// Checks that every referenced party exists in the dataset.
    ///
    /// # Errors
    ///
    /// [`CoalitionError::PartyNotFound`] for the first unknown name.
    pub fn validate_parties(&self, dataset: &Dataset) -> Result<()> {
        let names = self
            .exclusions
            .iter()
            .flat_map(|e| e.names())
            .chain(self.inclusions.iter().flat_map(|i| i.names()));
        for name in names {
            if dataset.party(name).is_none() {
                return Err(CoalitionError::PartyNotFound(name.to_string()));
            }
        }
        Ok(())
    }
}
