//! Party registry: the catalog of datasets and the active roster.
//!
//! The registry keeps every dataset in its pristine loaded form and a
//! working copy of the active one. Position updates are recorded as
//! per-party overrides that are re-applied whenever a dataset containing
//! that party becomes active.

use std::collections::{BTreeMap, HashSet};

use crate::dataset::Dataset;
use crate::error::{CoalitionError, Result};
use crate::party::{Party, Position};

/// A dataset identifier as listed to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetEntry {
    pub name: String,
    pub active: bool,
}

/// Holds the catalog of datasets and the single active roster.
///
/// The registry itself is plain data. Callers that share it between
/// requests wrap it in a lock; every mutating method either succeeds
/// completely or leaves the registry untouched.
///
/// # Examples
///
/// ```
/// use coalition_core::{Dataset, Party, PartyRegistry};
///
/// let june = Dataset::new("june", vec![Party::new("A", 80), Party::new("B", 70)]).unwrap();
/// let july = Dataset::new("july", vec![Party::new("A", 60), Party::new("B", 90)]).unwrap();
/// let mut registry = PartyRegistry::new(vec![june, july]).unwrap();
///
/// assert_eq!(registry.active().name(), "june");
/// registry.load("july").unwrap();
/// assert_eq!(registry.active().party("B").unwrap().seats(), 90);
///
/// let moved = registry.update_position("A", 5.0, 0.0).unwrap();
/// assert_eq!(moved.economic(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct PartyRegistry {
    catalog: Vec<Dataset>,
    active: Dataset,
    overrides: BTreeMap<String, Position>,
}

impl PartyRegistry {
    /// Creates a registry whose first dataset is active.
    ///
    /// # Errors
    ///
    /// Returns [`CoalitionError::InvalidInput`] if the catalog is empty or
    /// two datasets share a name.
    pub fn new(catalog: Vec<Dataset>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(catalog.len());
        for dataset in &catalog {
            if !seen.insert(dataset.name()) {
                return Err(CoalitionError::InvalidInput(format!(
                    "dataset '{}' defined twice",
                    dataset.name()
                )));
            }
        }

        let active = catalog
            .first()
            .cloned()
            .ok_or_else(|| CoalitionError::InvalidInput("no datasets available".to_string()))?;

        Ok(Self {
            catalog,
            active,
            overrides: BTreeMap::new(),
        })
    }

    /// Installs previously saved position overrides and applies them to the
    /// active roster.
    pub fn with_overrides(mut self, overrides: BTreeMap<String, Position>) -> Self {
        self.overrides = overrides
            .into_iter()
            .map(|(name, pos)| (name, Position::new(pos.economic, pos.social)))
            .collect();
        self.active = self.apply_overrides(self.active.clone());
        self
    }

    /// The active dataset.
    #[inline]
    pub fn active(&self) -> &Dataset {
        &self.active
    }

    /// A detached copy of the active dataset for query evaluation.
    pub fn snapshot(&self) -> Dataset {
        self.active.clone()
    }

    /// Recorded position overrides, keyed by party name.
    pub fn overrides(&self) -> &BTreeMap<String, Position> {
        &self.overrides
    }

    /// Makes the named dataset active, replacing the roster wholesale.
    pub fn load(&mut self, name: &str) -> Result<&Dataset> {
        let pristine = self
            .catalog
            .iter()
            .find(|d| d.name() == name)
            .cloned()
            .ok_or_else(|| CoalitionError::DatasetNotFound(name.to_string()))?;

        self.active = self.apply_overrides(pristine);
        Ok(&self.active)
    }

    /// Dataset identifiers in catalog order, with the active one flagged.
    pub fn list_datasets(&self) -> Vec<DatasetEntry> {
        self.catalog
            .iter()
            .map(|d| DatasetEntry {
                name: d.name().to_string(),
                active: d.name() == self.active.name(),
            })
            .collect()
    }

    /// Moves a party of the active dataset, clamping into `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// - [`CoalitionError::PartyNotFound`] if the party is not in the
    ///   active dataset.
    /// - [`CoalitionError::InvalidInput`] for NaN coordinates.
    pub fn update_position(&mut self, party: &str, economic: f64, social: f64) -> Result<Party> {
        let position = Position::checked(economic, social)?;
        let target = self
            .active
            .party_mut(party)
            .ok_or_else(|| CoalitionError::PartyNotFound(party.to_string()))?;

        target.set_position(position.economic, position.social)?;
        let updated = target.clone();
        self.overrides.insert(party.to_string(), position);
        Ok(updated)
    }

    fn apply_overrides(&self, mut dataset: Dataset) -> Dataset {
        for (name, pos) in &self.overrides {
            if let Some(party) = dataset.party_mut(name) {
                // Overrides are clamped on insert, so this cannot fail.
                let _ = party.set_position(pos.economic, pos.social);
            }
        }
        dataset
    }
}
