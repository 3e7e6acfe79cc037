//! Explorer session: the registry, the engine and the current selection.

use coalition_config::EngineConfig;
use coalition_core::{Coalition, Dataset, DatasetEntry, Party, PartyRegistry, Result};
use coalition_solver::{CoalitionEngine, CoalitionQuery, QueryResult};
use tracing::info;

/// One explorer session.
///
/// Owns the only mutable state of the system: the registry (active roster
/// and position overrides) and the last selected coalition. Queries borrow
/// it immutably, so a shared session behind a read/write lock never
/// observes a half-applied update.
#[derive(Debug, Clone)]
pub struct Explorer {
    registry: PartyRegistry,
    engine: CoalitionEngine,
    selection: Vec<String>,
}

impl Explorer {
    /// Creates a session with the default engine configuration.
    pub fn new(registry: PartyRegistry) -> Self {
        Self::with_engine(registry, CoalitionEngine::default())
    }

    pub fn with_config(registry: PartyRegistry, config: EngineConfig) -> Self {
        Self::with_engine(registry, CoalitionEngine::new(config))
    }

    pub fn with_engine(registry: PartyRegistry, engine: CoalitionEngine) -> Self {
        Self {
            registry,
            engine,
            selection: Vec::new(),
        }
    }

    #[inline]
    pub fn registry(&self) -> &PartyRegistry {
        &self.registry
    }

    #[inline]
    pub fn engine(&self) -> &CoalitionEngine {
        &self.engine
    }

    /// The active dataset.
    #[inline]
    pub fn active(&self) -> &Dataset {
        self.registry.active()
    }

    pub fn datasets(&self) -> Vec<DatasetEntry> {
        self.registry.list_datasets()
    }

    /// Switches the active dataset. The selection is cleared.
    pub fn load(&mut self, name: &str) -> Result<&Dataset> {
        self.registry.load(name)?;
        self.selection.clear();
        let dataset = self.registry.active();
        info!(
            event = "dataset_loaded",
            dataset = dataset.name(),
            parties = dataset.len(),
            total_seats = dataset.total_seats(),
        );
        Ok(dataset)
    }

    /// Moves a party of the active dataset; coordinates are clamped.
    pub fn update_position(&mut self, party: &str, economic: f64, social: f64) -> Result<Party> {
        let updated = self.registry.update_position(party, economic, social)?;
        info!(
            event = "position_updated",
            party = updated.name(),
            economic = updated.economic(),
            social = updated.social(),
        );
        Ok(updated)
    }

    /// Runs a query against the active dataset.
    pub fn query(&self, query: &CoalitionQuery) -> Result<QueryResult> {
        self.engine.run(self.registry.active(), query)
    }

    /// Records a coalition chosen by name and returns its score.
    ///
    /// Fails with [`coalition_core::CoalitionError::PartyNotFound`] for a
    /// name missing from the active dataset; the previous selection is kept
    /// in that case.
    pub fn select<S: AsRef<str>>(&mut self, names: &[S]) -> Result<Coalition> {
        let coalition = self.engine.evaluate(self.registry.active(), names)?;
        self.selection = coalition.party_names().map(str::to_string).collect();
        Ok(coalition)
    }

    /// Names of the selected coalition, largest party first.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coalition_core::CoalitionError;
    use coalition_test::{three_party_dataset, two_polls};

    fn explorer() -> Explorer {
        Explorer::new(PartyRegistry::new(two_polls()).unwrap())
    }

    #[test]
    fn test_query_sees_position_updates() {
        let mut ex = Explorer::new(PartyRegistry::new(vec![three_party_dataset()]).unwrap());
        let before = ex.query(&CoalitionQuery::new(2, 2)).unwrap();

        ex.update_position("A", 0.9, -0.6).unwrap();
        ex.update_position("A", 0.9, -0.6).unwrap();
        let after = ex.query(&CoalitionQuery::new(2, 2)).unwrap();

        let find = |r: &QueryResult| {
            r.coalitions
                .iter()
                .find(|c| c.contains("A") && c.contains("C"))
                .map(|c| c.compatibility.value())
        };
        assert!(find(&before).unwrap() < 100.0);
        assert_eq!(find(&after), Some(100.0));
    }

    #[test]
    fn test_update_clamps() {
        let mut ex = explorer();
        let moved = ex.update_position("B", 5.0, -3.0).unwrap();
        assert_eq!((moved.economic(), moved.social()), (1.0, -1.0));
        assert_eq!(ex.active().party("B").unwrap().economic(), 1.0);
    }

    #[test]
    fn test_load_switches_roster_and_clears_selection() {
        let mut ex = explorer();
        ex.select(&["A", "C"]).unwrap();
        assert_eq!(ex.selection(), ["C", "A"]);

        let autumn = ex.load("autumn").unwrap();
        assert_eq!(autumn.total_seats(), 150);
        assert!(ex.selection().is_empty());
        assert!(ex.datasets().iter().any(|d| d.name == "autumn" && d.active));

        assert_eq!(
            ex.load("winter").unwrap_err(),
            CoalitionError::DatasetNotFound("winter".to_string())
        );
        assert_eq!(ex.active().name(), "autumn");
    }

    #[test]
    fn test_overrides_follow_party_across_datasets() {
        let mut ex = explorer();
        ex.update_position("A", 0.0, 0.0).unwrap();
        ex.load("autumn").unwrap();
        let a = ex.active().party("A").unwrap();
        assert_eq!((a.economic(), a.social()), (0.0, 0.0));
    }

    #[test]
    fn test_select_unknown_keeps_previous() {
        let mut ex = explorer();
        ex.select(&["B"]).unwrap();
        assert!(matches!(
            ex.select(&["B", "E"]),
            Err(CoalitionError::PartyNotFound(_))
        ));
        assert_eq!(ex.selection(), ["B"]);
    }

    #[test]
    fn test_update_unknown_party() {
        let mut ex = explorer();
        assert_eq!(
            ex.update_position("E", 0.0, 0.0).unwrap_err(),
            CoalitionError::PartyNotFound("E".to_string())
        );
    }
}
