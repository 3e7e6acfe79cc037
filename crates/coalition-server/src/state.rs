//! Shared application state.

use std::sync::Arc;

use coalition::catalog::{builtin_catalog, load_catalog};
use coalition::{AppConfig, ConfigError, Explorer, PartyRegistry};
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::positions::PositionStore;

/// State shared by every handler.
///
/// Queries take the read lock, updates take the write lock, so a query
/// never sees a half-applied position change.
#[derive(Clone)]
pub struct AppState {
    explorer: Arc<RwLock<Explorer>>,
    positions: Option<Arc<PositionStore>>,
}

impl AppState {
    pub fn new(explorer: Explorer) -> Self {
        Self {
            explorer: Arc::new(RwLock::new(explorer)),
            positions: None,
        }
    }

    /// Saves overrides to `store` after each position update.
    pub fn with_positions(mut self, store: PositionStore) -> Self {
        self.positions = Some(Arc::new(store));
        self
    }

    /// Builds the state described by `config`.
    ///
    /// Loads the catalog from `datasets_dir` (the built-in demo polls when
    /// unset), re-applies saved position overrides and activates
    /// `default_dataset`. An unreadable positions file is logged and
    /// ignored.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let catalog = match &config.server.datasets_dir {
            Some(dir) => load_catalog(dir)?,
            None => builtin_catalog(),
        };
        let datasets = catalog.len();

        let store = config.server.positions_file.as_ref().map(PositionStore::new);
        let overrides = match &store {
            Some(store) => store.load().unwrap_or_else(|e| {
                warn!(error = %e, path = %store.path().display(), "ignoring unreadable positions file");
                Default::default()
            }),
            None => Default::default(),
        };

        let mut registry = PartyRegistry::new(catalog)?.with_overrides(overrides);
        if let Some(name) = &config.server.default_dataset {
            registry.load(name)?;
        }
        info!(
            event = "catalog_loaded",
            datasets = datasets,
            dataset = registry.active().name(),
        );

        let state = Self::new(Explorer::with_config(registry, config.engine.clone()));
        Ok(match store {
            Some(store) => state.with_positions(store),
            None => state,
        })
    }

    pub fn explorer(&self) -> &RwLock<Explorer> {
        &self.explorer
    }

    pub fn positions(&self) -> Option<&Arc<PositionStore>> {
        self.positions.as_ref()
    }
}
