//! Configuration system for the coalition explorer.
//!
//! Load server and engine settings from TOML or YAML files, and load the
//! dataset catalog (see [`catalog`]).
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use coalition_config::{AppConfig, EnumerationStrategy, RankOrder};
//!
//! let config = AppConfig::from_toml_str(r#"
//!     [server]
//!     port = 8080
//!     datasets_dir = "polls"
//!
//!     [engine]
//!     enumeration = "majority_bound"
//!     ranking = "compatibility_then_seats"
//!     majority_only = true
//!     result_limit = 200
//! "#).unwrap();
//!
//! assert_eq!(config.server.port, 8080);
//! assert_eq!(config.engine.enumeration, EnumerationStrategy::MajorityBound);
//! assert_eq!(config.engine.ranking, RankOrder::CompatibilityThenSeats);
//! assert_eq!(config.engine.result_limit, Some(200));
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use coalition_config::AppConfig;
//!
//! let config = AppConfig::load("coalition.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

pub mod catalog;

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use coalition_core::CompatibilityMetric;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "COALITION_CONFIG";

/// Config file used when [`CONFIG_ENV_VAR`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "coalition.toml";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset error: {0}")]
    Dataset(#[from] coalition_core::CoalitionError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Coalition engine settings.
    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML or YAML file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads the file named by `COALITION_CONFIG`, else `coalition.toml`.
    ///
    /// A missing default file yields the default configuration; a missing
    /// file named explicitly through the environment is an error.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::load(path),
            Err(_) if !Path::new(DEFAULT_CONFIG_FILE).exists() => Ok(Self::default()),
            Err(_) => Self::load(DEFAULT_CONFIG_FILE),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the listening port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    /// Sets the dataset directory.
    pub fn with_datasets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.server.datasets_dir = Some(dir.into());
        self
    }

    /// Replaces the engine configuration.
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,

    /// Port to bind.
    pub port: u16,

    /// Directory of dataset files. The built-in demo polls are used when
    /// unset.
    pub datasets_dir: Option<PathBuf>,

    /// Dataset made active at startup. Defaults to the first in the catalog.
    pub default_dataset: Option<String>,

    /// JSON file holding position overrides across restarts.
    pub positions_file: Option<PathBuf>,

    /// Directory of static presentation assets served at `/`.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            datasets_dir: None,
            default_dataset: None,
            positions_file: None,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Resolves `host:port` to a socket address.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if the host is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("invalid bind address {}:{}", self.host, self.port)))
    }
}

/// Coalition engine configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// How candidate subsets are generated.
    pub enumeration: EnumerationStrategy,

    /// Order of returned coalitions.
    pub ranking: RankOrder,

    /// Compatibility metric.
    pub compatibility: CompatibilityMetric,

    /// Drop coalitions without a majority unless a query says otherwise.
    pub majority_only: bool,

    /// Maximum number of coalitions returned per query.
    pub result_limit: Option<usize>,

    /// Admissible-subset count from which scoring runs in parallel.
    pub parallel_scoring_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enumeration: EnumerationStrategy::default(),
            ranking: RankOrder::default(),
            compatibility: CompatibilityMetric::default(),
            majority_only: false,
            result_limit: None,
            parallel_scoring_threshold: 2048,
        }
    }
}

impl EngineConfig {
    pub fn with_enumeration(mut self, enumeration: EnumerationStrategy) -> Self {
        self.enumeration = enumeration;
        self
    }

    pub fn with_ranking(mut self, ranking: RankOrder) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_compatibility(mut self, metric: CompatibilityMetric) -> Self {
        self.compatibility = metric;
        self
    }

    pub fn with_majority_only(mut self, majority_only: bool) -> Self {
        self.majority_only = majority_only;
        self
    }

    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = Some(limit);
        self
    }
}

/// Subset generation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumerationStrategy {
    /// Every k-combination for k in the size range.
    #[default]
    Exhaustive,

    /// Depth-first branch-and-bound that only yields majority subsets.
    /// Used when the query asks for majorities only.
    MajorityBound,
}

impl fmt::Display for EnumerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumerationStrategy::Exhaustive => write!(f, "Exhaustive"),
            EnumerationStrategy::MajorityBound => write!(f, "MajorityBound"),
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankOrder {
    /// Seats descending, then compatibility descending.
    #[default]
    SeatsThenCompatibility,

    /// Compatibility descending, then seats descending.
    CompatibilityThenSeats,
}

impl fmt::Display for RankOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankOrder::SeatsThenCompatibility => write!(f, "SeatsThenCompatibility"),
            RankOrder::CompatibilityThenSeats => write!(f, "CompatibilityThenSeats"),
        }
    }
}
