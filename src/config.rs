//! Planner configuration.
//!
//! Every field is optional on the wire; missing fields take the defaults
//! below, so an empty JSON object is a valid config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Storage key holding the serialized loadout list.
pub const DEFAULT_LOADOUTS_KEY: &str = "dofus-panoplies-utilisateur";

/// Storage key holding the serialized price table.
pub const DEFAULT_PRICES_KEY: &str = "dofus-prix-equipements";

/// Base URL effect icon stems are appended to.
pub const DEFAULT_ICON_BASE_URL: &str = "https://dofusdb.fr/icons/effects/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// When false, stores never touch storage and live only for the session.
    pub persistence_enabled: bool,
    pub loadouts_key: String,
    pub prices_key: String,
    pub icon_base_url: String,
    /// `EnvFilter` directive used by [`crate::logging::init_tracing`].
    pub log_filter: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            persistence_enabled: true,
            loadouts_key: DEFAULT_LOADOUTS_KEY.to_string(),
            prices_key: DEFAULT_PRICES_KEY.to_string(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl PlannerConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Config for a context without storage (tests, server-side rendering).
    pub fn in_memory() -> Self {
        Self {
            persistence_enabled: false,
            ..Self::default()
        }
    }
}
