use crate::NewsgaugeError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default number of recent queries kept per session.
pub const DEFAULT_HISTORY_CAP: usize = 10;

/// Engine configuration.
///
/// `history_cap` bounds both the recent-query list and the number of history
/// entries considered when rebuilding visible results. `store_capacity`
/// bounds the result store; `None` keeps every query for the life of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub history_cap: usize,
    pub store_capacity: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_cap: DEFAULT_HISTORY_CAP,
            store_capacity: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NewsgaugeError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| NewsgaugeError::Io(format!("reading {}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, NewsgaugeError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the history cap, re-validating the result.
    pub fn with_history_cap(mut self, cap: usize) -> Result<Self, NewsgaugeError> {
        self.history_cap = cap;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), NewsgaugeError> {
        if self.history_cap == 0 {
            return Err(NewsgaugeError::Config(
                "history_cap must be at least 1".to_string(),
            ));
        }
        if self.store_capacity == Some(0) {
            return Err(NewsgaugeError::Config(
                "store_capacity must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
