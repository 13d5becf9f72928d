//! Interpreter configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reported by `recents` when there is nothing to list
    pub empty_sentinel: String,
    /// Accept the upper-case keywords of older transcripts
    pub legacy_keywords: bool,
    /// Maximum number of commands accepted in one batch
    pub max_commands: Option<usize>,
}

impl Config {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.empty_sentinel.is_empty() || self.empty_sentinel.contains(char::is_whitespace) {
            return Err(CoreError::Config(format!(
                "empty_sentinel must be a single non-empty token, got {:?}",
                self.empty_sentinel
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            empty_sentinel: "EMPTY".to_string(),
            legacy_keywords: true,
            max_commands: None,
        }
    }
}
