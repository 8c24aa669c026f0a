//! Engine configuration, loaded from TOML.
//!
//! ```toml
//! history_dir = ".saju"
//! history_limit = 50
//! reference_year = 2024
//! ```
//!
//! Every field is optional.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::history::{DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT};
use crate::pipeline::ChartOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory of the file-backed history storage.
    pub history_dir: PathBuf,
    /// Upper bound on stored readings, `1..=MAX_HISTORY_LIMIT`.
    pub history_limit: usize,
    /// Year used to derive the current age; the current UTC year when unset.
    pub reference_year: Option<i32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_dir: PathBuf::from(".saju"),
            history_limit: DEFAULT_HISTORY_LIMIT,
            reference_year: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if !(1..=MAX_HISTORY_LIMIT).contains(&self.history_limit) {
            return Err(ConfigError::HistoryLimit {
                path: path.to_path_buf(),
                limit: self.history_limit,
                max: MAX_HISTORY_LIMIT,
            });
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content, path)
    }

    /// Load `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// The configured reference year, or the current UTC year.
    pub fn resolved_reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| chrono::Utc::now().year())
    }

    /// Chart options with the reference year resolved.
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions { reference_year: Some(self.resolved_reference_year()), current_age: None }
    }
}
