use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{DEFAULT_PATIENT_NAME, LOG_FILE_ENV};
use crate::error::{NurseError, Result};

/// Form configuration that can be loaded from a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormConfig {
    /// Name shown in the read-only summary
    pub patient_name: String,

    /// Write logs to this file. Logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            patient_name: DEFAULT_PATIENT_NAME.to_string(),
            log_file: None,
        }
    }
}

impl FormConfig {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| NurseError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| NurseError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// `~/.config/nurse/config.json` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nurse").join("config.json"))
    }

    /// Load from `path` if given, else from the default location if that file
    /// exists, else defaults. An explicit path that cannot be read is an error.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };
        let config = Self::load(&path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Fill `log_file` from the environment when the file left it unset
    pub fn with_env(mut self) -> Self {
        if self.log_file.is_none() {
            self.log_file = std::env::var_os(LOG_FILE_ENV).map(PathBuf::from);
        }
        self
    }
}
