use crate::error::{ButlerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "butler.json";
pub const DEFAULT_BACKUP_FILE: &str = "backup.dat";
pub const BINARY_NAME: &str = "butler";

/// Configuration for butler, stored as `butler.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ButlerConfig {
    /// Backup file name, relative to the data directory
    #[serde(default = "default_backup_file")]
    pub backup_file: String,

    /// Restore the backup when a session starts
    #[serde(default = "default_load_on_start")]
    pub load_on_start: bool,

    /// File names `sort files` never moves
    #[serde(default = "default_ignored_files")]
    pub ignored_files: Vec<String>,
}

fn default_backup_file() -> String {
    DEFAULT_BACKUP_FILE.to_string()
}

fn default_load_on_start() -> bool {
    true
}

fn default_ignored_files() -> Vec<String> {
    vec![BINARY_NAME.to_string(), DEFAULT_BACKUP_FILE.to_string()]
}

impl Default for ButlerConfig {
    fn default() -> Self {
        Self {
            backup_file: default_backup_file(),
            load_on_start: default_load_on_start(),
            ignored_files: default_ignored_files(),
        }
    }
}

impl ButlerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ButlerConfig = serde_json::from_str(&content)
            .map_err(|e| ButlerError::Config(format!("{}: {}", config_path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn backup_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.backup_file)
    }

    fn validate(&self) -> Result<()> {
        if self.backup_file.trim().is_empty() {
            return Err(ButlerError::Config("backup_file cannot be empty".to_string()));
        }
        Ok(())
    }
}
