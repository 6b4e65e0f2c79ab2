use super::DataStore;
use crate::directory::Directory;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the directory as pretty-printed JSON in one backup file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Directory>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no backup file");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let directory: Directory = serde_json::from_str(&content)?;
        debug!(
            path = %self.path.display(),
            records = directory.record_count(),
            notices = directory.notice_count(),
            "loaded backup"
        );
        Ok(Some(directory))
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        self.ensure_parent()?;

        // Written beside the target, then renamed over it
        let tmp = self.path.with_extension("tmp");
        let content = serde_json::to_string_pretty(directory)?;
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "saved backup");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
