use super::DataStore;
use crate::directory::Directory;
use crate::error::Result;

/// In-memory storage for testing.
/// Keeps the serialized backup, so loads go through the same serde path as files.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    backup: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `directory` as its backup.
    pub fn with_directory(directory: &Directory) -> Result<Self> {
        let mut store = Self::new();
        store.save(directory)?;
        store.saves = 0;
        Ok(store)
    }

    /// A store whose backup is raw text, e.g. something that fails to parse.
    pub fn with_raw_backup(raw: impl Into<String>) -> Self {
        Self {
            backup: Some(raw.into()),
            saves: 0,
        }
    }

    /// How many times [`DataStore::save`] has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn has_backup(&self) -> bool {
        self.backup.is_some()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Directory>> {
        match &self.backup {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        self.backup = Some(serde_json::to_string(directory)?);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
