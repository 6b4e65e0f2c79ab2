//! # Storage Layer
//!
//! Persistence for a whole [`Directory`]. There is no incremental storage: a save
//! writes every record and notice, a load replaces the session's directory outright.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON backup file (`backup.dat` by default)
//! - [`memory::InMemoryStore`]: keeps the serialized backup in memory, for tests
//!
//! Both go through the same serde representation, so a round trip through the memory
//! store exercises exactly what the file store writes.

use crate::directory::Directory;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for directory persistence.
pub trait DataStore {
    /// Read the saved directory. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Directory>>;

    /// Replace the saved directory with `directory`.
    fn save(&mut self, directory: &Directory) -> Result<()>;

    /// Human-readable location of the backup, for messages.
    fn location(&self) -> String;
}
