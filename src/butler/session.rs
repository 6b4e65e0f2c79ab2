//! # Session
//!
//! The explicit owner of everything a running assistant works with: the
//! [`Directory`], the [`DataStore`] it is saved to, the [`Prompt`] answers come from,
//! and the [`ButlerConfig`]. A session starts with an empty directory; [`Session::load`]
//! may replace it wholesale and [`Session::save`] writes it out.
//!
//! `Session` is generic over both the store and the prompt, so the same command table
//! runs against files and a terminal in production and against
//! [`InMemoryStore`](crate::store::memory::InMemoryStore) and
//! [`ScriptedPrompt`](crate::prompt::fixtures::ScriptedPrompt) in tests.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::ButlerConfig;
use crate::directory::Directory;
use crate::error::Result;
use crate::prompt::Prompt;
use crate::store::DataStore;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// No contacts yet; nothing was written.
    NothingToSave,
}

pub struct Session<S: DataStore, P: Prompt> {
    pub(crate) directory: Directory,
    pub(crate) store: S,
    pub(crate) prompt: P,
    pub(crate) config: ButlerConfig,
}

impl<S: DataStore, P: Prompt> Session<S, P> {
    pub fn new(store: S, prompt: P, config: ButlerConfig) -> Self {
        Self {
            directory: Directory::new(),
            store,
            prompt,
            config,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut Directory {
        &mut self.directory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    pub fn config(&self) -> &ButlerConfig {
        &self.config
    }

    /// Replaces the directory with the saved one. Returns whether anything was loaded;
    /// a missing or unreadable backup leaves the current directory as it was.
    pub fn load(&mut self) -> bool {
        match self.store.load() {
            Ok(Some(directory)) => {
                self.directory = directory;
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!(location = %self.store.location(), error = %e, "ignoring unreadable backup");
                false
            }
        }
    }

    /// Writes the directory out, unless it has no contacts. Notices alone are never saved.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        if !self.directory.has_records() {
            debug!("no contacts, skipping save");
            return Ok(SaveOutcome::NothingToSave);
        }
        self.store.save(&self.directory)?;
        Ok(SaveOutcome::Saved)
    }

    /// Runs the command typed as `phrase`. Failures a user can recover from come back
    /// as error messages; only a closed input is returned as `Err`.
    pub fn execute(&mut self, phrase: &str) -> Result<CmdResult> {
        let table = commands::table::<S, P>();
        match table.dispatch(self, phrase) {
            Ok(result) => Ok(result),
            Err(e) if e.is_recoverable() => {
                debug!(phrase, error = %e, "command failed");
                Ok(CmdResult::default().with_message(CmdMessage::error(e.to_string())))
            }
            Err(e) => Err(e),
        }
    }
}
