use crate::fields::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ButlerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact \"{0}\" already exists")]
    DuplicateKey(String),

    #[error("Note with hashtag {0} already exists")]
    DuplicateTag(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid folder path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Input closed")]
    InputClosed,
}

impl ButlerError {
    /// Errors a command can report and carry on from. Anything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ButlerError::InputClosed)
    }
}

pub type Result<T> = std::result::Result<T, ButlerError>;
