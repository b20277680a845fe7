//! @acp:module "Errors"
//! @acp:summary "Error types for note output"
//! @acp:domain cli
//! @acp:layer utility
//!
//! Only the filesystem side of the generator can fail. Selection and
//! formatting work on static, non-empty lists and have no error path.

use std::path::PathBuf;

/// Errors raised while writing a note to disk
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to check whether {path} exists: {source}")]
    ExistenceCheck {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NoteError {
    /// Path the failed operation was working on
    pub fn path(&self) -> &std::path::Path {
        match self {
            NoteError::CreateDir { path, .. }
            | NoteError::ExistenceCheck { path, .. }
            | NoteError::Write { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, NoteError>;
