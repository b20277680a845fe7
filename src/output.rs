//! @acp:module "Note Output"
//! @acp:summary "Write a note once, never overwrite"
//! @acp:domain generation
//! @acp:layer io
//!
//! Notes are write-once. An existing file at the target path is left alone,
//! which is what keeps reruns on the same day idempotent.

use std::fs::{DirBuilder, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::{NoteError, Result};

/// Directory mode for created note directories (before umask)
pub const DIR_MODE: u32 = 0o755;

/// File mode for written notes (before umask)
pub const FILE_MODE: u32 = 0o644;

/// What `write_if_absent` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was created with the given content
    Created,
    /// A file already existed; nothing was written
    Skipped,
}

/// Write `content` to `path` unless something already exists there.
///
/// Missing parent directories are created. The file is opened with
/// create-new semantics so a file that appears after the existence check
/// is still never truncated.
pub fn write_if_absent(path: &Path, content: &str) -> Result<WriteOutcome> {
    let exists = path.try_exists().map_err(|source| NoteError::ExistenceCheck {
        path: path.to_path_buf(),
        source,
    })?;
    if exists {
        tracing::debug!("Note already exists: {}", path.display());
        return Ok(WriteOutcome::Skipped);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    let mut file = match open_new(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!("Note appeared before write: {}", path.display());
            return Ok(WriteOutcome::Skipped);
        }
        Err(source) => {
            return Err(NoteError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    file.write_all(content.as_bytes())
        .map_err(|source| NoteError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(WriteOutcome::Created)
}

fn create_dir_all(dir: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(dir).map_err(|source| NoteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn open_new(path: &Path) -> std::io::Result<std::fs::File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options.open(path)
}
