//! One-time backups of page files before they are rewritten.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::rewrite::{RewriteError, BACKUP_EXTENSION};

/// Result of [`ensure_backup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupStatus {
    /// A new backup was written at this path
    Created(PathBuf),
    /// A backup from an earlier run was left untouched
    AlreadyExists(PathBuf),
}

/// Sibling backup location for `path` (`<path>.backup`).
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_EXTENSION);
    PathBuf::from(name)
}

/// Copy `path` to its backup location unless a backup already exists.
///
/// An existing backup is never overwritten, so it keeps the content the file
/// had before it was first rewritten, even across repeated runs.
pub fn ensure_backup(path: &Path) -> Result<BackupStatus, RewriteError> {
    let backup = backup_path(path);
    if backup.exists() {
        return Ok(BackupStatus::AlreadyExists(backup));
    }

    fs::copy(path, &backup).map_err(|e| RewriteError::Io {
        file: path.display().to_string(),
        reason: format!("failed to create backup: {}", e),
    })?;

    Ok(BackupStatus::Created(backup))
}
