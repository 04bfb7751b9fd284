//! Sequential pass over the mapping table.

use std::path::Path;

use crate::rewrite::{ensure_backup, update_file, BackupStatus, RewriteError};
use crate::utils::mapping::MappingEntry;

/// What happened to an entry, reported through the progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressAction<'a> {
    Processing,
    BackupCreated,
    Updated,
    /// Missing file, missing pattern or I/O failure
    Failed(&'a RewriteError),
}

/// Progress event for one mapping entry.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    pub file: &'a str,
    pub action: ProgressAction<'a>,
}

/// Counts of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub updated: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(mut self, result: &Result<(), RewriteError>) -> Self {
        match result {
            Ok(()) => self.updated += 1,
            Err(_) => self.failed += 1,
        }
        self
    }

    /// Process exit status: 0 when nothing failed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 { 0 } else { 1 }
    }
}

fn notify<F>(on_progress: &mut Option<F>, progress: Progress)
where
    F: FnMut(Progress),
{
    if let Some(callback) = on_progress {
        callback(progress);
    }
}

/// Rewrite every entry under `root`, in table order.
///
/// Per entry: fail with [`RewriteError::FileMissing`] if the file is absent,
/// otherwise back it up and rewrite it. A failed backup skips the rewrite.
/// Errors never stop the run; they are counted in the returned summary.
pub fn run_updates<F>(
    entries: &[MappingEntry],
    root: &Path,
    mut on_progress: Option<F>,
) -> RunSummary
where
    F: FnMut(Progress),
{
    entries
        .iter()
        .fold(RunSummary::default(), |summary, entry| {
            let mut emit = |action| {
                notify(
                    &mut on_progress,
                    Progress {
                        file: entry.file,
                        action,
                    },
                )
            };

            emit(ProgressAction::Processing);

            let path = root.join(entry.file);
            let result = if !path.exists() {
                Err(RewriteError::FileMissing(entry.file.to_string()))
            } else {
                ensure_backup(&path).and_then(|status| {
                    if let BackupStatus::Created(_) = status {
                        emit(ProgressAction::BackupCreated);
                    }
                    update_file(&path, entry.pattern, entry.asset)
                })
            };

            match &result {
                Ok(()) => emit(ProgressAction::Updated),
                Err(e) => emit(ProgressAction::Failed(e)),
            }
            summary.record(&result)
        })
}
