use std::env;
use std::path::{Path, PathBuf};

use crate::rewrite::{
    run_updates, Progress, ProgressAction, RewriteError, RunSummary, BACKUP_EXTENSION,
};
use crate::utils::mapping::VIDEO_UPDATES;

const RULE: &str = "==================================================";

/// Resolve the project root the mapping table paths are relative to.
///
/// Without an override this is one level above the directory holding the
/// running executable.
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf, RewriteError> {
    if let Some(root) = root {
        return Ok(root.to_path_buf());
    }

    let exe = env::current_exe().map_err(|e| RewriteError::RootNotFound {
        reason: e.to_string(),
    })?;
    root_from_exe(&exe)
}

fn root_from_exe(exe: &Path) -> Result<PathBuf, RewriteError> {
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| RewriteError::RootNotFound {
            reason: format!("'{}' has no parent directory", exe.display()),
        })
}

/// Report text for one progress event. Entries that reached the File
/// Updater end with a blank line.
fn format_progress(p: Progress) -> String {
    match p.action {
        ProgressAction::Processing => format!("Processing: {}", p.file),
        ProgressAction::BackupCreated => {
            format!("  💾 Backup created: {}{}", p.file, BACKUP_EXTENSION)
        }
        ProgressAction::Updated => format!("  SUCCESS: Updated {}\n", p.file),
        ProgressAction::Failed(RewriteError::FileMissing(_)) => {
            format!("  WARNING:  File not found: {}", p.file)
        }
        ProgressAction::Failed(RewriteError::PatternNotFound(_)) => {
            format!("  WARNING:  Pattern not found in {}\n", p.file)
        }
        // The entry path is already on the line
        ProgressAction::Failed(RewriteError::Io { reason, .. }) => {
            format!("  ERROR: Error updating {}: {}\n", p.file, reason)
        }
        ProgressAction::Failed(e) => format!("  ERROR: Error updating {}: {}\n", p.file, e),
    }
}

fn print_progress(p: Progress) {
    println!("{}", format_progress(p));
}

fn print_summary(summary: &RunSummary) {
    println!("{}", RULE);
    println!("Summary");
    println!("{}", RULE);
    println!("Successfully updated: {}", summary.updated);
    println!("Failed or skipped: {}", summary.failed);
    println!();

    if summary.updated > 0 {
        println!("SUCCESS: Next steps:");
        println!("  1. Run the video re-encoding script:");
        println!("     bash scripts/reencode-videos-1080p.sh");
        println!("     OR");
        println!("     scripts\\reencode-videos-1080p.bat");
        println!("  2. Test the pages in browser");
        println!("  3. Run: npm run build");
    }
}

/// Rewrite every page in the mapping table under `root` and print the report.
pub fn run(root: &Path) -> RunSummary {
    println!("{}", RULE);
    println!("Responsive Video Update Script");
    println!("{}", RULE);
    println!();
    println!("Working directory: {}", root.display());
    println!();

    let summary = run_updates(VIDEO_UPDATES, root, Some(print_progress));

    print_summary(&summary);
    summary
}
