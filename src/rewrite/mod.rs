pub mod backup;
mod constants;
mod error;
pub mod run;
pub mod update;

// Re-export public items
pub use backup::{backup_path, ensure_backup, BackupStatus};
pub use constants::{
    BACKUP_EXTENSION, DESKTOP_MIN_WIDTH_PX, DESKTOP_VIDEO_DIR, FALLBACK_TEXT, MOBILE_VIDEO_DIR,
    VIDEO_MIME_TYPE,
};
pub use error::RewriteError;
pub use run::{run_updates, Progress, ProgressAction, RunSummary};
pub use update::update_file;
