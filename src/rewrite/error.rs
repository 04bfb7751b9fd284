use std::fmt;

/// Error type for rewrite operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// Target file does not exist under the project root
    FileMissing(String),
    /// Match pattern has no occurrence in the file
    PatternNotFound(String),
    /// Match pattern is not valid regex syntax
    InvalidPattern { pattern: String, reason: String },
    /// Read, write or backup failed for a file
    Io { file: String, reason: String },
    /// Project root could not be determined
    RootNotFound { reason: String },
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::FileMissing(file) => {
                write!(f, "file not found: '{}'", file)
            }
            RewriteError::PatternNotFound(file) => {
                write!(f, "pattern not found in '{}'", file)
            }
            RewriteError::InvalidPattern { pattern, reason } => {
                write!(f, "invalid pattern '{}': {}", pattern, reason)
            }
            RewriteError::Io { file, reason } => {
                write!(f, "{}: {}", file, reason)
            }
            RewriteError::RootNotFound { reason } => {
                write!(f, "cannot determine project root: {}", reason)
            }
        }
    }
}

impl std::error::Error for RewriteError {}
