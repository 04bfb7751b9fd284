use std::fs;
use std::path::Path;

use regex::{NoExpand, Regex};

use crate::rewrite::RewriteError;
use crate::utils::template::render_responsive_sources;

/// Replace every match of `pattern` in the file at `path` with the responsive
/// source block for `asset`.
///
/// The file is only written when the pattern matches at least once.
pub fn update_file(path: &Path, pattern: &str, asset: &str) -> Result<(), RewriteError> {
    let file = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| RewriteError::Io {
        file: file.clone(),
        reason: format!("failed to read file: {}", e),
    })?;

    let re = Regex::new(pattern).map_err(|e| RewriteError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    if !re.is_match(&content) {
        return Err(RewriteError::PatternNotFound(file));
    }

    let replacement = render_responsive_sources(asset);
    let updated = re.replace_all(&content, NoExpand(&replacement));

    fs::write(path, updated.as_bytes()).map_err(|e| RewriteError::Io {
        file,
        reason: format!("failed to write file: {}", e),
    })?;

    Ok(())
}
