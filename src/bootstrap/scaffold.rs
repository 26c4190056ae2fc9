//! Workspace scaffolding — idempotent creation of the working directories.

use std::path::PathBuf;

use crate::error::BootstrapError;

/// Create each declared directory if it is absent.
///
/// Pre-existing directories and their contents are left untouched; ordering
/// among the directories does not matter. The original launcher swallowed
/// creation failures — here they are surfaced, since a bootstrap that cannot
/// create `logs/` cannot honor its own "see the log artifact" contract.
///
/// # Errors
///
/// Returns `ScaffoldFailed` naming the first directory that could not be
/// created.
pub fn scaffold(dirs: &[PathBuf]) -> Result<(), BootstrapError> {
    for dir in dirs {
        if dir.exists() {
            continue;
        }
        std::fs::create_dir_all(dir).map_err(|source| BootstrapError::ScaffoldFailed {
            dir: dir.display().to_string(),
            source,
        })?;
    }
    Ok(())
}
