//! Static asset handling for the output directory.

use std::fs;
use std::path::Path;

use crate::error::AssetError;

/// Delete `path` and everything below it, if it exists.
pub fn clean_dir(path: &Path) -> Result<(), AssetError> {
    if !path.exists() {
        return Ok(());
    }
    tracing::info!(path = %path.display(), "Deleting output directory");
    fs::remove_dir_all(path).map_err(|source| io_error(path, source))
}

/// Mirror the tree under `src` into `dst`. Returns the number of files copied.
///
/// Symbolic links are skipped rather than followed, so a link cycle under
/// `src` cannot recurse forever.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, AssetError> {
    fs::create_dir_all(dst).map_err(|source| io_error(dst, source))?;

    let entries = fs::read_dir(src).map_err(|source| io_error(src, source))?;
    let mut copied = 0;

    for entry in entries {
        let entry = entry.map_err(|source| io_error(src, source))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry.file_type().map_err(|source| io_error(&from, source))?;

        if file_type.is_symlink() {
            tracing::warn!(path = %from.display(), "Skipping symlink");
        } else if file_type.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            tracing::debug!(from = %from.display(), to = %to.display(), "Copying file");
            fs::copy(&from, &to).map_err(|source| io_error(&from, source))?;
            copied += 1;
        }
    }

    Ok(copied)
}

fn io_error(path: &Path, source: std::io::Error) -> AssetError {
    AssetError::Io {
        path: path.to_path_buf(),
        source,
    }
}
