//! Data file validation performed before a source is built.

use crate::error::{BibleError, Result};
use std::fs::File;
use std::path::Path;

/// Validate that the data file exists, is a regular file and can be opened.
///
/// An empty file passes: it simply holds no verses.
pub fn validate_data_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BibleError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| BibleError::file_error("Failed to read file metadata", e))?;

    if !metadata.is_file() {
        return Err(BibleError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    File::open(path).map_err(|e| {
        BibleError::file_error(
            format!("Cannot open file for reading: {}", path.display()),
            e,
        )
    })?;

    Ok(())
}
