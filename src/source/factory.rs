//! Factory for choosing the [`DataSource`] that fits a data file.

use crate::error::Result;
use crate::source::compression::detect_compression;
use crate::source::decompressor::DecompressorSource;
use crate::source::validation::validate_data_path;
use crate::source::{DataSource, PlainFileSource};
use log::debug;
use std::path::Path;

/// Builds data sources after validating the file.
///
/// # Strategy Selection
/// - Explicit decompressor program: always piped through it
/// - Compressed file (by magic number or extension): piped through the matching tool
/// - Anything else: read directly as flat text
pub struct DataSourceFactory;

impl DataSourceFactory {
    pub fn create(path: &Path, decompressor: Option<&str>) -> Result<Box<dyn DataSource>> {
        validate_data_path(path)?;

        if let Some(program) = decompressor {
            debug!("using configured decompressor {program}");
            return Ok(Box::new(DecompressorSource::new(program, path)));
        }

        let compression = detect_compression(path)?;
        debug!(
            "{} detected as {} data",
            path.display(),
            compression.name()
        );

        Ok(match compression.decompressor() {
            Some(program) => Box::new(DecompressorSource::new(program, path)),
            None => Box::new(PlainFileSource::new(path)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BibleError;

    #[test]
    fn test_plain_file_is_read_directly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bible_data.txt");
        std::fs::write(&path, "# A\n= 1\n1 a\n").unwrap();

        let source = DataSourceFactory::create(&path, None).unwrap();
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[test]
    fn test_compressed_file_uses_matching_tool() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bible_data.txt.xz");
        std::fs::write(&path, b"\xfd7zXZ\x00").unwrap();

        let source = DataSourceFactory::create(&path, None).unwrap();
        assert!(source.describe().ends_with("(via xz)"));
    }

    #[test]
    fn test_configured_decompressor_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bible_data.txt");
        std::fs::write(&path, "# A\n").unwrap();

        let source = DataSourceFactory::create(&path, Some("unxz")).unwrap();
        assert!(source.describe().ends_with("(via unxz)"));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let result = DataSourceFactory::create(Path::new("/no/such/bible_data.txt.xz"), None);
        assert!(matches!(result, Err(BibleError::FileNotFound { .. })));
    }
}
