//! Reader configuration.
//!
//! Values come from command-line flags, with environment variables as fallback
//! (handled by clap), and finally the built-in defaults below.

use std::path::PathBuf;

/// Where the reader looks for its data when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "../bible_data.txt.xz";
pub const DATA_PATH_ENV: &str = "BIBLE_DATA";
pub const DECOMPRESSOR_ENV: &str = "BIBLE_DECOMPRESSOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Flat-format data file, compressed or not.
    pub data_path: PathBuf,
    /// Decompression program overriding compression detection.
    pub decompressor: Option<String>,
    /// Emit ANSI sequences for highlighted spans.
    pub color: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            decompressor: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReaderConfig::default();
        assert_eq!(config.data_path, PathBuf::from("../bible_data.txt.xz"));
        assert_eq!(config.decompressor, None);
        assert!(config.color);
    }
}
