//! Byte-stream providers for the flat format.
//!
//! The loader never opens files or spawns processes itself. It asks a [`DataSource`]
//! for a buffered reader, which keeps the parser testable against in-memory data and
//! lets the subprocess source own the lifetime of its child process.

pub mod compression;
pub mod decompressor;
pub mod factory;
pub mod validation;

pub use compression::{detect_compression, CompressionType};
pub use decompressor::DecompressorSource;
pub use factory::DataSourceFactory;

use crate::error::{BibleError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Something that can hand out the flat-format byte stream once per load.
///
/// The reader passed to `consume` is only valid for the duration of the call; any
/// cleanup the source needs (closing files, reaping a process) happens before
/// `read_with` returns, on success and failure alike.
pub trait DataSource {
    /// Short human-readable description for logs and error messages.
    fn describe(&self) -> String;

    fn read_with(&self, consume: &mut dyn FnMut(&mut dyn BufRead) -> Result<()>) -> Result<()>;
}

/// Uncompressed flat data read straight from disk.
#[derive(Debug, Clone)]
pub struct PlainFileSource {
    path: PathBuf,
}

impl PlainFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for PlainFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_with(&self, consume: &mut dyn FnMut(&mut dyn BufRead) -> Result<()>) -> Result<()> {
        let file = File::open(&self.path).map_err(|e| {
            BibleError::file_error(format!("Failed to open file: {}", self.path.display()), e)
        })?;
        let mut reader = BufReader::new(file);
        consume(&mut reader)
    }
}

/// Flat data already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    content: Vec<u8>,
}

impl InMemorySource {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl DataSource for InMemorySource {
    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.content.len())
    }

    fn read_with(&self, consume: &mut dyn FnMut(&mut dyn BufRead) -> Result<()>) -> Result<()> {
        let mut reader: &[u8] = &self.content;
        consume(&mut reader)
    }
}
