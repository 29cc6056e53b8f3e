//! # bible-reader - Scripture Extractor and Terminal Reader
//!
//! Converts a relational SQL dump of scripture (verses, section titles and
//! cross-references) into a compact line-oriented text format, and reads that format
//! back to list books, print passages and search verse text.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`verse`] - The verse record both sides exchange
//! - [`flat`] - The flat text format: writer and line-by-line parser
//! - [`extract`] - SQL dump scanning and the extraction pipeline
//! - [`source`] - Byte-stream providers (plain file, memory, decompressor subprocess)
//! - [`bible`] - The loaded corpus and its queries
//! - [`search`] - Diacritic folding and capped substring search
//! - [`render`] - Terminal output with span highlighting
//! - [`config`] - Reader configuration defaults

// Core modules
pub mod error;
pub mod verse;

// Format and pipeline
pub mod extract;
pub mod flat;
pub mod source;

// Reader
pub mod bible;
pub mod config;
pub mod render;
pub mod search;

// Re-export commonly used types for convenience
pub use error::{BibleError, Result};

pub use bible::Bible;
pub use config::ReaderConfig;
pub use search::{SearchOptions, SearchResults};
pub use source::{DataSource, DataSourceFactory};
pub use verse::Verse;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
