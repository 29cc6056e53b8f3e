//! Dump extraction: SQL tuples in, flat format out.
//!
//! The three dump files are merged by verse ID into a [`VerseTable`], which keeps the
//! records ordered by ID, and the table is then serialized with the flat writer.

pub mod dump;

use crate::error::{BibleError, Result};
use crate::flat::write_verses;
use crate::verse::Verse;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::Permissions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const VERSES_FILE: &str = "biblia.sql";
pub const TITLES_FILE: &str = "biblia_titluri.sql";
pub const REFS_FILE: &str = "biblia_trimiteri.sql";
pub const OUTPUT_FILE: &str = "bible_data.txt";

/// Input and output locations for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractPaths {
    pub verses: PathBuf,
    pub titles: PathBuf,
    pub refs: PathBuf,
    pub output: PathBuf,
}

impl ExtractPaths {
    /// The fixed dump file names inside `input_dir`.
    pub fn new(input_dir: &Path, output: impl Into<PathBuf>) -> Self {
        Self {
            verses: input_dir.join(VERSES_FILE),
            titles: input_dir.join(TITLES_FILE),
            refs: input_dir.join(REFS_FILE),
            output: output.into(),
        }
    }
}

impl Default for ExtractPaths {
    fn default() -> Self {
        Self::new(Path::new("."), OUTPUT_FILE)
    }
}

/// How many title or reference rows found their verse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachStats {
    pub attached: usize,
    pub dropped: usize,
}

/// Verse records keyed by dump ID.
#[derive(Debug, Default)]
pub struct VerseTable {
    verses: BTreeMap<u64, Verse>,
}

impl VerseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from the verses dump. A repeated ID keeps the last tuple.
    pub fn from_verse_dump(content: &str) -> Self {
        let mut table = Self::new();
        for verse in dump::scan_verses(content) {
            table.insert(verse);
        }
        table
    }

    pub fn insert(&mut self, verse: Verse) {
        self.verses.insert(verse.id, verse);
    }

    /// Attach titles from the titles dump; a later title for the same verse wins.
    pub fn attach_titles(&mut self, content: &str) -> AttachStats {
        let mut stats = AttachStats::default();
        for row in dump::scan_titles(content) {
            match self.verses.get_mut(&row.verse_id) {
                Some(verse) => {
                    verse.title = row.title.to_string();
                    stats.attached += 1;
                }
                None => {
                    debug!("dropping title for unknown verse {}", row.verse_id);
                    stats.dropped += 1;
                }
            }
        }
        stats
    }

    /// Append references from the references dump in the order they appear.
    pub fn attach_refs(&mut self, content: &str) -> AttachStats {
        let mut stats = AttachStats::default();
        for row in dump::scan_refs(content) {
            match self.verses.get_mut(&row.verse_id) {
                Some(verse) => {
                    verse.refs.push(row.reference.to_string());
                    stats.attached += 1;
                }
                None => {
                    debug!("dropping reference for unknown verse {}", row.verse_id);
                    stats.dropped += 1;
                }
            }
        }
        stats
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Verse> {
        self.verses.get(&id)
    }

    /// Verses in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Verse> + '_ {
        self.verses.values()
    }

    /// Serialize the table in ID order.
    pub fn write_to<W: Write>(&self, out: W) -> Result<usize> {
        write_verses(out, self.iter())
    }
}

/// A step of the extraction, reported before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<'a> {
    Parsing(&'a Path),
    Writing(&'a Path),
}

impl fmt::Display for Phase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsing(path) => write!(f, "Parsing {}...", display_name(path)),
            Self::Writing(path) => write!(f, "Writing {}...", display_name(path)),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Totals of one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub verses: usize,
    pub titles: AttachStats,
    pub refs: AttachStats,
}

impl ExtractSummary {
    pub fn dropped(&self) -> usize {
        self.titles.dropped + self.refs.dropped
    }
}

impl fmt::Display for ExtractSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} verses ({} titles, {} references, {} rows dropped)",
            self.verses,
            self.titles.attached,
            self.refs.attached,
            self.dropped()
        )
    }
}

/// Run the whole extraction. All inputs are read before the output is touched, and
/// the output only replaces `paths.output` once it is completely written.
pub fn run_extraction(
    paths: &ExtractPaths,
    mut on_phase: impl FnMut(Phase<'_>),
) -> Result<ExtractSummary> {
    on_phase(Phase::Parsing(&paths.verses));
    let mut table = VerseTable::from_verse_dump(&read_dump(&paths.verses)?);
    info!("{} verses read from {}", table.len(), paths.verses.display());

    on_phase(Phase::Parsing(&paths.titles));
    let titles = table.attach_titles(&read_dump(&paths.titles)?);
    info!(
        "{} titles attached, {} dropped",
        titles.attached, titles.dropped
    );

    on_phase(Phase::Parsing(&paths.refs));
    let refs = table.attach_refs(&read_dump(&paths.refs)?);
    info!(
        "{} references attached, {} dropped",
        refs.attached, refs.dropped
    );

    on_phase(Phase::Writing(&paths.output));
    let verses = write_atomically(&paths.output, &table)?;

    Ok(ExtractSummary {
        verses,
        titles,
        refs,
    })
}

/// Read a dump file whole. Invalid UTF-8 is replaced rather than rejected.
pub fn read_dump(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        BibleError::file_error(format!("Failed to read dump file: {}", path.display()), e)
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_atomically(output: &Path, table: &VerseTable) -> Result<usize> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| BibleError::file_error("Failed to create temporary output file", e))?;
    let written = table.write_to(BufWriter::new(&mut temp))?;

    if let Some(permissions) = output_permissions(output) {
        temp.as_file().set_permissions(permissions).map_err(|e| {
            BibleError::file_error("Failed to set permissions on temporary output file", e)
        })?;
    }

    temp.persist(output).map_err(|e| {
        BibleError::file_error(
            format!("Failed to replace output file: {}", output.display()),
            e.error,
        )
    })?;
    Ok(written)
}

/// Permissions the output file should end up with: those of the file being replaced,
/// or world-readable for a new one. Temporary files are created owner-only.
fn output_permissions(output: &Path) -> Option<Permissions> {
    match std::fs::metadata(output) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
