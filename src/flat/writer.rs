//! Serializer for the flat format.

use crate::error::{BibleError, Result};
use crate::flat::{BOOK_PREFIX, CHAPTER_PREFIX, REFS_PREFIX, REF_SEPARATOR, TITLE_PREFIX};
use crate::verse::Verse;
use std::io::Write;

/// Streams verses into the flat format, emitting book and chapter headers on change.
///
/// Verses must arrive in (book, chapter, verse) order; the writer does not sort.
pub struct FlatWriter<W: Write> {
    out: W,
    current_book: Option<String>,
    current_chapter: Option<u32>,
    verses_written: usize,
}

impl<W: Write> FlatWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            current_book: None,
            current_chapter: None,
            verses_written: 0,
        }
    }

    /// Write one verse, preceded by whatever headers it needs.
    pub fn write_verse(&mut self, verse: &Verse) -> Result<()> {
        if self.current_book.as_deref() != Some(verse.book.as_str()) {
            writeln!(self.out, "{BOOK_PREFIX}{}", verse.book).map_err(write_failed)?;
            self.current_book = Some(verse.book.clone());
            // every book opens with its own chapter header
            self.current_chapter = None;
        }

        if self.current_chapter != Some(verse.chapter) {
            writeln!(self.out, "{CHAPTER_PREFIX}{}", verse.chapter).map_err(write_failed)?;
            self.current_chapter = Some(verse.chapter);
        }

        if verse.has_title() {
            writeln!(self.out, "{TITLE_PREFIX}{}", verse.title).map_err(write_failed)?;
        }

        writeln!(self.out, "{} {}", verse.verse, verse.text).map_err(write_failed)?;

        if verse.has_refs() {
            let joined = verse.refs.join(&REF_SEPARATOR.to_string());
            writeln!(self.out, "{REFS_PREFIX}{joined}").map_err(write_failed)?;
        }

        self.verses_written += 1;
        Ok(())
    }

    pub fn verses_written(&self) -> usize {
        self.verses_written
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().map_err(write_failed)?;
        Ok(self.out)
    }
}

/// Serialize a whole sequence of verses and return how many were written.
pub fn write_verses<'a, W, I>(out: W, verses: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Verse>,
{
    let mut writer = FlatWriter::new(out);
    for verse in verses {
        writer.write_verse(verse)?;
    }
    let count = writer.verses_written();
    writer.finish()?;
    Ok(count)
}

fn write_failed(err: std::io::Error) -> BibleError {
    BibleError::file_error("Failed to write flat data", err)
}
