//! Loader for the flat format.
//!
//! Parsing is a single pass over the lines. Each line is classified into a
//! [`Directive`] and fed to [`FlatParser`], which carries the current book, the
//! current chapter, a pending title and the index of the last verse built (the only
//! verse an `R` line may attach to).

use crate::error::{BibleError, Result};
use crate::flat::{BOOK_PREFIX, CHAPTER_PREFIX, REFS_PREFIX, REF_SEPARATOR, TITLE_PREFIX};
use crate::verse::{parse_number, Verse};
use log::debug;
use std::io::BufRead;

/// A single classified line of the flat format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    Blank,
    Book(&'a str),
    Chapter(u32),
    Title(&'a str),
    Refs(&'a str),
    Verse { number: u32, text: &'a str },
    /// A non-empty line with no space to separate the verse number from the text.
    Malformed(&'a str),
}

impl<'a> Directive<'a> {
    /// Classify a line with its terminator already removed.
    ///
    /// Prefixes are checked in a fixed order: book, chapter, title, references, and
    /// anything else is a verse.
    pub fn parse(line: &'a str) -> Self {
        if line.is_empty() {
            Self::Blank
        } else if let Some(book) = line.strip_prefix(BOOK_PREFIX) {
            Self::Book(book)
        } else if let Some(chapter) = line.strip_prefix(CHAPTER_PREFIX) {
            Self::Chapter(parse_number(chapter))
        } else if let Some(title) = line.strip_prefix(TITLE_PREFIX) {
            Self::Title(title)
        } else if let Some(refs) = line.strip_prefix(REFS_PREFIX) {
            Self::Refs(refs)
        } else {
            match line.split_once(' ') {
                Some((number, text)) => Self::Verse {
                    number: parse_number(number),
                    text,
                },
                None => Self::Malformed(line),
            }
        }
    }
}

/// Incremental flat-format parser.
#[derive(Debug, Default)]
pub struct FlatParser {
    verses: Vec<Verse>,
    current_book: String,
    current_chapter: u32,
    pending_title: Option<String>,
    last_verse: Option<usize>,
    skipped_lines: usize,
}

impl FlatParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line. A trailing `\n` or `\r\n` is ignored.
    pub fn feed_line(&mut self, line: &str) {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        match Directive::parse(line) {
            Directive::Blank => {}
            Directive::Book(book) => {
                self.current_book = book.to_string();
                self.current_chapter = 0;
                self.pending_title = None;
                self.last_verse = None;
            }
            Directive::Chapter(chapter) => {
                self.current_chapter = chapter;
                self.pending_title = None;
                self.last_verse = None;
            }
            Directive::Title(title) => {
                self.pending_title = Some(title.to_string());
            }
            Directive::Refs(refs) => match self.last_verse {
                Some(index) => {
                    self.verses[index].refs =
                        refs.split(REF_SEPARATOR).map(str::to_string).collect();
                }
                None => debug!("ignoring reference line with no verse in scope"),
            },
            Directive::Verse { number, text } => {
                let verse = Verse {
                    id: self.verses.len() as u64 + 1,
                    book: self.current_book.clone(),
                    chapter: self.current_chapter,
                    verse: number,
                    text: text.to_string(),
                    title: self.pending_title.take().unwrap_or_default(),
                    ..Verse::default()
                };
                self.last_verse = Some(self.verses.len());
                self.verses.push(verse);
            }
            Directive::Malformed(line) => {
                debug!("skipping malformed verse line: {line:?}");
                self.skipped_lines += 1;
            }
        }
    }

    /// Feed every line of `reader` until end of stream.
    ///
    /// Lines are decoded lossily, so invalid UTF-8 never aborts a load.
    pub fn read_all(&mut self, reader: &mut dyn BufRead) -> Result<()> {
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| BibleError::file_error("Failed to read flat data", e))?;
            if read == 0 {
                return Ok(());
            }
            self.feed_line(&String::from_utf8_lossy(&line));
        }
    }

    /// Number of lines dropped because they could not be read as a verse.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    pub fn finish(self) -> Vec<Verse> {
        debug!(
            "parsed {} verses ({} malformed lines skipped)",
            self.verses.len(),
            self.skipped_lines
        );
        self.verses
    }
}

/// Parse a complete flat-format stream.
pub fn parse_verses(reader: &mut dyn BufRead) -> Result<Vec<Verse>> {
    let mut parser = FlatParser::new();
    parser.read_all(reader)?;
    Ok(parser.finish())
}
