//! The loaded corpus and the queries the reader answers.

use crate::error::Result;
use crate::flat::FlatParser;
use crate::search::{self, SearchOptions, SearchResults};
use crate::source::DataSource;
use crate::verse::Verse;
use log::info;

/// Every verse of one load, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bible {
    verses: Vec<Verse>,
}

impl Bible {
    pub fn from_verses(verses: Vec<Verse>) -> Self {
        Self { verses }
    }

    /// Parse the flat format from `source`.
    pub fn load(source: &dyn DataSource) -> Result<Self> {
        let mut parser = FlatParser::new();
        source.read_with(&mut |reader| parser.read_all(reader))?;

        let verses = parser.finish();
        info!("loaded {} verses from {}", verses.len(), source.describe());
        Ok(Self { verses })
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Book names in first-occurrence order.
    ///
    /// Only consecutive repeats are collapsed, since a book's verses are contiguous.
    pub fn books(&self) -> Vec<&str> {
        let mut books: Vec<&str> = Vec::new();
        for verse in &self.verses {
            if books.last() != Some(&verse.book.as_str()) {
                books.push(&verse.book);
            }
        }
        books
    }

    /// Verses of `chapter` in `book` (matched case-insensitively). A `verse` of `0`
    /// selects the whole chapter.
    pub fn passage(&self, book: &str, chapter: u32, verse: u32) -> Vec<&Verse> {
        self.verses
            .iter()
            .filter(|v| v.chapter == chapter && v.is_in_book(book))
            .filter(|v| verse == 0 || v.verse == verse)
            .collect()
    }

    /// Search with the default result cap.
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        self.search_with(query, &SearchOptions::default())
    }

    pub fn search_with(&self, query: &str, options: &SearchOptions) -> SearchResults<'_> {
        search::search(&self.verses, query, options)
    }
}

impl From<Vec<Verse>> for Bible {
    fn from(verses: Vec<Verse>) -> Self {
        Self::from_verses(verses)
    }
}
