//! The verse record shared by the extractor and the reader.

/// One verse of scripture with its attached heading and cross-references.
///
/// `id` and `testament` come from the source dump. The flat format does not carry
/// them, so records rebuilt by the reader get a positional `id` and testament `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verse {
    pub id: u64,
    pub testament: u32,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    /// Raw display text, possibly holding span markup.
    pub text: String,
    /// Heading for the subsection this verse opens; empty when there is none.
    pub title: String,
    pub refs: Vec<String>,
}

impl Verse {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_refs<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.refs = refs.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn has_refs(&self) -> bool {
        !self.refs.is_empty()
    }

    /// Case-insensitive book comparison used by `read`.
    pub fn is_in_book(&self, book: &str) -> bool {
        self.book.to_lowercase() == book.to_lowercase()
    }
}

/// Lenient numeric field parsing: anything that is not a plain non-negative
/// integer reads as `0`.
pub fn parse_number(field: &str) -> u32 {
    field.trim().parse().unwrap_or(0)
}
