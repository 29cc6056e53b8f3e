//! Diacritic-insensitive substring search over loaded verses.
//!
//! Search is a linear scan: the query is folded once, every verse text is folded on
//! the fly and checked for the folded query as a contiguous substring.

pub mod fold;

pub use fold::fold;

use crate::verse::Verse;

/// Default cap on displayed search results.
pub const DEFAULT_RESULT_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of hits returned before the scan stops.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

/// Hits of one search, in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults<'a> {
    pub hits: Vec<&'a Verse>,
    /// More verses matched than `limit`; the scan stopped at the first extra match.
    pub truncated: bool,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// A query folded once up front.
#[derive(Debug, Clone)]
pub struct FoldedQuery {
    folded: String,
}

impl FoldedQuery {
    pub fn new(query: &str) -> Self {
        Self {
            folded: fold(query),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        fold(text).contains(&self.folded)
    }
}

/// Find verses whose text contains `query`, ignoring case and diacritics.
pub fn search<'a>(verses: &'a [Verse], query: &str, options: &SearchOptions) -> SearchResults<'a> {
    let query = FoldedQuery::new(query);
    let mut results = SearchResults::default();

    for verse in verses.iter().filter(|verse| query.matches(&verse.text)) {
        if results.hits.len() == options.limit {
            results.truncated = true;
            break;
        }
        results.hits.push(verse);
    }

    results
}
