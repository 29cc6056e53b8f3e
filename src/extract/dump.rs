//! Scanners for the SQL dump tuples.
//!
//! Each dump file is searched for every parenthesized tuple of a known shape; anything
//! else in the file (statements, comments, tuples of another shape) is never captured.
//! Quoted fields accept doubled quotes (`''`) and backslash escapes and are kept raw.

use crate::verse::{parse_number, Verse};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// `(id, testament, 'book', chapter, verse, 'text')`
    static ref VERSE_TUPLE: Regex = Regex::new(
        r"\(\s*(\d+)\s*,\s*(\d+)\s*,\s*'([^']+)'\s*,\s*(\d+)\s*,\s*(\d+)\s*,\s*'((?:[^'\\]|''|\\.)*)'\s*\)"
    )
    .expect("verse tuple pattern compiles");

    /// `(id, verse_id, 'title')`
    static ref TITLE_TUPLE: Regex =
        Regex::new(r"\(\s*\d+\s*,\s*(\d+)\s*,\s*'((?:[^'\\]|''|\\.)*)'\s*\)")
            .expect("title tuple pattern compiles");

    /// `(id, verse_id, ordinal, 'reference')`
    static ref REF_TUPLE: Regex =
        Regex::new(r"\(\s*\d+\s*,\s*(\d+)\s*,\s*(\d+)\s*,\s*'((?:[^'\\]|''|\\.)*)'\s*\)")
            .expect("reference tuple pattern compiles");
}

/// A row of the titles dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleRow<'a> {
    pub verse_id: u64,
    pub title: &'a str,
}

/// A row of the cross-references dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefRow<'a> {
    pub verse_id: u64,
    pub ordinal: u32,
    pub reference: &'a str,
}

/// All verse tuples in `content`, in file order.
pub fn scan_verses(content: &str) -> impl Iterator<Item = Verse> + '_ {
    VERSE_TUPLE.captures_iter(content).map(|caps| Verse {
        id: parse_id(&caps, 1),
        testament: parse_number(field(&caps, 2)),
        book: field(&caps, 3).to_string(),
        chapter: parse_number(field(&caps, 4)),
        verse: parse_number(field(&caps, 5)),
        text: field(&caps, 6).to_string(),
        ..Verse::default()
    })
}

/// All title tuples in `content`, in file order.
pub fn scan_titles(content: &str) -> impl Iterator<Item = TitleRow<'_>> + '_ {
    TITLE_TUPLE.captures_iter(content).map(|caps| TitleRow {
        verse_id: parse_id(&caps, 1),
        title: field(&caps, 2),
    })
}

/// All reference tuples in `content`, in file order.
pub fn scan_refs(content: &str) -> impl Iterator<Item = RefRow<'_>> + '_ {
    REF_TUPLE.captures_iter(content).map(|caps| RefRow {
        verse_id: parse_id(&caps, 1),
        ordinal: parse_number(field(&caps, 2)),
        reference: field(&caps, 3),
    })
}

fn field<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn parse_id(caps: &Captures<'_>, index: usize) -> u64 {
    field(caps, index).parse().unwrap_or(0)
}
