//! Case and diacritic folding for search comparisons.
//!
//! Folding is only ever applied to the two sides of a comparison; displayed text is
//! never folded.

/// Accented lowercase letters and their base letters. Both the comma-below and the
/// cedilla forms of s and t occur in real data.
const FOLD_TABLE: [(char, char); 7] = [
    ('ă', 'a'),
    ('â', 'a'),
    ('î', 'i'),
    ('ș', 's'),
    ('ş', 's'),
    ('ț', 't'),
    ('ţ', 't'),
];

/// Lowercase `text` and strip the diacritics in the fold table.
pub fn fold(text: &str) -> String {
    text.to_lowercase().chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    FOLD_TABLE
        .iter()
        .find(|(accented, _)| *accented == c)
        .map_or(c, |&(_, base)| base)
}
