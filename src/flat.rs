//! The flat text format shared by the extractor and the reader.
//!
//! One directive per line, identified by its prefix:
//!
//! | Line            | Meaning                                      |
//! |-----------------|----------------------------------------------|
//! | `# <book>`      | a new book starts                            |
//! | `= <chapter>`   | a new chapter starts within the current book |
//! | `T <title>`     | heading for the verse on the next line       |
//! | `<num> <text>`  | a verse                                      |
//! | `R <a>;<b>;...` | cross-references of the verse above          |
//!
//! [`writer::FlatWriter`] produces this format and [`parser::FlatParser`] reads it back.

pub mod parser;
pub mod writer;

pub use parser::{parse_verses, Directive, FlatParser};
pub use writer::{write_verses, FlatWriter};

pub const BOOK_PREFIX: &str = "# ";
pub const CHAPTER_PREFIX: &str = "= ";
pub const TITLE_PREFIX: &str = "T ";
pub const REFS_PREFIX: &str = "R ";
/// Separator between references on an `R` line.
pub const REF_SEPARATOR: char = ';';
