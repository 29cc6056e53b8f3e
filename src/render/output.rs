//! User-facing output of the reader commands.
//!
//! Every printer writes to a caller-supplied [`Write`] so the binary can hand in a
//! locked stdout and tests can hand in a `Vec<u8>`.

use crate::render::markup::render_markup;
use crate::render::theme::Theme;
use crate::search::SearchResults;
use crate::verse::Verse;
use std::io::{self, Write};

pub const NO_VERSES: &str = "No verses found.";
pub const NO_RESULTS: &str = "No results found.";
pub const TOO_MANY_RESULTS: &str = "... too many results, type more specific query";

/// `list`: the heading followed by one `- <book>` line per book.
pub fn write_books(out: &mut dyn Write, books: &[&str]) -> io::Result<()> {
    writeln!(out, "Books available:")?;
    for book in books {
        writeln!(out, "- {book}")?;
    }
    Ok(())
}

/// `read`: each verse as `[chapter:verse] text`, with its heading and references.
pub fn write_passage(out: &mut dyn Write, verses: &[&Verse], theme: &Theme) -> io::Result<()> {
    if verses.is_empty() {
        return writeln!(out, "{NO_VERSES}");
    }

    for verse in verses {
        if verse.has_title() {
            writeln!(out, "\n### {} ###", verse.title)?;
        }
        write!(
            out,
            "[{}:{}] {}",
            verse.chapter,
            verse.verse,
            render_markup(&verse.text, theme)
        )?;
        if verse.has_refs() {
            write!(out, " ({})", verse.refs.join(", "))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// `search`: one `<book> <chapter>:<verse> - text` line per hit.
pub fn write_search_results(
    out: &mut dyn Write,
    results: &SearchResults<'_>,
    theme: &Theme,
) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "{NO_RESULTS}");
    }

    for verse in &results.hits {
        writeln!(
            out,
            "{} {}:{} - {}",
            verse.book,
            verse.chapter,
            verse.verse,
            render_markup(&verse.text, theme)
        )?;
    }
    if results.truncated {
        writeln!(out, "{TOO_MANY_RESULTS}")?;
    }
    Ok(())
}

pub fn write_usage(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Bible Reader (Floppy Edition)")?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  list                          List all books")?;
    writeln!(
        out,
        "  read <Book> <Chapter> [Verse] Read a chapter or specific verse"
    )?;
    writeln!(out, "  search <query>                Search for text")?;
    writeln!(out, "\nExample: bible_reader read Ioan 3 16")
}

pub fn write_read_usage(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Usage: bible_reader read <Book> <Chapter> [Verse]")
}

pub fn write_search_usage(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Usage: bible_reader search <Query>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme::{ANSI_RED, ANSI_RESET};

    fn capture(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_books_listing() {
        let text = capture(|out| write_books(out, &["A", "B"]));
        assert_eq!(text, "Books available:\n- A\n- B\n");
    }

    #[test]
    fn test_passage_with_title_and_refs() {
        let verse = Verse::new("Ioan", 3, 16, "Caci Dumnezeu...")
            .with_title("Nasterea din nou")
            .with_refs(["Rom.5:8"]);
        let text = capture(|out| write_passage(out, &[&verse], &Theme::default()));

        assert_eq!(
            text,
            "\n### Nasterea din nou ###\n[3:16] Caci Dumnezeu... (Rom.5:8)\n"
        );
    }

    #[test]
    fn test_passage_joins_refs_with_commas() {
        let verse = Verse::new("Ioan", 1, 1, "La inceput").with_refs(["Gen.1:1", "1Ioan 1:1"]);
        let plain = Verse::new("Ioan", 1, 2, "El era");
        let text = capture(|out| write_passage(out, &[&verse, &plain], &Theme::default()));

        assert_eq!(
            text,
            "[1:1] La inceput (Gen.1:1, 1Ioan 1:1)\n[1:2] El era\n"
        );
    }

    #[test]
    fn test_empty_passage() {
        let text = capture(|out| write_passage(out, &[], &Theme::default()));
        assert_eq!(text, "No verses found.\n");
    }

    #[test]
    fn test_search_lines_render_markup() {
        let verse = Verse::new("Matei", 4, 19, "<span class='Isus'>Veniti</span> dupa Mine");
        let results = SearchResults {
            hits: vec![&verse],
            truncated: false,
        };
        let text = capture(|out| write_search_results(out, &results, &Theme::default()));

        assert_eq!(
            text,
            format!("Matei 4:19 - {ANSI_RED}Veniti{ANSI_RESET} dupa Mine\n")
        );
    }

    #[test]
    fn test_truncated_search_adds_notice() {
        let verse = Verse::new("A", 1, 1, "x");
        let results = SearchResults {
            hits: vec![&verse],
            truncated: true,
        };
        let text = capture(|out| write_search_results(out, &results, &Theme::monochrome()));
        assert_eq!(text, format!("A 1:1 - x\n{TOO_MANY_RESULTS}\n"));
    }

    #[test]
    fn test_empty_search() {
        let text = capture(|out| {
            write_search_results(out, &SearchResults::default(), &Theme::default())
        });
        assert_eq!(text, "No results found.\n");
    }

    #[test]
    fn test_usage_mentions_every_command() {
        let text = capture(write_usage);
        for command in ["list", "read <Book> <Chapter> [Verse]", "search <query>"] {
            assert!(text.contains(command), "usage is missing {command}");
        }
    }
}
