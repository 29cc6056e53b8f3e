//! bible_reader - Terminal Scripture Reader
//!
//! Loads the flat-format data file (through a decompressor when it is compressed) and
//! answers `list`, `read` and `search`.

use anyhow::{Context, Result};
use bible_reader::config::{DATA_PATH_ENV, DECOMPRESSOR_ENV, DEFAULT_DATA_PATH};
use bible_reader::render::output::{write_read_usage, write_search_usage};
use bible_reader::render::{write_books, write_passage, write_search_results, write_usage, Theme};
use bible_reader::verse::parse_number;
use bible_reader::{Bible, DataSourceFactory, ReaderConfig};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Write};
use std::path::PathBuf;

/// A fully validated reader command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
    List,
    Read {
        book: String,
        chapter: u32,
        verse: u32,
    },
    Search {
        query: String,
    },
}

fn cli() -> Command {
    Command::new("bible_reader")
        .version(bible_reader::VERSION)
        .about("List, read and search the scripture text")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("data")
                .long("data")
                .value_name("PATH")
                .help("Flat-format data file, optionally compressed")
                .env(DATA_PATH_ENV)
                .default_value(DEFAULT_DATA_PATH)
                .global(true),
        )
        .arg(
            Arg::new("decompressor")
                .long("decompressor")
                .value_name("PROGRAM")
                .help("Decompress with `<PROGRAM> -d -c <PATH>` instead of detecting the format")
                .env(DECOMPRESSOR_ENV)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Do not color highlighted words")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("list").about("List all books"))
        .subcommand(
            Command::new("read")
                .about("Read a chapter or specific verse")
                .arg(Arg::new("book").index(1))
                .arg(Arg::new("chapter").index(2))
                .arg(Arg::new("verse").index(3)),
        )
        .subcommand(
            Command::new("search").about("Search for text").arg(
                Arg::new("query")
                    .num_args(1..)
                    .trailing_var_arg(true)
                    .allow_hyphen_values(true),
            ),
        )
}

fn reader_config(matches: &ArgMatches) -> ReaderConfig {
    let defaults = ReaderConfig::default();
    ReaderConfig {
        data_path: matches
            .get_one::<String>("data")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path),
        decompressor: matches.get_one::<String>("decompressor").cloned(),
        color: !matches.get_flag("no-color"),
    }
}

/// Turn the parsed subcommand into a request, or print the matching usage and
/// return `None` when arguments are missing.
fn request(matches: &ArgMatches, out: &mut dyn Write) -> io::Result<Option<Request>> {
    match matches.subcommand() {
        Some(("list", _)) => Ok(Some(Request::List)),
        Some(("read", sub)) => {
            let book = sub.get_one::<String>("book");
            let chapter = sub.get_one::<String>("chapter");
            match (book, chapter) {
                (Some(book), Some(chapter)) => Ok(Some(Request::Read {
                    book: book.clone(),
                    chapter: parse_number(chapter),
                    verse: sub
                        .get_one::<String>("verse")
                        .map_or(0, |verse| parse_number(verse)),
                })),
                _ => {
                    write_read_usage(out)?;
                    Ok(None)
                }
            }
        }
        Some(("search", sub)) => match sub.get_many::<String>("query") {
            Some(words) => Ok(Some(Request::Search {
                query: words.map(String::as_str).collect::<Vec<_>>().join(" "),
            })),
            None => {
                write_search_usage(out)?;
                Ok(None)
            }
        },
        _ => {
            write_usage(out)?;
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) if err.use_stderr() => {
            // unknown commands and stray arguments are usage requests, not failures
            log::debug!("argument error: {err}");
            write_usage(&mut out)?;
            return Ok(());
        }
        Err(err) => {
            err.print()?;
            return Ok(());
        }
    };

    let Some(request) = request(&matches, &mut out)? else {
        return Ok(());
    };

    let config = reader_config(&matches);
    let source = DataSourceFactory::create(&config.data_path, config.decompressor.as_deref())
        .with_context(|| format!("Error loading bible: {}", config.data_path.display()))?;
    let bible = Bible::load(source.as_ref()).context("Error loading bible")?;
    let theme = Theme::for_color(config.color);

    match request {
        Request::List => write_books(&mut out, &bible.books())?,
        Request::Read {
            book,
            chapter,
            verse,
        } => write_passage(&mut out, &bible.passage(&book, chapter, verse), &theme)?,
        Request::Search { query } => {
            write_search_results(&mut out, &bible.search(&query), &theme)?
        }
    }

    out.flush()?;
    Ok(())
}
