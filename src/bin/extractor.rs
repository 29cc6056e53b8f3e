//! extractor - SQL dump to flat format converter
//!
//! Reads `biblia.sql`, `biblia_titluri.sql` and `biblia_trimiteri.sql` and writes
//! `bible_data.txt` for the reader.

use anyhow::{Context, Result};
use bible_reader::extract::{run_extraction, ExtractPaths, OUTPUT_FILE};
use clap::{Arg, Command};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("extractor")
        .version(bible_reader::VERSION)
        .about("Convert the scripture SQL dump into the reader's flat text format")
        .arg(
            Arg::new("input-dir")
                .long("input-dir")
                .value_name("DIR")
                .help("Directory holding biblia.sql, biblia_titluri.sql and biblia_trimiteri.sql")
                .default_value("."),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("PATH")
                .help("Flat-format file to write")
                .default_value(OUTPUT_FILE),
        )
}

fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = cli().get_matches();
    let input_dir = PathBuf::from(
        matches
            .get_one::<String>("input-dir")
            .map_or(".", String::as_str),
    );
    let output = matches
        .get_one::<String>("output")
        .map_or(OUTPUT_FILE, String::as_str);

    let paths = ExtractPaths::new(&input_dir, output);
    let summary = run_extraction(&paths, |phase| println!("{phase}"))
        .with_context(|| format!("Extraction from {} failed", input_dir.display()))?;

    println!("{summary}");
    println!("Done!");
    Ok(())
}
