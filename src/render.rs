//! Terminal rendering of reader output.

pub mod markup;
pub mod output;
pub mod theme;

pub use markup::render_markup;
pub use output::{write_books, write_passage, write_search_results, write_usage};
pub use theme::Theme;
