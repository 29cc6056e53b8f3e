//! Inline span markup rendering.
//!
//! Verse text may wrap words in `<span class='Isus'>…</span>`. The dump escapes the
//! quotes of some spans, so `<span class=\'Isus\'>` is recognized as well. Only these
//! markers are replaced; every other byte, including unknown tags, passes through.

use crate::render::theme::Theme;
use std::borrow::Cow;

pub const SPAN_OPEN: &str = "<span class='Isus'>";
pub const SPAN_OPEN_ESCAPED: &str = r"<span class=\'Isus\'>";
pub const SPAN_CLOSE: &str = "</span>";

/// Replace span markers in `text` with the theme's control sequences.
pub fn render_markup<'a>(text: &'a str, theme: &Theme) -> Cow<'a, str> {
    if !text.contains('<') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if let Some(after) = rest.strip_prefix(SPAN_OPEN_ESCAPED) {
            out.push_str(theme.highlight_start);
            rest = after;
        } else if let Some(after) = rest.strip_prefix(SPAN_OPEN) {
            out.push_str(theme.highlight_start);
            rest = after;
        } else if let Some(after) = rest.strip_prefix(SPAN_CLOSE) {
            out.push_str(theme.highlight_end);
            rest = after;
        } else {
            out.push('<');
            rest = &rest[1..];
        }
    }

    out.push_str(rest);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme::{ANSI_RED, ANSI_RESET};

    #[test]
    fn test_span_becomes_color_sequences() {
        let rendered = render_markup("<span class='Isus'>Isus</span> a zis", &Theme::default());
        assert_eq!(rendered, format!("{ANSI_RED}Isus{ANSI_RESET} a zis"));
    }

    #[test]
    fn test_escaped_quote_style() {
        let rendered = render_markup(
            r"El a zis: <span class=\'Isus\'>Veniti dupa Mine</span>.",
            &Theme::default(),
        );
        assert_eq!(
            rendered,
            format!("El a zis: {ANSI_RED}Veniti dupa Mine{ANSI_RESET}.")
        );
    }

    #[test]
    fn test_other_markup_passes_through() {
        let text = "<b>bold</b> <span class='other'>x</i> 1 < 2";
        let rendered = render_markup(text, &Theme::default());
        assert_eq!(rendered, "<b>bold</b> <span class='other'>x</i> 1 < 2");
    }

    #[test]
    fn test_closing_marker_is_recognized_on_its_own() {
        let rendered = render_markup("<span class='other'>x</span>", &Theme::default());
        assert_eq!(rendered, format!("<span class='other'>x{ANSI_RESET}"));
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        let rendered = render_markup("Caci Dumnezeu", &Theme::default());
        assert!(matches!(rendered, Cow::Borrowed("Caci Dumnezeu")));
    }

    #[test]
    fn test_monochrome_strips_markers() {
        let rendered = render_markup("<span class='Isus'>Eu sunt</span>.", &Theme::monochrome());
        assert_eq!(rendered, "Eu sunt.");
    }

    #[test]
    fn test_multibyte_text_around_markers() {
        let rendered = render_markup("Țară <span class='Isus'>Îngerul</span> ș", &Theme::default());
        assert_eq!(rendered, format!("Țară {ANSI_RED}Îngerul{ANSI_RESET} ș"));
    }
}
