//! Terminal styling for highlighted spans.

/// ANSI red foreground
pub const ANSI_RED: &str = "\x1b[31m";
/// ANSI attribute reset
pub const ANSI_RESET: &str = "\x1b[0m";

/// Control sequences written in place of span markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Written where a highlighted span opens
    pub highlight_start: &'static str,
    /// Written where a highlighted span closes
    pub highlight_end: &'static str,
}

impl Default for Theme {
    /// Red highlighted words, like a red-letter print edition
    fn default() -> Self {
        Self {
            highlight_start: ANSI_RED,
            highlight_end: ANSI_RESET,
        }
    }
}

impl Theme {
    /// Create a monochrome theme for terminals without color support.
    /// Markers are still removed, just not replaced by anything.
    pub fn monochrome() -> Self {
        Self {
            highlight_start: "",
            highlight_end: "",
        }
    }

    pub fn for_color(enabled: bool) -> Self {
        if enabled {
            Self::default()
        } else {
            Self::monochrome()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_selection() {
        assert_eq!(Theme::for_color(true).highlight_start, ANSI_RED);
        assert_eq!(Theme::for_color(true).highlight_end, ANSI_RESET);
        assert_eq!(Theme::for_color(false), Theme::monochrome());
        assert!(Theme::monochrome().highlight_start.is_empty());
    }
}
