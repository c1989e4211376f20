//! Removal of terminal color codes.
//!
//! Deployment CLIs colorize their tables when attached to a terminal, and
//! captured output keeps those SGR sequences (`ESC [ 1;32 m` and friends).

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn sgr_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR pattern is valid"))
}

/// Delete every SGR escape sequence from `text`.
///
/// Returns the input borrowed when nothing matched.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    sgr_pattern().replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_escapes_is_identity() {
        let text = "│ sendEmail │ v2 │ https │\n┌──────┐\n";
        let cleaned = strip_ansi(text);
        assert!(matches!(cleaned, Cow::Borrowed(_)));
        assert_eq!(cleaned, text);
    }

    #[test]
    fn test_removes_sequence_before_cell() {
        let text = "│ \x1b[32msendEmail │ v2 │";
        assert_eq!(strip_ansi(text), "│ sendEmail │ v2 │");
    }

    #[test]
    fn test_removes_compound_and_reset_sequences() {
        let text = "\x1b[1;33mWarning\x1b[0m: \x1b[mdone";
        assert_eq!(strip_ansi(text), "Warning: done");
    }

    #[test]
    fn test_leaves_other_escapes_alone() {
        // Cursor movement is not SGR.
        let text = "\x1b[2Kline\x1b[1A";
        assert_eq!(strip_ansi(text), text);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_ansi(""), "");
    }
}
