//! Shared rendering utilities.
//!
//! Low-level helpers used across UI components: cursor positioning,
//! width-aware truncation, and match-highlighted text output. Everything
//! here prints raw ANSI sequences; components decide layout, helpers
//! decide bytes.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to at most `max` characters, appending an ellipsis
/// when anything was cut. Operates on characters, not bytes.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = chars[..max - 1].iter().collect();
    cut.push('\u{2026}');
    cut
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the
/// provided character ranges. Highlighting is suppressed for selected
/// rows, where the selection background takes precedence.
///
/// Ranges use character indices with exclusive ends, as produced by the
/// view model's highlight computation.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current = 0;

    for &(start, end) in ranges {
        if start > current {
            let normal: String = chars[current..start].iter().collect();
            print!("{normal}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted}");
        print!("{}", Theme::reset());

        current = end;
    }

    if current < chars.len() {
        let remaining: String = chars[current..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Joe DiMaggio", 20), "Joe DiMaggio");
        assert_eq!(truncate("Joe DiMaggio", 6), "Joe D\u{2026}");
        assert_eq!(truncate("\u{2014}\u{2014}\u{2014}", 2), "\u{2014}\u{2026}");
        assert_eq!(truncate("anything", 0), "");
    }
}
