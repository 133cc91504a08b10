//! Search overlay component: query box and ranked result list.

use crate::ui::helpers::{position_cursor, render_highlighted_text, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchViewModel;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search overlay: a bordered query box followed by the
/// result list.
///
/// Each result row shows the career span, the name with matched
/// characters highlighted, positions held, season count, and championship
/// trophies. The selected row renders with the selection colors; a
/// non-empty query with no matches shows a hint instead.
pub fn render_search(search: &SearchViewModel, theme: &Theme, rows: usize, cols: usize) {
    let next = render_query_box(2, search, theme, cols);
    render_results(next + 1, search, theme, rows, cols);
}

/// Renders the 3-line bordered query box at `row`; returns the next row.
fn render_query_box(row: usize, search: &SearchViewModel, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}\u{250c}{}\u{2510}{}", "\u{2500}".repeat(inner_width), Theme::reset());

    let cursor = if search.typing { "\u{2588}" } else { "" };
    let text = truncate(
        &format!(" Search players: {}{cursor}", search.query),
        inner_width,
    );
    let padding = inner_width.saturating_sub(text.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}\u{2502}{}", Theme::reset());
    print!("{}{text}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
    print!("{}", " ".repeat(padding));
    print!("{border}\u{2502}{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}\u{2514}{}\u{2518}{}", "\u{2500}".repeat(inner_width), Theme::reset());

    row + 3
}

fn render_results(row: usize, search: &SearchViewModel, theme: &Theme, rows: usize, cols: usize) {
    if search.results.is_empty() {
        if !search.query.trim().is_empty() {
            position_cursor(row, SEARCH_BOX_MARGIN + 2);
            print!(
                "{}No players found. Try a different name.{}",
                Theme::fg(&theme.colors.empty_state_fg),
                Theme::reset()
            );
        }
        return;
    }

    let available = rows.saturating_sub(row + 1);
    for (offset, result) in search.results.iter().take(available).enumerate() {
        position_cursor(row + offset, SEARCH_BOX_MARGIN + 1);

        if result.is_selected {
            print!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            );
        }

        print!(
            "{}{:>9}{} ",
            if result.is_selected {
                String::new()
            } else {
                Theme::fg(&theme.colors.accent)
            },
            result.year_range,
            if result.is_selected { "" } else { Theme::reset() }
        );

        if result.is_selected {
            print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        render_highlighted_text(&result.name, &result.highlight_ranges, theme, result.is_selected);

        let detail = format!(" \u{b7} {} \u{b7} {}", result.positions, result.seasons);
        let used = 11 + result.name.chars().count() + detail.chars().count();
        print!(
            "{}{}",
            if result.is_selected {
                String::new()
            } else {
                Theme::fg(&theme.colors.text_dim)
            },
            truncate(&detail, cols.saturating_sub(SEARCH_BOX_MARGIN + 12))
        );

        if !result.trophies.is_empty() && used + 8 < cols {
            print!(
                " {}{}",
                if result.is_selected {
                    String::new()
                } else {
                    Theme::fg(&theme.colors.ws_gold)
                },
                result.trophies
            );
        }

        print!("{}", Theme::reset());
    }
}
