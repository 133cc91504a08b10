//! Leaderboards overlay component: franchise career rankings.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LeaderboardsViewModel;

/// Preferred overlay width in characters, shrunk on narrow terminals.
const BOARD_WIDTH: usize = 46;

/// Renders the leaderboards overlay centered on the screen, one ranked
/// category after another.
pub fn render_leaderboards(
    leaderboards: &LeaderboardsViewModel,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    let width = BOARD_WIDTH.min(cols.saturating_sub(4)).max(24);
    let inner = width - 2;

    let mut lines: Vec<(String, String)> = Vec::new();
    for board in &leaderboards.boards {
        if !lines.is_empty() {
            lines.push((String::new(), String::new()));
        }
        lines.push((
            format!("{} {}", board.icon, board.title),
            format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent)),
        ));
        for (rank, name, count) in &board.entries {
            lines.push((
                format!("  {rank}. {name:<28} {count:>3}"),
                Theme::fg(&theme.colors.text_normal),
            ));
        }
    }
    if lines.is_empty() {
        lines.push((
            "No leaderboard data.".to_string(),
            Theme::fg(&theme.colors.text_dim),
        ));
    }

    let height = lines.len().min(rows.saturating_sub(4));
    let top = rows.saturating_sub(height + 2) / 2;
    let left = cols.saturating_sub(width) / 2 + 1;
    let border = Theme::fg(&theme.colors.card_border);

    position_cursor(top, left);
    print!("{border}\u{250c}{}\u{2510}{}", "\u{2500}".repeat(inner), Theme::reset());
    for (offset, (text, style)) in lines.iter().take(height).enumerate() {
        position_cursor(top + 1 + offset, left);
        print!("{border}\u{2502}{}", Theme::reset());
        let clipped = truncate(text, inner - 1);
        print!(" {style}{clipped}{}", Theme::reset());
        let used = clipped.chars().count() + 1;
        print!("{}", " ".repeat(inner.saturating_sub(used)));
        print!("{border}\u{2502}{}", Theme::reset());
    }
    position_cursor(top + height + 1, left);
    print!("{border}\u{2514}{}\u{2518}{}", "\u{2500}".repeat(inner), Theme::reset());
}
