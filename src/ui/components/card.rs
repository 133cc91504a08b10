//! Player card component: a centered baseball-card style overlay.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardViewModel;

/// Preferred card width in characters, shrunk on narrow terminals.
const CARD_WIDTH: usize = 62;

/// Renders the player card overlay centered on the screen.
///
/// The card shows, top to bottom: name with nickname, the meta line,
/// badge lines, hero stats, the detail stat table, and the career chip
/// strip. Sections simply collapse when empty so a stat-less 1903
/// roster entry still produces a sensible card.
pub fn render_card(card: &CardViewModel, theme: &Theme, rows: usize, cols: usize) {
    let width = CARD_WIDTH.min(cols.saturating_sub(4)).max(20);
    let inner = width - 2;

    let mut lines: Vec<(String, String)> = Vec::new();

    let name_line = match &card.nickname {
        Some(nickname) => format!("{}  {nickname}", card.name),
        None => card.name.clone(),
    };
    lines.push((
        name_line,
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)),
    ));
    lines.push((card.meta.clone(), Theme::fg(&theme.colors.text_dim)));

    for badge in &card.badges {
        lines.push((badge.clone(), Theme::fg(&theme.colors.ws_gold)));
    }

    if !card.hero.is_empty() {
        lines.push((String::new(), String::new()));
        let values = card
            .hero
            .iter()
            .map(|(value, _)| format!("{value:^12}"))
            .collect::<String>();
        let labels = card
            .hero
            .iter()
            .map(|(_, label)| format!("{label:^12}"))
            .collect::<String>();
        lines.push((
            values,
            format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent)),
        ));
        lines.push((labels, Theme::fg(&theme.colors.text_dim)));
    }

    if !card.table.is_empty() {
        lines.push((String::new(), String::new()));
        let labels = card
            .table
            .iter()
            .map(|(label, _)| format!("{label:>5}"))
            .collect::<String>();
        let values = card
            .table
            .iter()
            .map(|(_, value)| format!("{value:>5}"))
            .collect::<String>();
        lines.push((labels, Theme::fg(&theme.colors.text_dim)));
        lines.push((values, Theme::fg(&theme.colors.text_normal)));
    }

    let height = lines.len() + 2 + if card.career.is_empty() { 0 } else { 2 };
    let top = rows.saturating_sub(height) / 2;
    let left = cols.saturating_sub(width) / 2 + 1;

    draw_frame(top, left, height, width, theme);

    for (offset, (text, style)) in lines.iter().enumerate() {
        position_cursor(top + 1 + offset, left + 1);
        print!(" {style}{}{}", truncate(text, inner - 2), Theme::reset());
    }

    if !card.career.is_empty() {
        let row = top + 1 + lines.len();
        position_cursor(row, left + 1);
        print!(
            " {}Career{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        );
        position_cursor(row + 1, left + 1);
        let mut used = 2usize;
        print!(" ");
        for chip in &card.career {
            let marker = if chip.is_champion { "\u{2605}" } else { "" };
            let text = format!("{}{marker}", chip.year);
            let needed = text.chars().count() + 1;
            if used + needed >= inner {
                break;
            }
            if chip.is_selected {
                print!(
                    "{}{}{text}{}",
                    Theme::fg(&theme.colors.selection_fg),
                    Theme::bg(&theme.colors.selection_bg),
                    Theme::reset()
                );
            } else if chip.is_current {
                print!(
                    "{}{}{text}{}",
                    Theme::bold(),
                    Theme::fg(&theme.colors.accent),
                    Theme::reset()
                );
            } else {
                print!(
                    "{}{text}{}",
                    Theme::fg(&theme.colors.text_dim),
                    Theme::reset()
                );
            }
            print!(" ");
            used += needed;
        }
    }
}

fn draw_frame(top: usize, left: usize, height: usize, width: usize, theme: &Theme) {
    let inner = width - 2;
    let border = Theme::fg(&theme.colors.card_border);

    position_cursor(top, left);
    print!("{border}\u{250c}{}\u{2510}{}", "\u{2500}".repeat(inner), Theme::reset());
    for offset in 1..=height {
        position_cursor(top + offset, left);
        print!("{border}\u{2502}{}\u{2502}{}", " ".repeat(inner), Theme::reset());
    }
    position_cursor(top + height + 1, left);
    print!("{border}\u{2514}{}\u{2518}{}", "\u{2500}".repeat(inner), Theme::reset());
}
