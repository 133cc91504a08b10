//! Header component: team, season, record, era, and banners.

use crate::domain::WorldSeries;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderViewModel;

/// Renders the header block starting at `row`; returns the next free row.
///
/// Layout, top to bottom: title with record, era label with tagline, era
/// quote, then the World Series and on-this-date banners when present.
/// Absent pieces simply do not take a row.
pub fn render_header(row: usize, header: &HeaderViewModel, theme: &Theme, cols: usize) -> usize {
    let mut current = row;

    position_cursor(current, 2);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", truncate(&header.title, cols.saturating_sub(14)));
    print!("{}", Theme::reset());
    if let Some(record) = &header.record {
        print!("  {}({record}){}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    }
    current += 1;

    if let Some(era_label) = &header.era_label {
        position_cursor(current, 2);
        print!("{}{era_label}{}", Theme::fg(&theme.colors.accent), Theme::reset());
        if let Some(tagline) = &header.era_tagline {
            let used = era_label.chars().count() + 4;
            print!(
                "  {}{}{}",
                Theme::fg(&theme.colors.text_dim),
                truncate(tagline, cols.saturating_sub(used)),
                Theme::reset()
            );
        }
        current += 1;
    }

    if let Some(quote) = &header.era_quote {
        position_cursor(current, 2);
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            truncate(quote, cols.saturating_sub(3)),
            Theme::reset()
        );
        current += 1;
    }

    if let Some(banner) = &header.banner {
        position_cursor(current, 2);
        let color = match banner.outcome {
            WorldSeries::Won => &theme.colors.ws_gold,
            WorldSeries::Lost => &theme.colors.ws_lost,
        };
        print!(
            "{}{}{}{}",
            Theme::bold(),
            Theme::fg(color),
            truncate(&banner.text, cols.saturating_sub(3)),
            Theme::reset()
        );
        current += 1;
    }

    if let Some(moment) = &header.moment {
        position_cursor(current, 2);
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.empty_state_fg),
            truncate(moment, cols.saturating_sub(3)),
            Theme::reset()
        );
        current += 1;
    }

    current
}
