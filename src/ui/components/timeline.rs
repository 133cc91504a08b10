//! Timeline component: the proportional season track and era pills.

use crate::domain::WorldSeries;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TimelineViewModel;

/// Horizontal space reserved for the year labels on either side.
const LABEL_MARGIN: usize = 6;

/// Renders the season track and era pills starting at `row`; returns the
/// next free row.
///
/// The track maps season indices proportionally onto the available
/// width: championship seasons get gold markers, pennant losses dim ones,
/// and the current season a solid cursor that wins any overlap.
pub fn render_timeline(row: usize, timeline: &TimelineViewModel, theme: &Theme, cols: usize) -> usize {
    if timeline.total == 0 {
        return row;
    }

    let width = cols.saturating_sub(LABEL_MARGIN * 2 + 2).max(10);
    let span = (timeline.total - 1).max(1);
    let cell_of = |index: usize| index * (width - 1) / span;

    let mut cells: Vec<(char, &str)> = vec![('\u{2500}', theme.colors.border.as_str()); width];
    for &(index, outcome) in &timeline.markers {
        let color = match outcome {
            WorldSeries::Won => theme.colors.ws_gold.as_str(),
            WorldSeries::Lost => theme.colors.ws_lost.as_str(),
        };
        cells[cell_of(index)] = ('\u{25c6}', color);
    }
    cells[cell_of(timeline.position)] = ('\u{2588}', theme.colors.accent.as_str());

    position_cursor(row, 2);
    print!(
        "{}{:>4} {}",
        Theme::fg(&theme.colors.text_dim),
        timeline.first,
        Theme::reset()
    );
    let mut last_color = "";
    for (glyph, color) in &cells {
        if *color != last_color {
            print!("{}", Theme::fg(color));
            last_color = color;
        }
        print!("{glyph}");
    }
    print!(
        "{} {}{}{}",
        Theme::reset(),
        Theme::fg(&theme.colors.text_dim),
        timeline.last,
        Theme::reset()
    );

    let mut current = row + 1;
    if !timeline.era_pills.is_empty() {
        position_cursor(current, 2);
        let mut used = 1usize;
        for pill in &timeline.era_pills {
            let text = format!(" {} ", pill.label);
            let needed = text.chars().count() + 1;
            if used + needed >= cols {
                break;
            }
            if pill.active {
                print!(
                    "{}{}{text}{}",
                    Theme::bold(),
                    Theme::fg(&theme.colors.era_active_fg),
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
        current += 1;
    }

    current
}
