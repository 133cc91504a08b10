//! Footer component: keybinding hints for the active mode.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterViewModel;

/// Renders the keybinding line at the bottom row.
pub fn render_footer(footer: &FooterViewModel, theme: &Theme, rows: usize, cols: usize) {
    position_cursor(rows, 2);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        truncate(&footer.keybindings, cols.saturating_sub(3)),
        Theme::reset()
    );
}
