//! Loading and failure screen component.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Renders a centered status message on an otherwise empty screen.
///
/// Used for the initial loading state and, with a different message, for
/// the degraded screen when the dataset load fails.
pub fn render_loading(message: &str, theme: &Theme, rows: usize, cols: usize) {
    let row = rows / 2;
    let col = cols.saturating_sub(message.chars().count()) / 2 + 1;
    position_cursor(row, col);
    print!(
        "{}{message}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        Theme::reset()
    );
}
