//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. One call renders one
//! complete frame: chrome first, then the field diagram, then any overlay
//! on top.

use crate::app::UiState;
use crate::store::AppState;
use crate::ui::components;
use crate::ui::viewmodel::OverlayViewModel;

/// Renders one frame to stdout.
///
/// Computes the frame view model from the store snapshot and UI state,
/// clears the screen, and delegates to the component renderers. Does not
/// flush; the runtime flushes once per frame.
pub fn render(ui: &UiState, state: &AppState, rows: usize, cols: usize) {
    let frame = ui.compute_frame(state);
    let theme = &ui.theme;

    // Clear and home.
    print!("\u{1b}[2J\u{1b}[H");

    if frame.loading {
        components::render_loading("Loading season data\u{2026}", theme, rows, cols);
        return;
    }

    let mut row = components::render_header(1, &frame.header, theme, cols);
    row = components::render_timeline(row + 1, &frame.timeline, theme, cols);

    let diamond_top = row + 1;
    let diamond_bottom = rows.saturating_sub(1);
    components::render_diamond(diamond_top, diamond_bottom, &frame.diamond, theme, cols);

    components::render_footer(&frame.footer, theme, rows, cols);

    match &frame.overlay {
        Some(OverlayViewModel::Card(card)) => components::render_card(card, theme, rows, cols),
        Some(OverlayViewModel::Search(search)) => {
            components::render_search(search, theme, rows, cols);
        }
        Some(OverlayViewModel::Leaderboards(leaderboards)) => {
            components::render_leaderboards(leaderboards, theme, rows, cols);
        }
        None => {}
    }
}
