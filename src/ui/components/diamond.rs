//! Field diagram component: player nodes positioned on the diamond.

use crate::domain::WorldSeries;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DiamondViewModel, NodeViewModel};

/// Maximum character width of one node's text lines.
const NODE_WIDTH: usize = 18;

/// Renders the field diagram in the region from `top` (inclusive) to
/// `bottom` (exclusive).
///
/// A border frames the region, colored by postseason outcome: gold for a
/// championship, muted for a pennant loss, field green otherwise. Nodes
/// are positioned by mapping their percentage coordinates into the
/// interior; each shows its slot label, the player's short name, and one
/// stat line. The selected node renders with the selection colors.
pub fn render_diamond(
    top: usize,
    bottom: usize,
    diamond: &DiamondViewModel,
    theme: &Theme,
    cols: usize,
) {
    if bottom <= top + 3 {
        return;
    }
    let height = bottom - top;

    let border_color = match diamond.outcome {
        Some(WorldSeries::Won) => &theme.colors.ws_gold,
        Some(WorldSeries::Lost) => &theme.colors.ws_lost,
        None => &theme.colors.field_fg,
    };
    draw_border(top, height, border_color, cols);

    for node in &diamond.nodes {
        let row = top + 1 + (usize::from(node.y_pct) * (height.saturating_sub(4))) / 100;
        let col_center = 2 + (usize::from(node.x_pct) * cols.saturating_sub(4)) / 100;
        render_node(node, row, col_center, theme, cols);
    }
}

fn draw_border(top: usize, height: usize, color: &str, cols: usize) {
    let inner = cols.saturating_sub(2);
    position_cursor(top, 1);
    print!("{}\u{250c}{}\u{2510}", Theme::fg(color), "\u{2500}".repeat(inner));
    for offset in 1..height.saturating_sub(1) {
        position_cursor(top + offset, 1);
        print!("\u{2502}");
        position_cursor(top + offset, cols);
        print!("\u{2502}");
    }
    position_cursor(top + height - 1, 1);
    print!("\u{2514}{}\u{2518}{}", "\u{2500}".repeat(inner), Theme::reset());
}

fn render_node(node: &NodeViewModel, row: usize, col_center: usize, theme: &Theme, cols: usize) {
    let label = format!("[{}]", node.pos_label);
    let name = truncate(&node.name, NODE_WIDTH);
    let stat = node
        .stat_lines
        .first()
        .map(|s| truncate(s, NODE_WIDTH))
        .unwrap_or_default();

    print_centered(&label, row, col_center, cols, {
        if node.is_selected {
            format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent))
        } else {
            Theme::fg(&theme.colors.text_dim)
        }
    });

    let name_style = if node.is_selected {
        format!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal))
    };
    print_centered(&name, row + 1, col_center, cols, name_style);

    if !stat.is_empty() {
        print_centered(
            &stat,
            row + 2,
            col_center,
            cols,
            Theme::fg(&theme.colors.text_dim),
        );
    }

    if !node.badges.is_empty() {
        print_centered(
            &truncate(&node.badges, NODE_WIDTH),
            row + 3,
            col_center,
            cols,
            Theme::fg(&theme.colors.ws_gold),
        );
    }
}

/// Prints `text` centered on `col_center`, clipped to the border interior.
fn print_centered(text: &str, row: usize, col_center: usize, cols: usize, style: String) {
    let len = text.chars().count();
    let start = col_center.saturating_sub(len / 2).max(2);
    let available = cols.saturating_sub(start + 1);
    if available == 0 {
        return;
    }
    position_cursor(row, start);
    print!("{style}{}{}", truncate(text, available), Theme::reset());
}
