//! Field geometry and display metadata.
//!
//! Node positions are expressed as percentages of the diagram area so the
//! field scales with the terminal; the renderer maps them to cells. The
//! coordinates put the catcher at the bottom, the infield in the middle,
//! the outfield above it, and the pitching staff in a strip along the top
//! with the closer just below.

use crate::domain::{Position, RosterSlot, STARTER_SLOTS};

/// A node position as (x, y) percentages of the diagram area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeCoord {
    pub x: u8,
    pub y: u8,
}

/// Rotation slot positions, left to right along the top strip.
pub const STARTER_COORDS: [NodeCoord; STARTER_SLOTS] = [
    NodeCoord { x: 18, y: 11 },
    NodeCoord { x: 34, y: 11 },
    NodeCoord { x: 50, y: 11 },
    NodeCoord { x: 66, y: 11 },
    NodeCoord { x: 82, y: 11 },
];

/// Closer position, centered below the rotation strip.
pub const CLOSER_COORD: NodeCoord = NodeCoord { x: 50, y: 21 };

/// Returns the diagram position for a fielding position.
#[must_use]
pub const fn fielder_coord(pos: Position) -> NodeCoord {
    match pos {
        Position::Catcher => NodeCoord { x: 48, y: 84 },
        Position::First => NodeCoord { x: 66, y: 64 },
        Position::Second => NodeCoord { x: 57, y: 55 },
        Position::Third => NodeCoord { x: 34, y: 64 },
        Position::Short => NodeCoord { x: 43, y: 56 },
        Position::Left => NodeCoord { x: 26, y: 48 },
        Position::Center => NodeCoord { x: 50, y: 44 },
        Position::Right => NodeCoord { x: 74, y: 48 },
    }
}

/// Returns the diagram position for any roster slot.
///
/// Starter ordinals beyond the displayed strip fold onto its last
/// position; rosters never exceed [`STARTER_SLOTS`] in practice.
#[must_use]
pub fn slot_coord(slot: RosterSlot) -> NodeCoord {
    match slot {
        RosterSlot::Position(pos) => fielder_coord(pos),
        RosterSlot::Starter(i) => STARTER_COORDS[i.min(STARTER_SLOTS - 1)],
        RosterSlot::Closer => CLOSER_COORD,
    }
}

/// Returns the display icon for an award code.
#[must_use]
pub fn award_icon(code: &str) -> Option<&'static str> {
    match code {
        "MVP" => Some("\u{1f3c5}"),
        "CY" => Some("\u{1f3c6}"),
        "AS" => Some("\u{2b50}"),
        "GG" => Some("\u{1f9e4}"),
        "SS" => Some("\u{1f948}"),
        "ROY" => Some("\u{1f31f}"),
        _ => None,
    }
}

/// Returns the spelled-out label for an award code.
#[must_use]
pub fn award_label(code: &str) -> Option<&'static str> {
    match code {
        "MVP" => Some("MVP"),
        "CY" => Some("Cy Young"),
        "AS" => Some("All-Star"),
        "GG" => Some("Gold Glove"),
        "SS" => Some("Silver Slugger"),
        "ROY" => Some("Rookie of the Year"),
        _ => None,
    }
}

/// Championship banner messages; the season picks one deterministically.
pub const WS_WON_MESSAGES: [&str; 3] = [
    "World Champions! \u{1f3c6}",
    "Champions of the World! \u{1f3c6}",
    "World Series Champions! \u{1f3c6}",
];

/// Pennant-but-no-title banner messages.
pub const WS_LOST_MESSAGES: [&str; 3] = [
    "American League Champions — fell in the Fall Classic",
    "AL Pennant Winners — so close, yet so far",
    "Won the pennant, lost the Series",
];
