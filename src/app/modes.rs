//! Input mode state types for the application.
//!
//! This module defines the state machine enums that control user
//! interaction. The mode determines which keybindings are active, which
//! overlay (if any) is drawn, and where typed characters go.

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the query or navigate the result
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to
    /// Navigating when results exist).
    Typing,

    /// User is navigating through the ranked results.
    ///
    /// Accepts up/down movement, enter to jump to the selected player's
    /// most recent season, and `/` to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and which overlay is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default mode: season navigation, era jumps, node selection.
    Normal,

    /// Player search overlay with focus state.
    Search(SearchFocus),

    /// Player card overlay for the selected roster slot.
    Card,

    /// Franchise leaderboards overlay.
    Leaderboards,
}
