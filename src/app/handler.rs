//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes translated user
//! input, mutates the transient [`UiState`], and emits [`Action`]s for the
//! runtime to execute. It is the only place interaction semantics live:
//! the runtime merely translates terminal keys into [`Event`]s per mode
//! and executes what comes back.
//!
//! # Architecture
//!
//! Unidirectional flow, read-only over the store:
//!
//! ```text
//! Key → Event → handle_event → UiState mutation → Actions → Store write
//!                     ↑                                        ↓
//!                     └──────── change notification ───────────┘
//! ```
//!
//! Season changes are never applied here. The handler emits
//! [`Action::SetYear`] and the runtime writes it through the store, whose
//! notification fan-out re-renders the subscribed regions.

use crate::app::actions::Action;
use crate::app::modes::{InputMode, SearchFocus};
use crate::app::state::{node_slot, OpenCard, UiState};
use crate::data::search_players;
use crate::store::Store;

/// Events produced by translating terminal input for the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Step to the next season (clamped at the most recent).
    NextSeason,
    /// Step to the previous season (clamped at the earliest).
    PrevSeason,
    /// Jump to the earliest season.
    FirstSeason,
    /// Jump to the most recent season.
    LastSeason,
    /// Jump to the start year of the given era (zero-based ordinal).
    JumpToEra(usize),
    /// Jump to the season of today's on-this-date moment, if any.
    GoToMoment,

    /// Move the node selection cursor forward.
    NextNode,
    /// Move the node selection cursor backward.
    PrevNode,
    /// Open the player card for the selected node.
    OpenCard,
    /// Close the player card.
    CloseCard,
    /// Select the next career chip on the open card.
    NextChip,
    /// Select the previous career chip on the open card.
    PrevChip,
    /// Jump to the selected career chip's season and close the card.
    SelectChip,

    /// Enter search mode with a fresh query.
    SearchMode,
    /// Return focus to the query input.
    FocusSearchBar,
    /// Move focus to the result list.
    FocusResults,
    /// Leave search mode and clear the query.
    ExitSearch,
    /// Append a character to the search query.
    Char(char),
    /// Remove the last character from the search query.
    Backspace,
    /// Move the result selection down.
    KeyDown,
    /// Move the result selection up.
    KeyUp,
    /// Jump to the selected player's most recent season and close search.
    SelectResult,

    /// Open the franchise leaderboards overlay.
    ShowLeaderboards,
    /// Close the franchise leaderboards overlay.
    CloseLeaderboards,

    /// Dismiss the active overlay.
    Escape,
    /// Leave the application.
    Quit,
}

/// Processes an event, mutates UI state, and returns actions to execute.
///
/// Returns `(redraw, actions)`: `redraw` is false when the event changed
/// nothing (e.g. stepping past the last season), so the runtime can skip
/// the frame. Store writes always arrive as actions, never directly.
#[allow(clippy::too_many_lines)]
pub fn handle_event(ui: &mut UiState, store: &Store, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    match event {
        Event::NextSeason => shift_season(store, 1),
        Event::PrevSeason => shift_season(store, -1),
        Event::FirstSeason => {
            let state = store.snapshot();
            go_to_year(store, state.years.first().copied())
        }
        Event::LastSeason => {
            let state = store.snapshot();
            go_to_year(store, state.years.last().copied())
        }
        Event::JumpToEra(ordinal) => {
            let start = store
                .dataset()
                .and_then(|d| d.eras.get(*ordinal).map(|e| e.start));
            go_to_year(store, start)
        }
        Event::GoToMoment => {
            let year = store
                .dataset()
                .and_then(|d| d.moment_on(ui.today.0, ui.today.1).map(|m| m.year));
            go_to_year(store, year)
        }

        Event::NextNode => {
            ui.move_node_selection(1);
            (true, vec![])
        }
        Event::PrevNode => {
            ui.move_node_selection(-1);
            (true, vec![])
        }
        Event::OpenCard => {
            let slot = node_slot(ui.node_index);
            ui.card = Some(OpenCard {
                slot,
                chip_index: 0,
            });
            ui.input_mode = InputMode::Card;
            // Start the chip cursor on the displayed season.
            if let (Some(years), Some(current)) = (career_years(ui, store), store.current_year()) {
                if let Some(position) = years.iter().position(|&y| y == current) {
                    if let Some(card) = &mut ui.card {
                        card.chip_index = position;
                    }
                }
            }
            (true, vec![])
        }
        Event::CloseCard => {
            ui.card = None;
            ui.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::NextChip => move_chip(ui, store, 1),
        Event::PrevChip => move_chip(ui, store, -1),
        Event::SelectChip => {
            let target = career_years(ui, store).and_then(|years| {
                let card = ui.card?;
                years.get(card.chip_index.min(years.len() - 1)).copied()
            });
            let Some(year) = target else {
                return (false, vec![]);
            };
            ui.card = None;
            ui.input_mode = InputMode::Normal;
            (true, vec![Action::SetYear(year)])
        }

        Event::SearchMode => {
            ui.enter_search();
            (true, vec![])
        }
        Event::FocusSearchBar => {
            ui.input_mode = InputMode::Search(SearchFocus::Typing);
            (true, vec![])
        }
        Event::FocusResults => {
            if result_count(ui, store) > 0 {
                ui.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            (true, vec![])
        }
        Event::ExitSearch => {
            ui.exit_search();
            (true, vec![])
        }
        Event::Char(c) => {
            if matches!(ui.input_mode, InputMode::Search(SearchFocus::Typing)) {
                ui.search_query.push(*c);
                ui.result_index = 0;
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::Backspace => {
            if matches!(ui.input_mode, InputMode::Search(SearchFocus::Typing))
                && ui.search_query.pop().is_some()
            {
                ui.result_index = 0;
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::KeyDown => move_result_selection(ui, store, 1),
        Event::KeyUp => move_result_selection(ui, store, -1),
        Event::SelectResult => {
            let target = {
                let dataset = store.dataset();
                dataset.as_deref().and_then(|d| {
                    let results = search_players(d, &ui.search_query);
                    let selected = ui.result_index.min(results.len().checked_sub(1)?);
                    results[selected].last_year()
                })
            };
            let Some(year) = target else {
                return (false, vec![]);
            };
            ui.exit_search();
            (true, vec![Action::SetYear(year)])
        }

        Event::ShowLeaderboards => {
            ui.input_mode = InputMode::Leaderboards;
            (true, vec![])
        }
        Event::CloseLeaderboards => {
            ui.input_mode = InputMode::Normal;
            (true, vec![])
        }

        Event::Escape => match ui.input_mode {
            InputMode::Card => {
                ui.card = None;
                ui.input_mode = InputMode::Normal;
                (true, vec![])
            }
            InputMode::Search(_) => {
                ui.exit_search();
                (true, vec![])
            }
            InputMode::Leaderboards => {
                ui.input_mode = InputMode::Normal;
                (true, vec![])
            }
            InputMode::Normal => (false, vec![]),
        },
        Event::Quit => (false, vec![Action::Quit]),
    }
}

/// Steps the current season by `delta`, clamped to the season list.
fn shift_season(store: &Store, delta: isize) -> (bool, Vec<Action>) {
    let state = store.snapshot();
    if state.years.is_empty() {
        return (false, vec![]);
    }
    let Some(current) = state.year else {
        return (false, vec![]);
    };
    let index = state
        .years
        .iter()
        .position(|&y| y == current)
        .unwrap_or(0) as isize;
    let next = (index + delta).clamp(0, state.years.len() as isize - 1) as usize;
    go_to_year(store, Some(state.years[next]))
}

/// Emits a season write when `year` resolves to a different listed season.
fn go_to_year(store: &Store, year: Option<u16>) -> (bool, Vec<Action>) {
    let state = store.snapshot();
    match year {
        Some(year) if state.years.contains(&year) && state.year != Some(year) => {
            (true, vec![Action::SetYear(year)])
        }
        _ => (false, vec![]),
    }
}

/// Returns the career years behind the open card, when it has more than
/// one season to offer.
fn career_years(ui: &UiState, store: &Store) -> Option<Vec<u16>> {
    let card = ui.card?;
    let dataset = store.dataset()?;
    let year = store.current_year()?;
    let player_key = dataset
        .roster(year)?
        .player_at(card.slot)?
        .index_key()?;
    let years = dataset.index.get(&player_key)?.years();
    (years.len() > 1).then_some(years)
}

fn move_chip(ui: &mut UiState, store: &Store, delta: isize) -> (bool, Vec<Action>) {
    let Some(years) = career_years(ui, store) else {
        return (false, vec![]);
    };
    let Some(card) = &mut ui.card else {
        return (false, vec![]);
    };
    let count = years.len() as isize;
    card.chip_index = (card.chip_index as isize + delta).rem_euclid(count) as usize;
    (true, vec![])
}

fn result_count(ui: &UiState, store: &Store) -> usize {
    store
        .dataset()
        .map_or(0, |d| search_players(&d, &ui.search_query).len())
}

fn move_result_selection(ui: &mut UiState, store: &Store, delta: isize) -> (bool, Vec<Action>) {
    let count = result_count(ui, store) as isize;
    if count == 0 {
        return (false, vec![]);
    }
    ui.result_index = (ui.result_index as isize + delta).rem_euclid(count) as usize;
    (true, vec![])
}
