//! Terminal runtime shim.
//!
//! This module provides the thin integration layer between the Dugout
//! library and the terminal: raw mode and alternate screen management,
//! key event translation, action execution, and the render loop.
//!
//! # Lifecycle
//!
//! 1. **Startup**: load configuration, initialize tracing, create the
//!    store, subscribe the render path to the `year` and `loaded` keys.
//! 2. **Load**: draw the loading frame, then read and commit the dataset.
//!    A load failure degrades the loading screen to a static failure
//!    message and exits nonzero.
//! 3. **Loop**: wait for terminal events, translate keys to application
//!    events for the active mode, execute the resulting actions, and
//!    redraw when the dirty flag is set.
//!
//! # Key Mapping
//!
//! Normal mode:
//! - `←`/`h`, `→`/`l`: previous / next season
//! - `Home`/`g`, `End`/`G`: first / last season
//! - `1`-`9`: jump to the Nth era
//! - `Tab`/`n`, `BackTab`/`p`: cycle the selected node
//! - `Enter`: open the player card; `/`: search; `o`: on this date
//! - `b`: leaderboards; `q`, `Ctrl+c`: quit
//!
//! Search mode: type to filter; `Enter`/`↓` moves to the results;
//! `↑`/`↓` navigate; `Enter` jumps to the player's most recent season;
//! `Esc` closes. Card mode: `←`/`→` select a career season, `Enter`
//! jumps there, `Esc` closes.

use std::cell::Cell;
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};

use dugout::app::{handle_event, Action, Event, InputMode, SearchFocus, UiState};
use dugout::domain::{DugoutError, Result};
use dugout::store::{StateKey, StateUpdate, Store};
use dugout::ui::components::render_loading;
use dugout::{data, observability, Config};

fn main() {
    let config = Config::load();
    observability::init_tracing(&config);

    if let Err(e) = run(&config) {
        eprintln!("dugout: {e}");
        std::process::exit(1);
    }
}

/// Wires the store, UI state, and terminal together, restoring the
/// terminal whatever happens inside the session.
fn run(config: &Config) -> Result<()> {
    let store = Store::new();
    let mut ui_state = dugout::initialize(config);

    // Render consumers subscribe before any data exists; redraws are
    // driven by these flags from the store's notification fan-out.
    let dirty = Rc::new(Cell::new(true));
    let on_year = Rc::clone(&dirty);
    store.subscribe(StateKey::Year, move |_| on_year.set(true));
    let on_loaded = Rc::clone(&dirty);
    store.subscribe(StateKey::Loaded, move |_| on_loaded.set(true));

    setup_terminal()?;
    let result = session(config, &store, &mut ui_state, &dirty);
    restore_terminal();
    result
}

fn session(config: &Config, store: &Store, ui_state: &mut UiState, dirty: &Cell<bool>) -> Result<()> {
    draw(ui_state, store)?;

    let data_path = config.dataset_path();
    if let Err(e) = data::load(store, Path::new(&data_path)) {
        tracing::error!(path = %data_path, error = %e, "dataset load failed");
        show_failure(ui_state)?;
        return Err(e);
    }

    loop {
        if dirty.get() {
            draw(ui_state, store)?;
            dirty.set(false);
        }

        match event::read().map_err(|e| DugoutError::Terminal(e.to_string()))? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(app_event) = translate_key(ui_state.input_mode, &key) else {
                    continue;
                };
                let (redraw, actions) = handle_event(ui_state, store, &app_event);
                if redraw {
                    dirty.set(true);
                }
                for action in actions {
                    match action {
                        Action::SetYear(year) => store.set(StateUpdate::year(year)),
                        Action::Quit => return Ok(()),
                    }
                }
            }
            TermEvent::Resize(_, _) => dirty.set(true),
            _ => {}
        }
    }
}

/// Translates a terminal key into an application event for the active
/// mode. Unmapped keys produce `None`.
fn translate_key(mode: InputMode, key: &KeyEvent) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Event::Quit);
    }

    match mode {
        InputMode::Normal => match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Event::PrevSeason),
            KeyCode::Right | KeyCode::Char('l') => Some(Event::NextSeason),
            KeyCode::Home | KeyCode::Char('g') => Some(Event::FirstSeason),
            KeyCode::End | KeyCode::Char('G') => Some(Event::LastSeason),
            KeyCode::Char(c @ '1'..='9') => {
                Some(Event::JumpToEra(c.to_digit(10)? as usize - 1))
            }
            KeyCode::Tab | KeyCode::Char('n') => Some(Event::NextNode),
            KeyCode::BackTab | KeyCode::Char('p') => Some(Event::PrevNode),
            KeyCode::Enter => Some(Event::OpenCard),
            KeyCode::Char('/') => Some(Event::SearchMode),
            KeyCode::Char('o') => Some(Event::GoToMoment),
            KeyCode::Char('b') => Some(Event::ShowLeaderboards),
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Esc => Some(Event::Escape),
            _ => None,
        },
        InputMode::Search(SearchFocus::Typing) => match key.code {
            KeyCode::Esc => Some(Event::ExitSearch),
            KeyCode::Enter | KeyCode::Down => Some(Event::FocusResults),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Char(c) => Some(Event::Char(c)),
            _ => None,
        },
        InputMode::Search(SearchFocus::Navigating) => match key.code {
            KeyCode::Esc => Some(Event::ExitSearch),
            KeyCode::Char('/') => Some(Event::FocusSearchBar),
            KeyCode::Down | KeyCode::Char('j') => Some(Event::KeyDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Event::KeyUp),
            KeyCode::Enter => Some(Event::SelectResult),
            KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        },
        InputMode::Card => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Event::CloseCard),
            KeyCode::Left | KeyCode::Char('h') => Some(Event::PrevChip),
            KeyCode::Right | KeyCode::Char('l') => Some(Event::NextChip),
            KeyCode::Enter => Some(Event::SelectChip),
            _ => None,
        },
        InputMode::Leaderboards => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('b') => {
                Some(Event::CloseLeaderboards)
            }
            _ => None,
        },
    }
}

/// Renders one frame at the current terminal size and flushes.
fn draw(ui_state: &UiState, store: &Store) -> Result<()> {
    let (cols, rows) = terminal::size().map_err(|e| DugoutError::Terminal(e.to_string()))?;
    dugout::ui::render(ui_state, &store.snapshot(), rows as usize, cols as usize);
    io::stdout()
        .flush()
        .map_err(|e| DugoutError::Terminal(e.to_string()))?;
    Ok(())
}

/// Degrades the loading screen to a static failure message and waits for
/// a key before returning.
fn show_failure(ui_state: &UiState) -> Result<()> {
    let (cols, rows) = terminal::size().map_err(|e| DugoutError::Terminal(e.to_string()))?;
    print!("\u{1b}[2J\u{1b}[H");
    render_loading(
        "Failed to load season data. Press any key to exit.",
        &ui_state.theme,
        rows as usize,
        cols as usize,
    );
    io::stdout()
        .flush()
        .map_err(|e| DugoutError::Terminal(e.to_string()))?;
    let _ = event::read();
    Ok(())
}

fn setup_terminal() -> Result<()> {
    terminal::enable_raw_mode().map_err(|e| DugoutError::Terminal(e.to_string()))?;
    execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)
        .map_err(|e| DugoutError::Terminal(e.to_string()))?;
    Ok(())
}

/// Best-effort terminal restore; errors here are not worth surfacing
/// over whatever caused the exit.
fn restore_terminal() {
    let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}
