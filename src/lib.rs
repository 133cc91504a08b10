//! Dugout: a terminal browser for a baseball franchise's roster history.
//!
//! Dugout visualizes a franchise's historical rosters one season at a
//! time on a field diagram, with:
//! - Season-by-season navigation along a proportional timeline
//! - Era jumps with labels, taglines, and famous quotes
//! - Cross-year player search ranked by career length
//! - Baseball-card detail views with career season chips
//! - Championship banners, season records, and on-this-date moments
//!
//! The dataset is a single static JSON document read once at startup; the
//! application performs no other I/O beyond logging.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← crossterm loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - Key events → state transitions → actions         │  ← UI state
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store         │   │ Data Layer    │
//! │ (ui/)         │   │ (store/)      │   │ (data/)       │
//! │ - Rendering   │   │ - Shared state│   │ - JSON load   │
//! │ - Theming     │   │ - Pub/sub     │   │ - Indexing    │
//! │ - Components  │   │ - Lookups     │   │ - Search      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Dataset model, error types (domain/)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data Flow
//!
//! 1. **Startup** (`main.rs`): parse configuration, initialize tracing,
//!    create the [`store::Store`], subscribe the render path to the
//!    `year` and `loaded` keys.
//! 2. **Load** ([`data::load`]): read and decode the dataset, build the
//!    player index, commit everything into the store in one atomic
//!    update. The fan-out triggers the first real frame.
//! 3. **Interaction**: keys translate to [`app::Event`]s; the handler
//!    mutates [`app::UiState`] and emits [`app::Action`]s; season writes
//!    go back through the store, re-triggering the same fan-out.
//!
//! # Key Design Decisions
//!
//! ## Explicit store, enum-keyed subscriptions
//!
//! The store is constructed once and passed by reference; observable
//! fields are a fixed enum rather than string keys, so subscriptions are
//! checked at compile time.
//!
//! ## Single-threaded by construction
//!
//! State mutation, notification fan-out, and rendering all happen on one
//! thread. The store is `Rc`/`RefCell`-based and deliberately not
//! `Send`: the execution model is cooperative, and the only blocking
//! operation is the initial dataset read.
//!
//! ## Immutable view models
//!
//! Rendering consumes view models computed from snapshots, never live
//! state, which keeps every frame reproducible and testable.

pub mod app;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, Event, InputMode, UiState};
pub use domain::{Dataset, DugoutError, Result};
pub use store::{AppState, StateKey, StateUpdate, Store};
pub use ui::Theme;

use chrono::Datelike;
use serde::Deserialize;

/// Application configuration, read from an optional TOML file.
///
/// Every field has a sensible default, so a missing configuration file is
/// the common case, not an error.
///
/// # Example
///
/// ```toml
/// # ~/.config/dugout/config.toml
/// data_path = "~/franchises/yankees.json"
/// theme = "night-game"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset location. Defaults to [`data::DATA_PATH`] relative to the
    /// working directory; a leading tilde is expanded.
    pub data_path: Option<String>,

    /// Built-in theme name (`pinstripe`, `night-game`). Ignored when
    /// `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme`.
    pub theme_file: Option<String>,

    /// Tracing filter level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Defaults to `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Loads the configuration from the standard location.
    ///
    /// A missing file yields the defaults; an unreadable or malformed
    /// file logs a warning and also yields the defaults, so a typo in the
    /// config never prevents startup.
    #[must_use]
    pub fn load() -> Self {
        let path = infrastructure::config_file();
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "malformed config, using defaults");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                Self::default()
            }
        }
    }

    /// Returns the effective dataset path, tilde-expanded.
    #[must_use]
    pub fn dataset_path(&self) -> String {
        self.data_path
            .as_deref()
            .map_or_else(|| data::DATA_PATH.to_string(), infrastructure::expand_tilde)
    }
}

/// Initializes interaction state from configuration.
///
/// Resolves the theme (custom file first, then built-in name, then the
/// default — failures fall back with a logged warning) and captures
/// today's calendar date for the on-this-date banner.
#[must_use]
pub fn initialize(config: &Config) -> UiState {
    tracing::debug!("initializing dugout");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |name| {
                Theme::from_name(name).unwrap_or_else(|| {
                    tracing::warn!(theme = %name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |file| {
            Theme::from_file(file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %file, error = %e, "failed to load theme, using default");
                Theme::default()
            })
        },
    );

    let now = chrono::Local::now();
    #[allow(clippy::cast_possible_truncation)]
    let today = (now.month() as u8, now.day() as u8);

    UiState::new(theme, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_from_toml() {
        let config: Config = toml::from_str(
            r#"
            data_path = "~/franchises/yankees.json"
            theme = "night-game"
            trace_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme_name.as_deref(), Some("night-game"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn default_config_points_at_the_bundled_path() {
        let config = Config::default();
        assert_eq!(config.dataset_path(), data::DATA_PATH);
    }

    #[test]
    fn initialize_resolves_theme_by_name() {
        let config = Config {
            theme_name: Some("night-game".to_string()),
            ..Config::default()
        };
        let ui = initialize(&config);
        assert_eq!(ui.theme.name, "night-game");

        let fallback = initialize(&Config {
            theme_name: Some("astroturf".to_string()),
            ..Config::default()
        });
        assert_eq!(fallback.theme.name, "pinstripe");
    }
}
