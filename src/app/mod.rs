//! Application layer coordinating UI state, events, and actions.
//!
//! This module sits between the terminal runtime (main.rs) and the
//! store/data layers. It implements the event-driven architecture that
//! powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key Input → Events → Event Handler → UiState Mutations → Actions
//!                                                             ↓
//!              Store change notifications ← Store ← SetYear writes
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`handler`]: event processing and state transition coordinator
//! - [`modes`]: input mode state machine types
//! - [`state`]: transient UI state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::{node_slot, OpenCard, UiState, NODE_COUNT};
