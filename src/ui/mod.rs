//! User interface rendering layer with component-based architecture.
//!
//! This module turns store snapshots and transient UI state into
//! ANSI-styled terminal output through composable rendering components,
//! with theme support and search match highlighting.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState + UiState → compute_frame → FrameViewModel → render → ANSI
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types representing renderable UI state
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: composable UI component renderers
//! - [`layout`]: field geometry and display metadata
//! - [`helpers`]: shared rendering utilities
//! - [`theme`]: color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardViewModel, DiamondViewModel, FooterViewModel, FrameViewModel, HeaderViewModel,
    NodeViewModel, OverlayViewModel, SearchViewModel, TimelineViewModel,
};
