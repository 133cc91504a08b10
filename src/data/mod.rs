//! Data acquisition layer: dataset loading, indexing, and search.
//!
//! One load populates the store; the derived appearance index rides along
//! inside the dataset and serves search and career lookups for the rest
//! of the session.
//!
//! # Modules
//!
//! - [`loader`]: the single dataset read and atomic store commit
//! - [`index`]: the player-appearance index built at load time
//! - [`search`]: substring search over the index, ranked by career length

pub mod index;
pub mod loader;
pub mod search;

pub use index::{Appearance, IndexEntry, PlayerIndex};
pub use loader::{load, DATA_PATH};
pub use search::{search_players, MAX_RESULTS};
