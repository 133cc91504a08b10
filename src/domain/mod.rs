//! Core domain types: the franchise dataset model and error types.
//!
//! This module holds the types every other layer depends on. The dataset
//! model mirrors the JSON document read at startup; the error type
//! consolidates all failure conditions behind a single `Result` alias.

pub mod error;
pub mod model;

pub use error::{DugoutError, Result};
pub use model::{
    Dataset, Era, LeaderboardEntry, Moment, PitchingStaff, Player, Position, Role, RosterSlot,
    SeasonRecord, SeasonRoster, WorldSeries, POSITION_ORDER, STARTER_SLOTS,
};
