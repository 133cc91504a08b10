//! Tracing setup for the application.
//!
//! Spans and events throughout the crate go through `tracing`; this
//! module wires them to a file-backed subscriber at startup.

pub mod init;

pub use init::init_tracing;
