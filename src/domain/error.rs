//! Error types for the Dugout application.
//!
//! This module defines the centralized error type [`DugoutError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for Dugout operations.
///
/// This enum consolidates all error conditions that can occur while loading
/// the dataset, reading configuration, or applying themes. Most variants wrap
/// underlying errors from external crates using `#[from]` for automatic
/// conversion.
///
/// # Examples
///
/// ```
/// use dugout::domain::DugoutError;
///
/// fn validate_config() -> Result<(), DugoutError> {
///     Err(DugoutError::Config("missing required field".to_string()))
/// }
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum DugoutError {
    /// The dataset could not be decoded.
    ///
    /// Occurs when the dataset file is present but does not parse as the
    /// expected JSON shape. The string contains the decoder's description of
    /// what went wrong.
    #[error("Data error: {0}")]
    Data(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, most commonly a
    /// missing dataset file. Automatically converts from `std::io::Error`
    /// using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be read or parsed. The string
    /// contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the configuration file exists but is malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The terminal could not be driven.
    ///
    /// Wraps failures from the terminal backend (raw mode, alternate
    /// screen, event polling).
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// A specialized `Result` type for Dugout operations.
///
/// This is a type alias for `std::result::Result<T, DugoutError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, DugoutError>;
