//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the application,
//! supporting built-in themes and custom themes loaded from TOML files,
//! plus utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `pinstripe`: navy-and-gold classic (default)
//! - `night-game`: cooler dark palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e8e8ec"
//! text_normal = "#d5d8e0"
//! text_dim = "#6b7089"
//! border = "#3b4261"
//! accent = "#c5a572"
//! selection_fg = "#14151f"
//! selection_bg = "#c5a572"
//! field_fg = "#5a8f5a"
//! ws_gold = "#ffd700"
//! ws_lost = "#9aa3b2"
//! era_active_fg = "#ffd700"
//! search_bar_border = "#c5a572"
//! match_highlight_fg = "#14151f"
//! match_highlight_bg = "#e0af68"
//! card_border = "#c5a572"
//! empty_state_fg = "#7aa2f7"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{DugoutError, Result};

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g. `"#c5a572"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header title color.
    pub header_fg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,
    /// Accent color (year pill, era highlights).
    pub accent: String,

    /// Selected item foreground color.
    pub selection_fg: String,
    /// Selected item background color.
    pub selection_bg: String,

    /// Field diagram line color.
    pub field_fg: String,

    /// Championship gold (banners, markers, trophies).
    pub ws_gold: String,
    /// Pennant-loss marker color.
    pub ws_lost: String,

    /// Active era pill color.
    pub era_active_fg: String,

    /// Search box border color.
    pub search_bar_border: String,
    /// Match highlight foreground.
    pub match_highlight_fg: String,
    /// Match highlight background.
    pub match_highlight_bg: String,

    /// Player card border color.
    pub card_border: String,

    /// Loading / empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `pinstripe`, `night-game`. Returns `None` for
    /// unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "pinstripe" => include_str!("../../themes/pinstripe.toml"),
            "night-game" => include_str!("../../themes/night-game.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DugoutError::Theme`] when the file cannot be read or its
    /// contents do not parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DugoutError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| DugoutError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present; falls back to white on malformed
    /// input so a bad theme degrades visibly instead of failing a frame.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`pinstripe`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("pinstripe").expect("built-in pinstripe theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::from_name("pinstripe").unwrap().name, "pinstripe");
        assert_eq!(Theme::from_name("night-game").unwrap().name, "night-game");
        assert!(Theme::from_name("astroturf").is_none());
    }

    #[test]
    fn hex_colors_convert_to_ansi_sequences() {
        assert_eq!(Theme::fg("#ffd700"), "\u{001b}[38;2;255;215;0m");
        assert_eq!(Theme::bg("000000"), "\u{001b}[48;2;0;0;0m");
        // Malformed input degrades to white.
        assert_eq!(Theme::fg("#xyz"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn theme_file_errors_are_theme_errors() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(err, DugoutError::Theme(_)));
    }
}
