//! Filesystem path resolution for configuration and logs.
//!
//! This module resolves the XDG-style locations Dugout uses: a data
//! directory for the log file and a config directory for the optional
//! TOML configuration. Tilde expansion is provided for paths users write
//! in that configuration.

use std::path::PathBuf;

/// Returns the data directory for Dugout (log files).
///
/// `$XDG_DATA_HOME/dugout` when set, otherwise
/// `$HOME/.local/share/dugout`, falling back to a relative `.dugout`
/// directory when neither variable exists.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("dugout");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local/share/dugout");
    }
    PathBuf::from(".dugout")
}

/// Returns the configuration file location.
///
/// `$XDG_CONFIG_HOME/dugout/config.toml` when set, otherwise
/// `$HOME/.config/dugout/config.toml`, falling back to a relative
/// `dugout.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("dugout/config.toml");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/dugout/config.toml");
    }
    PathBuf::from("dugout.toml")
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde pass through unchanged, as does everything when
/// no home directory is known.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match std::env::var("HOME") {
        Ok(home) => expand_tilde_with(path, &home),
        Err(_) => path.to_string(),
    }
}

fn expand_tilde_with(path: &str, home: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        return format!("{home}/{rest}");
    }
    if path == "~" {
        return home.to_string();
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_prefix_expands_to_home() {
        assert_eq!(
            expand_tilde_with("~/data/franchise.json", "/home/fan"),
            "/home/fan/data/franchise.json"
        );
        assert_eq!(expand_tilde_with("~", "/home/fan"), "/home/fan");
        assert_eq!(
            expand_tilde_with("/absolute/path", "/home/fan"),
            "/absolute/path"
        );
        assert_eq!(expand_tilde_with("relative", "/home/fan"), "relative");
    }
}
