//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber pipeline. Output goes to
//! a log file in the data directory rather than stdout, because stdout is
//! the rendered UI; interleaving log lines with ANSI frames would corrupt
//! both.

use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure::paths;
use crate::Config;

/// Initializes the tracing subscriber with file output.
///
/// The filter level comes from `config.trace_level`, defaulting to
/// `"info"`. Log lines are appended to `dugout.log` in the data
/// directory.
///
/// Observability is optional: if the data directory or log file cannot be
/// created, initialization silently does nothing rather than preventing
/// startup. Idempotent; only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("dugout.log"))
    else {
        return;
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(file_layer);

    let _ = subscriber.try_init();
}
