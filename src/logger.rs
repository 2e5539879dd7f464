//! Application logging.
//!
//! Two sinks: an in-memory buffer backing the activity-log dialog, and an
//! optional fern dispatch writing to the configured log file. UI code logs
//! through [`Logger`], which feeds both.

use chrono::Utc;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;

/// In-memory entries kept for the activity-log dialog.
const MAX_LOG_ENTRIES: usize = 500;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry, also forwarded to the `log` facade
    pub fn log(&self, message: String) {
        log::info!("{message}");

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_LOG_ENTRIES {
                let excess = logs.len() - MAX_LOG_ENTRIES;
                logs.drain(..excess);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the file logger described by `[logging]`. A no-op when disabled;
/// must be called at most once, before any UI runs.
pub fn init_file_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    if !config.enabled {
        return Ok(());
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .level_for("estatelist", log::LevelFilter::Debug)
        .chain(fern::log_file(&config.file)?)
        .apply()?;

    Ok(())
}
