//! Append-only, date-partitioned hook log
//!
//! Each write creates the directory if needed, prunes expired day files and
//! appends one line to today's file:
//!
//! ```text
//! [2026-02-06T10:00:00.123Z] llm_input | {"model":"gpt-5","provider":"openai","prompt":"hi"}
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::LogConfig;
use crate::consts::{DATE_FORMAT, DIAG_PREFIX, LOG_EXTENSION};
use crate::error::HookLoggerError;
use crate::retention::{ensure_log_directory, prune_old_logs};
use crate::summary::Summary;

#[derive(Debug, Clone)]
pub struct EventLogger {
    config: LogConfig,
}

impl EventLogger {
    /// `config.debug` only affects this logger's prune diagnostics.
    pub fn new(config: LogConfig) -> Self {
        Self { config }
    }

    /// Path of the day file that entries written at `now` go to
    pub fn log_file_path(&self, now: DateTime<Utc>) -> PathBuf {
        self.config.log_dir.join(format!(
            "{}.{}",
            now.format(DATE_FORMAT),
            LOG_EXTENSION
        ))
    }

    pub fn write_entry(&self, event_name: &str, summary: &Summary) -> Result<(), HookLoggerError> {
        self.write_entry_at(event_name, summary, Utc::now())
    }

    /// Append one entry as if the current time were `now`.
    pub fn write_entry_at(
        &self,
        event_name: &str,
        summary: &Summary,
        now: DateTime<Utc>,
    ) -> Result<(), HookLoggerError> {
        println!("{DIAG_PREFIX} Logging: {event_name}");

        ensure_log_directory(&self.config.log_dir)?;
        prune_old_logs(
            &self.config.log_dir,
            self.config.retention(),
            SystemTime::from(now),
            self.config.debug,
        );

        let line = format_entry(now, event_name, summary)?;
        let path = self.log_file_path(now);
        println!("{DIAG_PREFIX} Writing to: {}", path.display());

        append_line(&path, &line).map_err(|source| HookLoggerError::Append { path, source })
    }
}

/// `[<timestamp>] <event> | <compact json>`
pub fn format_entry(
    now: DateTime<Utc>,
    event_name: &str,
    summary: &Summary,
) -> Result<String, HookLoggerError> {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let json = serde_json::to_string(summary)?;
    Ok(format!("[{timestamp}] {event_name} | {json}"))
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}
