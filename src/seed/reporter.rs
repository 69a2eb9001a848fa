//! Append-only run log shared by both pipeline passes and the driver.
//!
//! The log is the sole side-channel visible to the invoker: no counts or
//! summaries are reported separately from its lines. Appending never fails,
//! so reporting can never affect pipeline outcome. Each line is mirrored to
//! `tracing` so operators get the same trail on stderr.

use chrono::Local;

use super::types::LogEntry;

/// Ordered, append-only log scoped to one invocation.
#[derive(Debug, Default)]
pub struct RunReporter {
    entries: Vec<LogEntry>,
}

impl RunReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one time-stamped line.
    pub fn append(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(target: "seed_run", "{message}");
        self.entries.push(LogEntry {
            timestamp: Local::now(),
            message,
        });
    }

    /// Take the accumulated entries, leaving the reporter empty.
    pub fn drain(&mut self) -> Vec<LogEntry> {
        std::mem::take(&mut self.entries)
    }

    /// Messages only, in append order. Test/display convenience.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
