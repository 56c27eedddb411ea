//! Append-only user-visible event log.

use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "log");
        self.entries.push(LogEntry {
            at: Local::now(),
            message,
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if any entry contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.message.contains(needle))
    }

    /// One line per entry, oldest first.
    pub fn as_text(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(&entry.message);
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_insertion_order() {
        let mut log = EventLog::default();
        log.push("Now Running...");
        log.push("Running Complete.");
        assert_eq!(log.len(), 2);
        assert_eq!(log.as_text(), "Now Running...\nRunning Complete.\n");
        assert!(log.contains("Complete"));
    }
}
