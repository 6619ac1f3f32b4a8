//! Append-only activity log shown in the window

use tracing::info;

/// Ordered, append-only list of human-readable events
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<String>,
}

impl ActivityLog {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line; it is mirrored to the diagnostic log
    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!(target: "activity", "{}", message);
        self.entries.push(message);
    }

    /// All lines, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Lines appended after the first `seen` lines
    pub fn since(&self, seen: usize) -> &[String] {
        self.entries.get(seen..).unwrap_or_default()
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
