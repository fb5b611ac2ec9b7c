//! Calculation history with bounded storage

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single history entry: the expression as shown and the rendered result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The evaluated expression, with display glyphs (× ÷)
    pub expression: String,
    /// The result as it was shown on the entry line
    pub result: String,
    /// Unix timestamp in seconds
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time
    #[must_use]
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::with_timestamp(expression, result, timestamp)
    }

    /// Creates an entry with an explicit timestamp
    #[must_use]
    pub fn with_timestamp(
        expression: impl Into<String>,
        result: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp,
        }
    }

    /// Formats as "expression = result"
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Bounded calculation history; the oldest entry falls off when full
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default capacity
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a history with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history bounded to `max_entries`
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Appends an entry, evicting the oldest when at capacity
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records an expression/result pair stamped with the current time
    pub fn record(&mut self, expression: &str, result: &str) {
        self.push(HistoryEntry::new(expression, result));
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// The most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// The oldest entry
    #[must_use]
    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Serializes the entries to a JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let entries: Vec<&HistoryEntry> = self.entries.iter().collect();
        serde_json::to_string_pretty(&entries)
    }

    /// Restores entries from a JSON array, keeping the newest when the
    /// input exceeds `max_entries`
    pub fn from_json(json: &str, max_entries: usize) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::with_capacity(max_entries);
        for entry in entries {
            history.push(entry);
        }
        Ok(history)
    }

    /// Formats all entries as display lines, oldest first
    #[must_use]
    pub fn export_formatted(&self) -> Vec<String> {
        self.entries.iter().map(HistoryEntry::display).collect()
    }
}
