//! Recent conversions, newest first

use std::collections::VecDeque;
use serde::Serialize;

/// Number of entries kept when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded, de-duplicated list of display strings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert at the front. An entry already present is left where it is
    /// and `false` is returned. The oldest entry drops off at capacity.
    pub fn push(&mut self, entry: impl Into<String>) -> bool {
        let entry = entry.into();
        if self.entries.contains(&entry) {
            return false;
        }

        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
        true
    }

    /// Entries, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
