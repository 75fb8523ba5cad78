//! Bounded reading history.
//!
//! Insertion-ordered, oldest first. Appending past capacity evicts the oldest
//! entry; eviction is purely count-based, never time-based.

use std::collections::VecDeque;

use crate::error::TelemetryError;

/// Number of readings retained when no capacity is given.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct HistoryBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> Default for HistoryBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> HistoryBuffer<T> {
    /// Empty buffer holding the last [`DEFAULT_HISTORY_CAPACITY`] entries.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(DEFAULT_HISTORY_CAPACITY + 1),
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Empty buffer holding the last `capacity` entries. `capacity` must be >= 1.
    pub fn with_capacity(capacity: usize) -> Result<Self, TelemetryError> {
        if capacity == 0 {
            return Err(TelemetryError::InvalidCapacity(capacity));
        }
        Ok(Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        })
    }

    /// Append `item`, evicting the oldest entry if the buffer overflows.
    /// Returns the evicted entry, if any.
    pub fn record(&mut self, item: T) -> Option<T> {
        self.entries.push_back(item);
        if self.entries.len() > self.capacity {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Snapshot of the contents, oldest first.
    pub fn all(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }

    /// Most recently recorded entry.
    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
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
}
