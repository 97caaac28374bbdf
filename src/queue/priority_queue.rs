use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::entry::Entry;
use crate::error::QueueError;

/// A value-priority queue over an unordered backing store.
///
/// Entries live in a plain `Vec` in insertion order; no heap or sorted
/// invariant is maintained. The most urgent entry (numerically smallest
/// priority, earliest inserted on ties) is found by a linear scan each
/// time it is needed.
pub struct PriorityQueue {
    name: String,
    entries: Vec<Entry>,
    stats: QueueStats,
}

/// Lifetime operation counters for one queue.
#[derive(Debug, Default, Clone, Serialize)]
pub struct QueueStats {
    enqueued_total: u64,
    dequeued_total: u64,
    reprioritized_total: u64,
}

impl QueueStats {
    pub fn enqueued_total(&self) -> u64 {
        self.enqueued_total
    }

    pub fn dequeued_total(&self) -> u64 {
        self.dequeued_total
    }

    pub fn reprioritized_total(&self) -> u64 {
        self.reprioritized_total
    }
}

impl PriorityQueue {
    pub fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
            stats: QueueStats::default(),
        }
    }

    /// Appends an entry to the backing store. Any priority is accepted,
    /// including negative, zero, and duplicates of existing priorities.
    pub fn enqueue(&mut self, value: impl Into<String>, priority: i64) {
        self.entries.push(Entry::new(value, priority));
        self.stats.enqueued_total += 1;
    }

    /// Removes and returns the value of the most urgent entry.
    pub fn dequeue(&mut self) -> Result<String, QueueError> {
        let index = self.most_urgent_index().ok_or(QueueError::Empty)?;
        let entry = self.entries.remove(index);
        self.stats.dequeued_total += 1;
        Ok(entry.value)
    }

    /// Returns the value of the most urgent entry without removing it.
    pub fn peek(&self) -> Result<&str, QueueError> {
        self.most_urgent_index()
            .map(|i| self.entries[i].value.as_str())
            .ok_or(QueueError::Empty)
    }

    /// Returns the priority of the most urgent entry without removing it.
    pub fn peek_priority(&self) -> Result<i64, QueueError> {
        self.most_urgent_index()
            .map(|i| self.entries[i].priority)
            .ok_or(QueueError::Empty)
    }

    /// Reassigns the priority of the first entry (in insertion order)
    /// whose value matches. Only a strictly more urgent priority is
    /// accepted; anything else leaves the queue untouched and errors.
    pub fn change_priority(
        &mut self,
        value: &str,
        new_priority: i64,
    ) -> Result<(), QueueError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.value == value)
            .ok_or_else(|| QueueError::ValueNotFound(value.to_string()))?;

        if new_priority >= entry.priority {
            return Err(QueueError::PriorityNotRaised {
                value: value.to_string(),
                current: entry.priority,
                requested: new_priority,
            });
        }

        entry.priority = new_priority;
        self.stats.reprioritized_total += 1;
        Ok(())
    }

    pub fn clear(&mut self) {
        debug!(queue = %self.name, dropped = self.entries.len(), "clearing queue");
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn stats(&self) -> &QueueStats {
        &self.stats
    }

    // Index of the minimum-priority entry; scanning front to back means
    // the earliest-inserted entry wins ties.
    fn most_urgent_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, entry) in self.entries.iter().enumerate() {
            match best {
                Some(b) if self.entries[b].priority <= entry.priority => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

impl fmt::Display for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry)?;
        }
        write!(f, "}}")
    }
}
