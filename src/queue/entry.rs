use serde::{Deserialize, Serialize};
use std::fmt;

/// One stored pair. Values are not unique; two entries with the same
/// value are told apart only by their position in the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub value: String,
    pub priority: i64,
}

impl Entry {
    pub fn new(value: impl Into<String>, priority: i64) -> Self {
        Self {
            value: value.into(),
            priority,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\":{}", self.value, self.priority)
    }
}
