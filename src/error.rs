use thiserror::Error;

/// Errors surfaced by queue and manager operations.
///
/// A failed operation never disturbs queue contents; the error is fatal
/// to the call, not to the queue.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is empty")]
    Empty,

    #[error("no entry with value '{0}'")]
    ValueNotFound(String),

    #[error("new priority {requested} for '{value}' does not beat current priority {current}")]
    PriorityNotRaised {
        value: String,
        current: i64,
        requested: i64,
    },

    #[error("no queue named '{0}'")]
    QueueNotFound(String),

    #[error("queue limit of {0} reached")]
    QueueLimitReached(usize),
}
