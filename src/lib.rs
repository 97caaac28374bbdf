// UrgentQ - In-memory value-priority queue
//
// This library provides the core priority queue functionality.
// Lower numeric priority means more urgent; ties go to the
// earliest-inserted entry.

pub mod error;
pub mod queue;

pub use error::QueueError;
pub use queue::{Entry, PriorityQueue, QueueManager, QueueStats, StatsSummary};
