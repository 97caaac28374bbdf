// Queue module exports

pub mod entry;
pub mod manager;
pub mod priority_queue;

pub use entry::Entry;
pub use manager::{QueueManager, QueueStatsInfo, StatsSummary};
pub use priority_queue::{PriorityQueue, QueueStats};
