use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::priority_queue::PriorityQueue;
use crate::error::QueueError;

/// Single-owner registry of named priority queues.
///
/// Queues are created on first use, up to `max_queues`. All access goes
/// through the owning manager; there is no shared or concurrent access.
pub struct QueueManager {
    queues: HashMap<String, PriorityQueue>,
    max_queues: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsSummary {
    pub total_queues: usize,
    pub queues: HashMap<String, QueueStatsInfo>,
}

#[derive(Debug, Serialize)]
pub struct QueueStatsInfo {
    pub len: usize,
    pub enqueued_total: u64,
    pub dequeued_total: u64,
    pub reprioritized_total: u64,
}

impl QueueManager {
    pub fn new(max_queues: usize) -> Self {
        Self {
            queues: HashMap::new(),
            max_queues,
        }
    }

    pub fn get_or_create_queue(
        &mut self,
        name: &str,
    ) -> Result<&mut PriorityQueue, QueueError> {
        if !self.queues.contains_key(name) && self.queues.len() >= self.max_queues {
            return Err(QueueError::QueueLimitReached(self.max_queues));
        }
        Ok(self.queues.entry(name.to_string()).or_insert_with(|| {
            debug!(queue = name, "creating queue");
            PriorityQueue::new(name.to_string())
        }))
    }

    pub fn get_queue(&self, name: &str) -> Option<&PriorityQueue> {
        self.queues.get(name)
    }

    pub fn get_queue_mut(&mut self, name: &str) -> Option<&mut PriorityQueue> {
        self.queues.get_mut(name)
    }

    /// Enqueues into the named queue, creating it if needed.
    pub fn enqueue(
        &mut self,
        queue_name: &str,
        value: impl Into<String>,
        priority: i64,
    ) -> Result<(), QueueError> {
        let queue = self.get_or_create_queue(queue_name)?;
        queue.enqueue(value, priority);
        Ok(())
    }

    /// Dequeues the most urgent value from the named queue. Unknown
    /// names are an error; dequeuing never creates a queue.
    pub fn dequeue(&mut self, queue_name: &str) -> Result<String, QueueError> {
        let queue = self
            .queues
            .get_mut(queue_name)
            .ok_or_else(|| QueueError::QueueNotFound(queue_name.to_string()))?;
        queue.dequeue()
    }

    pub fn peek(&self, queue_name: &str) -> Result<&str, QueueError> {
        let queue = self
            .queues
            .get(queue_name)
            .ok_or_else(|| QueueError::QueueNotFound(queue_name.to_string()))?;
        queue.peek()
    }

    pub fn delete_queue(&mut self, name: &str) -> Result<(), QueueError> {
        match self.queues.remove(name) {
            Some(queue) => {
                debug!(queue = name, dropped = queue.len(), "deleting queue");
                Ok(())
            }
            None => Err(QueueError::QueueNotFound(name.to_string())),
        }
    }

    pub fn list_queues(&self) -> Vec<String> {
        let mut names: Vec<String> = self.queues.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn queue_count(&self) -> usize {
        self.queues.len()
    }

    pub fn max_queues(&self) -> usize {
        self.max_queues
    }

    pub fn stats_summary(&self) -> StatsSummary {
        let queues = self
            .queues
            .iter()
            .map(|(name, queue)| {
                let stats = queue.stats();
                (
                    name.clone(),
                    QueueStatsInfo {
                        len: queue.len(),
                        enqueued_total: stats.enqueued_total(),
                        dequeued_total: stats.dequeued_total(),
                        reprioritized_total: stats.reprioritized_total(),
                    },
                )
            })
            .collect();

        StatsSummary {
            total_queues: self.queues.len(),
            queues,
        }
    }
}
