use urgentq::{QueueError, QueueManager};

#[test]
fn test_queue_manager_creation() {
    let manager = QueueManager::new(10);

    assert_eq!(manager.queue_count(), 0);
    assert_eq!(manager.max_queues(), 10);
}

#[test]
fn test_get_or_create_queue() {
    let mut manager = QueueManager::new(10);

    let queue = manager.get_or_create_queue("emails").unwrap();

    assert_eq!(queue.name(), "emails");
    assert_eq!(manager.queue_count(), 1);
}

#[test]
fn test_get_or_create_returns_existing_queue() {
    let mut manager = QueueManager::new(10);

    manager
        .get_or_create_queue("emails")
        .unwrap()
        .enqueue("welcome", 1);

    let queue = manager.get_or_create_queue("emails").unwrap();

    assert_eq!(queue.len(), 1);
    assert_eq!(manager.queue_count(), 1);
}

#[test]
fn test_get_queue_existing() {
    let mut manager = QueueManager::new(10);

    manager.get_or_create_queue("webhooks").unwrap();

    let queue = manager.get_queue("webhooks");

    assert!(queue.is_some());
    assert_eq!(queue.unwrap().name(), "webhooks");
}

#[test]
fn test_get_queue_nonexistent() {
    let manager = QueueManager::new(10);

    assert!(manager.get_queue("nonexistent").is_none());
}

#[test]
fn test_enqueue_creates_queue_on_demand() {
    let mut manager = QueueManager::new(10);

    manager.enqueue("jobs", "backup", 2).unwrap();
    manager.enqueue("jobs", "restore", 1).unwrap();

    assert_eq!(manager.queue_count(), 1);
    assert_eq!(manager.get_queue("jobs").unwrap().len(), 2);
}

#[test]
fn test_dequeue_routes_to_named_queue() {
    let mut manager = QueueManager::new(10);

    manager.enqueue("jobs", "backup", 2).unwrap();
    manager.enqueue("jobs", "restore", 1).unwrap();
    manager.enqueue("mail", "digest", 0).unwrap();

    assert_eq!(manager.dequeue("jobs").unwrap(), "restore");
    assert_eq!(manager.dequeue("mail").unwrap(), "digest");
}

#[test]
fn test_dequeue_unknown_queue_is_an_error() {
    let mut manager = QueueManager::new(10);

    let result = manager.dequeue("missing");

    assert_eq!(result, Err(QueueError::QueueNotFound("missing".to_string())));
    assert_eq!(manager.queue_count(), 0);
}

#[test]
fn test_peek_does_not_remove() {
    let mut manager = QueueManager::new(10);

    manager.enqueue("jobs", "backup", 2).unwrap();

    assert_eq!(manager.peek("jobs").unwrap(), "backup");
    assert_eq!(manager.get_queue("jobs").unwrap().len(), 1);
}

#[test]
fn test_peek_empty_queue_propagates_error() {
    let mut manager = QueueManager::new(10);

    manager.get_or_create_queue("jobs").unwrap();

    assert_eq!(manager.peek("jobs"), Err(QueueError::Empty));
}

#[test]
fn test_max_queues_enforced() {
    let mut manager = QueueManager::new(2);

    manager.get_or_create_queue("one").unwrap();
    manager.get_or_create_queue("two").unwrap();

    let result = manager.get_or_create_queue("three");

    assert_eq!(result.err(), Some(QueueError::QueueLimitReached(2)));
    assert_eq!(manager.queue_count(), 2);
}

#[test]
fn test_max_queues_does_not_block_existing_names() {
    let mut manager = QueueManager::new(1);

    manager.get_or_create_queue("only").unwrap();

    assert!(manager.get_or_create_queue("only").is_ok());
}

#[test]
fn test_delete_queue() {
    let mut manager = QueueManager::new(10);

    manager.enqueue("jobs", "backup", 1).unwrap();

    manager.delete_queue("jobs").unwrap();

    assert_eq!(manager.queue_count(), 0);
    assert!(manager.get_queue("jobs").is_none());
}

#[test]
fn test_delete_unknown_queue_is_an_error() {
    let mut manager = QueueManager::new(10);

    let result = manager.delete_queue("missing");

    assert_eq!(result, Err(QueueError::QueueNotFound("missing".to_string())));
}

#[test]
fn test_list_queues_is_sorted() {
    let mut manager = QueueManager::new(10);

    manager.get_or_create_queue("zeta").unwrap();
    manager.get_or_create_queue("alpha").unwrap();
    manager.get_or_create_queue("mid").unwrap();

    assert_eq!(manager.list_queues(), vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_stats_summary_covers_all_queues() {
    let mut manager = QueueManager::new(10);

    manager.enqueue("jobs", "backup", 2).unwrap();
    manager.enqueue("jobs", "restore", 1).unwrap();
    manager.dequeue("jobs").unwrap();
    manager.enqueue("mail", "digest", 0).unwrap();

    let summary = manager.stats_summary();

    assert_eq!(summary.total_queues, 2);

    let jobs = &summary.queues["jobs"];
    assert_eq!(jobs.len, 1);
    assert_eq!(jobs.enqueued_total, 2);
    assert_eq!(jobs.dequeued_total, 1);

    let mail = &summary.queues["mail"];
    assert_eq!(mail.len, 1);
    assert_eq!(mail.enqueued_total, 1);
    assert_eq!(mail.dequeued_total, 0);
}

#[test]
fn test_change_priority_through_manager() {
    let mut manager = QueueManager::new(10);

    manager.enqueue("jobs", "backup", 5).unwrap();
    manager.enqueue("jobs", "restore", 3).unwrap();

    manager
        .get_queue_mut("jobs")
        .unwrap()
        .change_priority("backup", 1)
        .unwrap();

    assert_eq!(manager.dequeue("jobs").unwrap(), "backup");
}
