use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use urgentq::{PriorityQueue, QueueManager};

fn filled_queue(len: usize) -> PriorityQueue {
    let mut queue = PriorityQueue::new("bench".to_string());
    for i in 0..len {
        // Spread priorities so the scan has no early-exit luck.
        queue.enqueue(format!("value-{}", i), ((i * 7919) % 104_729) as i64);
    }
    queue
}

/// Benchmark: enqueue throughput (append to backing store)
fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("append_1000", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new("bench".to_string());
            for i in 0..1000 {
                queue.enqueue(black_box("task"), black_box(i));
            }
        });
    });

    group.finish();
}

/// Benchmark: single dequeue cost at several queue sizes (linear scan)
fn bench_dequeue_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dequeue_scan");

    for len in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, &len| {
            b.iter_batched(
                || filled_queue(len),
                |mut queue| {
                    let _ = black_box(queue.dequeue());
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark: full drain in priority order
fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");

    for len in [100, 1_000].iter() {
        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, &len| {
            b.iter_batched(
                || filled_queue(len),
                |mut queue| {
                    while !queue.is_empty() {
                        let _ = black_box(queue.dequeue());
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark: change_priority value search at several queue sizes
fn bench_change_priority(c: &mut Criterion) {
    let mut group = c.benchmark_group("change_priority");

    for len in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, &len| {
            let target = format!("value-{}", len - 1);
            b.iter_batched(
                || filled_queue(len),
                |mut queue| {
                    let _ = black_box(queue.change_priority(&target, -1));
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark: manager routing overhead on top of raw queue operations
fn bench_manager_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager_roundtrip");
    group.sample_size(1000);

    group.bench_function("enqueue_then_dequeue", |b| {
        let mut manager = QueueManager::new(10);
        b.iter(|| {
            manager.enqueue("bench", black_box("task"), black_box(1)).unwrap();
            let _ = black_box(manager.dequeue("bench"));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_enqueue,
    bench_dequeue_scan,
    bench_drain,
    bench_change_priority,
    bench_manager_roundtrip,
);

criterion_main!(benches);
