use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use incrementor::counters::bounded::Bounded;
use incrementor::counters::locked::Locked;
use incrementor::counters::Incrementor;

const NUM_THREADS: usize = 8;
const ITERATIONS_PER_THREAD: usize = 100_000;

fn bench_single_thread(c: &mut Criterion) {
    let mut group = c.benchmark_group("increment_single_thread");

    let bounded = Bounded::new();
    group.bench_function("Bounded", |b| b.iter(|| bounded.increment()));

    let locked = Locked::new();
    group.bench_function("Locked", |b| b.iter(|| locked.increment()));

    let wrapping = Bounded::new().with_maximum(1023).unwrap();
    group.bench_function("Bounded (maximum 1023)", |b| {
        b.iter(|| wrapping.increment())
    });

    group.finish();
}

fn contended<C: Incrementor + 'static>(counter: C) -> i64 {
    let counter = Arc::new(counter);
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                for _ in 0..ITERATIONS_PER_THREAD {
                    counter.increment();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    counter.number()
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("increment_contended");
    let label = format!("{}threads x {}iter", NUM_THREADS, ITERATIONS_PER_THREAD);

    group.bench_function(BenchmarkId::new("Bounded", &label), |b| {
        b.iter(|| black_box(contended(Bounded::new())))
    });

    group.bench_function(BenchmarkId::new("Locked", &label), |b| {
        b.iter(|| black_box(contended(Locked::new())))
    });

    // Unbounded baseline: no wrap check, so not a drop-in replacement.
    group.bench_function(BenchmarkId::new("AtomicI64 (fetch_add)", &label), |b| {
        b.iter(|| {
            let counter = Arc::new(AtomicI64::new(0));
            let handles: Vec<_> = (0..NUM_THREADS)
                .map(|_| {
                    let counter = Arc::clone(&counter);
                    thread::spawn(move || {
                        for _ in 0..ITERATIONS_PER_THREAD {
                            counter.fetch_add(1, Ordering::Relaxed);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }

            black_box(counter.load(Ordering::Relaxed))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_single_thread, bench_contended);
criterion_main!(benches);
