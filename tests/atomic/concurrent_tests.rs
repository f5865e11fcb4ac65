/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_shim::atomic::AtomicInt;
use std::collections::HashSet;
use std::sync::atomic::{
    AtomicU64 as StdAtomicU64,
    Ordering,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 8;
const ITERATIONS_PER_THREAD: usize = 1000;

fn tag(thread: usize, iteration: usize) -> isize {
    ((thread << 20) | (iteration + 1)) as isize
}

// Every written value is handed back by exactly one exchange, or is final
#[test]
fn test_concurrent_exchange_is_linearizable() {
    let atomic = Arc::new(AtomicInt::new(0));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for t in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let barrier = barrier.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            let mut previous = Vec::with_capacity(ITERATIONS_PER_THREAD);
            for i in 0..ITERATIONS_PER_THREAD {
                previous.push(atomic.exchange(tag(t, i)));
            }
            previous
        });
        handles.push(handle);
    }

    let mut observed: Vec<isize> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    observed.push(atomic.load());

    let mut expected: Vec<isize> = (0..NUM_THREADS)
        .flat_map(|t| (0..ITERATIONS_PER_THREAD).map(move |i| tag(t, i)))
        .collect();
    expected.push(0);

    observed.sort_unstable();
    expected.sort_unstable();
    assert_eq!(observed, expected);
}

// Each thread observes every other thread's writes in that thread's order
#[test]
fn test_concurrent_exchange_is_coherent() {
    let atomic = Arc::new(AtomicInt::new(0));
    let mut handles = vec![];

    for t in 0..NUM_THREADS {
        let atomic = atomic.clone();
        handles.push(thread::spawn(move || {
            (0..ITERATIONS_PER_THREAD)
                .map(|i| atomic.exchange(tag(t, i)))
                .collect::<Vec<_>>()
        }));
    }

    for handle in handles {
        let previous = handle.join().unwrap();
        let mut last_seen: Vec<Option<usize>> = vec![None; NUM_THREADS];
        for value in previous.into_iter().filter(|&value| value != 0) {
            let writer = (value as usize) >> 20;
            let iteration = (value as usize & 0xFFFFF) - 1;
            if let Some(last) = last_seen[writer] {
                assert!(iteration > last, "writer {} went backwards", writer);
            }
            last_seen[writer] = Some(iteration);
        }
    }
}

fn pattern(byte: u8) -> isize {
    isize::from_ne_bytes([byte; std::mem::size_of::<isize>()])
}

#[test]
fn test_no_torn_reads() {
    let writers: Vec<u8> = vec![0x00, 0x11, 0x5A, 0xA5, 0xFF];
    let allowed: HashSet<isize> = writers.iter().map(|&b| pattern(b)).collect();
    let atomic = Arc::new(AtomicInt::new(pattern(0x00)));
    let mut handles = vec![];

    for &byte in &writers {
        let atomic = atomic.clone();
        handles.push(thread::spawn(move || {
            for i in 0..ITERATIONS_PER_THREAD * 10 {
                if i % 2 == 0 {
                    atomic.store(pattern(byte));
                } else {
                    atomic.exchange(pattern(byte));
                }
            }
        }));
    }

    let mut readers = vec![];
    for _ in 0..NUM_THREADS / 2 {
        let atomic = atomic.clone();
        let allowed = allowed.clone();
        readers.push(thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD * 10 {
                let value = atomic.load();
                assert!(allowed.contains(&value), "torn read: {:#x}", value);
            }
        }));
    }

    for handle in handles.into_iter().chain(readers) {
        handle.join().unwrap();
    }
    assert!(allowed.contains(&atomic.load()));
}

#[test]
fn test_store_eventually_observed() {
    let atomic = Arc::new(AtomicInt::new(0));

    let reader = {
        let atomic = atomic.clone();
        thread::spawn(move || loop {
            let value = atomic.load();
            assert!(value == 0 || value == 42, "unexpected value {}", value);
            if value == 42 {
                break;
            }
            std::hint::spin_loop();
        })
    };

    let writer = {
        let atomic = atomic.clone();
        thread::spawn(move || atomic.store(42))
    };

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(atomic.load(), 42);
}

// Exchange publishes the writes that precede it to an acquiring load
#[test]
fn test_exchange_load_handoff() {
    const ROUNDS: usize = 200;

    for round in 0..ROUNDS {
        let payload = Arc::new(StdAtomicU64::new(0));
        let ready = Arc::new(AtomicInt::new(0));

        let producer = {
            let payload = payload.clone();
            let ready = ready.clone();
            thread::spawn(move || {
                payload.store(round as u64 + 1, Ordering::Relaxed);
                assert_eq!(ready.exchange(1), 0);
            })
        };

        let consumers: Vec<_> = (0..2)
            .map(|_| {
                let payload = payload.clone();
                let ready = ready.clone();
                thread::spawn(move || {
                    while ready.load() != 1 {
                        std::hint::spin_loop();
                    }
                    assert_eq!(payload.load(Ordering::Relaxed), round as u64 + 1);
                })
            })
            .collect();

        producer.join().unwrap();
        for consumer in consumers {
            consumer.join().unwrap();
        }
    }
}
