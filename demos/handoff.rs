/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Hand-off Example
//!
//! One producer publishes batches through `exchange`, several consumers
//! poll with `load`, and `store` resets the slot between rounds without
//! publishing anything.

use prism3_atomic_shim::AtomicInt;
use std::sync::atomic::{
    AtomicU64,
    Ordering,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const EMPTY: isize = 0;

fn main() {
    println!("=== Atomic Hand-off Example ===\n");

    let slot = Arc::new(AtomicInt::new(EMPTY));
    let payload = Arc::new(AtomicU64::new(0));
    let num_consumers = 3;
    let rounds = 5;
    let barrier = Arc::new(Barrier::new(num_consumers + 1));

    let mut handles = vec![];
    for id in 0..num_consumers {
        let slot = slot.clone();
        let payload = payload.clone();
        let barrier = barrier.clone();
        handles.push(thread::spawn(move || {
            for round in 1..=rounds {
                while slot.load() != round {
                    std::hint::spin_loop();
                }
                let value = payload.load(Ordering::Relaxed);
                println!("   Consumer {} saw round {} payload {}", id, round, value);
                barrier.wait();
                barrier.wait();
            }
        }));
    }

    for round in 1..=rounds {
        payload.store(round as u64 * 100, Ordering::Relaxed);
        let previous = slot.exchange(round);
        println!("Producer published round {} (slot held {})", round, previous);
        // All consumers have read this round
        barrier.wait();
        slot.store(EMPTY);
        barrier.wait();
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!("\nFinal slot: {}", slot);
    println!("\n=== Example completed ===");
}
