//! Four producers, four consumers, one ring, no locks.

use ringmpmc_rs::{Behavior, Ring};
use std::sync::Arc;
use std::thread;

const PRODUCERS: usize = 4;
const PER_PRODUCER: usize = 50_000;

fn main() {
    let ring = Arc::new(Ring::new(4096, Default::default()).unwrap());

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|p| {
            let ring = Arc::clone(&ring);
            thread::spawn(move || {
                for i in 0..PER_PRODUCER {
                    let handle = p * PER_PRODUCER + i;
                    while ring.push(&[handle], Behavior::Fixed) == 0 {
                        thread::yield_now();
                    }
                }
            })
        })
        .collect();

    let total = PRODUCERS * PER_PRODUCER;
    let mut received = 0usize;
    let mut out = [0usize; 1];
    while received < total {
        if ring.pop(&mut out, Behavior::Fixed) == 1 {
            received += 1;
        } else {
            thread::yield_now();
        }
    }

    for p in producers {
        p.join().unwrap();
    }

    println!("received {received} handles from {PRODUCERS} producers");
}
