//! Single-producer/single-consumer push and pop.

use ringmpmc_rs::{Behavior, Ring, SC, SP};

fn main() {
    let ring = Ring::new(8, SP | SC).expect("capacity 8 is a valid power of two");

    let pushed = ring.push(&[1, 2, 3], Behavior::Fixed);
    println!("pushed {pushed} handles");

    let mut out = [0usize; 3];
    let popped = ring.pop(&mut out, Behavior::Fixed);
    println!("popped {popped} handles: {:?}", &out[..popped]);

    assert!(ring.empty());
}
