//! Moving owned, heap-allocated values through the otherwise-untyped ring.

use ringmpmc_rs::{TypedRing, SC, SP};

fn main() {
    let ring: TypedRing<String> = TypedRing::new(4, SP | SC).unwrap();

    ring.try_push("hello".to_string()).unwrap();
    ring.try_push("world".to_string()).unwrap();

    while let Some(s) = ring.try_pop() {
        println!("{s}");
    }
}
