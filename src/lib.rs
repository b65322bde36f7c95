//! ringmpmc-rs — a bounded, lock-free MPMC ring buffer of opaque handles.
//!
//! A single fixed-capacity circular buffer, indexed by monotonically
//! increasing 32-bit counters, supporting any crossing of
//! single/multi-producer and single/multi-consumer access without locks or
//! condition variables. Producers and consumers exchange batches of
//! machine-word-sized opaque handles; the ring is agnostic to what a handle
//! means or how long it lives.
//!
//! Contention on each side is resolved with a CAS-based reservation on the
//! head cursor, followed by a handoff stall that serializes visibility-cursor
//! publication in strict reservation order, so no reservation can publish out
//! of turn.
//!
//! # Example
//!
//! ```
//! use ringmpmc_rs::{Behavior, Ring, SP, SC};
//!
//! let ring = Ring::new(8, SP | SC).unwrap();
//!
//! let pushed = ring.push(&[1, 2, 3], Behavior::Fixed);
//! assert_eq!(pushed, 3);
//!
//! let mut out = [0usize; 3];
//! let popped = ring.pop(&mut out, Behavior::Fixed);
//! assert_eq!(&out[..popped], &[1, 2, 3]);
//! ```
//!
//! For multiple producers/consumers, omit `SP`/`SC` (the default, `Flags`
//! with neither bit set, is MPMC):
//!
//! ```
//! use ringmpmc_rs::{Behavior, Ring};
//!
//! let ring = Ring::new(1024, Default::default()).unwrap();
//! std::thread::scope(|s| {
//!     for p in 0..4usize {
//!         let ring = &ring;
//!         s.spawn(move || {
//!             for i in 0..100usize {
//!                 let handle = p * 100 + i;
//!                 while ring.push(&[handle], Behavior::Fixed) == 0 {}
//!             }
//!         });
//!     }
//! });
//! assert_eq!(ring.count(), 400);
//! ```

mod adapter;
mod backoff;
mod error;
mod flags;
mod invariants;
mod ring;
mod storage;

pub use adapter::TypedRing;
pub use backoff::Backoff;
pub use error::RingError;
pub use flags::{Behavior, Flags, SC, SP};
pub use ring::{Handle, OwnedRing, Ring, ALIGN, MAX_CAPACITY};
