//! Error types for ring sizing and initialization.
//!
//! Hot-path operations (`push`/`pop`) never return a `Result` — spec.md §7 is
//! explicit that the only failure mode there is a short/zero count. The two
//! error kinds below are construction-time only.

use thiserror::Error;

/// Errors returned by [`crate::Ring::init_in`] and [`crate::Ring::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// `capacity` is zero or not a power of two.
    #[error("capacity {0} is not a positive power of two")]
    CapacityNotPowerOfTwo(u32),

    /// `capacity` exceeds the mask bound (spec.md §2: `capacity <= 2^28`).
    #[error("capacity {0} exceeds the maximum of {}", crate::ring::MAX_CAPACITY)]
    CapacityTooLarge(u32),

    /// The caller-provided region is smaller than `memsize(capacity)` bytes.
    #[error("region of {provided} bytes is smaller than the {needed} bytes required")]
    RegionTooSmall {
        /// Bytes the caller provided.
        provided: usize,
        /// Bytes `memsize(capacity)` requires.
        needed: usize,
    },

    /// The caller-provided region is not aligned to [`crate::ALIGN`].
    #[error("region is not aligned to {required}-byte boundary")]
    RegionMisaligned {
        /// Required alignment in bytes.
        required: usize,
    },
}
