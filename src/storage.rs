//! Aligned heap storage for the convenience [`crate::Ring::new`] constructor.
//!
//! `spec.md` §4.1 puts allocation of the backing memory out of scope and
//! hands the caller a raw region via [`crate::Ring::init_in`]. The teacher's
//! own `Ring::<T>::new` always allocates its backing `Vec` for the caller;
//! this module is the untyped, manually-aligned analogue of that
//! convenience, since a plain `Vec<u8>`/`Box<[u8]>` only guarantees
//! byte alignment and the ring header requires 64-byte alignment.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// An owned, cache-line-aligned byte buffer.
pub(crate) struct AlignedRegion {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl AlignedRegion {
    /// Allocates a zeroed buffer of `len` bytes aligned to `align`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero or the layout cannot be constructed (mirrors
    /// `Vec::with_capacity`'s panic-on-invalid-layout behavior rather than
    /// returning a `Result`, since these inputs come from our own validated
    /// `memsize` computation, never directly from a caller).
    pub(crate) fn new_zeroed(len: usize, align: usize) -> Self {
        let layout = Layout::from_size_align(len, align).expect("invalid region layout");
        // SAFETY: layout has non-zero size, checked by `Layout::from_size_align`
        // succeeding only for len > 0 combined with our own callers never
        // passing len == 0.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).unwrap_or_else(|| alloc::handle_alloc_error(layout));
        Self { ptr, layout }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: `ptr` was allocated with `layout.size()` bytes and is valid
        // for the lifetime of `self`.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.layout.size()) }
    }

    pub(crate) fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }
}

impl Drop for AlignedRegion {
    fn drop(&mut self) {
        // SAFETY: `ptr`/`layout` are exactly as returned by `alloc_zeroed`.
        unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) };
    }
}

// SAFETY: the buffer is plain bytes; the `Ring` living inside it supplies its
// own Send/Sync via its atomics.
unsafe impl Send for AlignedRegion {}
unsafe impl Sync for AlignedRegion {}
