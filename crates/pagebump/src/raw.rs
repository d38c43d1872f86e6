//! Low-level owned buffers backing arena pages and dedicated allocations.
//!
//! [`RawBuf`] is the only place the crate talks to the global allocator.
//! Every buffer is provisioned zero-filled with an explicit [`Layout`] and
//! released with that same layout on drop. The heap block never moves, so
//! a `RawBuf` can be moved between the current page slot and the retained
//! list without invalidating pointers into it.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// An owned, zero-initialised heap block with a fixed layout.
///
/// Has no read or write API of its own: callers obtain raw pointers through
/// [`RawBuf::ptr_at`] and are responsible for handing out disjoint regions.
pub(crate) struct RawBuf {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl RawBuf {
    /// Provision a zero-filled block for `layout`.
    ///
    /// Aborts via [`alloc::handle_alloc_error`] if the host cannot supply
    /// the memory.
    ///
    /// # Panics
    ///
    /// Panics if `layout` has zero size.
    pub(crate) fn zeroed(layout: Layout) -> Self {
        assert!(layout.size() > 0, "RawBuf requires a non-zero size");
        // SAFETY: `layout` has non-zero size, checked above.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let Some(ptr) = NonNull::new(raw) else {
            alloc::handle_alloc_error(layout);
        };
        Self { ptr, layout }
    }

    /// Pointer to the byte at `offset` within the block.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is past the end of the block. One-past-the-end
    /// is permitted.
    pub(crate) fn ptr_at(&self, offset: usize) -> NonNull<u8> {
        assert!(
            offset <= self.layout.size(),
            "offset {offset} out of bounds for buffer of {} bytes",
            self.layout.size()
        );
        // SAFETY: `offset <= size`, so the result stays within (or one past)
        // the allocation and cannot wrap.
        unsafe { self.ptr.add(offset) }
    }

    /// Size of the block in bytes.
    pub(crate) fn size(&self) -> usize {
        self.layout.size()
    }

    /// Address of the first byte, for offset arithmetic.
    pub(crate) fn base_addr(&self) -> usize {
        self.ptr.as_ptr() as usize
    }
}

impl Drop for RawBuf {
    fn drop(&mut self) {
        // SAFETY: `ptr` was returned by `alloc_zeroed(self.layout)` and is
        // released exactly once, here.
        unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) }
    }
}

// SAFETY: `RawBuf` uniquely owns its block; nothing aliases it across
// threads unless the owner hands out references, which the arena ties to
// its own borrow.
unsafe impl Send for RawBuf {}
