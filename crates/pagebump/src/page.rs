//! Fixed-size pages with bump allocation.
//!
//! A [`Page`] is one zero-filled [`RawBuf`] plus a cursor. Requests are
//! placed at the cursor rounded up to their alignment; a request that would
//! run past the end of the page is refused and the caller moves on to a
//! fresh page. There is no cross-page splitting.

use std::alloc::Layout;
use std::ptr::NonNull;

use crate::raw::RawBuf;

/// A single page with bump allocation.
///
/// The cursor only moves forward, so no byte of a page is ever handed out
/// twice. Together with zeroed provisioning this means every region a page
/// returns is zero on first observation.
pub(crate) struct Page {
    /// Backing storage, zero-filled at creation.
    buf: RawBuf,
    /// Bump pointer: offset of the next free byte.
    cursor: usize,
}

impl Page {
    /// Provision a new zero-filled page with the given layout.
    pub(crate) fn new(layout: Layout) -> Self {
        Self {
            buf: RawBuf::zeroed(layout),
            cursor: 0,
        }
    }

    /// Bump-allocate a region for `layout` from this page.
    ///
    /// Returns the start of the region, or `None` if the aligned cursor plus
    /// the requested size would exceed the page. A request ending exactly
    /// at the page boundary fits.
    ///
    /// `layout.align()` must not exceed the alignment the page was created
    /// with; offsets are aligned relative to the page base.
    pub(crate) fn try_bump(&mut self, layout: Layout) -> Option<NonNull<u8>> {
        let start = self.cursor.checked_next_multiple_of(layout.align())?;
        let end = start.checked_add(layout.size())?;
        if end > self.buf.size() {
            return None;
        }
        self.cursor = end;
        Some(self.buf.ptr_at(start))
    }

    /// Bytes consumed so far, including alignment padding.
    pub(crate) fn used(&self) -> usize {
        self.cursor
    }

    /// Total capacity in bytes.
    pub(crate) fn capacity(&self) -> usize {
        self.buf.size()
    }

    /// Remaining free bytes before alignment.
    pub(crate) fn remaining(&self) -> usize {
        self.buf.size() - self.cursor
    }

    /// Offset of `addr` within this page, if it lies inside it.
    pub(crate) fn offset_of(&self, addr: usize) -> Option<usize> {
        let offset = addr.checked_sub(self.buf.base_addr())?;
        (offset < self.buf.size()).then_some(offset)
    }

    /// Give up the page, keeping only its backing storage alive.
    pub(crate) fn into_buf(self) -> RawBuf {
        self.buf
    }
}
