//! Point-in-time usage figures for an [`Arena`](crate::Arena).

/// Snapshot of arena usage, taken by [`Arena::stats`](crate::Arena::stats).
///
/// Counters reset along with the arena, except `generation`, which counts
/// the resets themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Configured page size in bytes.
    pub page_size: usize,
    /// Offset of the next free byte in the current page.
    pub cursor: usize,
    /// Pages provisioned since construction or the last reset, including
    /// the current one.
    pub pages_provisioned: usize,
    /// Full pages moved into the retained list.
    pub retired_pages: usize,
    /// Buffers provisioned for requests that could not be placed in a page.
    pub dedicated_buffers: usize,
    /// Bytes handed out to callers, excluding alignment padding.
    pub allocated_bytes: usize,
    /// Bytes held from the global allocator: current page, retired pages
    /// and dedicated buffers.
    pub reserved_bytes: usize,
    /// Number of resets performed on this arena.
    pub generation: u64,
}

impl ArenaStats {
    /// Fraction of reserved bytes handed out to callers, in `[0.0, 1.0]`.
    pub fn utilisation(&self) -> f64 {
        if self.reserved_bytes == 0 {
            return 0.0;
        }
        self.allocated_bytes as f64 / self.reserved_bytes as f64
    }
}
