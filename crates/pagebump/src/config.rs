//! Arena configuration parameters.

use std::alloc::Layout;

use crate::error::ArenaError;

/// Configuration for the page arena.
///
/// Controls page sizing and the alignment every page is provisioned with.
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of each page in bytes.
    ///
    /// Default: 4096. Requests larger than this bypass the pages and get a
    /// dedicated buffer of their own.
    pub page_size: usize,

    /// Alignment of each page's base address in bytes.
    ///
    /// Default: 16, enough for every primitive type. Must be a power of two.
    /// Types aligned more strictly than this always get a dedicated buffer.
    pub page_align: usize,
}

impl ArenaConfig {
    /// Default page size: 4KiB.
    pub const DEFAULT_PAGE_SIZE: usize = 4096;

    /// Default page alignment.
    pub const DEFAULT_PAGE_ALIGN: usize = 16;

    /// Create a config with the given page size and the default alignment.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            page_align: Self::DEFAULT_PAGE_ALIGN,
        }
    }

    /// Check the configuration and return the layout each page will use.
    ///
    /// Rejects a zero page size, a non-power-of-two alignment, and sizes
    /// that overflow `isize` once rounded up to the alignment.
    pub fn validate(&self) -> Result<Layout, ArenaError> {
        if self.page_size == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "page_size must be non-zero".into(),
            });
        }
        if !self.page_align.is_power_of_two() {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "page_align must be a power of two (got {})",
                    self.page_align
                ),
            });
        }
        Layout::from_size_align(self.page_size, self.page_align).map_err(|_| {
            ArenaError::InvalidConfig {
                reason: format!(
                    "page_size {} is too large for alignment {}",
                    self.page_size, self.page_align
                ),
            }
        })
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}
