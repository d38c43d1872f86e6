//! The page arena: typed placement over a list of bump-allocated pages.
//!
//! [`Arena`] owns one current page plus a retained list of buffers that
//! can no longer serve requests but must stay alive because references into
//! them are still outstanding. The placement path for every request is:
//!
//! ```text
//! size == 0                         → dangling, aligned; nothing touched
//! size > page_size
//!   or align > page_align           → dedicated buffer, pushed to retained
//! aligned cursor + size > page_size → current page retired, new page, offset 0
//! otherwise                         → current page at aligned cursor
//! ```
//!
//! All allocation methods take `&self` and hand out references bound to
//! that borrow. [`Arena::reset`] takes `&mut self`, so using a reference
//! obtained before a reset is rejected by the borrow checker.

#![allow(unsafe_code)]

use std::alloc::Layout;
use std::cell::RefCell;
use std::fmt;
use std::mem::{self, MaybeUninit};
use std::ptr::NonNull;
use std::slice;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::page::Page;
use crate::raw::RawBuf;
use crate::stats::ArenaStats;
use crate::zeroed::Zeroable;

/// Why a buffer sits in the retained list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RetainedKind {
    /// A page that could not fit the next request.
    RetiredPage,
    /// A one-off buffer for a request that never fits a page.
    Dedicated,
}

/// A buffer kept alive only for the references pointing into it.
struct Retained {
    kind: RetainedKind,
    buf: RawBuf,
}

/// Mutable arena state, behind a `RefCell` so placement can take `&self`.
struct ArenaState {
    current: Page,
    retained: SmallVec<[Retained; 4]>,
    pages_provisioned: usize,
    allocated_bytes: usize,
    generation: u64,
}

impl ArenaState {
    fn new(page_layout: Layout, generation: u64) -> Self {
        Self {
            current: Page::new(page_layout),
            retained: SmallVec::new(),
            pages_provisioned: 1,
            allocated_bytes: 0,
            generation,
        }
    }

    /// Move the current page into the retained list and start a fresh one.
    fn retire_current(&mut self, page_layout: Layout) {
        let old = mem::replace(&mut self.current, Page::new(page_layout));
        self.pages_provisioned += 1;
        debug!(
            page_size = page_layout.size(),
            used = old.used(),
            unused = old.remaining(),
            retained = self.retained.len() + 1,
            "page full, provisioning a new page"
        );
        self.retained.push(Retained {
            kind: RetainedKind::RetiredPage,
            buf: old.into_buf(),
        });
    }

    /// Serve `layout` from a buffer of its own, bypassing the cursor.
    fn place_dedicated(&mut self, layout: Layout) -> NonNull<u8> {
        let buf = RawBuf::zeroed(layout);
        let ptr = buf.ptr_at(0);
        debug!(
            requested = layout.size(),
            align = layout.align(),
            "request exceeds page, provisioning a dedicated buffer"
        );
        self.retained.push(Retained {
            kind: RetainedKind::Dedicated,
            buf,
        });
        ptr
    }

    fn retained_count(&self, kind: RetainedKind) -> usize {
        self.retained.iter().filter(|r| r.kind == kind).count()
    }

    fn reserved_bytes(&self) -> usize {
        self.current.capacity() + self.retained.iter().map(|r| r.buf.size()).sum::<usize>()
    }
}

/// Bump-pointer arena handing out typed regions from fixed-size pages.
///
/// Requests are placed back to back in the current page. When the next
/// request does not fit, the page is retired whole and a fresh zero-filled
/// page takes its place; requests larger than a page get a dedicated buffer.
/// Nothing is freed individually: memory is released on [`Arena::reset`] or
/// when the arena is dropped.
///
/// Every region handed out reads as zero on first observation, because
/// pages and dedicated buffers are provisioned zeroed and no byte is handed
/// out twice. Values placed in the arena are never dropped.
///
/// The arena is `Send` but not `Sync`: it may move to another thread, but
/// it cannot be shared for concurrent allocation.
///
/// ```
/// use pagebump::Arena;
///
/// let arena = Arena::new();
/// let a = arena.alloc_zeroed::<u64>();
/// *a = 7;
/// let b = arena.alloc(3u64);
/// assert_eq!(*a + *b, 10);
/// ```
///
/// References do not survive a reset:
///
/// ```compile_fail
/// let mut arena = pagebump::Arena::new();
/// let x = arena.alloc(1u32);
/// arena.reset();
/// assert_eq!(*x, 1);
/// ```
///
/// ```compile_fail
/// fn shared<T: Sync>(_: &T) {}
/// shared(&pagebump::Arena::new());
/// ```
pub struct Arena {
    config: ArenaConfig,
    page_layout: Layout,
    state: RefCell<ArenaState>,
}

impl Arena {
    /// Create an arena with the default 4KiB page.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default()).expect("default arena config is valid")
    }

    /// Create an arena whose pages hold `page_size` bytes.
    pub fn with_page_size(page_size: usize) -> Result<Self, ArenaError> {
        Self::with_config(ArenaConfig::new(page_size))
    }

    /// Create an arena from an explicit configuration.
    ///
    /// Returns `Err(ArenaError::InvalidConfig)` if the configuration fails
    /// [`ArenaConfig::validate`]. The first page is provisioned eagerly.
    pub fn with_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        let page_layout = config.validate()?;
        trace!(
            page_size = config.page_size,
            page_align = config.page_align,
            "arena created"
        );
        Ok(Self {
            config,
            page_layout,
            state: RefCell::new(ArenaState::new(page_layout, 0)),
        })
    }

    /// Reserve room for one `T` without initialising it.
    ///
    /// The slot reads as zero until written, but the type does not promise
    /// that; use [`Arena::alloc_zeroed`] when `T: Zeroable`.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_uninit<T>(&self) -> &mut MaybeUninit<T> {
        let layout = Layout::new::<T>();
        if layout.size() == 0 {
            // SAFETY: zero-sized values may live at any aligned non-null
            // address.
            return unsafe { &mut *NonNull::<MaybeUninit<T>>::dangling().as_ptr() };
        }
        let ptr = self.place(layout);
        // SAFETY: `place` returned `size_of::<T>()` bytes aligned for `T`,
        // disjoint from every other region this arena has handed out, in a
        // buffer released only by `reset(&mut self)` or drop.
        unsafe { &mut *ptr.cast::<MaybeUninit<T>>().as_ptr() }
    }

    /// Reserve room for one `T` and return it as a zero value.
    ///
    /// No bytes are written: the slot is zero because it comes from freshly
    /// provisioned memory.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_zeroed<T: Zeroable>(&self) -> &mut T {
        let slot = self.alloc_uninit::<T>();
        // SAFETY: arena regions are zero on first observation and `T`
        // accepts the all-zero pattern.
        unsafe { slot.assume_init_mut() }
    }

    /// Move `value` into the arena.
    ///
    /// `value`'s destructor will never run.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc<T>(&self, value: T) -> &mut T {
        self.alloc_uninit::<T>().write(value)
    }

    /// Build a value with `f` and move it into the arena.
    ///
    /// `f` may itself allocate from this arena.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_with<T, F>(&self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let value = f();
        self.alloc(value)
    }

    /// Reserve a contiguous run of `len` uninitialised `T`s.
    ///
    /// The run is placed as one unit and never split across pages. Returns
    /// `Err(ArenaError::LayoutOverflow)` if `len * size_of::<T>()` cannot be
    /// represented, before any state changes. `len == 0` returns an empty
    /// slice without touching the cursor.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_array_uninit<T>(&self, len: usize) -> Result<&mut [MaybeUninit<T>], ArenaError> {
        let layout = Layout::array::<T>(len).map_err(|_| ArenaError::LayoutOverflow {
            elem_size: mem::size_of::<T>(),
            len,
        })?;
        let ptr = if layout.size() == 0 {
            NonNull::<MaybeUninit<T>>::dangling()
        } else {
            self.place(layout).cast::<MaybeUninit<T>>()
        };
        // SAFETY: either a zero-byte run at an aligned dangling pointer, or
        // `len * size_of::<T>()` fresh bytes from `place`, aligned for `T`
        // and exclusively ours for the lifetime of `&self`.
        Ok(unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), len) })
    }

    /// Reserve a contiguous run of `len` zero `T`s.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_array_zeroed<T: Zeroable>(&self, len: usize) -> Result<&mut [T], ArenaError> {
        let slots = self.alloc_array_uninit::<T>(len)?;
        // SAFETY: the run is zero on first observation and `T` accepts the
        // all-zero pattern.
        Ok(unsafe { assume_init_slice(slots) })
    }

    /// Copy `src` into the arena.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_slice_copy<T: Copy>(&self, src: &[T]) -> &mut [T] {
        let slots = self
            .alloc_array_uninit::<T>(src.len())
            .expect("layout of an existing slice is representable");
        for (slot, value) in slots.iter_mut().zip(src) {
            slot.write(*value);
        }
        // SAFETY: every slot was written above.
        unsafe { assume_init_slice(slots) }
    }

    /// Fill a run of `len` elements with `f(index)`.
    ///
    /// If `f` panics, the elements already written are leaked with the rest
    /// of the run.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_slice_fill_with<T, F>(&self, len: usize, mut f: F) -> Result<&mut [T], ArenaError>
    where
        F: FnMut(usize) -> T,
    {
        let slots = self.alloc_array_uninit::<T>(len)?;
        for (i, slot) in slots.iter_mut().enumerate() {
            slot.write(f(i));
        }
        // SAFETY: every slot was written above.
        Ok(unsafe { assume_init_slice(slots) })
    }

    /// Copy a string into the arena.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_str(&self, src: &str) -> &mut str {
        let bytes = self.alloc_slice_copy(src.as_bytes());
        // SAFETY: the bytes were copied from a `str`.
        unsafe { std::str::from_utf8_unchecked_mut(bytes) }
    }

    /// Discard every page and dedicated buffer and start over.
    ///
    /// Provisions a fresh zero-filled page, sets the cursor to 0 and bumps
    /// the generation. Requires exclusive access, so no reference obtained
    /// from the arena can be alive across this call.
    pub fn reset(&mut self) {
        let state = self.state.get_mut();
        let generation = state.generation.wrapping_add(1);
        debug!(
            generation,
            released_pages = state.pages_provisioned,
            released_dedicated = state.retained_count(RetainedKind::Dedicated),
            "arena reset"
        );
        *state = ArenaState::new(self.page_layout, generation);
    }

    /// Configured page size in bytes.
    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Offset of the next free byte in the current page.
    pub fn cursor(&self) -> usize {
        self.state.borrow().current.used()
    }

    /// Number of resets performed.
    pub fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    /// Offset of `ptr` within the current page, or `None` if it points
    /// elsewhere (a retired page, a dedicated buffer, or outside the arena).
    pub fn current_page_offset<T: ?Sized>(&self, ptr: *const T) -> Option<usize> {
        self.state.borrow().current.offset_of(ptr.cast::<u8>() as usize)
    }

    /// Snapshot of usage counters.
    pub fn stats(&self) -> ArenaStats {
        let state = self.state.borrow();
        ArenaStats {
            page_size: self.config.page_size,
            cursor: state.current.used(),
            pages_provisioned: state.pages_provisioned,
            retired_pages: state.retained_count(RetainedKind::RetiredPage),
            dedicated_buffers: state.retained_count(RetainedKind::Dedicated),
            allocated_bytes: state.allocated_bytes,
            reserved_bytes: state.reserved_bytes(),
            generation: state.generation,
        }
    }

    /// Find room for a non-empty `layout`.
    fn place(&self, layout: Layout) -> NonNull<u8> {
        debug_assert!(layout.size() > 0);
        let mut state = self.state.borrow_mut();
        state.allocated_bytes = state.allocated_bytes.saturating_add(layout.size());

        if layout.size() > self.config.page_size || layout.align() > self.config.page_align {
            return state.place_dedicated(layout);
        }
        if let Some(ptr) = state.current.try_bump(layout) {
            return ptr;
        }
        state.retire_current(self.page_layout);
        // size <= page_size and align <= page_align, checked above.
        state
            .current
            .try_bump(layout)
            .expect("request fits an empty page")
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("Arena")
            .field("page_size", &stats.page_size)
            .field("cursor", &stats.cursor)
            .field("pages_provisioned", &stats.pages_provisioned)
            .field("dedicated_buffers", &stats.dedicated_buffers)
            .field("generation", &stats.generation)
            .finish()
    }
}

/// # Safety
///
/// Every element of `slots` must be initialised.
unsafe fn assume_init_slice<T>(slots: &mut [MaybeUninit<T>]) -> &mut [T] {
    // SAFETY: `MaybeUninit<T>` has the same layout as `T`; the caller
    // guarantees initialisation.
    unsafe { &mut *(slots as *mut [MaybeUninit<T>] as *mut [T]) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[repr(C, align(64))]
    struct CacheLine([u8; 64]);

    // SAFETY: repr(C) over a byte array.
    unsafe impl Zeroable for CacheLine {}

    fn small_arena(page_size: usize) -> Arena {
        Arena::with_page_size(page_size).unwrap()
    }

    #[test]
    fn new_arena_has_one_empty_page() {
        let arena = Arena::new();
        let stats = arena.stats();
        assert_eq!(stats.page_size, 4096);
        assert_eq!(stats.cursor, 0);
        assert_eq!(stats.pages_provisioned, 1);
        assert_eq!(stats.retired_pages, 0);
        assert_eq!(stats.dedicated_buffers, 0);
        assert_eq!(stats.reserved_bytes, 4096);
    }

    #[test]
    fn values_are_placed_back_to_back() {
        let arena = Arena::new();
        for i in 0..16 {
            let v = arena.alloc_zeroed::<u64>();
            assert_eq!(arena.current_page_offset(v as *const u64), Some(i * 8));
        }
        assert_eq!(arena.cursor(), 128);
    }

    #[test]
    fn writes_land_in_page_memory() {
        let arena = Arena::new();
        let a = arena.alloc_zeroed::<i64>();
        *a = 0x1234;
        let b = arena.alloc_zeroed::<i64>();
        *b = 0x5678;
        let run = arena.alloc_array_zeroed::<i64>(2).unwrap();
        run[0] = 0x1111;
        run[1] = 0x2222;
        let state = arena.state.borrow();
        let base = state.current.offset_of(a as *const i64 as usize).unwrap();
        assert_eq!(base, 0);
        assert_eq!(state.current.offset_of(run.as_ptr() as usize), Some(16));
        assert_eq!(*a, 0x1234);
        assert_eq!(*b, 0x5678);
    }

    #[test]
    fn exact_page_fill_does_not_roll_over() {
        let arena = Arena::new();
        arena.alloc_array_zeroed::<i64>(4096 / 8).unwrap();
        let stats = arena.stats();
        assert_eq!(stats.retired_pages, 0);
        assert_eq!(stats.pages_provisioned, 1);
        assert_eq!(stats.cursor, 4096);
    }

    #[test]
    fn one_past_full_page_rolls_over_once() {
        let arena = Arena::new();
        arena.alloc_array_zeroed::<i64>(4096 / 8).unwrap();
        let next = arena.alloc_zeroed::<i64>();
        let stats = arena.stats();
        assert_eq!(stats.pages_provisioned, 2);
        assert_eq!(stats.retired_pages, 1);
        assert_eq!(arena.current_page_offset(next as *const i64), Some(0));
        assert_eq!(stats.cursor, 8);
    }

    #[test]
    fn nearly_full_page_takes_one_more_value() {
        let arena = Arena::new();
        arena.alloc_array_zeroed::<i64>(4096 / 8 - 1).unwrap();
        arena.alloc_zeroed::<i64>();
        assert_eq!(arena.stats().retired_pages, 0);
        arena.alloc_zeroed::<i64>();
        assert_eq!(arena.stats().retired_pages, 1);
    }

    #[test]
    fn oversized_array_gets_dedicated_buffer() {
        let arena = Arena::new();
        arena.alloc_zeroed::<u32>();
        let before = arena.cursor();
        let big = arena.alloc_array_zeroed::<i64>(4096 / 8 + 1).unwrap();
        assert_eq!(big.len(), 513);
        assert!(big.iter().all(|&v| v == 0));
        assert_eq!(arena.current_page_offset(big.as_ptr()), None);
        let stats = arena.stats();
        assert_eq!(stats.cursor, before);
        assert_eq!(stats.dedicated_buffers, 1);
        assert_eq!(stats.pages_provisioned, 1);
        assert_eq!(stats.reserved_bytes, 4096 + 513 * 8);
    }

    #[test]
    fn oversized_value_gets_dedicated_buffer() {
        let arena = small_arena(64);
        let v = arena.alloc_zeroed::<[u8; 65]>();
        assert!(v.iter().all(|&b| b == 0));
        assert_eq!(arena.cursor(), 0);
        assert_eq!(arena.stats().dedicated_buffers, 1);
    }

    #[test]
    fn over_aligned_value_gets_dedicated_buffer() {
        let arena = Arena::new();
        let line = arena.alloc_zeroed::<CacheLine>();
        assert_eq!(line as *const CacheLine as usize % 64, 0);
        assert_eq!(arena.cursor(), 0);
        assert_eq!(arena.stats().dedicated_buffers, 1);
    }

    #[test]
    fn misaligned_cursor_is_padded() {
        let arena = Arena::new();
        arena.alloc(1u8);
        let v = arena.alloc(2u32);
        assert_eq!(arena.current_page_offset(v as *const u32), Some(4));
        assert_eq!(arena.cursor(), 8);
        assert_eq!(arena.stats().allocated_bytes, 5);
    }

    #[test]
    fn zero_sized_requests_do_not_move_cursor() {
        let arena = Arena::new();
        arena.alloc_zeroed::<()>();
        let empty = arena.alloc_array_zeroed::<u64>(0).unwrap();
        assert!(empty.is_empty());
        let units = arena.alloc_array_zeroed::<()>(1000).unwrap();
        assert_eq!(units.len(), 1000);
        let stats = arena.stats();
        assert_eq!(stats.cursor, 0);
        assert_eq!(stats.allocated_bytes, 0);
    }

    #[test]
    fn layout_overflow_is_rejected_without_side_effects() {
        let arena = Arena::new();
        arena.alloc(5u16);
        let before = arena.stats();
        let err = arena.alloc_array_uninit::<u64>(usize::MAX / 4).unwrap_err();
        assert_eq!(
            err,
            ArenaError::LayoutOverflow {
                elem_size: 8,
                len: usize::MAX / 4,
            }
        );
        assert_eq!(arena.stats(), before);
    }

    #[test]
    fn reset_returns_to_fresh_zeroed_page() {
        let mut arena = Arena::new();
        let a = arena.alloc_zeroed::<u64>();
        *a = u64::MAX;
        arena.alloc_array_zeroed::<u8>(5000).unwrap();
        arena.alloc_array_zeroed::<u8>(4000).unwrap();
        assert!(arena.stats().retired_pages + arena.stats().dedicated_buffers > 0);

        arena.reset();
        let stats = arena.stats();
        assert_eq!(stats.cursor, 0);
        assert_eq!(stats.pages_provisioned, 1);
        assert_eq!(stats.retired_pages, 0);
        assert_eq!(stats.dedicated_buffers, 0);
        assert_eq!(stats.allocated_bytes, 0);
        assert_eq!(stats.generation, 1);

        let b = arena.alloc_zeroed::<u64>();
        assert_eq!(*b, 0);
        assert_eq!(arena.current_page_offset(b as *const u64), Some(0));
    }

    #[test]
    fn alloc_moves_value_in() {
        let arena = Arena::new();
        let s = arena.alloc((1u8, 2.5f32));
        s.0 += 1;
        assert_eq!(*s, (2, 2.5));
    }

    #[test]
    fn alloc_with_may_allocate_reentrantly() {
        let arena = Arena::new();
        let outer = arena.alloc_with(|| {
            let inner = arena.alloc(10u32);
            *inner + 1
        });
        assert_eq!(*outer, 11);
        assert_eq!(arena.cursor(), 8);
    }

    #[test]
    fn slice_copy_and_fill() {
        let arena = Arena::new();
        let copied = arena.alloc_slice_copy(&[1u16, 2, 3]);
        copied[2] = 30;
        assert_eq!(copied, &[1, 2, 30]);

        let squares = arena.alloc_slice_fill_with(4, |i| (i * i) as u32).unwrap();
        assert_eq!(squares, &[0, 1, 4, 9]);
    }

    #[test]
    fn str_copy_is_mutable() {
        let arena = Arena::new();
        let s = arena.alloc_str("page");
        s.make_ascii_uppercase();
        assert_eq!(s, "PAGE");
        assert_eq!(arena.cursor(), 4);
    }

    #[test]
    fn non_copy_values_are_kept_alive() {
        let arena = Arena::new();
        let name = arena.alloc(String::from("retained"));
        name.push('!');
        arena.alloc_array_zeroed::<u8>(4096).unwrap();
        assert_eq!(name.as_str(), "retained!");
    }

    #[test]
    fn references_survive_rollover() {
        let arena = small_arena(32);
        let first = arena.alloc(0xAAu8);
        let refs: Vec<&mut u64> = (0..20).map(|i| arena.alloc(i as u64)).collect();
        assert!(arena.stats().retired_pages >= 4);
        assert_eq!(*first, 0xAA);
        for (i, r) in refs.iter().enumerate() {
            assert_eq!(**r, i as u64);
        }
    }

    #[test]
    fn arena_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Arena>();
    }

    #[test]
    fn debug_shows_counters() {
        let arena = Arena::new();
        let out = format!("{arena:?}");
        assert!(out.contains("page_size: 4096"));
        assert!(out.contains("generation: 0"));
    }

    #[traced_test]
    #[test]
    fn rollover_and_dedicated_are_logged() {
        let mut arena = small_arena(16);
        arena.alloc([0u8; 16]);
        arena.alloc(1u8);
        assert!(logs_contain("page full, provisioning a new page"));
        arena.alloc([0u8; 17]);
        assert!(logs_contain("provisioning a dedicated buffer"));
        arena.reset();
        assert!(logs_contain("arena reset"));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn regions_are_disjoint_and_zeroed(
                page_size in 16usize..512,
                sizes in proptest::collection::vec(0usize..700, 1..60),
            ) {
                let arena = small_arena(page_size);
                let mut regions: Vec<(usize, usize)> = Vec::new();
                for (i, &len) in sizes.iter().enumerate() {
                    let run = arena.alloc_array_zeroed::<u8>(len).unwrap();
                    prop_assert!(run.iter().all(|&b| b == 0));
                    run.fill(i as u8 | 1);
                    if len > 0 {
                        regions.push((run.as_ptr() as usize, len));
                    }
                    prop_assert!(arena.cursor() <= page_size);
                }
                regions.sort_unstable();
                for pair in regions.windows(2) {
                    prop_assert!(pair[0].0 + pair[0].1 <= pair[1].0);
                }
            }

            #[test]
            fn page_count_matches_greedy_packing(
                sizes in proptest::collection::vec(1usize..=64, 1..100),
            ) {
                let arena = small_arena(64);
                let mut cursor = 0usize;
                let mut pages = 1usize;
                for &len in &sizes {
                    arena.alloc_array_zeroed::<u8>(len).unwrap();
                    if cursor + len > 64 {
                        pages += 1;
                        cursor = 0;
                    }
                    cursor += len;
                }
                let stats = arena.stats();
                prop_assert_eq!(stats.pages_provisioned, pages);
                prop_assert_eq!(stats.retired_pages, pages - 1);
                prop_assert_eq!(stats.cursor, cursor);
            }
        }
    }
}
