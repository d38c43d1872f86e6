//! Page-based bump-pointer arena with typed placement.
//!
//! Hands out typed regions from large pre-reserved pages, avoiding
//! per-object allocation overhead for short-lived, high-volume
//! allocation patterns. Nothing is freed individually; memory goes
//! back in bulk on [`Arena::reset`] or when the arena is dropped.
//!
//! # Architecture
//!
//! ```text
//! Arena
//! ├── ArenaConfig (page_size, page_align; validated at construction)
//! └── RefCell<state>
//!     ├── current: Page → RawBuf (zero-filled) + cursor
//!     └── retained: SmallVec<RawBuf>
//!         ├── retired pages (full, kept for outstanding references)
//!         └── dedicated buffers (requests larger than a page)
//! ```
//!
//! # Safety model
//!
//! `unsafe` is confined to three modules: `raw` (talking to the global
//! allocator), `arena` (turning placed regions into typed references) and
//! `zeroed` (the [`Zeroable`] impls). Every returned reference borrows the
//! arena, and [`Arena::reset`] needs `&mut self`, so use-after-reset does
//! not compile.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
mod page;
mod raw;
pub mod stats;
pub mod zeroed;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use stats::ArenaStats;
pub use zeroed::Zeroable;
