//! Benchmark workloads for the pagebump arena.
//!
//! Provides deterministic allocation profiles for benchmarks:
//!
//! - [`mixed_sizes`]: request sizes drawn from a small-object heavy mix
//! - [`fill_slots`]: place one value per slot and keep the references
//! - [`replay_mixed`]: push a size profile through an arena

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pagebump::Arena;

/// Number of slots filled per iteration in the comparison benchmarks.
pub const SLOT_COUNT: usize = 1024;

/// Deterministic request sizes in bytes, mostly small with occasional
/// page-sized and oversized requests.
///
/// Same `seed` gives the same sequence. Roughly 90% of requests are
/// 1..=64 bytes, 9% are 65..=2048 and 1% are 4097..=16384.
pub fn mixed_sizes(count: usize, seed: u64) -> Vec<usize> {
    let mut state = seed | 1;
    (0..count)
        .map(|_| {
            // xorshift64
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let bucket = state % 100;
            let r = (state >> 8) as usize;
            match bucket {
                0..=89 => 1 + r % 64,
                90..=98 => 65 + r % 1984,
                _ => 4097 + r % 12288,
            }
        })
        .collect()
}

/// Place `SLOT_COUNT` integers in `arena`, writing each slot's index.
///
/// Returns the sum of the placed values so the work cannot be elided.
pub fn fill_slots(arena: &Arena) -> u64 {
    let slots: Vec<&mut u64> = (0..SLOT_COUNT as u64).map(|i| arena.alloc(i)).collect();
    slots.iter().map(|v| **v).sum()
}

/// Allocate one zeroed byte run per entry of `sizes`.
///
/// Returns the total number of bytes placed.
pub fn replay_mixed(arena: &Arena, sizes: &[usize]) -> usize {
    sizes
        .iter()
        .map(|&len| {
            arena
                .alloc_array_zeroed::<u8>(len)
                .map(|run| run.len())
                .unwrap_or(0)
        })
        .sum()
}
