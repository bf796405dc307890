//! 64-bit content hashing for table keys.

use twox_hash::XxHash3_64;

/// Hash a byte slice with xxh3.
///
/// Both open-addressed tables key on this value. It is deterministic within
/// a program run and uniform enough to keep probing short at the configured
/// table sizes. The exact-match table reserves hash 0 as its empty-slot
/// sentinel; a word that hashes to 0 is simply not inserted there.
pub fn hash64(data: &[u8]) -> u64 {
    XxHash3_64::oneshot(data)
}
