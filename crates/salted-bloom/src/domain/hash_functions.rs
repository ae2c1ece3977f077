//! Hash functions for the Bloom filter
//!
//! A single MurmurHash3 is reused for every round. Each round appends its
//! index as 4 little-endian bytes to the item before hashing, so round `i`
//! behaves like an independent hash function without needing `k` of them.

use std::io::Cursor;

/// Width of the round-index salt appended to every item.
pub const SALT_LEN: usize = 4;

/// Hash bytes with MurmurHash3 (x64, 128-bit) and keep the lower 64 bits.
pub fn murmur_hash64(data: &[u8]) -> u64 {
    let mut cursor = Cursor::new(data);

    // Reading from an in-memory cursor cannot fail
    let hash = murmur3::murmur3_x64_128(&mut cursor, 0).unwrap_or(0);
    hash as u64
}

/// Item bytes followed by the little-endian encoding of `round`.
pub fn salted_input(item: &[u8], round: u32) -> Vec<u8> {
    let mut input = Vec::with_capacity(item.len() + SALT_LEN);
    input.extend_from_slice(item);
    input.extend_from_slice(&round.to_le_bytes());
    input
}

/// Bit position for `item` in hash round `round`, reduced into `[0, m)`.
///
/// `m` must be non-zero; [`BloomFilter`](crate::BloomFilter) guarantees it.
pub fn location(item: &[u8], round: u32, m: usize) -> usize {
    let hash = murmur_hash64(&salted_input(item, round));
    (hash % m as u64) as usize
}
