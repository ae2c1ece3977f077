//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - `m >= 1` and `k >= 1` for every constructed filter
//! - The bit array is allocated once and always holds exactly `m` bits
//! - No false negatives: after `add(x)`, `test(x)` returns true until `clear_all`

use bitvec::prelude::*;
use tracing::{debug, trace};

use super::config::BloomConfig;
use super::hash_functions::location;
use crate::error::{FilterError, Result};

/// Bloom filter for probabilistic membership testing
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
///
/// Bit positions come from one MurmurHash3 reused for each of the `k` rounds,
/// salted with the round index (see [`hash_functions`](super::hash_functions)).
///
/// Mutation takes `&mut self`. To share a filter between threads, wrap it in
/// a lock such as `Mutex<BloomFilter>` or shard across several filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Size in bits (m)
    m: usize,
    /// Number of hash rounds (k)
    k: u32,
}

impl BloomFilter {
    /// Create a new Bloom filter with `m` bits and `k` hash rounds
    ///
    /// # Errors
    /// [`FilterError::InvalidParameter`] if `m < 1` or `k < 1`.
    pub fn new(m: usize, k: u32) -> Result<Self> {
        if m < 1 {
            return Err(FilterError::InvalidParameter {
                name: "m",
                value: m,
            });
        }
        if k < 1 {
            return Err(FilterError::InvalidParameter {
                name: "k",
                value: k as usize,
            });
        }

        debug!(size_bits = m, hash_count = k, "Created bloom filter");
        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; m],
            m,
            k,
        })
    }

    /// Create a filter from a [`BloomConfig`]
    pub fn with_config(config: &BloomConfig) -> Result<Self> {
        Self::new(config.size_bits, config.hash_count)
    }

    /// Create a filter sized for `expected_items` at `target_fpr`
    pub fn with_capacity(expected_items: usize, target_fpr: f64) -> Result<Self> {
        Self::with_config(&BloomConfig::for_capacity(expected_items, target_fpr)?)
    }

    /// Bit position of `item` for hash round `round`, always in `[0, m)`
    pub fn location(&self, item: &[u8], round: u32) -> usize {
        location(item, round, self.m)
    }

    /// The `k` bit positions for `item`, in round order
    pub fn locations<'a>(&'a self, item: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        (0..self.k).map(move |round| self.location(item, round))
    }

    /// Insert an item
    ///
    /// Idempotent: inserting the same item twice leaves the same bits set as
    /// inserting it once.
    pub fn add(&mut self, item: &[u8]) {
        for round in 0..self.k {
            let pos = location(item, round, self.m);
            self.bits.set(pos, true);
        }
    }

    /// Insert a string's UTF-8 bytes
    pub fn add_str(&mut self, item: &str) {
        self.add(item.as_bytes());
    }

    /// Insert every item yielded by `items`
    pub fn add_all<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        for item in items {
            self.add(item.as_ref());
        }
    }

    /// Test if an item might be in the filter
    ///
    /// Returns:
    /// - `true` if the item might be in the set (could be false positive)
    /// - `false` if the item is definitely NOT in the set
    ///
    /// Stops at the first unset bit.
    pub fn test(&self, item: &[u8]) -> bool {
        self.locations(item).all(|pos| self.bits[pos])
    }

    /// Test a string's UTF-8 bytes
    pub fn test_str(&self, item: &str) -> bool {
        self.test(item.as_bytes())
    }

    /// Test for an item and insert it in a single pass
    ///
    /// Returns what [`test`](Self::test) would have returned just before the
    /// call. Every round's bit is set regardless of the outcome.
    pub fn test_and_add(&mut self, item: &[u8]) -> bool {
        let mut present = true;
        for round in 0..self.k {
            let pos = location(item, round, self.m);
            // BitSlice::replace returns the previous value
            if !self.bits.replace(pos, true) {
                present = false;
            }
        }
        trace!(present, "test_and_add");
        present
    }

    /// [`test_and_add`](Self::test_and_add) on a string's UTF-8 bytes
    pub fn test_and_add_str(&mut self, item: &str) -> bool {
        self.test_and_add(item.as_bytes())
    }

    /// Test raw bit positions directly, bypassing the filter's own hashing
    ///
    /// Each value is reduced modulo `m`; an empty slice returns true.
    ///
    /// Positions that were not produced by [`location`](Self::location) on
    /// this filter carry none of its false-positive guarantees. Mixing
    /// externally derived positions with items inserted through
    /// [`add`](Self::add) only tells you whether those particular bits
    /// happen to be set.
    pub fn test_locations(&self, locations: &[u64]) -> bool {
        let m = self.m as u64;
        locations.iter().all(|&loc| self.bits[(loc % m) as usize])
    }

    /// Capacity of the filter in bits (m)
    pub fn cap(&self) -> usize {
        self.m
    }

    /// Number of hash rounds per item (k)
    pub fn hash_function_num(&self) -> u32 {
        self.k
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// True when no bit is set
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Clear the filter (reset all bits to 0), keeping `m` and `k`
    pub fn clear_all(&mut self) {
        self.bits.fill(false);
        debug!(size_bits = self.m, "Cleared bloom filter");
    }
}
