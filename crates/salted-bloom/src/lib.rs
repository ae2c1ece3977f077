//! # Salted Bloom
//!
//! A fixed-size Bloom filter: a probabilistic set that answers "possibly a
//! member" or "definitely not a member" with no false negatives.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: bit array of `m` bits plus `k` hash rounds
//!   - `hash_functions`: MurmurHash3 salted with the round index
//!   - `parameters`: analytic sizing (`m`, `k`, expected FPR)
//!   - `BloomConfig` / `BloomConfigBuilder`: validated construction parameters
//!
//! - **Error** (`error`): `FilterError`, raised only at construction
//!
//! ## Position Derivation
//!
//! Round `i` hashes the item bytes followed by `i` as 4 little-endian bytes
//! and reduces the lower 64 bits of MurmurHash3 (x64, 128-bit, seed 0)
//! modulo `m`. One hash function serves all `k` rounds.
//!
//! ## Invariants
//!
//! - `m >= 1` and `k >= 1`; construction fails otherwise
//! - Every position lies in `[0, m)` and the bit array never resizes
//! - No false negatives - after `add(x)`, `test(x)` returns true until `clear_all`
//!
//! ## Usage Example
//!
//! ```
//! use salted_bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(100, 4)?;
//! filter.add_str("alpha");
//!
//! assert!(filter.test_str("alpha"));
//! assert!(!filter.test_and_add_str("beta"));
//! assert!(filter.test_str("beta"));
//!
//! filter.clear_all();
//! assert!(!filter.test_str("alpha"));
//! # Ok::<(), salted_bloom::FilterError>(())
//! ```
//!
//! ## Logging
//!
//! Emits `tracing` events (construction, reset, test-and-add outcome). The
//! crate never installs a subscriber.

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    calculate_fpr, calculate_optimal_parameters, BloomConfig, BloomConfigBuilder, BloomFilter,
    BloomFilterParams, DEFAULT_TARGET_FPR,
};
pub use error::{FilterError, Result};
