//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use salted_bloom::BloomConfigBuilder;
//!
//! let config = BloomConfigBuilder::new()
//!     .expected_items(500)
//!     .target_fpr(0.01)
//!     .build()
//!     .expect("Valid config");
//!
//! assert!(config.size_bits > 500);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::parameters::{calculate_optimal_parameters, optimal_k, MAX_DERIVED_HASH_COUNT};
use crate::error::{FilterError, Result};

/// Default false positive rate used when sizing from an item count alone.
pub const DEFAULT_TARGET_FPR: f64 = 0.01;

/// Construction parameters for a [`BloomFilter`](crate::BloomFilter)
///
/// Deserializable so a host application can embed it in its own config file.
/// Missing fields fall back to [`BloomConfig::default`]; call
/// [`validate`](BloomConfig::validate) after loading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Size of the bit array (m)
    pub size_bits: usize,
    /// Hash rounds per item (k)
    pub hash_count: u32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            size_bits: 1024,
            hash_count: 3,
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(size_bits: usize, hash_count: u32) -> Result<Self> {
        let config = Self {
            size_bits,
            hash_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Size a configuration for `expected_items` at `target_fpr`
    ///
    /// `target_fpr` must be finite and strictly between 0 and 1.
    pub fn for_capacity(expected_items: usize, target_fpr: f64) -> Result<Self> {
        validate_fpr(target_fpr)?;
        if expected_items == 0 {
            return Err(FilterError::InvalidParameter {
                name: "expected_items",
                value: expected_items,
            });
        }

        let params = calculate_optimal_parameters(expected_items, target_fpr);
        if optimal_k(params.size_bits, expected_items) > MAX_DERIVED_HASH_COUNT {
            warn!(
                expected_items,
                target_fpr,
                hash_count = params.hash_count,
                "Derived hash count clamped"
            );
        }

        Self::new(params.size_bits, params.hash_count)
    }

    /// Validate a configuration, e.g. one loaded through serde
    pub fn validate(&self) -> Result<()> {
        if self.size_bits < 1 {
            return Err(FilterError::InvalidParameter {
                name: "size_bits",
                value: self.size_bits,
            });
        }

        if self.hash_count < 1 {
            return Err(FilterError::InvalidParameter {
                name: "hash_count",
                value: self.hash_count as usize,
            });
        }

        Ok(())
    }

    /// Builder-style method to set the bit array size
    pub fn with_size_bits(mut self, bits: usize) -> Self {
        self.size_bits = bits;
        self
    }

    /// Builder-style method to set the hash round count
    pub fn with_hash_count(mut self, k: u32) -> Self {
        self.hash_count = k;
        self
    }
}

fn validate_fpr(fpr: f64) -> Result<()> {
    if !fpr.is_finite() || fpr <= 0.0 || fpr >= 1.0 {
        return Err(FilterError::InvalidFpr { fpr });
    }
    Ok(())
}

/// Builder for [`BloomConfig`]
///
/// Explicit `size_bits` / `hash_count` always win. Fields left unset are
/// derived from `expected_items` and `target_fpr` when an item count is
/// given, and otherwise come from [`BloomConfig::default`].
///
/// ```
/// use salted_bloom::BloomConfigBuilder;
///
/// let config = BloomConfigBuilder::new()
///     .expected_items(100)
///     .hash_count(4)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.hash_count, 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BloomConfigBuilder {
    size_bits: Option<usize>,
    hash_count: Option<u32>,
    expected_items: Option<usize>,
    target_fpr: Option<f64>,
}

impl BloomConfigBuilder {
    /// Create a new builder with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bit array size explicitly
    pub fn size_bits(mut self, bits: usize) -> Self {
        self.size_bits = Some(bits);
        self
    }

    /// Set the hash round count explicitly
    pub fn hash_count(mut self, k: u32) -> Self {
        self.hash_count = Some(k);
        self
    }

    /// Set the number of items the filter is sized for
    pub fn expected_items(mut self, n: usize) -> Self {
        self.expected_items = Some(n);
        self
    }

    /// Set the target false positive rate (defaults to [`DEFAULT_TARGET_FPR`])
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig> {
        if let Some(fpr) = self.target_fpr {
            validate_fpr(fpr)?;
        }

        let base = match self.expected_items {
            Some(n) => {
                BloomConfig::for_capacity(n, self.target_fpr.unwrap_or(DEFAULT_TARGET_FPR))?
            }
            None => BloomConfig::default(),
        };

        let config = BloomConfig {
            size_bits: self.size_bits.unwrap_or(base.size_bits),
            hash_count: self.hash_count.unwrap_or(base.hash_count),
        };

        config.validate()?;
        Ok(config)
    }
}
