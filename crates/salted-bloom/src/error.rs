//! Error types for the salted Bloom filter

use thiserror::Error;

/// Errors raised while constructing or configuring a filter.
///
/// Once a [`BloomFilter`](crate::BloomFilter) exists every operation on it is
/// total, so these only surface from constructors and config validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Invalid parameter: {name} must be at least 1, got {value}")]
    InvalidParameter { name: &'static str, value: usize },

    #[error("Invalid false positive rate: {fpr} (must be finite and strictly between 0 and 1)")]
    InvalidFpr { fpr: f64 },
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, FilterError>;
