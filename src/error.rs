//! Error types for bloomseed operations.
//!
//! Every fallible operation returns [`Result<T>`]. Nothing in the crate panics
//! or aborts the process on bad input: callers get a [`BloomError`] back and
//! decide what to do with it.
//!
//! # Error Propagation
//!
//! ```
//! use bloomseed::{Result, BloomError};
//! use bloomseed::core::params::{optimal_bit_count, optimal_hash_count};
//!
//! fn sizing(n: usize, fp: f64) -> Result<(usize, usize)> {
//!     let m = optimal_bit_count(n, fp)?;
//!     let k = optimal_hash_count(m, n)?;
//!     Ok((m, k))
//! }
//! # assert!(sizing(1000, 0.01).is_ok());
//! # assert!(sizing(0, 0.01).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for bloomseed operations.
pub type Result<T> = std::result::Result<T, BloomError>;

/// Broad category of a [`BloomError`].
///
/// Construction problems are all [`ErrorKind::InvalidArgument`]; they are
/// caller mistakes and never happen after a filter exists.
/// [`ErrorKind::IndexOutOfRange`] means an internal invariant broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad constructor input (`n == 0`, `p` outside `(0, 1)`, zero size...).
    InvalidArgument,
    /// A bit position fell outside `[0, m)`.
    IndexOutOfRange,
    /// Two filters cannot be combined.
    Incompatible,
}

/// Errors that can occur while building or using a Bloom filter.
#[derive(Debug, Clone, PartialEq)]
pub enum BloomError {
    /// Parameters are individually valid but produce an unusable filter.
    InvalidParameters {
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// False positive rate outside the open interval (0, 1).
    ///
    /// `0` would need infinite memory, `1` accepts everything. NaN lands here
    /// too.
    FalsePositiveRateOutOfBounds {
        /// The rejected rate.
        fp_rate: f64,
    },

    /// Expected item count must be positive.
    InvalidItemCount {
        /// The rejected count.
        count: usize,
    },

    /// Bit array size must be positive.
    InvalidFilterSize {
        /// The rejected size in bits.
        size: usize,
    },

    /// Hash round count below the minimum.
    InvalidHashCount {
        /// The rejected count.
        count: usize,
        /// Minimum allowed value.
        min: usize,
    },

    /// Bit position at or past the end of the bit vector.
    ///
    /// Positions come from the index generator reduced modulo `m`, so this
    /// indicates a bug in bloomseed rather than bad input.
    IndexOutOfBounds {
        /// The position that was accessed.
        index: usize,
        /// Length of the bit vector.
        length: usize,
    },

    /// Filters differ in size, round count or hasher and cannot be merged.
    IncompatibleFilters {
        /// Description of the mismatch.
        reason: String,
    },
}

impl fmt::Display for BloomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { message } => {
                write!(f, "Invalid Bloom filter parameters: {}.", message)
            }
            Self::FalsePositiveRateOutOfBounds { fp_rate } => {
                write!(
                    f,
                    "False positive rate {} is out of bounds. Must be in range (0, 1).",
                    fp_rate
                )
            }
            Self::InvalidItemCount { count } => {
                write!(
                    f,
                    "Invalid item count: {}. Expected items must be greater than 0.",
                    count
                )
            }
            Self::InvalidFilterSize { size } => {
                write!(
                    f,
                    "Invalid filter size: {} bits. Must be positive.",
                    size
                )
            }
            Self::InvalidHashCount { count, min } => {
                write!(
                    f,
                    "Invalid hash round count: {}. Must be at least {}.",
                    count, min
                )
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(
                    f,
                    "Index {} out of bounds for bit vector of length {}",
                    index, length
                )
            }
            Self::IncompatibleFilters { reason } => {
                write!(
                    f,
                    "Cannot perform operation on incompatible filters: {}.",
                    reason
                )
            }
        }
    }
}

impl std::error::Error for BloomError {}

impl BloomError {
    /// Create an `InvalidParameters` error.
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: usize) -> Self {
        Self::InvalidItemCount { count }
    }

    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(size: usize) -> Self {
        Self::InvalidFilterSize { size }
    }

    /// Create an `InvalidHashCount` error.
    #[must_use]
    pub fn invalid_hash_count(count: usize, min: usize) -> Self {
        Self::InvalidHashCount { count, min }
    }

    /// Create an `IndexOutOfBounds` error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Create an `IncompatibleFilters` error.
    #[must_use]
    pub fn incompatible_filters(reason: impl Into<String>) -> Self {
        Self::IncompatibleFilters {
            reason: reason.into(),
        }
    }

    /// Category of this error.
    ///
    /// ```
    /// use bloomseed::{BloomError, ErrorKind};
    ///
    /// assert_eq!(BloomError::invalid_item_count(0).kind(), ErrorKind::InvalidArgument);
    /// assert_eq!(BloomError::index_out_of_bounds(9, 8).kind(), ErrorKind::IndexOutOfRange);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameters { .. }
            | Self::FalsePositiveRateOutOfBounds { .. }
            | Self::InvalidItemCount { .. }
            | Self::InvalidFilterSize { .. }
            | Self::InvalidHashCount { .. } => ErrorKind::InvalidArgument,
            Self::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfRange,
            Self::IncompatibleFilters { .. } => ErrorKind::Incompatible,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidArgument`.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
