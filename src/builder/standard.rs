//! Builder for Bloom filters.
//!
//! # Type-State Pattern
//!
//! The builder progresses through states, so a missing parameter is a compile
//! error rather than a runtime one:
//!
//! ```text
//! Initial → WithItems → Complete → BloomFilter
//!     ↓         ↓           ↓
//!   .expected_items()  .false_positive_rate()  .build()
//! ```
//!
//! `.hasher()` may be called in any state.
//!
//! # Examples
//!
//! ## Minimal Configuration
//!
//! ```
//! use bloomseed::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//!
//! assert!(filter.is_empty());
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use bloomseed::builder::BloomFilterBuilder;
//!
//! let result = BloomFilterBuilder::new()
//!     .expected_items(0)  // Invalid!
//!     .false_positive_rate(0.01)
//!     .build();
//!
//! assert!(result.is_err());
//! ```

use crate::error::Result;
use crate::filters::standard::BloomFilter;
use crate::hash::{BloomHasher, Murmur3Hasher};

/// Type-state marker: no parameters set.
#[derive(Debug, Clone, Copy)]
pub struct Initial;

/// Type-state: item count set.
#[derive(Debug, Clone, Copy)]
pub struct WithItems {
    expected_items: usize,
}

/// Type-state: all required parameters set.
#[derive(Debug, Clone, Copy)]
pub struct Complete {
    expected_items: usize,
    fp_rate: f64,
}

/// Builder for [`BloomFilter`] with type-state guarantees.
///
/// # Type Parameters
///
/// - `State`: Current builder state (`Initial`, `WithItems`, `Complete`)
/// - `H`: Hash function type (defaults to `Murmur3Hasher`)
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder<State, H = Murmur3Hasher> {
    state: State,
    hasher: H,
}

impl BloomFilterBuilder<Initial, Murmur3Hasher> {
    /// Create a new builder using the default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Initial,
            hasher: Murmur3Hasher::new(),
        }
    }
}

impl Default for BloomFilterBuilder<Initial, Murmur3Hasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, H> BloomFilterBuilder<State, H> {
    /// Use `hasher` instead of the default MurmurHash3.
    #[must_use]
    pub fn hasher<H2: BloomHasher>(self, hasher: H2) -> BloomFilterBuilder<State, H2> {
        BloomFilterBuilder {
            state: self.state,
            hasher,
        }
    }
}

impl<H> BloomFilterBuilder<Initial, H> {
    /// Set the expected number of items (n). Required.
    ///
    /// Validated at [`build`](BloomFilterBuilder::build); 0 is rejected there.
    #[must_use]
    pub fn expected_items(self, items: usize) -> BloomFilterBuilder<WithItems, H> {
        BloomFilterBuilder {
            state: WithItems {
                expected_items: items,
            },
            hasher: self.hasher,
        }
    }
}

impl<H> BloomFilterBuilder<WithItems, H> {
    /// Set the target false positive rate (p). Required, must be in (0, 1).
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> BloomFilterBuilder<Complete, H> {
        BloomFilterBuilder {
            state: Complete {
                expected_items: self.state.expected_items,
                fp_rate,
            },
            hasher: self.hasher,
        }
    }
}

impl<H: BloomHasher> BloomFilterBuilder<Complete, H> {
    /// Validate the parameters and build the filter.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `expected_items == 0`
    /// - `fp_rate` not in (0, 1)
    /// - the derived bit count exceeds system limits
    pub fn build(self) -> Result<BloomFilter<H>> {
        BloomFilter::with_hasher(self.state.expected_items, self.state.fp_rate, self.hasher)
    }
}
