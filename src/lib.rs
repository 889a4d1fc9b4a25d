//! Bloomseed: a seeded-hash Bloom filter for Rust.
//!
//! A Bloom filter answers "might this element have been added?" in a fixed
//! amount of memory:
//! - **False positives**: possible, at a rate you choose up front
//! - **False negatives**: never. If it says an element is absent, it is.
//!
//! Each element is hashed `k` times with MurmurHash3, using the round number
//! as the seed, and the resulting positions are set in an `m`-bit array.
//! `m` and `k` are derived from the expected number of items and the target
//! false positive rate.
//!
//! # Quick Start
//!
//! ```
//! use bloomseed::BloomFilter;
//!
//! // Create a filter for 100 items with 1% false positive rate
//! let mut filter = BloomFilter::new(100, 0.01).unwrap();
//!
//! filter.add("apple");
//! filter.add("banana");
//!
//! assert!(filter.check("apple"));          // probably in set
//! assert!(!filter.check("zzz-not-added")); // definitely not in set
//! ```
//!
//! # Using the Builder
//!
//! ```
//! use bloomseed::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.001)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(filter.hash_rounds(), 10);
//! ```
//!
//! # Sizing
//!
//! ```
//! use bloomseed::core::derive;
//!
//! let params = derive(10, 0.01).unwrap();
//! assert_eq!((params.bit_count, params.hash_rounds), (96, 7));
//! ```
//!
//! # Features
//!
//! - `trace` (default) - per-operation `tracing::trace!` events
//! - `xxhash` - XXH3 hasher as an alternative to MurmurHash3
//! - `proptest` - property-based tests
//!
//! The filter has no internal locking. `add` needs `&mut self`; share it
//! between threads behind an `RwLock` or `Mutex`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Parameter derivation and bit storage
pub mod core;

/// Error types and result aliases
pub mod error;

/// Filter implementations
pub mod filters;

/// Hash functions and index generation
pub mod hash;

/// Type-safe builder
pub mod builder;

pub use builder::BloomFilterBuilder;
pub use error::{BloomError, ErrorKind, Result};
pub use filters::BloomFilter;
pub use hash::{BloomHasher, Murmur3Hasher};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloomseed::prelude::*;
///
/// let mut filter = BloomFilter::new(1000, 0.01).unwrap();
/// filter.add("hello");
/// assert!(filter.check("hello"));
/// ```
pub mod prelude {
    pub use crate::builder::BloomFilterBuilder;
    pub use crate::core::{derive, FilterParams};
    pub use crate::error::{BloomError, ErrorKind, Result};
    pub use crate::filters::BloomFilter;
    pub use crate::hash::{BloomHasher, Murmur3Hasher};

    #[cfg(feature = "xxhash")]
    pub use crate::hash::XxHasher;
}
