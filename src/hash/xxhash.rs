//! XXH3 hasher.
//!
//! XXH3 is a fast, high-quality non-cryptographic hash by Yann Collet. It is
//! an alternative to the default MurmurHash3 when elements are long (hundreds
//! of bytes or more), where its SIMD paths pay off.
//!
//! Filters built with [`XxHasher`] set different bits than filters built with
//! the default hasher and cannot be merged with them.
//!
//! # Implementation Note
//!
//! This module wraps the `xxhash-rust` crate.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "xxhash")]
//! # {
//! use bloomseed::hash::{BloomHasher, XxHasher};
//!
//! let hasher = XxHasher::new();
//! assert_ne!(hasher.hash_with_seed(b"test", 0), hasher.hash_with_seed(b"test", 1));
//! # }
//! ```

#![allow(clippy::module_name_repetitions)]

use super::hasher::BloomHasher;

use xxhash_rust::xxh3::xxh3_64_with_seed;

/// XXH3-64 hasher; the round number is used as the XXH3 seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XxHasher;

impl XxHasher {
    /// Create an XXH3 hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BloomHasher for XxHasher {
    #[inline]
    fn hash_with_seed(&self, bytes: &[u8], seed: u32) -> u64 {
        xxh3_64_with_seed(bytes, u64::from(seed))
    }

    #[inline]
    fn name(&self) -> &'static str {
        "XXHash3"
    }
}
