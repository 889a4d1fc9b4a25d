//! Seeded hash functions over raw bytes.
//!
//! A filter with `k` rounds needs `k` hash functions. Rather than `k` distinct
//! algorithms, one keyed algorithm is run with seeds `0..k`. This gives only
//! approximate independence between rounds, which is the usual trade-off and
//! is good enough for Bloom filters.
//!
//! # Separation of Concerns
//!
//! - **`BloomHasher`**: turns bytes plus a seed into a hash value
//! - **`IndexGenerator`** (see [`super::index`]): reduces hashes to bit positions
//! - **`BloomFilter`**: composes generator + bit storage
//!
//! # Examples
//!
//! ```
//! use bloomseed::hash::{BloomHasher, Murmur3Hasher};
//!
//! let hasher = Murmur3Hasher::new();
//! let h0 = hasher.hash_with_seed(b"hello", 0);
//! let h1 = hasher.hash_with_seed(b"hello", 1);
//!
//! assert_eq!(h0, hasher.hash_with_seed(b"hello", 0));
//! assert_ne!(h0, h1);
//! ```

#![allow(clippy::module_name_repetitions)]

use murmurhash3::murmurhash3_x86_32;

/// Keyed, deterministic, non-cryptographic hash over byte slices.
///
/// # Requirements
///
/// Implementations must be:
/// - **Deterministic**: same bytes and seed give the same value in every run
///   and every process. No per-process random keys.
/// - **Uniform**: output evenly spread over its range (at least 32 bits).
/// - **Seed-sensitive**: different seeds behave like different functions.
///
/// Cryptographic strength is not required.
pub trait BloomHasher {
    /// Hash `bytes` with `seed`.
    fn hash_with_seed(&self, bytes: &[u8], seed: u32) -> u64;

    /// Name used to decide whether two filters are compatible.
    fn name(&self) -> &'static str;
}

/// MurmurHash3 (x86, 32-bit) hasher.
///
/// The default hasher. Round `i` hashes the element with seed `i`, so the
/// positions match any other implementation using `murmur3_32(bytes, i) % m`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Murmur3Hasher;

impl Murmur3Hasher {
    /// Create a MurmurHash3 hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BloomHasher for Murmur3Hasher {
    #[inline]
    fn hash_with_seed(&self, bytes: &[u8], seed: u32) -> u64 {
        u64::from(murmurhash3_x86_32(bytes, seed))
    }

    #[inline]
    fn name(&self) -> &'static str {
        "Murmur3_x86_32"
    }
}
