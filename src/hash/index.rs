//! Bit position generation.
//!
//! Round `i` of element `e` lands on
//!
//! ```text
//! position(e, i) = hash_with_seed(e, i) mod m
//! ```
//!
//! so an element touches the positions for seeds `0, 1, ..., k-1`. Identical
//! bytes always map to identical positions; nothing here is random.

use super::hasher::{BloomHasher, Murmur3Hasher};
use crate::error::{BloomError, Result};

/// Maps `(element, round)` pairs onto `[0, m)`.
///
/// # Examples
///
/// ```
/// use bloomseed::hash::IndexGenerator;
///
/// let gen = IndexGenerator::new(96).unwrap();
/// let positions: Vec<usize> = gen.positions(b"apple", 7).collect();
///
/// assert_eq!(positions.len(), 7);
/// assert!(positions.iter().all(|&p| p < 96));
/// assert_eq!(positions[3], gen.index(b"apple", 3));
/// ```
#[derive(Debug, Clone)]
pub struct IndexGenerator<H = Murmur3Hasher> {
    hasher: H,
    bit_count: usize,
}

impl IndexGenerator<Murmur3Hasher> {
    /// Index generator over `[0, bit_count)` using MurmurHash3.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::InvalidFilterSize`] if `bit_count` is 0.
    pub fn new(bit_count: usize) -> Result<Self> {
        Self::with_hasher(bit_count, Murmur3Hasher::new())
    }
}

impl<H: BloomHasher> IndexGenerator<H> {
    /// Index generator over `[0, bit_count)` using `hasher`.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::InvalidFilterSize`] if `bit_count` is 0.
    pub fn with_hasher(bit_count: usize, hasher: H) -> Result<Self> {
        if bit_count == 0 {
            return Err(BloomError::invalid_filter_size(bit_count));
        }

        Ok(Self { hasher, bit_count })
    }

    /// Size of the position space (m).
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// The underlying hasher.
    #[must_use]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Position for `element` in `round`. Always `< bit_count`.
    #[must_use]
    #[inline]
    pub fn index(&self, element: &[u8], round: u32) -> usize {
        let hash = self.hasher.hash_with_seed(element, round);
        // bit_count fits in u64 on every supported target
        (hash % self.bit_count as u64) as usize
    }

    /// Positions for rounds `0..rounds`, in round order.
    pub fn positions<'a>(
        &'a self,
        element: &'a [u8],
        rounds: usize,
    ) -> impl Iterator<Item = usize> + 'a {
        (0..rounds).map(move |round| self.index(element, round as u32))
    }
}
