//! Fixed-size bit vector backing the filter.
//!
//! `BitVec` is a bit array of exactly `len` positions backed by `Box<[u64]>`.
//! Each 64-bit word stores 64 bits in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! Bits only ever go from 0 to 1. There is no clear or reset: a Bloom filter
//! cannot forget an element without risking false negatives for others.
//!
//! Every access is bounds-checked and returns [`BloomError::IndexOutOfBounds`]
//! instead of panicking.
//!
//! # Performance Characteristics
//!
//! - Space: `⌈n/64⌉ * 8` bytes for `n` bits
//! - `set`, `get`: O(1)
//! - `count_ones`: O(n/64), uses POPCNT where available
//!
//! # Examples
//!
//! ```
//! use bloomseed::core::bitvec::BitVec;
//!
//! let mut bv = BitVec::new(100).unwrap();
//! bv.set(42).unwrap();
//! assert!(bv.get(42).unwrap());
//! assert!(!bv.get(43).unwrap());
//! assert!(bv.get(100).is_err());
//! assert_eq!(bv.count_ones(), 1);
//! ```

use crate::error::{BloomError, Result};

/// Fixed-size, grow-only bit vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    /// Words, each storing 64 bits. Bits past `len` in the last word stay 0.
    blocks: Box<[u64]>,

    /// Total number of bits in the vector.
    len: usize,
}

impl BitVec {
    /// Create a new bit vector with `num_bits` positions, all 0.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidFilterSize`] if `num_bits` is 0
    /// - [`BloomError::InvalidParameters`] if the words cannot be allocated
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(BloomError::invalid_filter_size(num_bits));
        }

        // Rounded up without `num_bits + 63`, which overflows near usize::MAX
        let num_blocks = num_bits / 64 + usize::from(num_bits % 64 != 0);

        let mut blocks = Vec::new();
        blocks.try_reserve_exact(num_blocks).map_err(|err| {
            BloomError::invalid_parameters(format!(
                "cannot allocate {} bits ({} words): {}",
                num_bits, num_blocks, err
            ))
        })?;
        blocks.resize(num_blocks, 0u64);

        Ok(Self {
            blocks: blocks.into_boxed_slice(),
            len: num_bits,
        })
    }

    /// Number of addressable bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` if the vector has no positions. [`BitVec::new`] rejects 0 bits,
    /// so this is `false` for every constructed vector.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set the bit at `index` to 1. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::IndexOutOfBounds`] if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize) -> Result<()> {
        let (block_idx, mask) = self.locate(index)?;
        self.blocks[block_idx] |= mask;
        Ok(())
    }

    /// Read the bit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::IndexOutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool> {
        let (block_idx, mask) = self.locate(index)?;
        Ok(self.blocks[block_idx] & mask != 0)
    }

    /// Count bits set to 1.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.blocks.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Heap bytes held by the word array.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.blocks.len() * std::mem::size_of::<u64>()
    }

    /// Number of 64-bit words.
    #[must_use]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Raw words, low bit of word 0 is position 0.
    #[must_use]
    pub fn as_words(&self) -> &[u64] {
        &self.blocks
    }

    /// OR every bit of `other` into `self`.
    ///
    /// Only adds bits, so the grow-only property holds.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::IncompatibleFilters`] if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomseed::core::bitvec::BitVec;
    ///
    /// let mut a = BitVec::new(64).unwrap();
    /// let mut b = BitVec::new(64).unwrap();
    /// a.set(10).unwrap();
    /// b.set(20).unwrap();
    ///
    /// a.union_with(&b).unwrap();
    /// assert!(a.get(10).unwrap() && a.get(20).unwrap());
    /// ```
    pub fn union_with(&mut self, other: &Self) -> Result<()> {
        if self.len != other.len {
            return Err(BloomError::incompatible_filters(format!(
                "bit vector lengths differ: {} vs {}",
                self.len, other.len
            )));
        }

        for (dst, src) in self.blocks.iter_mut().zip(other.blocks.iter()) {
            *dst |= *src;
        }

        Ok(())
    }

    #[inline]
    fn locate(&self, index: usize) -> Result<(usize, u64)> {
        if index >= self.len {
            return Err(BloomError::index_out_of_bounds(index, self.len));
        }

        Ok((index / 64, 1u64 << (index % 64)))
    }
}
