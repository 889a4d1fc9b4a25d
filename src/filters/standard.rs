//! Standard Bloom filter.
//!
//! # Algorithm
//!
//! - **Add**: for each round `i` in `0..k`, set bit `hash(e, seed = i) mod m`
//! - **Check**: for each round, read the same bit; any 0 means "definitely
//!   absent", all 1 means "probably present"
//!
//! # Properties
//!
//! - **False negatives**: never. Bits are never cleared.
//! - **False positives**: approach the target rate `p` as the number of
//!   distinct added elements approaches the capacity `n`, and grow past it
//!   if more are added. The filter does not resize.
//! - **Time**: O(k) hash computations per operation
//! - **Space**: `ceil(-n ln p / (ln 2)²)` bits, about 9.6 bits per element at 1%
//!
//! # Concurrency
//!
//! `add` takes `&mut self` and `check` takes `&self`, so the borrow checker
//! enforces a single writer. For shared access across threads wrap the filter
//! in a lock:
//!
//! ```
//! use bloomseed::BloomFilter;
//! use std::sync::{Arc, RwLock};
//! use std::thread;
//!
//! let filter = Arc::new(RwLock::new(BloomFilter::new(1000, 0.01).unwrap()));
//!
//! let writer = {
//!     let f = Arc::clone(&filter);
//!     thread::spawn(move || f.write().unwrap().add("shared"))
//! };
//! writer.join().unwrap();
//!
//! assert!(filter.read().unwrap().check("shared"));
//! ```

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::core::bitvec::BitVec;
use crate::core::params::{derive, MIN_HASH_ROUNDS};
use crate::error::{BloomError, Result};
use crate::hash::{BloomHasher, IndexGenerator, Murmur3Hasher};

/// Bloom filter over byte-sequence elements.
///
/// Anything implementing `AsRef<[u8]>` can be added or checked: `&str`,
/// `String`, `&[u8]`, `Vec<u8>`, byte arrays. Two elements with the same bytes
/// are the same element.
///
/// # Type Parameters
///
/// * `H` - Hash function (defaults to MurmurHash3 x86_32)
///
/// # Examples
///
/// ```
/// use bloomseed::BloomFilter;
///
/// let mut filter = BloomFilter::new(100, 0.01).unwrap();
/// filter.add("apple");
/// filter.add(b"banana");
///
/// assert!(filter.check("apple"));
/// assert!(filter.check("banana".to_string()));
/// assert!(!filter.check("zzz-not-added"));
/// ```
#[derive(Debug, Clone)]
pub struct BloomFilter<H = Murmur3Hasher> {
    /// Maps (element, round) to a bit position in [0, m)
    index: IndexGenerator<H>,

    /// Bit store, exactly m bits
    bits: BitVec,

    /// Number of hash rounds (k)
    k: usize,

    /// Capacity the filter was sized for (0 when built from explicit m, k)
    expected_items: usize,

    /// Target false positive rate (0.0 when built from explicit m, k)
    target_fpr: f64,
}

impl BloomFilter<Murmur3Hasher> {
    /// Create a filter sized for `expected_items` elements at false positive
    /// rate `fpr`, using MurmurHash3.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidItemCount`] if `expected_items == 0`
    /// - [`BloomError::FalsePositiveRateOutOfBounds`] if `fpr` not in (0, 1)
    /// - [`BloomError::InvalidParameters`] if the bit count exceeds system limits
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomseed::{BloomFilter, ErrorKind};
    ///
    /// let filter = BloomFilter::new(10, 0.01).unwrap();
    /// assert_eq!(filter.bit_count(), 96);
    /// assert_eq!(filter.hash_rounds(), 7);
    ///
    /// let err = BloomFilter::new(0, 0.01).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn new(expected_items: usize, fpr: f64) -> Result<Self> {
        Self::with_hasher(expected_items, fpr, Murmur3Hasher::new())
    }
}

impl<H: BloomHasher> BloomFilter<H> {
    /// Create a filter sized for `expected_items` at `fpr`, using `hasher`.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    pub fn with_hasher(expected_items: usize, fpr: f64, hasher: H) -> Result<Self> {
        let params = derive(expected_items, fpr)?;
        let mut filter = Self::assemble(params.bit_count, params.hash_rounds, hasher)?;
        filter.expected_items = expected_items;
        filter.target_fpr = fpr;

        tracing::debug!(
            n = expected_items,
            p = fpr,
            m = params.bit_count,
            k = params.hash_rounds,
            hasher = filter.hasher_name(),
            "created Bloom filter"
        );

        Ok(filter)
    }

    /// Create a filter with an explicit bit count `m` and round count `k`.
    ///
    /// [`expected_items`](Self::expected_items) and
    /// [`target_fpr`](Self::target_fpr) report 0 for such filters.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidFilterSize`] if `m == 0`
    /// - [`BloomError::InvalidHashCount`] if `k == 0`
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomseed::BloomFilter;
    /// use bloomseed::hash::Murmur3Hasher;
    ///
    /// let filter = BloomFilter::with_params(10_000, 7, Murmur3Hasher::new()).unwrap();
    /// assert_eq!(filter.bit_count(), 10_000);
    /// assert_eq!(filter.expected_items(), 0);
    /// ```
    pub fn with_params(m: usize, k: usize, hasher: H) -> Result<Self> {
        let filter = Self::assemble(m, k, hasher)?;

        tracing::debug!(
            m,
            k,
            hasher = filter.hasher_name(),
            "created Bloom filter from explicit parameters"
        );

        Ok(filter)
    }

    fn assemble(m: usize, k: usize, hasher: H) -> Result<Self> {
        if k < MIN_HASH_ROUNDS {
            return Err(BloomError::invalid_hash_count(k, MIN_HASH_ROUNDS));
        }
        // Round numbers are 32-bit seeds
        if u32::try_from(k).is_err() {
            return Err(BloomError::invalid_parameters(format!(
                "{} hash rounds exceed the 32-bit seed range",
                k
            )));
        }

        Ok(Self {
            index: IndexGenerator::with_hasher(m, hasher)?,
            bits: BitVec::new(m)?,
            k,
            expected_items: 0,
            target_fpr: 0.0,
        })
    }

    /// Add an element.
    ///
    /// Sets up to `k` bits (fewer when rounds collide or bits were already
    /// set). Adding the same element again changes nothing.
    #[inline]
    pub fn add<E: AsRef<[u8]>>(&mut self, element: E) {
        if let Err(err) = self.try_add(element) {
            tracing::error!(error = %err, "bit position outside filter while adding element");
        }
    }

    /// Add an element, reporting a bit position outside `[0, m)` as an error.
    ///
    /// Positions are reduced modulo `m`, so this only fails if an internal
    /// invariant is broken. [`add`](Self::add) is the usual entry point.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::IndexOutOfBounds`] on an out-of-range position.
    pub fn try_add<E: AsRef<[u8]>>(&mut self, element: E) -> Result<()> {
        let element = element.as_ref();

        #[cfg(feature = "trace")]
        tracing::trace!(len = element.len(), "BloomFilter::add");

        for position in self.index.positions(element, self.k) {
            self.bits.set(position)?;
        }

        Ok(())
    }

    /// Check whether an element might have been added.
    ///
    /// # Returns
    ///
    /// - `false`: the element was definitely never added
    /// - `true`: the element was probably added (or this is a false positive)
    ///
    /// Stops at the first unset bit.
    #[must_use]
    #[inline]
    pub fn check<E: AsRef<[u8]>>(&self, element: E) -> bool {
        self.try_check(element).unwrap_or_else(|err| {
            tracing::error!(error = %err, "bit position outside filter while checking element");
            // "probably present" never turns into a false negative
            true
        })
    }

    /// Check an element, reporting a bit position outside `[0, m)` as an error.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::IndexOutOfBounds`] on an out-of-range position.
    pub fn try_check<E: AsRef<[u8]>>(&self, element: E) -> Result<bool> {
        let element = element.as_ref();

        #[cfg(feature = "trace")]
        tracing::trace!(len = element.len(), "BloomFilter::check");

        for position in self.index.positions(element, self.k) {
            if !self.bits.get(position)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Add every element of `items`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomseed::BloomFilter;
    ///
    /// let mut filter = BloomFilter::new(100, 0.01).unwrap();
    /// filter.add_batch(["cherry", "date", "fig"]);
    /// assert_eq!(filter.check_batch(["cherry", "fig"]), vec![true, true]);
    /// ```
    pub fn add_batch<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for item in items {
            self.add(item);
        }
    }

    /// Check every element of `items`, in order.
    #[must_use]
    pub fn check_batch<I>(&self, items: I) -> Vec<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        items.into_iter().map(|item| self.check(item)).collect()
    }

    /// Merge `other` into `self`.
    ///
    /// Afterwards `self` checks true for everything either filter had added.
    ///
    /// # Errors
    ///
    /// Returns [`BloomError::IncompatibleFilters`] if the filters differ in
    /// bit count, round count or hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomseed::BloomFilter;
    ///
    /// let mut a = BloomFilter::new(1000, 0.01).unwrap();
    /// let mut b = BloomFilter::new(1000, 0.01).unwrap();
    /// a.add("alice");
    /// b.add("bob");
    ///
    /// a.union(&b).unwrap();
    /// assert!(a.check("alice") && a.check("bob"));
    /// ```
    pub fn union(&mut self, other: &Self) -> Result<()> {
        if self.k != other.k {
            return Err(BloomError::incompatible_filters(format!(
                "hash round counts differ: {} vs {}",
                self.k, other.k
            )));
        }
        if self.hasher_name() != other.hasher_name() {
            return Err(BloomError::incompatible_filters(format!(
                "hashers differ: {} vs {}",
                self.hasher_name(),
                other.hasher_name()
            )));
        }

        self.bits.union_with(&other.bits)
    }

    /// Number of bits (m).
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash rounds (k).
    #[must_use]
    #[inline]
    pub fn hash_rounds(&self) -> usize {
        self.k
    }

    /// Capacity the filter was sized for (n).
    #[must_use]
    #[inline]
    pub fn expected_items(&self) -> usize {
        self.expected_items
    }

    /// False positive rate the filter was sized for (p).
    #[must_use]
    #[inline]
    pub fn target_fpr(&self) -> f64 {
        self.target_fpr
    }

    /// Name of the hash function.
    #[must_use]
    pub fn hasher_name(&self) -> &'static str {
        self.index.hasher().name()
    }

    /// Number of bits currently set.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Raw bit words. Equal for two filters with equal history.
    #[must_use]
    pub fn bit_words(&self) -> &[u64] {
        self.bits.as_words()
    }

    /// `true` if nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_set_bits() == 0
    }

    /// Fraction of bits set, in [0, 1].
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_set_bits() as f64 / self.bit_count() as f64
    }

    /// Current false positive probability estimated from the fill rate.
    ///
    /// A random absent element hits `k` independent set bits with probability
    /// `fill_rate^k`.
    #[must_use]
    pub fn estimate_fpr(&self) -> f64 {
        self.fill_rate().powf(self.k as f64)
    }

    /// Estimated number of distinct elements added: `-(m/k) × ln(1 - X/m)`.
    ///
    /// Returns `usize::MAX` once every bit is set.
    #[must_use]
    pub fn estimate_cardinality(&self) -> usize {
        let set_bits = self.count_set_bits();
        if set_bits == 0 {
            return 0;
        }
        if set_bits >= self.bit_count() {
            return usize::MAX;
        }

        let m = self.bit_count() as f64;
        let k = self.k as f64;
        let estimated_n = -(m / k) * (1.0 - set_bits as f64 / m).ln();

        estimated_n.round().max(0.0) as usize
    }

    /// `true` once more than half the bits are set.
    ///
    /// Past this point the false positive rate climbs quickly; the filter was
    /// probably given more elements than it was sized for.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.fill_rate() > 0.5
    }

    /// Approximate heap and inline memory in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage() + std::mem::size_of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const FRUITS: [&str; 25] = [
        "apple", "banana", "cherry", "date", "elderberry", "fig", "grape", "honeydew", "imbe",
        "jackfruit", "kiwi", "lemon", "mango", "nectarine", "orange", "papaya", "quince",
        "raspberry", "strawberry", "tangerine", "ugli", "vanilla", "watermelon", "xylocarp",
        "yuzu",
    ];

    #[test]
    fn test_new_basic() {
        let filter = BloomFilter::new(100, 0.01).unwrap();
        assert_eq!(filter.bit_count(), 959);
        assert_eq!(filter.hash_rounds(), 7);
        assert_eq!(filter.expected_items(), 100);
        assert_eq!(filter.target_fpr(), 0.01);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_new_invalid_arguments() {
        for (n, p) in [(0, 0.01), (100, 0.0), (100, 1.0), (100, -0.5), (100, f64::NAN)] {
            let err = BloomFilter::new(n, p).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "n={} p={}", n, p);
        }
    }

    #[test]
    fn test_with_params() {
        let filter = BloomFilter::with_params(64, 3, Murmur3Hasher::new()).unwrap();
        assert_eq!(filter.bit_count(), 64);
        assert_eq!(filter.hash_rounds(), 3);
        assert_eq!(filter.target_fpr(), 0.0);
    }

    #[test]
    fn test_with_params_invalid() {
        assert!(matches!(
            BloomFilter::with_params(0, 3, Murmur3Hasher::new()),
            Err(BloomError::InvalidFilterSize { size: 0 })
        ));
        assert!(matches!(
            BloomFilter::with_params(64, 0, Murmur3Hasher::new()),
            Err(BloomError::InvalidHashCount { count: 0, min: 1 })
        ));
    }

    #[test]
    fn test_add_and_check() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        filter.add("apple");
        filter.add("banana");

        assert!(filter.check("apple"));
        assert!(filter.check("banana"));
        assert!(!filter.check("zzz-not-added"));
    }

    #[test]
    fn test_element_representations_are_interchangeable() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        filter.add(String::from("kiwi"));

        assert!(filter.check("kiwi"));
        assert!(filter.check(b"kiwi"));
        assert!(filter.check(vec![b'k', b'i', b'w', b'i']));
        assert!(filter.check(&b"kiwi"[..]));
    }

    #[test]
    fn test_add_sets_at_most_k_bits() {
        let mut filter = BloomFilter::new(1000, 0.01).unwrap();
        filter.add("one element");
        let set = filter.count_set_bits();
        assert!(set >= 1 && set <= filter.hash_rounds());
    }

    #[test]
    fn test_empty_element() {
        let mut filter = BloomFilter::new(10, 0.1).unwrap();
        filter.add("");
        assert!(filter.check(""));
        assert!(filter.check(Vec::<u8>::new()));
    }

    #[test]
    fn test_no_false_negatives() {
        let mut filter = BloomFilter::new(1000, 0.01).unwrap();
        let items: Vec<String> = (0..1000).map(|i| format!("item-{}", i)).collect();

        for (i, item) in items.iter().enumerate() {
            filter.add(item);
            // earlier items stay present as later ones arrive
            assert!(items[..=i].iter().all(|seen| filter.check(seen)));
        }
    }

    #[test]
    fn test_duplicate_adds_are_idempotent() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        filter.add("dup");
        let words = filter.bit_words().to_vec();

        filter.add("dup");
        filter.add("dup");

        assert_eq!(filter.bit_words(), words.as_slice());
        assert!(filter.check("dup"));
    }

    #[test]
    fn test_deterministic_bit_patterns() {
        let mut a = BloomFilter::new(500, 0.02).unwrap();
        let mut b = BloomFilter::new(500, 0.02).unwrap();

        for i in 0..300 {
            let item = format!("user:{}", i);
            a.add(&item);
            b.add(&item);
        }

        assert_eq!(a.bit_words(), b.bit_words());
        for i in 0..1000 {
            let query = format!("query:{}", i);
            assert_eq!(a.check(&query), b.check(&query));
        }
    }

    #[test]
    fn test_try_variants_succeed() {
        let mut filter = BloomFilter::new(50, 0.05).unwrap();
        assert_eq!(filter.try_check("x"), Ok(false));
        filter.try_add("x").unwrap();
        assert_eq!(filter.try_check("x"), Ok(true));
    }

    #[test]
    fn test_check_does_not_mutate() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        filter.add("present");
        let words = filter.bit_words().to_vec();

        for i in 0..100 {
            let _ = filter.check(format!("absent-{}", i));
        }

        assert_eq!(filter.bit_words(), words.as_slice());
    }

    #[test]
    fn test_fruit_scenario() {
        let absent = [
            "apricot", "blueberry", "coconut", "durian", "elderflower", "guava", "huckleberry",
            "indian gooseberry", "jujube", "kiwifruit", "lime", "mulberry", "nectar", "olive",
            "pineapple", "quenepa", "rambutan", "strudel", "tangelo", "ugni", "vanillin",
            "wax apple", "xigua", "yellow passionfruit", "zinfandel grape",
        ];

        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        for fruit in FRUITS {
            filter.add(fruit);
            assert!(filter.check(fruit), "{} should be present", fruit);
        }

        for fruit in absent {
            assert!(!filter.check(fruit), "{} should be absent", fruit);
        }
    }

    #[test]
    fn test_batch_operations() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        filter.add_batch(FRUITS);

        assert!(filter.check_batch(FRUITS).into_iter().all(|hit| hit));
        assert_eq!(filter.check_batch(Vec::<&str>::new()), Vec::<bool>::new());
    }

    #[test]
    fn test_union() {
        let mut a = BloomFilter::new(1000, 0.01).unwrap();
        let mut b = BloomFilter::new(1000, 0.01).unwrap();
        a.add_batch(&FRUITS[..12]);
        b.add_batch(&FRUITS[12..]);

        a.union(&b).unwrap();
        assert!(FRUITS.iter().all(|f| a.check(f)));
    }

    #[test]
    fn test_union_incompatible() {
        let mut a = BloomFilter::new(1000, 0.01).unwrap();
        let b = BloomFilter::new(2000, 0.01).unwrap();
        let c = BloomFilter::with_params(a.bit_count(), a.hash_rounds() + 1, Murmur3Hasher::new())
            .unwrap();

        assert_eq!(a.union(&b).unwrap_err().kind(), ErrorKind::Incompatible);
        assert_eq!(a.union(&c).unwrap_err().kind(), ErrorKind::Incompatible);
    }

    #[test]
    fn test_fill_rate_and_estimates() {
        let mut filter = BloomFilter::new(1000, 0.01).unwrap();
        assert_eq!(filter.fill_rate(), 0.0);
        assert_eq!(filter.estimate_fpr(), 0.0);
        assert_eq!(filter.estimate_cardinality(), 0);

        for i in 0..500 {
            filter.add(format!("item-{}", i));
        }

        assert!(filter.fill_rate() > 0.2 && filter.fill_rate() < 0.5);
        assert!(!filter.is_saturated());

        let estimate = filter.estimate_cardinality();
        assert!(
            (450..=550).contains(&estimate),
            "cardinality estimate {}",
            estimate
        );
        assert!(filter.estimate_fpr() < 0.01);
    }

    #[test]
    fn test_extreme_load() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        for i in 0..10_000u32 {
            filter.add(i.to_le_bytes());
        }

        assert!(filter.fill_rate() > 0.9);
        assert!(filter.is_saturated());
        assert!((0..100u32).all(|i| filter.check(i.to_le_bytes())));
    }

    #[test]
    fn test_single_item_capacity() {
        let mut filter = BloomFilter::new(1, 0.5).unwrap();
        assert_eq!(filter.hash_rounds(), 1);
        filter.add("single");
        assert!(filter.check("single"));
    }

    #[test]
    fn test_memory_usage() {
        let filter = BloomFilter::new(10_000, 0.01).unwrap();
        assert!(filter.memory_usage() >= filter.bit_count() / 8);
    }

    #[test]
    fn test_estimate_fpr_with_rounds_past_i32() {
        let k = i32::MAX as usize + 1;
        let filter = BloomFilter::with_params(64, k, Murmur3Hasher::new()).unwrap();

        assert_eq!(filter.hash_rounds(), k);
        assert_eq!(filter.estimate_fpr(), 0.0);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_oversized_filters_return_errors() {
        let err = BloomFilter::with_params(usize::MAX, 1, Murmur3Hasher::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = BloomFilter::new(1usize << 57, 0.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_filter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BloomFilter>();
    }

    #[cfg(feature = "proptest")]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn added_elements_are_always_present(
                items in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..32), 1..200)
            ) {
                let mut filter = BloomFilter::new(items.len(), 0.01).unwrap();
                for item in &items {
                    filter.add(item);
                }
                for item in &items {
                    prop_assert!(filter.check(item));
                }
            }

            #[test]
            fn derived_parameters_are_positive(n in 1usize..1_000_000, p in 0.000_001f64..0.999) {
                let filter = BloomFilter::new(n, p).unwrap();
                prop_assert!(filter.bit_count() >= 1);
                prop_assert!(filter.hash_rounds() >= 1);
            }
        }
    }
}
