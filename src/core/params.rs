//! Optimal parameter calculation for Bloom filters.
//!
//! Given:
//! - `n`: expected number of elements
//! - `p`: target false positive rate
//!
//! Optimal parameters:
//! - `m = ceil(-n × ln(p) / (ln 2)²)` (bits in filter)
//! - `k = round((m/n) × ln 2)`, at least 1 (hash rounds)
//!
//! The bit count is often written `ceil((n × ln p) / ln(1 / 2^ln 2))`. Since
//! `ln(1 / 2^ln 2) = -(ln 2)²` the two are the same number; the closed form is
//! used here.
//!
//! Expected false positive rate after `n` insertions:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - <https://hur.st/bloomfilter/>

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{BloomError, Result};
use std::f64::consts::LN_2;

/// (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Minimum number of hash rounds.
pub const MIN_HASH_ROUNDS: usize = 1;

/// Bit count and hash round count for a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterParams {
    /// Number of addressable bits (m), at least 1.
    pub bit_count: usize,
    /// Number of hash rounds per element (k), at least 1.
    pub hash_rounds: usize,
}

/// Derive `(m, k)` from capacity `n` and false positive rate `p`.
///
/// # Errors
///
/// - [`BloomError::InvalidItemCount`] if `n == 0`
/// - [`BloomError::FalsePositiveRateOutOfBounds`] if `p` is not in `(0, 1)`
/// - [`BloomError::InvalidParameters`] if `m` does not fit in memory
///
/// # Examples
///
/// ```
/// use bloomseed::core::params::{derive, FilterParams};
///
/// let params = derive(10, 0.01).unwrap();
/// assert_eq!(params, FilterParams { bit_count: 96, hash_rounds: 7 });
/// ```
pub fn derive(n: usize, p: f64) -> Result<FilterParams> {
    let bit_count = optimal_bit_count(n, p)?;
    let hash_rounds = optimal_hash_count(bit_count, n)?;
    Ok(FilterParams {
        bit_count,
        hash_rounds,
    })
}

/// Calculate optimal number of bits: `m = ceil(-n × ln(p) / (ln 2)²)`.
///
/// # Errors
///
/// - [`BloomError::InvalidItemCount`] if `n == 0`
/// - [`BloomError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1)
/// - [`BloomError::InvalidParameters`] if the result exceeds system limits
///
/// # Examples
///
/// ```
/// use bloomseed::core::params::optimal_bit_count;
///
/// assert_eq!(optimal_bit_count(1000, 0.01).unwrap(), 9586);
/// ```
pub fn optimal_bit_count(n: usize, fp_rate: f64) -> Result<usize> {
    if n == 0 {
        return Err(BloomError::invalid_item_count(n));
    }

    // Written as a positive test so NaN is rejected too
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(BloomError::fp_rate_out_of_bounds(fp_rate));
    }

    let m = (-(n as f64) * fp_rate.ln() / LN2_SQUARED).ceil();

    if !m.is_finite() || m > (usize::MAX / 2) as f64 {
        return Err(BloomError::invalid_parameters(format!(
            "calculated filter size {:.0} bits exceeds system limits; \
             increase the false positive rate or reduce the item count",
            m
        )));
    }

    // n >= 1 and p < 1 keep m strictly positive; the max only guards rounding
    Ok((m as usize).max(1))
}

/// Calculate optimal number of hash rounds: `k = round((m/n) × ln 2)`.
///
/// Clamped to at least [`MIN_HASH_ROUNDS`]; rounding can give 0 for very small
/// `m/n`.
///
/// # Errors
///
/// - [`BloomError::InvalidFilterSize`] if `m == 0`
/// - [`BloomError::InvalidItemCount`] if `n == 0`
///
/// # Examples
///
/// ```
/// use bloomseed::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(9586, 1000).unwrap(), 7);
/// assert_eq!(optimal_hash_count(1, 1000).unwrap(), 1);
/// ```
pub fn optimal_hash_count(m: usize, n: usize) -> Result<usize> {
    if m == 0 {
        return Err(BloomError::invalid_filter_size(m));
    }

    if n == 0 {
        return Err(BloomError::invalid_item_count(n));
    }

    let k = ((m as f64 / n as f64) * LN_2).round() as usize;

    Ok(k.max(MIN_HASH_ROUNDS))
}

/// Calculate expected false positive rate: `p = (1 - e^(-kn/m))^k`.
///
/// Assumes `n` distinct elements have been added and the query element was
/// not one of them.
///
/// # Errors
///
/// - [`BloomError::InvalidFilterSize`] if `m == 0`
/// - [`BloomError::InvalidHashCount`] if `k == 0`
///
/// # Examples
///
/// ```
/// use bloomseed::core::params::expected_fp_rate;
///
/// let fp = expected_fp_rate(9586, 1000, 7).unwrap();
/// assert!((fp - 0.01).abs() < 0.001);
/// ```
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> Result<f64> {
    if m == 0 {
        return Err(BloomError::invalid_filter_size(m));
    }

    if k < MIN_HASH_ROUNDS {
        return Err(BloomError::invalid_hash_count(k, MIN_HASH_ROUNDS));
    }

    if n == 0 {
        return Ok(0.0);
    }

    let k_f64 = k as f64;
    let prob_bit_one = 1.0 - (-(k_f64 * n as f64) / m as f64).exp();

    Ok(prob_bit_one.powf(k_f64).clamp(0.0, 1.0))
}

/// Bits needed per element for a target rate: `-ln(p) / (ln 2)²`.
///
/// # Errors
///
/// Returns [`BloomError::FalsePositiveRateOutOfBounds`] if `fp_rate` is not
/// in (0, 1).
///
/// # Examples
///
/// ```
/// use bloomseed::core::params::bits_per_element;
///
/// let bpe = bits_per_element(0.01).unwrap();
/// assert!((bpe - 9.6).abs() < 0.1);
/// ```
pub fn bits_per_element(fp_rate: f64) -> Result<f64> {
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(BloomError::fp_rate_out_of_bounds(fp_rate));
    }

    Ok(-fp_rate.ln() / LN2_SQUARED)
}
