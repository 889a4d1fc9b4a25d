//! Shared data generators and constants for the benchmarks
#![allow(dead_code)]
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

// DATA GENERATORS

/// Generate random alphanumeric string of specified length
#[inline]
pub fn random_string(len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generate batch of random strings with specified length
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    (0..count).map(|_| random_string(len)).collect()
}

/// Generate random u64 keys, returned as their big-endian bytes
pub fn generate_u64_keys(count: usize) -> Vec<[u8; 8]> {
    let mut rng = thread_rng();
    (0..count).map(|_| rng.gen::<u64>().to_be_bytes()).collect()
}

// CONSTANTS

/// Filter capacities
pub const SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000];

/// Target false positive rates
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001, 0.0001];

/// Element lengths in bytes
pub const ITEM_LENGTHS: &[usize] = &[8, 32, 256];
