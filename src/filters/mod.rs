//! Filter implementations.
//!
//! [`BloomFilter`] is the classic structure: one bit array, `k` seeded hash
//! rounds, no removal and no resizing.

pub mod standard;

pub use standard::BloomFilter;
