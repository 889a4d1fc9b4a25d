//! Builder pattern for Bloom filter construction.
//!
//! Required parameters are enforced at compile time through type states;
//! out-of-range values are reported when `build()` runs.
//!
//! ```
//! use bloomseed::builder::BloomFilterBuilder;
//!
//! let mut filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//!
//! filter.add("hello");
//! assert!(filter.check("hello"));
//! ```

pub mod standard;

pub use standard::BloomFilterBuilder;
