//! Hash functions and bit position generation.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── hasher.rs      - BloomHasher trait and Murmur3Hasher (default)
//! ├── index.rs       - IndexGenerator: (element, round) -> position
//! ├── xxhash.rs      - XXH3 hasher (optional, feature = "xxhash")
//! └── mod.rs         - This file
//! ```
//!
//! # Choosing a Hash Function
//!
//! | Hash Function      | Feature    | Use Case                              |
//! |--------------------|------------|---------------------------------------|
//! | [`Murmur3Hasher`]  | (default)  | General purpose, 32-bit output        |
//! | `XxHasher`         | `xxhash`   | Long elements, 64-bit output          |
//!
//! Both are deterministic across processes, so two filters built from the
//! same inputs hold the same bits.

pub mod hasher;
pub mod index;

#[cfg(feature = "xxhash")]
pub mod xxhash;

pub use hasher::{BloomHasher, Murmur3Hasher};
pub use index::IndexGenerator;

#[cfg(feature = "xxhash")]
pub use xxhash::XxHasher;
