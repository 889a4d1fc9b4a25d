//! Core building blocks shared by the filter.
//!
//! ```text
//! core/
//! ├── bitvec.rs    - Fixed-size bit vector
//! ├── params.rs    - Parameter calculations
//! └── mod.rs       - This file
//! ```
//!
//! Both modules are leaves: they depend only on [`crate::error`].

pub mod bitvec;
pub mod params;

pub use bitvec::BitVec;
pub use params::{derive, FilterParams};
