#![cfg_attr(not(feature = "std"), no_std)]

// The naive and recursive kernels allocate scratch buffers, so the
// crate needs `alloc` even without `std`.
extern crate alloc;

pub mod common;
pub mod inplace;
pub mod naive;
pub mod recursive;

#[cfg(feature = "std")]
pub mod signal;

pub use common::{DftProcess, Precision};
pub use inplace::InplaceDft;
pub use naive::NaiveDft;
pub use recursive::RecursiveDft;
