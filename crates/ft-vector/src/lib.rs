//! Growable contiguous array.
//!
//! [`Vector`] owns a single buffer and keeps three positions into it: the
//! start, the logical end (`len`) and the allocation end (`capacity`).
//! Growth doubles the capacity, or jumps straight to the requested size when
//! doubling is not enough. Every reallocation builds the new buffer first,
//! then swaps it in, then frees the old one.

mod buffer;
pub mod constants;
mod error;
pub mod iter;
mod vector;

pub use error::VectorError;
pub use iter::IntoIter;
pub use vector::Vector;
