//! Cursor machinery shared by the ft containers.
//!
//! A cursor is a position inside a borrowed sequence. [`Bidirectional`]
//! cursors step one element at a time in either direction,
//! [`RandomAccess`] cursors jump by arbitrary offsets, and [`Reverse`] flips
//! the direction of either kind. The comparison helpers in this crate back
//! the relational operators of every container.

mod algorithm;
mod cursor;
mod reverse;
mod slice;

pub use algorithm::{equal, lexicographical_compare, partial_lexicographical_compare};
pub use cursor::{cursor_out_of_range, Bidirectional, RandomAccess};
pub use reverse::Reverse;
pub use slice::SliceCursor;
