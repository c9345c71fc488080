//! Generic containers with explicit capacity and cursor control.
//!
//! - [`Vector`]: contiguous growable array.
//! - [`Stack`]: LIFO adapter over any [`BackSequence`].
//! - [`Map`] and [`Set`]: ordered associative containers over [`RbTree`].
//!
//! Cursor traits and the reverse adapter come from `ft-iterator`.
//!
//! ```
//! use ft_containers::{Map, Stack, Vector};
//!
//! let mut v: Vector<i32> = (1..=3).collect();
//! v.push_back(4);
//! assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
//!
//! let mut m = Map::new();
//! m.insert("b", 2);
//! m.insert("a", 1);
//! assert_eq!(m.keys().copied().collect::<Vec<_>>(), ["a", "b"]);
//!
//! let mut s = Stack::from_sequence(v);
//! assert_eq!(s.pop(), Some(4));
//! ```

mod stack;

pub use ft_iterator::{
    equal, lexicographical_compare, Bidirectional, RandomAccess, Reverse, SliceCursor,
};
pub use ft_tree::{InvariantViolation, Map, MapError, RbTree, Set, TreeCursor, TreePos};
pub use ft_vector::{Vector, VectorError};
pub use stack::{BackSequence, Stack};

pub mod iterator {
    pub use ft_iterator::*;
}

pub mod tree {
    pub use ft_tree::*;
}

pub mod vector {
    pub use ft_vector::*;
}
