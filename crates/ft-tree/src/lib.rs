//! Arena-based red-black tree and the ordered containers built on it.
//!
//! Nodes live in an [`Arena`] and link to each other by `u32` index, so the
//! tree has no ownership cycles and a [`TreePos`] stays valid until its own
//! node is erased. [`Map`] and [`Set`] are two instantiations of [`RbTree`]
//! that differ only in how the ordering key is projected out of the stored
//! value.

pub mod arena;
pub mod cursor;
mod error;
pub mod key;
pub mod map;
pub mod red_black;
pub mod set;
mod tree;
pub mod types;
pub mod util;

pub use arena::Arena;
pub use cursor::{TreeCursor, TreePos};
pub use error::{InvariantViolation, MapError};
pub use key::{natural_order, Identity, KeyFirst, KeyProjection};
pub use map::{Map, ValueCompare};
pub use set::Set;
pub use tree::RbTree;
pub use types::{Color, Node, RbNode, Side};
