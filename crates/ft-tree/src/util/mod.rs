//! Traversal helpers over arena-backed trees.

mod first;
mod next;
mod print;

pub use first::{first, last};
pub use next::{next, prev};
pub use print::print;
