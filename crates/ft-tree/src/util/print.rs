use std::fmt::Debug;

use crate::arena::Arena;
use crate::types::{Color, RbNode};

/// Debug rendering of the subtree at `node`, one node per line.
///
/// Red nodes print as `R(value)`, black nodes as `B(value)`, missing
/// children as `∅`.
pub fn print<T: Debug>(arena: &Arena<RbNode<T>>, node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            let tag = match n.color {
                Color::Red => 'R',
                Color::Black => 'B',
            };
            let child_tab = format!("{tab}  ");
            let left = print(arena, n.l, &child_tab);
            let right = print(arena, n.r, &child_tab);
            format!("{tag}({:?})\n{tab}L={left}\n{tab}R={right}", n.value)
        }
    }
}
