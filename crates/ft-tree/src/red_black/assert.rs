use std::cmp::Ordering;

use crate::arena::Arena;
use crate::error::InvariantViolation;
use crate::types::{Color, RbNode};
use crate::util::{first, next};

/// Checks every red-black and binary-search-tree invariant of the tree at
/// `root` and returns its black height.
///
/// `compare` orders two node values. The walk never panics on a corrupted
/// tree; the first defect found is returned instead.
pub fn assert_rb_tree<T, F>(
    arena: &Arena<RbNode<T>>,
    root: Option<u32>,
    compare: F,
) -> Result<usize, InvariantViolation>
where
    F: Fn(&T, &T) -> Ordering,
{
    let Some(r) = root else {
        return if arena.is_empty() {
            Ok(0)
        } else {
            Err(InvariantViolation::Length {
                expected: arena.len(),
                found: 0,
            })
        };
    };
    let node = arena.get(r).ok_or(InvariantViolation::DanglingLink { node: r, target: r })?;
    if node.color == Color::Red {
        return Err(InvariantViolation::RedRoot(r));
    }

    let mut count = 0;
    let height = check_subtree(arena, r, None, &mut count)?;
    if count != arena.len() {
        return Err(InvariantViolation::Length {
            expected: arena.len(),
            found: count,
        });
    }

    // Structure is sound past this point, so the traversal helpers are safe
    // to use.
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        let following = next(arena, i);
        if let Some(j) = following {
            if compare(&arena[i].value, &arena[j].value) != Ordering::Less {
                return Err(InvariantViolation::Order(j));
            }
        }
        curr = following;
    }
    Ok(height)
}

fn check_subtree<T>(
    arena: &Arena<RbNode<T>>,
    idx: u32,
    parent: Option<u32>,
    count: &mut usize,
) -> Result<usize, InvariantViolation> {
    let node = arena.get(idx).ok_or(InvariantViolation::DanglingLink {
        node: parent.unwrap_or(idx),
        target: idx,
    })?;
    *count += 1;
    if *count > arena.len() {
        // More reachable nodes than stored ones means a cycle.
        return Err(InvariantViolation::Length {
            expected: arena.len(),
            found: *count,
        });
    }
    if node.p != parent {
        return Err(InvariantViolation::ParentMismatch {
            node: idx,
            expected: parent,
            found: node.p,
        });
    }
    if node.l == Some(idx) || node.r == Some(idx) {
        return Err(InvariantViolation::SelfLink(idx));
    }
    if node.l.is_some() && node.l == node.r {
        return Err(InvariantViolation::SharedChild(idx));
    }

    let mut heights = [0usize; 2];
    for (slot, child) in [node.l, node.r].into_iter().enumerate() {
        let Some(c) = child else {
            continue;
        };
        let child_node = arena
            .get(c)
            .ok_or(InvariantViolation::DanglingLink { node: idx, target: c })?;
        if node.is_red() && child_node.is_red() {
            return Err(InvariantViolation::RedRed(idx));
        }
        heights[slot] = check_subtree(arena, c, Some(idx), count)?;
    }
    let [left, right] = heights;
    if left != right {
        return Err(InvariantViolation::BlackHeight { node: idx, left, right });
    }
    Ok(left + usize::from(node.color == Color::Black))
}
