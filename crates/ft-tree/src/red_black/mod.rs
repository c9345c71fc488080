//! Red-black rebalancing over an arena of [`RbNode`]s.
//!
//! Every routine takes the arena plus a `&mut Option<u32>` root so rotations
//! at the top of the tree can move the root. Missing children are black.

mod assert;

pub use assert::assert_rb_tree;

use crate::arena::Arena;
use crate::types::{Color, RbNode, Side};
use crate::util::first;

type RbArena<T> = Arena<RbNode<T>>;

#[inline]
fn is_red<T>(arena: &RbArena<T>, node: Option<u32>) -> bool {
    node.is_some_and(|i| arena[i].is_red())
}

#[inline]
fn set_color<T>(arena: &mut RbArena<T>, node: Option<u32>, color: Color) {
    if let Some(i) = node {
        arena[i].color = color;
    }
}

/// Points `parent`'s link to `old` (or the root) at `new` instead.
fn replace_child<T>(
    arena: &mut RbArena<T>,
    root: &mut Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    match parent {
        None => *root = new,
        Some(p) if arena[p].l == Some(old) => arena[p].l = new,
        Some(p) => arena[p].r = new,
    }
}

/// Rotates `x` down to the left; its right child takes its place.
pub fn rotate_left<T>(arena: &mut RbArena<T>, root: &mut Option<u32>, x: u32) {
    let Some(y) = arena[x].r else {
        return;
    };
    let y_left = arena[y].l;
    arena[x].r = y_left;
    if let Some(b) = y_left {
        arena[b].p = Some(x);
    }
    let xp = arena[x].p;
    arena[y].p = xp;
    replace_child(arena, root, xp, x, Some(y));
    arena[y].l = Some(x);
    arena[x].p = Some(y);
}

/// Rotates `x` down to the right; its left child takes its place.
pub fn rotate_right<T>(arena: &mut RbArena<T>, root: &mut Option<u32>, x: u32) {
    let Some(y) = arena[x].l else {
        return;
    };
    let y_right = arena[y].r;
    arena[x].l = y_right;
    if let Some(b) = y_right {
        arena[b].p = Some(x);
    }
    let xp = arena[x].p;
    arena[y].p = xp;
    replace_child(arena, root, xp, x, Some(y));
    arena[y].r = Some(x);
    arena[x].p = Some(y);
}

/// Hangs the freshly allocated `node` under `parent` (or makes it the root)
/// and restores the red-black invariants.
///
/// The caller guarantees the chosen slot is empty and keeps key order.
pub fn link<T>(
    arena: &mut RbArena<T>,
    root: &mut Option<u32>,
    parent: Option<u32>,
    side: Side,
    node: u32,
) {
    {
        let n = &mut arena[node];
        n.p = parent;
        n.l = None;
        n.r = None;
        n.color = Color::Red;
    }
    match (parent, side) {
        (None, _) => *root = Some(node),
        (Some(p), Side::Left) => arena[p].l = Some(node),
        (Some(p), Side::Right) => arena[p].r = Some(node),
    }
    insert_fixup(arena, root, node);
}

fn insert_fixup<T>(arena: &mut RbArena<T>, root: &mut Option<u32>, mut z: u32) {
    while let Some(p) = arena[z].p.filter(|&p| arena[p].is_red()) {
        // A red parent is never the root, so the grandparent exists.
        let Some(g) = arena[p].p else {
            break;
        };
        if arena[g].l == Some(p) {
            let uncle = arena[g].r;
            if is_red(arena, uncle) {
                arena[p].color = Color::Black;
                set_color(arena, uncle, Color::Black);
                arena[g].color = Color::Red;
                z = g;
            } else {
                let mut parent = p;
                if arena[p].r == Some(z) {
                    rotate_left(arena, root, p);
                    parent = z;
                }
                arena[parent].color = Color::Black;
                arena[g].color = Color::Red;
                rotate_right(arena, root, g);
                break;
            }
        } else {
            let uncle = arena[g].l;
            if is_red(arena, uncle) {
                arena[p].color = Color::Black;
                set_color(arena, uncle, Color::Black);
                arena[g].color = Color::Red;
                z = g;
            } else {
                let mut parent = p;
                if arena[p].l == Some(z) {
                    rotate_right(arena, root, p);
                    parent = z;
                }
                arena[parent].color = Color::Black;
                arena[g].color = Color::Red;
                rotate_left(arena, root, g);
                break;
            }
        }
    }
    set_color(arena, *root, Color::Black);
}

/// Replaces the subtree rooted at `u` with the one rooted at `v`.
fn transplant<T>(arena: &mut RbArena<T>, root: &mut Option<u32>, u: u32, v: Option<u32>) {
    let up = arena[u].p;
    replace_child(arena, root, up, u, v);
    if let Some(v) = v {
        arena[v].p = up;
    }
}

/// Unlinks `z`, rebalances, frees its slot and returns its value.
///
/// When `z` has two children its in-order successor is spliced out of its
/// own position and relinked in `z`'s place with `z`'s colour, so every
/// other node keeps its index.
pub fn remove<T>(arena: &mut RbArena<T>, root: &mut Option<u32>, z: u32) -> T {
    let (zl, zr) = (arena[z].l, arena[z].r);
    let mut removed_color = arena[z].color;
    let x;
    let x_parent;
    match (zl, zr) {
        (None, _) => {
            x = zr;
            x_parent = arena[z].p;
            transplant(arena, root, z, zr);
        }
        (Some(_), None) => {
            x = zl;
            x_parent = arena[z].p;
            transplant(arena, root, z, zl);
        }
        (Some(zl), Some(zr)) => {
            let y = first(arena, Some(zr)).unwrap_or(zr);
            removed_color = arena[y].color;
            x = arena[y].r;
            if arena[y].p == Some(z) {
                x_parent = Some(y);
            } else {
                x_parent = arena[y].p;
                transplant(arena, root, y, x);
                arena[y].r = Some(zr);
                arena[zr].p = Some(y);
            }
            transplant(arena, root, z, Some(y));
            arena[y].l = Some(zl);
            arena[zl].p = Some(y);
            arena[y].color = arena[z].color;
        }
    }
    if removed_color == Color::Black {
        delete_fixup(arena, root, x, x_parent);
    }
    arena.remove(z).value
}

/// Repays the black-height debt left at `x` (possibly a missing child of
/// `parent`) after a black node was unlinked.
fn delete_fixup<T>(
    arena: &mut RbArena<T>,
    root: &mut Option<u32>,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) {
    while x != *root && !is_red(arena, x) {
        let Some(p) = parent else {
            break;
        };
        if arena[p].l == x {
            let mut w = arena[p].r;
            if is_red(arena, w) {
                set_color(arena, w, Color::Black);
                arena[p].color = Color::Red;
                rotate_left(arena, root, p);
                w = arena[p].r;
            }
            let Some(mut s) = w else {
                x = Some(p);
                parent = arena[p].p;
                continue;
            };
            if !is_red(arena, arena[s].l) && !is_red(arena, arena[s].r) {
                arena[s].color = Color::Red;
                x = Some(p);
                parent = arena[p].p;
            } else {
                if !is_red(arena, arena[s].r) {
                    let nephew = arena[s].l;
                    set_color(arena, nephew, Color::Black);
                    arena[s].color = Color::Red;
                    rotate_right(arena, root, s);
                    match arena[p].r {
                        Some(n) => s = n,
                        None => break,
                    }
                }
                arena[s].color = arena[p].color;
                arena[p].color = Color::Black;
                let nephew = arena[s].r;
                set_color(arena, nephew, Color::Black);
                rotate_left(arena, root, p);
                x = *root;
                parent = None;
            }
        } else {
            let mut w = arena[p].l;
            if is_red(arena, w) {
                set_color(arena, w, Color::Black);
                arena[p].color = Color::Red;
                rotate_right(arena, root, p);
                w = arena[p].l;
            }
            let Some(mut s) = w else {
                x = Some(p);
                parent = arena[p].p;
                continue;
            };
            if !is_red(arena, arena[s].l) && !is_red(arena, arena[s].r) {
                arena[s].color = Color::Red;
                x = Some(p);
                parent = arena[p].p;
            } else {
                if !is_red(arena, arena[s].l) {
                    let nephew = arena[s].r;
                    set_color(arena, nephew, Color::Black);
                    arena[s].color = Color::Red;
                    rotate_left(arena, root, s);
                    match arena[p].l {
                        Some(n) => s = n,
                        None => break,
                    }
                }
                arena[s].color = arena[p].color;
                arena[p].color = Color::Black;
                let nephew = arena[s].l;
                set_color(arena, nephew, Color::Black);
                rotate_right(arena, root, p);
                x = *root;
                parent = None;
            }
        }
    }
    set_color(arena, x, Color::Black);
    set_color(arena, *root, Color::Black);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(values: &[i32]) -> (RbArena<i32>, Option<u32>) {
        // Builds a right-leaning chain without rebalancing.
        let mut arena = Arena::new();
        let mut root = None;
        let mut prev: Option<u32> = None;
        for &v in values {
            let i = arena.insert(RbNode::new(v));
            arena[i].color = Color::Black;
            match prev {
                None => root = Some(i),
                Some(p) => {
                    arena[p].r = Some(i);
                    arena[i].p = Some(p);
                }
            }
            prev = Some(i);
        }
        (arena, root)
    }

    #[test]
    fn test_rotate_left_moves_root() {
        let (mut arena, mut root) = chain(&[1, 2, 3]);
        let old_root = root.unwrap();
        rotate_left(&mut arena, &mut root, old_root);
        let new_root = root.unwrap();
        assert_eq!(arena[new_root].value, 2);
        assert_eq!(arena[new_root].p, None);
        assert_eq!(arena[new_root].l, Some(old_root));
        assert_eq!(arena[old_root].p, Some(new_root));
        assert_eq!(arena[old_root].r, None);
    }

    #[test]
    fn test_rotate_right_undoes_rotate_left() {
        let (mut arena, mut root) = chain(&[1, 2, 3]);
        let old_root = root.unwrap();
        rotate_left(&mut arena, &mut root, old_root);
        let r = root.unwrap();
        rotate_right(&mut arena, &mut root, r);
        assert_eq!(root, Some(old_root));
        assert_eq!(arena[old_root].r, Some(r));
        assert_eq!(arena[r].p, Some(old_root));
    }

    #[test]
    fn test_link_ascending_recolors_and_rotates() {
        let mut arena = Arena::new();
        let mut root = None;
        let mut last = None;
        for v in 1..=3 {
            let i = arena.insert(RbNode::new(v));
            link(&mut arena, &mut root, last, Side::Right, i);
            last = Some(i);
        }
        let r = root.unwrap();
        assert_eq!(arena[r].value, 2);
        assert_eq!(arena[r].color, Color::Black);
        assert!(arena[arena[r].l.unwrap()].is_red());
        assert!(arena[arena[r].r.unwrap()].is_red());
    }

    #[test]
    fn test_remove_last_node_empties_root() {
        let mut arena = Arena::new();
        let mut root = None;
        let i = arena.insert(RbNode::new(7));
        link(&mut arena, &mut root, None, Side::Left, i);
        assert_eq!(remove(&mut arena, &mut root, i), 7);
        assert_eq!(root, None);
        assert!(arena.is_empty());
    }
}
