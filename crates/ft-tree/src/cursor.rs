//! Positions and iterators over an [`RbTree`](crate::RbTree).

use std::fmt;
use std::iter::FusedIterator;

use ft_iterator::Bidirectional;

use crate::arena::Arena;
use crate::types::{RbNode, Side};
use crate::util::{next, prev};

/// A stable position inside a tree.
///
/// `Node` names an arena slot and survives rebalancing and the removal of
/// other elements. `End` is one past the greatest element. A position whose
/// node was erased reads as `None`, or as a later element that reused the
/// slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TreePos {
    Node(u32),
    End,
}

impl TreePos {
    #[inline]
    pub fn is_end(self) -> bool {
        self == TreePos::End
    }

    #[inline]
    pub(crate) fn index(self) -> Option<u32> {
        match self {
            TreePos::Node(i) => Some(i),
            TreePos::End => None,
        }
    }
}

impl From<Option<u32>> for TreePos {
    fn from(idx: Option<u32>) -> Self {
        idx.map_or(TreePos::End, TreePos::Node)
    }
}

/// Bidirectional cursor borrowing a tree.
///
/// Stepping backward from `End` lands on the greatest element. Steps past
/// either end are refused.
pub struct TreeCursor<'a, T> {
    arena: &'a Arena<RbNode<T>>,
    max: Option<u32>,
    pos: TreePos,
}

impl<'a, T> TreeCursor<'a, T> {
    pub(crate) fn new(arena: &'a Arena<RbNode<T>>, max: Option<u32>, pos: TreePos) -> Self {
        Self { arena, max, pos }
    }

    pub fn pos(&self) -> TreePos {
        self.pos
    }

    /// The element under the cursor, borrowed for the tree's lifetime.
    pub fn value(&self) -> Option<&'a T> {
        let idx = self.pos.index()?;
        self.arena.get(idx).map(|n| &n.value)
    }
}

impl<T> Clone for TreeCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TreeCursor<'_, T> {}

impl<T> fmt::Debug for TreeCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeCursor").field("pos", &self.pos).finish()
    }
}

/// Two cursors are equal when they name the same node of the same tree.
impl<T> PartialEq for TreeCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.pos == other.pos
    }
}

impl<T> Eq for TreeCursor<'_, T> {}

impl<'a, T> Bidirectional for TreeCursor<'a, T> {
    type Item = &'a T;

    fn get(&self) -> Option<&'a T> {
        self.value()
    }

    fn step_forward(&mut self) -> bool {
        let TreePos::Node(i) = self.pos else {
            return false;
        };
        if !self.arena.contains(i) {
            return false;
        }
        self.pos = next(self.arena, i).into();
        true
    }

    fn step_backward(&mut self) -> bool {
        let target = match self.pos {
            TreePos::End => self.max,
            TreePos::Node(i) if self.arena.contains(i) => prev(self.arena, i),
            TreePos::Node(_) => None,
        };
        match target {
            Some(i) => {
                self.pos = TreePos::Node(i);
                true
            }
            None => false,
        }
    }
}

/// In-order borrowing iterator.
pub struct Iter<'a, T> {
    arena: &'a Arena<RbNode<T>>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        arena: &'a Arena<RbNode<T>>,
        front: Option<u32>,
        back: Option<u32>,
        remaining: usize,
    ) -> Self {
        Self {
            arena,
            front,
            back,
            remaining,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front?;
        self.remaining -= 1;
        self.front = next(self.arena, i);
        Some(&self.arena[i].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.back?;
        self.remaining -= 1;
        self.back = prev(self.arena, i);
        Some(&self.arena[i].value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Links of one slot, split from its value so the walk can keep reading
/// them while earlier values are lent out.
struct Detached<'a, T> {
    p: Option<u32>,
    l: Option<u32>,
    r: Option<u32>,
    value: Option<&'a mut T>,
}

impl<T> Detached<'_, T> {
    fn child(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.l,
            Side::Right => self.r,
        }
    }
}

/// Mutable in-order iterator.
///
/// Construction detaches every arena slot in one pass, so it costs O(slots)
/// time and memory. Each step afterwards is amortised O(1).
pub(crate) struct IterMut<'a, T> {
    slots: Vec<Detached<'a, T>>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(
        arena: &'a mut Arena<RbNode<T>>,
        front: Option<u32>,
        back: Option<u32>,
    ) -> Self {
        let remaining = arena.len();
        let slots = arena
            .slots_mut()
            .map(|slot| match slot {
                Some(RbNode { p, l, r, value, .. }) => Detached {
                    p: *p,
                    l: *l,
                    r: *r,
                    value: Some(value),
                },
                None => Detached {
                    p: None,
                    l: None,
                    r: None,
                    value: None,
                },
            })
            .collect();
        Self {
            slots,
            front,
            back,
            remaining,
        }
    }

    fn step(&self, mut curr: u32, side: Side) -> Option<u32> {
        if let Some(mut down) = self.slots[curr as usize].child(side) {
            while let Some(c) = self.slots[down as usize].child(side.opposite()) {
                down = c;
            }
            return Some(down);
        }
        loop {
            let p = self.slots[curr as usize].p?;
            if self.slots[p as usize].child(side) != Some(curr) {
                return Some(p);
            }
            curr = p;
        }
    }

    fn take(&mut self, idx: u32) -> Option<&'a mut T> {
        self.slots.get_mut(idx as usize)?.value.take()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front?;
        self.remaining -= 1;
        self.front = self.step(i, Side::Right);
        self.take(i)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.back?;
        self.remaining -= 1;
        self.back = self.step(i, Side::Left);
        self.take(i)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning in-order iterator.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(values: Vec<T>) -> Self {
        Self {
            inner: values.into_iter(),
        }
    }

    /// Elements not yet yielded, in order.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
