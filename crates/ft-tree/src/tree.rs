use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use ft_iterator::{equal, lexicographical_compare, partial_lexicographical_compare, Reverse};

use crate::arena::Arena;
use crate::cursor::{IntoIter, Iter, IterMut, TreeCursor, TreePos};
use crate::error::InvariantViolation;
use crate::key::{natural_order, KeyProjection};
use crate::red_black::{self, assert_rb_tree};
use crate::types::{RbNode, Side};
use crate::util::{next, prev, print};

/// Outcome of a descent: the node holding the key, or the empty child slot
/// where it belongs.
pub(crate) type Probe = Result<u32, (Option<u32>, Side)>;

/// Red-black tree of unique keys.
///
/// `P` projects the ordering key out of each stored `T`, `C` orders two
/// keys. The tree caches its minimum and maximum so `begin` and stepping
/// back from `end` are O(1).
pub struct RbTree<T, P, C> {
    arena: Arena<RbNode<T>>,
    root: Option<u32>,
    min: Option<u32>,
    max: Option<u32>,
    comparator: C,
    _projection: PhantomData<fn() -> P>,
}

impl<T, P> RbTree<T, P, fn(&P::Key, &P::Key) -> Ordering>
where
    P: KeyProjection<T>,
    P::Key: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(natural_order::<P::Key>)
    }
}

impl<T, P> Default for RbTree<T, P, fn(&P::Key, &P::Key) -> Ordering>
where
    P: KeyProjection<T>,
    P::Key: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, C> RbTree<T, P, C>
where
    P: KeyProjection<T>,
    C: Fn(&P::Key, &P::Key) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            min: None,
            max: None,
            comparator,
            _projection: PhantomData,
        }
    }

    #[inline]
    fn compare(&self, a: &P::Key, b: &P::Key) -> Ordering {
        (self.comparator)(a, b)
    }

    #[inline]
    fn key_at(&self, idx: u32) -> &P::Key {
        P::key(&self.arena[idx].value)
    }

    pub(crate) fn locate(&self, key: &P::Key) -> Probe {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(i) = curr {
            match self.compare(key, self.key_at(i)) {
                Ordering::Less => {
                    side = Side::Left;
                    curr = self.arena[i].l;
                }
                Ordering::Greater => {
                    side = Side::Right;
                    curr = self.arena[i].r;
                }
                Ordering::Equal => return Ok(i),
            }
            parent = Some(i);
        }
        Err((parent, side))
    }

    /// Links `value` into the empty slot found by a probe.
    pub(crate) fn attach(&mut self, parent: Option<u32>, side: Side, value: T) -> u32 {
        let idx = self.arena.insert(RbNode::new(value));
        red_black::link(&mut self.arena, &mut self.root, parent, side, idx);
        if parent.is_none() || (parent == self.min && side == Side::Left) {
            self.min = Some(idx);
        }
        if parent.is_none() || (parent == self.max && side == Side::Right) {
            self.max = Some(idx);
        }
        idx
    }

    fn settle(&mut self, probe: Probe, value: T) -> (TreePos, bool) {
        match probe {
            Ok(i) => (TreePos::Node(i), false),
            Err((parent, side)) => (TreePos::Node(self.attach(parent, side, value)), true),
        }
    }

    /// Inserts `value` unless an equal key is present.
    ///
    /// Returns the position of the element with that key and whether the
    /// insertion happened. An existing element is left untouched.
    pub fn insert(&mut self, value: T) -> (TreePos, bool) {
        let probe = self.locate(P::key(&value));
        self.settle(probe, value)
    }

    /// Inserts `value`, trying the slot next to `hint` first.
    ///
    /// When `value` belongs immediately before `hint` (or after the maximum
    /// for an `End` hint) no descent from the root is needed. Any other hint
    /// falls back to a plain [`insert`](Self::insert).
    pub fn insert_with_hint(&mut self, hint: TreePos, value: T) -> (TreePos, bool) {
        let probe = match self.probe_hint(hint, P::key(&value)) {
            Some(probe) => probe,
            None => self.locate(P::key(&value)),
        };
        self.settle(probe, value)
    }

    fn probe_hint(&self, hint: TreePos, key: &P::Key) -> Option<Probe> {
        match hint {
            TreePos::End => {
                let max = self.max?;
                (self.compare(self.key_at(max), key) == Ordering::Less)
                    .then_some(Err((Some(max), Side::Right)))
            }
            TreePos::Node(h) if self.arena.contains(h) => match self.compare(key, self.key_at(h)) {
                Ordering::Equal => Some(Ok(h)),
                Ordering::Less => {
                    if self.min == Some(h) {
                        return Some(Err((Some(h), Side::Left)));
                    }
                    let before = prev(&self.arena, h)?;
                    if self.compare(self.key_at(before), key) != Ordering::Less {
                        return None;
                    }
                    // Exactly one of the two neighbours has a free inner slot.
                    Some(if self.arena[before].r.is_none() {
                        Err((Some(before), Side::Right))
                    } else {
                        Err((Some(h), Side::Left))
                    })
                }
                Ordering::Greater => {
                    if self.max == Some(h) {
                        return Some(Err((Some(h), Side::Right)));
                    }
                    let after = next(&self.arena, h)?;
                    if self.compare(key, self.key_at(after)) != Ordering::Less {
                        return None;
                    }
                    Some(if self.arena[h].r.is_none() {
                        Err((Some(h), Side::Right))
                    } else {
                        Err((Some(after), Side::Left))
                    })
                }
            },
            TreePos::Node(_) => None,
        }
    }

    pub fn find(&self, key: &P::Key) -> TreePos {
        self.locate(key).ok().into()
    }

    pub fn contains(&self, key: &P::Key) -> bool {
        self.locate(key).is_ok()
    }

    /// 1 if the key is present, 0 otherwise.
    pub fn count(&self, key: &P::Key) -> usize {
        usize::from(self.contains(key))
    }

    fn remove_index(&mut self, idx: u32) -> T {
        if self.min == Some(idx) {
            self.min = next(&self.arena, idx);
        }
        if self.max == Some(idx) {
            self.max = prev(&self.arena, idx);
        }
        red_black::remove(&mut self.arena, &mut self.root, idx)
    }

    /// Removes the element with `key`. Returns `false` if there was none.
    pub fn erase(&mut self, key: &P::Key) -> bool {
        self.take(key).is_some()
    }

    /// Removes and returns the element with `key`.
    pub fn take(&mut self, key: &P::Key) -> Option<T> {
        let idx = self.locate(key).ok()?;
        Some(self.remove_index(idx))
    }

    /// Removes the element at `pos`. `End` and erased positions yield `None`.
    pub fn remove_at(&mut self, pos: TreePos) -> Option<T> {
        let idx = pos.index().filter(|&i| self.arena.contains(i))?;
        Some(self.remove_index(idx))
    }

    /// Removes `[first, last)` and returns how many elements went.
    ///
    /// `last` must not precede `first`; if it does, everything from `first`
    /// to the end is removed.
    pub fn erase_range(&mut self, first: TreePos, last: TreePos) -> usize {
        let mut removed = 0;
        let mut curr = first;
        while let TreePos::Node(i) = curr {
            if curr == last || !self.arena.contains(i) {
                break;
            }
            let following = next(&self.arena, i).into();
            self.remove_index(i);
            removed += 1;
            curr = following;
        }
        removed
    }

    /// First element whose key is not less than `key`.
    pub fn lower_bound(&self, key: &P::Key) -> TreePos {
        let mut curr = self.root;
        let mut res = None;
        while let Some(i) = curr {
            if self.compare(self.key_at(i), key) == Ordering::Less {
                curr = self.arena[i].r;
            } else {
                res = Some(i);
                curr = self.arena[i].l;
            }
        }
        res.into()
    }

    /// First element whose key is greater than `key`.
    pub fn upper_bound(&self, key: &P::Key) -> TreePos {
        let mut curr = self.root;
        let mut res = None;
        while let Some(i) = curr {
            if self.compare(key, self.key_at(i)) == Ordering::Less {
                res = Some(i);
                curr = self.arena[i].l;
            } else {
                curr = self.arena[i].r;
            }
        }
        res.into()
    }

    pub fn equal_range(&self, key: &P::Key) -> (TreePos, TreePos) {
        (self.lower_bound(key), self.upper_bound(key))
    }
}

impl<T, P, C> RbTree<T, P, C> {
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn max_size(&self) -> usize {
        Arena::<RbNode<T>>::max_len()
    }

    pub fn key_comp(&self) -> &C {
        &self.comparator
    }

    pub fn get(&self, pos: TreePos) -> Option<&T> {
        let idx = pos.index()?;
        self.arena.get(idx).map(|n| &n.value)
    }

    pub(crate) fn get_mut(&mut self, pos: TreePos) -> Option<&mut T> {
        let idx = pos.index()?;
        self.arena.get_mut(idx).map(|n| &mut n.value)
    }

    pub(crate) fn value_mut(&mut self, idx: u32) -> &mut T {
        &mut self.arena[idx].value
    }

    pub fn first(&self) -> Option<&T> {
        self.min.map(|i| &self.arena[i].value)
    }

    pub fn last(&self) -> Option<&T> {
        self.max.map(|i| &self.arena[i].value)
    }

    /// Position after `pos`, or `None` when `pos` is `End` or erased.
    pub fn next_pos(&self, pos: TreePos) -> Option<TreePos> {
        let idx = pos.index().filter(|&i| self.arena.contains(i))?;
        Some(next(&self.arena, idx).into())
    }

    /// Position before `pos`. `End` steps to the greatest element.
    pub fn prev_pos(&self, pos: TreePos) -> Option<TreePos> {
        match pos {
            TreePos::End => self.max.map(TreePos::Node),
            TreePos::Node(i) if self.arena.contains(i) => prev(&self.arena, i).map(TreePos::Node),
            TreePos::Node(_) => None,
        }
    }

    pub fn cursor(&self, pos: TreePos) -> TreeCursor<'_, T> {
        TreeCursor::new(&self.arena, self.max, pos)
    }

    pub fn begin(&self) -> TreeCursor<'_, T> {
        self.cursor(self.min.into())
    }

    pub fn end(&self) -> TreeCursor<'_, T> {
        self.cursor(TreePos::End)
    }

    pub fn rbegin(&self) -> Reverse<TreeCursor<'_, T>> {
        Reverse::new(self.end())
    }

    pub fn rend(&self) -> Reverse<TreeCursor<'_, T>> {
        Reverse::new(self.begin())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.min, self.max, self.len())
    }

    fn order(&self) -> Vec<u32> {
        let mut order = Vec::with_capacity(self.arena.len());
        let mut curr = self.min;
        while let Some(i) = curr {
            order.push(i);
            curr = next(&self.arena, i);
        }
        order
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.arena, self.min, self.max)
    }

    pub fn clear(&mut self) {
        if !self.arena.is_empty() {
            log::debug!("clearing red-black tree of {} nodes", self.arena.len());
        }
        self.arena.clear();
        self.root = None;
        self.min = None;
        self.max = None;
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        fn depth<T>(arena: &Arena<RbNode<T>>, node: Option<u32>) -> usize {
            node.map_or(0, |i| 1 + depth(arena, arena[i].l).max(depth(arena, arena[i].r)))
        }
        depth(&self.arena, self.root)
    }
}

impl<T, P, C> RbTree<T, P, C>
where
    P: KeyProjection<T>,
    C: Fn(&P::Key, &P::Key) -> Ordering,
{
    /// Runs the full invariant check and returns the black height.
    pub fn assert_valid(&self) -> Result<usize, InvariantViolation> {
        let result = assert_rb_tree(&self.arena, self.root, |a, b| self.compare(P::key(a), P::key(b)));
        if let Err(err) = &result {
            log::debug!("red-black invariant violated: {err}");
        }
        result
    }
}

impl<T: fmt::Debug, P, C> RbTree<T, P, C> {
    /// Multi-line dump of the tree shape with node colours.
    pub fn print(&self) -> String {
        print(&self.arena, self.root, "")
    }
}

impl<T: Clone, P, C: Clone> Clone for RbTree<T, P, C> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            root: self.root,
            min: self.min,
            max: self.max,
            comparator: self.comparator.clone(),
            _projection: PhantomData,
        }
    }
}

impl<T: fmt::Debug, P, C> fmt::Debug for RbTree<T, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, P, C> PartialEq for RbTree<T, P, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && equal(self.iter(), other.iter())
    }
}

impl<T: Eq, P, C> Eq for RbTree<T, P, C> {}

impl<T: PartialOrd, P, C> PartialOrd for RbTree<T, P, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        partial_lexicographical_compare(self.iter(), other.iter())
    }
}

impl<T: Ord, P, C> Ord for RbTree<T, P, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        lexicographical_compare(self.iter(), other.iter())
    }
}

impl<T, P, C> IntoIterator for RbTree<T, P, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let order = self.order();
        let values = order
            .into_iter()
            .map(|i| self.arena.remove(i).value)
            .collect();
        IntoIter::new(values)
    }
}

impl<'a, T, P, C> IntoIterator for &'a RbTree<T, P, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
