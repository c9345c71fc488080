use std::cmp::Ordering;
use std::fmt;

use ft_iterator::{equal, lexicographical_compare, partial_lexicographical_compare, Reverse};

use crate::cursor::{IntoIter, Iter, TreeCursor, TreePos};
use crate::error::InvariantViolation;
use crate::key::{natural_order, Identity};
use crate::tree::RbTree;

/// Ordered set of unique keys.
pub struct Set<K, C = fn(&K, &K) -> Ordering> {
    tree: RbTree<K, Identity, C>,
}

impl<K: Ord> Set<K> {
    pub fn new() -> Self {
        Self::with_comparator(natural_order::<K>)
    }
}

impl<K: Ord> Default for Set<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Set<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RbTree::with_comparator(comparator),
        }
    }

    /// Inserts `key` unless an equal one is present.
    pub fn insert(&mut self, key: K) -> (TreePos, bool) {
        self.tree.insert(key)
    }

    pub fn insert_with_hint(&mut self, hint: TreePos, key: K) -> (TreePos, bool) {
        self.tree.insert_with_hint(hint, key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    pub fn count(&self, key: &K) -> usize {
        self.tree.count(key)
    }

    pub fn find(&self, key: &K) -> TreePos {
        self.tree.find(key)
    }

    pub fn erase(&mut self, key: &K) -> bool {
        self.tree.erase(key)
    }

    /// Removes and returns the stored key equal to `key`.
    pub fn take(&mut self, key: &K) -> Option<K> {
        self.tree.take(key)
    }

    pub fn erase_at(&mut self, pos: TreePos) -> Option<K> {
        self.tree.remove_at(pos)
    }

    pub fn erase_range(&mut self, first: TreePos, last: TreePos) -> usize {
        self.tree.erase_range(first, last)
    }

    pub fn lower_bound(&self, key: &K) -> TreePos {
        self.tree.lower_bound(key)
    }

    pub fn upper_bound(&self, key: &K) -> TreePos {
        self.tree.upper_bound(key)
    }

    pub fn equal_range(&self, key: &K) -> (TreePos, TreePos) {
        self.tree.equal_range(key)
    }

    pub fn assert_valid(&self) -> Result<usize, InvariantViolation> {
        self.tree.assert_valid()
    }
}

impl<K, C> Set<K, C> {
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    pub fn key_comp(&self) -> &C {
        self.tree.key_comp()
    }

    /// Same as [`key_comp`](Self::key_comp): a set's values are its keys.
    pub fn value_comp(&self) -> &C {
        self.tree.key_comp()
    }

    pub fn get(&self, pos: TreePos) -> Option<&K> {
        self.tree.get(pos)
    }

    pub fn first(&self) -> Option<&K> {
        self.tree.first()
    }

    pub fn last(&self) -> Option<&K> {
        self.tree.last()
    }

    pub fn next_pos(&self, pos: TreePos) -> Option<TreePos> {
        self.tree.next_pos(pos)
    }

    pub fn prev_pos(&self, pos: TreePos) -> Option<TreePos> {
        self.tree.prev_pos(pos)
    }

    pub fn cursor(&self, pos: TreePos) -> TreeCursor<'_, K> {
        self.tree.cursor(pos)
    }

    pub fn begin(&self) -> TreeCursor<'_, K> {
        self.tree.begin()
    }

    pub fn end(&self) -> TreeCursor<'_, K> {
        self.tree.end()
    }

    pub fn rbegin(&self) -> Reverse<TreeCursor<'_, K>> {
        self.tree.rbegin()
    }

    pub fn rend(&self) -> Reverse<TreeCursor<'_, K>> {
        self.tree.rend()
    }

    pub fn iter(&self) -> Iter<'_, K> {
        self.tree.iter()
    }
}

impl<K, C> Extend<K> for Set<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Set<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Set::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for Set<K> {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Clone, C: Clone> Clone for Set<K, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<K: fmt::Debug, C> fmt::Debug for Set<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, C> PartialEq for Set<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && equal(self.iter(), other.iter())
    }
}

impl<K: Eq, C> Eq for Set<K, C> {}

impl<K: PartialOrd, C> PartialOrd for Set<K, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        partial_lexicographical_compare(self.iter(), other.iter())
    }
}

impl<K: Ord, C> Ord for Set<K, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        lexicographical_compare(self.iter(), other.iter())
    }
}

impl<K, C> IntoIterator for Set<K, C> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> IntoIter<K> {
        self.tree.into_iter()
    }
}

impl<'a, K, C> IntoIterator for &'a Set<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ft_iterator::Bidirectional;

    #[test]
    fn test_insert_unique() {
        let mut set = Set::new();
        assert!(set.insert(3).1);
        assert!(set.insert(1).1);
        assert!(!set.insert(3).1);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(set.count(&3), 1);
        assert!(set.contains(&1));
        assert!(!set.contains(&2));
    }

    #[test]
    fn test_bounds_and_range_erase() {
        let mut set: Set<i32> = (0..10).map(|x| x * 10).collect();
        let (lo, hi) = set.equal_range(&40);
        assert_eq!(set.get(lo), Some(&40));
        assert_eq!(set.get(hi), Some(&50));
        let first = set.lower_bound(&25);
        let last = set.upper_bound(&65);
        assert_eq!(set.erase_range(first, last), 4);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![0, 10, 20, 70, 80, 90]);
        assert!(set.assert_valid().is_ok());
    }

    #[test]
    fn test_take_returns_stored_key() {
        let mut set = Set::from(["b".to_string(), "a".to_string()]);
        assert_eq!(set.take(&"a".to_string()), Some("a".to_string()));
        assert_eq!(set.take(&"a".to_string()), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_reverse_cursor() {
        let set = Set::from([2, 1, 3]);
        let mut r = set.rbegin();
        assert_eq!(r.get(), Some(&3));
        assert!(r.step_forward());
        assert_eq!(r.get(), Some(&2));
        assert_eq!(r.base().get(), Some(&3));
    }

    #[test]
    fn test_debug_equality_and_order() {
        let a = Set::from([3, 1, 2]);
        let b = Set::from([1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), "{1, 2, 3}");
        let prefix = Set::from([1, 2]);
        assert!(prefix < a);
        assert!(Set::from([1, 4]) > a);
        assert_eq!(a.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_value_comp_matches_key_comp() {
        let set = Set::<i32>::new();
        assert_eq!((set.value_comp())(&1, &2), (set.key_comp())(&1, &2));
    }
}
