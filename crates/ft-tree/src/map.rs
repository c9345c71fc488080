use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;

use ft_iterator::{equal, lexicographical_compare, partial_lexicographical_compare, Reverse};

use crate::cursor::{self, TreeCursor, TreePos};
use crate::error::{InvariantViolation, MapError};
use crate::key::{natural_order, KeyFirst};
use crate::tree::RbTree;

/// Ordered map with unique keys, backed by a red-black tree of `(K, V)`
/// pairs ordered by key alone.
pub struct Map<K, V, C = fn(&K, &K) -> Ordering> {
    tree: RbTree<(K, V), KeyFirst, C>,
}

/// Orders two map entries by key, ignoring the mapped values.
pub struct ValueCompare<'a, C> {
    key_comp: &'a C,
}

impl<C> ValueCompare<'_, C> {
    pub fn compare<K, V>(&self, a: &(K, V), b: &(K, V)) -> Ordering
    where
        C: Fn(&K, &K) -> Ordering,
    {
        (self.key_comp)(&a.0, &b.0)
    }

    pub fn less<K, V>(&self, a: &(K, V), b: &(K, V)) -> bool
    where
        C: Fn(&K, &K) -> Ordering,
    {
        self.compare(a, b) == Ordering::Less
    }
}

impl<K: Ord, V> Map<K, V> {
    pub fn new() -> Self {
        Self::with_comparator(natural_order::<K>)
    }
}

impl<K: Ord, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Map<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RbTree::with_comparator(comparator),
        }
    }

    /// Inserts `key -> value` unless `key` is present.
    ///
    /// Returns the entry's position and whether it was inserted; an existing
    /// entry keeps its old value.
    pub fn insert(&mut self, key: K, value: V) -> (TreePos, bool) {
        self.tree.insert((key, value))
    }

    pub fn insert_with_hint(&mut self, hint: TreePos, key: K, value: V) -> (TreePos, bool) {
        self.tree.insert_with_hint(hint, (key, value))
    }

    /// Mutable access to the value under `key`, inserting `V::default()`
    /// first if the key is absent.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let idx = match self.tree.locate(&key) {
            Ok(i) => i,
            Err((parent, side)) => self.tree.attach(parent, side, (key, V::default())),
        };
        &mut self.tree.value_mut(idx).1
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(self.tree.find(key)).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let pos = self.tree.find(key);
        self.tree.get_mut(pos).map(|(_, v)| v)
    }

    /// Checked access.
    pub fn at(&self, key: &K) -> Result<&V, MapError> {
        self.get(key).ok_or(MapError::KeyNotFound)
    }

    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, MapError> {
        self.get_mut(key).ok_or(MapError::KeyNotFound)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    pub fn count(&self, key: &K) -> usize {
        self.tree.count(key)
    }

    pub fn find(&self, key: &K) -> TreePos {
        self.tree.find(key)
    }

    /// Removes `key`. Returns `false` if it was absent.
    pub fn erase(&mut self, key: &K) -> bool {
        self.tree.erase(key)
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.take(key).map(|(_, v)| v)
    }

    pub fn erase_at(&mut self, pos: TreePos) -> Option<(K, V)> {
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

impl<K, V, C> Map<K, V, C> {
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

    pub fn value_comp(&self) -> ValueCompare<'_, C> {
        ValueCompare {
            key_comp: self.tree.key_comp(),
        }
    }

    /// The entry at `pos` as `(key, value)`.
    pub fn entry_at(&self, pos: TreePos) -> Option<(&K, &V)> {
        self.tree.get(pos).map(|(k, v)| (k, v))
    }

    pub fn value_at_mut(&mut self, pos: TreePos) -> Option<&mut V> {
        self.tree.get_mut(pos).map(|(_, v)| v)
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first().map(|(k, v)| (k, v))
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last().map(|(k, v)| (k, v))
    }

    pub fn next_pos(&self, pos: TreePos) -> Option<TreePos> {
        self.tree.next_pos(pos)
    }

    pub fn prev_pos(&self, pos: TreePos) -> Option<TreePos> {
        self.tree.prev_pos(pos)
    }

    pub fn cursor(&self, pos: TreePos) -> TreeCursor<'_, (K, V)> {
        self.tree.cursor(pos)
    }

    pub fn begin(&self) -> TreeCursor<'_, (K, V)> {
        self.tree.begin()
    }

    pub fn end(&self) -> TreeCursor<'_, (K, V)> {
        self.tree.end()
    }

    pub fn rbegin(&self) -> Reverse<TreeCursor<'_, (K, V)>> {
        self.tree.rbegin()
    }

    pub fn rend(&self) -> Reverse<TreeCursor<'_, (K, V)>> {
        self.tree.rend()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.tree.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.tree.iter_mut(),
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }
}

#[cold]
fn key_not_found() -> ! {
    panic!("{}", MapError::KeyNotFound)
}

impl<K, V, C> Index<&K> for Map<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        match self.get(key) {
            Some(v) => v,
            None => key_not_found(),
        }
    }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for Map<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for Map<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Map<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for Map<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && equal(self.iter(), other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for Map<K, V, C> {}

impl<K: PartialOrd, V: PartialOrd, C> PartialOrd for Map<K, V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        partial_lexicographical_compare(self.iter(), other.iter())
    }
}

impl<K: Ord, V: Ord, C> Ord for Map<K, V, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        lexicographical_compare(self.iter(), other.iter())
    }
}

impl<K, V, C> IntoIterator for Map<K, V, C> {
    type Item = (K, V);
    type IntoIter = cursor::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut Map<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

/// In-order `(key, value)` iterator.
pub struct Iter<'a, K, V> {
    inner: cursor::Iter<'a, (K, V)>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// In-order iterator with mutable values. Keys stay shared.
pub struct IterMut<'a, K, V> {
    inner: cursor::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (&*k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (&*k, v))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<&'a mut V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use ft_iterator::Bidirectional;

    fn sample() -> Map<i32, i32> {
        Map::from([(5, 50), (3, 30), (8, 80), (1, 10), (4, 40)])
    }

    #[test]
    fn test_insert_keeps_existing_value() {
        let mut map = Map::new();
        assert!(map.insert("a", 1).1);
        let (pos, inserted) = map.insert("a", 2);
        assert!(!inserted);
        assert_eq!(map.entry_at(pos), Some((&"a", &1)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_or_insert_default() {
        let mut counts: Map<&str, u32> = Map::new();
        for word in ["b", "a", "b", "c", "b"] {
            *counts.get_or_insert_default(word) += 1;
        }
        assert_eq!(counts.iter().collect::<Vec<_>>(), vec![(&"a", &1), (&"b", &3), (&"c", &1)]);
        assert!(counts.assert_valid().is_ok());
    }

    #[test]
    fn test_checked_and_indexed_access() {
        let mut map = sample();
        assert_eq!(map.at(&3), Ok(&30));
        assert_eq!(map.at(&2), Err(MapError::KeyNotFound));
        *map.at_mut(&3).unwrap() = 33;
        assert_eq!(map[&3], 33);
        assert_eq!(map.at_mut(&2), Err(MapError::KeyNotFound));
        assert_eq!(map.count(&4), 1);
        assert_eq!(map.count(&7), 0);
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn test_index_missing_panics() {
        let map = sample();
        let _ = map[&2];
    }

    #[test]
    fn test_remove_and_erase() {
        let mut map = sample();
        assert_eq!(map.remove(&5), Some(50));
        assert_eq!(map.remove(&5), None);
        assert!(map.erase(&1));
        assert!(!map.erase(&1));
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 4, 8]);
        let pos = map.find(&4);
        assert_eq!(map.erase_at(pos), Some((4, 40)));
        assert_eq!(map.erase_at(pos), None);
        assert_eq!(map.erase_at(TreePos::End), None);
    }

    #[test]
    fn test_iter_mut_and_values() {
        let mut map = sample();
        for (k, v) in map.iter_mut() {
            *v += k;
        }
        for v in map.values_mut() {
            *v *= 2;
        }
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![22, 66, 88, 110, 176]);
        assert_eq!(map.keys().rev().copied().collect::<Vec<_>>(), vec![8, 5, 4, 3, 1]);
    }

    #[test]
    fn test_value_comp_ignores_mapped_value() {
        let map = sample();
        let comp = map.value_comp();
        assert!(comp.less(&(1, 99), &(2, 0)));
        assert_eq!(comp.compare(&(2, 1), &(2, 7)), Ordering::Equal);
        assert_eq!((map.key_comp())(&1, &2), Ordering::Less);
    }

    #[test]
    fn test_cursor_walk() {
        let map = sample();
        let mut c = map.begin();
        let mut keys = Vec::new();
        while let Some((k, _)) = c.get() {
            keys.push(*k);
            c.step_forward();
        }
        assert_eq!(keys, vec![1, 3, 4, 5, 8]);
        assert_eq!(c, map.end());
        assert_eq!(map.rbegin().get(), Some(&(8, 80)));
    }

    #[test]
    fn test_debug_and_ordering() {
        let a: Map<i32, char> = [(2, 'b'), (1, 'a')].into_iter().collect();
        assert_eq!(format!("{a:?}"), "{1: 'a', 2: 'b'}");
        let mut b = a.clone();
        assert_eq!(a, b);
        b.insert(0, 'z');
        assert!(b < a);
        b.clear();
        assert!(b < a);
        assert!(b.is_empty());
    }

    #[test]
    fn test_swap() {
        let mut a = sample();
        let mut b = Map::from([(9, 90)]);
        a.swap(&mut b);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 5);
        assert_eq!(a.first(), Some((&9, &90)));
        assert_eq!(b.last(), Some((&8, &80)));
    }

    #[test]
    fn test_reverse_comparator() {
        let mut map = Map::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        map.extend([(1, "one"), (3, "three"), (2, "two")]);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(map.entry_at(map.lower_bound(&2)), Some((&2, &"two")));
    }
}
