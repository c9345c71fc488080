//! Slot arena for tree nodes.
//!
//! Nodes are addressed by `u32` index. Removing a node turns its slot
//! vacant and pushes it on a free list; the next insertion reuses it.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug)]
enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Option<u32> },
}

#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Option<u32>,
    len: usize,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Largest number of nodes the index space can address.
    pub const fn max_len() -> usize {
        u32::MAX as usize
    }

    /// Stores `node` and returns its index.
    ///
    /// # Panics
    /// Panics once every `u32` index is in use.
    pub fn insert(&mut self, node: N) -> u32 {
        self.len += 1;
        if let Some(idx) = self.free {
            let slot = &mut self.slots[idx as usize];
            if let Slot::Vacant { next_free } = *slot {
                self.free = next_free;
            }
            *slot = Slot::Occupied(node);
            return idx;
        }
        let Ok(idx) = u32::try_from(self.slots.len()) else {
            panic!("arena index space exhausted");
        };
        self.slots.push(Slot::Occupied(node));
        idx
    }

    /// Vacates slot `idx` and returns its node.
    ///
    /// # Panics
    /// Panics if the slot is already vacant.
    pub fn remove(&mut self, idx: u32) -> N {
        if !self.contains(idx) {
            vacant_slot(idx);
        }
        let slot = std::mem::replace(
            &mut self.slots[idx as usize],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        let Slot::Occupied(node) = slot else {
            vacant_slot(idx);
        };
        self.free = Some(idx);
        self.len -= 1;
        node
    }

    pub fn get(&self, idx: u32) -> Option<&N> {
        match self.slots.get(idx as usize)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut N> {
        match self.slots.get_mut(idx as usize)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn contains(&self, idx: u32) -> bool {
        self.get(idx).is_some()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    /// Every slot in index order, `None` where vacant.
    pub(crate) fn slots_mut(&mut self) -> impl Iterator<Item = Option<&mut N>> {
        self.slots.iter_mut().map(|slot| match slot {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        })
    }
}

#[cold]
fn vacant_slot(idx: u32) -> ! {
    panic!("arena slot {idx} is vacant")
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, idx: u32) -> &N {
        match self.get(idx) {
            Some(node) => node,
            None => vacant_slot(idx),
        }
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, idx: u32) -> &mut N {
        match self.get_mut(idx) {
            Some(node) => node,
            None => vacant_slot(idx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_reuses_slots() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        let c = arena.insert("c");
        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(arena.remove(b), "b");
        assert_eq!(arena.remove(a), "a");
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(b));
        assert_eq!(arena.insert("d"), a);
        assert_eq!(arena.insert("e"), b);
        assert_eq!(arena.insert("f"), 3);
        assert_eq!(arena[b], "e");
    }

    #[test]
    #[should_panic(expected = "arena slot 0 is vacant")]
    fn test_index_vacant_panics() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        arena.remove(a);
        let _ = arena[a];
    }

    #[test]
    fn test_get_out_of_bounds() {
        let arena = Arena::<u8>::new();
        assert_eq!(arena.get(10), None);
    }
}
