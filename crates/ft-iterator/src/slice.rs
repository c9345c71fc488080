use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::cursor::{cursor_out_of_range, Bidirectional, RandomAccess};

/// Random-access cursor over any contiguous sequence.
///
/// Arithmetic follows pointer semantics: `c + n` moves forward, `c - n`
/// backward, and `b - a` is the signed distance between two cursors into the
/// same sequence. Arithmetic that leaves `0..=len` panics.
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn begin(items: &'a [T]) -> Self {
        Self { items, pos: 0 }
    }

    pub fn end(items: &'a [T]) -> Self {
        Self {
            items,
            pos: items.len(),
        }
    }

    /// Cursor at `pos`, or `None` past the end position.
    pub fn at(items: &'a [T], pos: usize) -> Option<Self> {
        (pos <= items.len()).then_some(Self { items, pos })
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    fn same_sequence(&self, other: &Self) -> bool {
        std::ptr::eq(self.items.as_ptr(), other.items.as_ptr()) && self.items.len() == other.items.len()
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_sequence(other) && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Only meaningful for cursors into the same sequence.
impl<T> Ord for SliceCursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}

impl<'a, T> Bidirectional for SliceCursor<'a, T> {
    type Item = &'a T;

    fn get(&self) -> Option<&'a T> {
        self.items.get(self.pos)
    }

    fn step_forward(&mut self) -> bool {
        self.advance_by(1)
    }

    fn step_backward(&mut self) -> bool {
        self.advance_by(-1)
    }
}

impl<T> RandomAccess for SliceCursor<'_, T> {
    fn position(&self) -> usize {
        self.pos
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn advance_by(&mut self, n: isize) -> bool {
        match self.pos.checked_add_signed(n) {
            Some(pos) if pos <= self.items.len() => {
                self.pos = pos;
                true
            }
            _ => false,
        }
    }

    fn get_at(&self, n: isize) -> Option<Self::Item> {
        self.pos.checked_add_signed(n).and_then(|i| self.items.get(i))
    }
}

impl<T> Add<isize> for SliceCursor<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<T> AddAssign<isize> for SliceCursor<'_, T> {
    fn add_assign(&mut self, n: isize) {
        if !self.advance_by(n) {
            cursor_out_of_range();
        }
    }
}

impl<T> Sub<isize> for SliceCursor<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<T> SubAssign<isize> for SliceCursor<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        match n.checked_neg() {
            Some(back) if self.advance_by(back) => {}
            _ => cursor_out_of_range(),
        }
    }
}

impl<'a, T> Sub for SliceCursor<'a, T> {
    type Output = isize;

    fn sub(self, rhs: SliceCursor<'a, T>) -> isize {
        rhs.distance_to(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_end() {
        let data = [1, 2, 3];
        let b = SliceCursor::begin(&data);
        let e = SliceCursor::end(&data);
        assert_eq!(b.get(), Some(&1));
        assert_eq!(e.get(), None);
        assert!(e.is_end());
        assert_eq!(e - b, 3);
        assert!(b < e);
    }

    #[test]
    fn test_arithmetic() {
        let data = [10, 20, 30, 40];
        let c = SliceCursor::begin(&data) + 2;
        assert_eq!(c.get(), Some(&30));
        assert_eq!((c - 1).get(), Some(&20));
        assert_eq!(c.get_at(1), Some(&40));
        assert_eq!(c.get_at(-2), Some(&10));
        assert_eq!(c.get_at(-3), None);
        assert_eq!(c.get_at(2), None);
    }

    #[test]
    fn test_step_refused_at_edges() {
        let data = [1];
        let mut c = SliceCursor::begin(&data);
        assert!(!c.step_backward());
        assert_eq!(c.position(), 0);
        assert!(c.step_forward());
        assert!(!c.step_forward());
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn test_at() {
        let data = [1, 2];
        assert!(SliceCursor::at(&data, 2).is_some());
        assert!(SliceCursor::at(&data, 3).is_none());
    }

    #[test]
    #[should_panic(expected = "cursor moved out of range")]
    fn test_add_past_end_panics() {
        let data = [1, 2];
        let _ = SliceCursor::begin(&data) + 3;
    }

    #[test]
    #[should_panic(expected = "cursor moved out of range")]
    fn test_sub_before_begin_panics() {
        let data = [1, 2];
        let _ = SliceCursor::begin(&data) - 1;
    }

    #[test]
    fn test_equality_is_identity() {
        let a = [1, 2];
        let b = [1, 2];
        assert_eq!(SliceCursor::begin(&a), SliceCursor::begin(&a));
        assert_ne!(SliceCursor::begin(&a), SliceCursor::begin(&b));
    }
}
