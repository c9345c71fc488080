use std::cmp::Ordering;
use std::ops::{Add, Sub};

use crate::cursor::{cursor_out_of_range, Bidirectional, RandomAccess};

/// Reverses the direction of a cursor.
///
/// A reverse cursor built over `base` designates the element just before
/// `base`, so `Reverse::new(end)` reads the last element and
/// `Reverse::new(begin)` is the reversed one-past-the-end position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reverse<C> {
    base: C,
}

impl<C> Reverse<C> {
    pub fn new(base: C) -> Self {
        Self { base }
    }

    /// The underlying forward cursor, one element past the designated one.
    pub fn base(&self) -> &C {
        &self.base
    }

    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: Bidirectional> Bidirectional for Reverse<C> {
    type Item = C::Item;

    fn get(&self) -> Option<C::Item> {
        let mut curr = self.base.clone();
        if curr.step_backward() {
            curr.get()
        } else {
            None
        }
    }

    fn step_forward(&mut self) -> bool {
        self.base.step_backward()
    }

    fn step_backward(&mut self) -> bool {
        self.base.step_forward()
    }
}

impl<C: RandomAccess> RandomAccess for Reverse<C> {
    fn position(&self) -> usize {
        self.base.len() - self.base.position()
    }

    fn len(&self) -> usize {
        self.base.len()
    }

    fn advance_by(&mut self, n: isize) -> bool {
        match n.checked_neg() {
            Some(back) => self.base.advance_by(back),
            None => false,
        }
    }

    fn get_at(&self, n: isize) -> Option<C::Item> {
        let back = n.checked_add(1)?.checked_neg()?;
        self.base.get_at(back)
    }
}

impl<C: PartialOrd> PartialOrd for Reverse<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

impl<C: Ord> Ord for Reverse<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.base.cmp(&self.base)
    }
}

impl<C: RandomAccess> Add<isize> for Reverse<C> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        if !self.advance_by(n) {
            cursor_out_of_range();
        }
        self
    }
}

impl<C: RandomAccess> Sub<isize> for Reverse<C> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        match n.checked_neg() {
            Some(back) if self.advance_by(back) => self,
            _ => cursor_out_of_range(),
        }
    }
}

impl<C: RandomAccess> Sub for Reverse<C> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        rhs.distance_to(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SliceCursor;

    #[test]
    fn test_reverse_walk() {
        let data = [1, 2, 3];
        let mut it = Reverse::new(SliceCursor::end(&data));
        let rend = Reverse::new(SliceCursor::begin(&data));
        let mut out = Vec::new();
        while it != rend {
            out.push(*it.get().unwrap());
            it.step_forward();
        }
        assert_eq!(out, vec![3, 2, 1]);
        assert_eq!(rend.get(), None);
        assert!(!it.step_forward());
    }

    #[test]
    fn test_reverse_random_access() {
        let data = [10, 20, 30, 40];
        let rbegin = Reverse::new(SliceCursor::end(&data));
        let rend = Reverse::new(SliceCursor::begin(&data));
        assert_eq!(rend - rbegin, 4);
        assert_eq!(rbegin.position(), 0);
        assert_eq!(rbegin.get_at(0), Some(&40));
        assert_eq!(rbegin.get_at(3), Some(&10));
        assert_eq!(rbegin.get_at(4), None);
        let c = rbegin + 2;
        assert_eq!(c.get(), Some(&20));
        assert_eq!(c.base().position(), 2);
        assert_eq!((c - 1).get(), Some(&30));
        assert!(rbegin < c);
    }

    #[test]
    fn test_reverse_step_backward_from_rbegin_refused() {
        let data = [1, 2];
        let mut it = Reverse::new(SliceCursor::end(&data));
        assert!(!it.step_backward());
        assert_eq!(it.get(), Some(&2));
    }
}
