use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use ft_vector::Vector;

/// A sequence that can grow and shrink at its back.
///
/// This is all [`Stack`] needs from its storage.
pub trait BackSequence {
    type Item;

    fn push_back(&mut self, value: Self::Item);

    fn pop_back(&mut self) -> Option<Self::Item>;

    fn back(&self) -> Option<&Self::Item>;

    fn back_mut(&mut self) -> Option<&mut Self::Item>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> BackSequence for Vector<T> {
    type Item = T;

    fn push_back(&mut self, value: T) {
        Vector::push_back(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        Vector::pop_back(self)
    }

    fn back(&self) -> Option<&T> {
        Vector::back(self)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        Vector::back_mut(self)
    }

    fn len(&self) -> usize {
        Vector::len(self)
    }
}

impl<T> BackSequence for Vec<T> {
    type Item = T;

    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Last-in first-out adapter over a [`BackSequence`].
///
/// Comparison operators compare the underlying sequences, bottom first.
pub struct Stack<T, S = Vector<T>> {
    seq: S,
    _item: PhantomData<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::from_sequence(Vector::new())
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> Stack<T, S>
where
    S: BackSequence<Item = T>,
{
    /// Wraps `seq`; its back becomes the top of the stack.
    pub fn from_sequence(seq: S) -> Self {
        Self {
            seq,
            _item: PhantomData,
        }
    }

    pub fn push(&mut self, value: T) {
        self.seq.push_back(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.seq.pop_back()
    }

    pub fn top(&self) -> Option<&T> {
        self.seq.back()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.seq.back_mut()
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<T, S> Clone for Stack<T, S>
where
    S: BackSequence<Item = T> + Clone,
{
    fn clone(&self) -> Self {
        Self::from_sequence(self.seq.clone())
    }
}

impl<T, S> fmt::Debug for Stack<T, S>
where
    S: BackSequence<Item = T> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("seq", &self.seq).finish()
    }
}

impl<T, S> PartialEq for Stack<T, S>
where
    S: BackSequence<Item = T> + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T, S> Eq for Stack<T, S> where S: BackSequence<Item = T> + Eq {}

impl<T, S> PartialOrd for Stack<T, S>
where
    S: BackSequence<Item = T> + PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.seq.partial_cmp(&other.seq)
    }
}

impl<T, S> Ord for Stack<T, S>
where
    S: BackSequence<Item = T> + Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.seq.cmp(&other.seq)
    }
}
