use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::{self, SliceIndex};

use ft_iterator::{equal, lexicographical_compare, partial_lexicographical_compare, Reverse, SliceCursor};

use crate::buffer::RawBuffer;
use crate::constants::{GROWTH_FACTOR, INITIAL_CAPACITY, MAX_ALLOCATION_BYTES};
use crate::error::{capacity_overflow, VectorError};
use crate::iter::IntoIter;

/// Contiguous growable array.
///
/// Storage is one separately allocated buffer: slots `0..len` hold live
/// values, slots `len..capacity` are reserved and uninitialised. Capacity
/// grows geometrically and never shrinks on erase.
///
/// Positions are plain indices. Any operation that reallocates moves every
/// element; borrowing cursors (`begin`, `end`, ...) cannot outlive such a
/// call.
pub struct Vector<T> {
    buf: RawBuffer<T>,
    len: usize,
}

impl<T> Vector<T> {
    pub fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Vector of `len` clones of `value`.
    pub fn with_len(len: usize, value: T) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        let mut out = Self::new();
        out.resize(len, value)?;
        Ok(out)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Largest length this vector can ever reach for `T`.
    pub fn max_size(&self) -> usize {
        Self::max_len()
    }

    fn max_len() -> usize {
        MAX_ALLOCATION_BYTES / mem::size_of::<T>().max(1)
    }

    fn check_len(requested: usize) -> Result<(), VectorError> {
        let max = Self::max_len();
        if requested > max {
            return Err(VectorError::Length { requested, max });
        }
        Ok(())
    }

    /// Capacity to grow to so that `required` elements fit. The caller has
    /// already validated `required` against `max_len`.
    fn next_capacity(&self, required: usize) -> usize {
        let cap = self.capacity();
        if cap == 0 {
            return required.max(INITIAL_CAPACITY).min(Self::max_len());
        }
        cap.saturating_mul(GROWTH_FACTOR)
            .min(Self::max_len())
            .max(required)
    }

    /// Moves every element into a fresh buffer of `capacity` slots. The old
    /// buffer is released only after the move completes.
    fn relocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut fresh = RawBuffer::with_capacity(capacity);
        // SAFETY: both buffers hold at least `len` slots, the first `len` of
        // the old one are initialised, and the two allocations are distinct.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), self.len);
        }
        let old = mem::replace(&mut self.buf, fresh);
        log::trace!(
            "vector relocated: len={} capacity {} -> {}",
            self.len,
            old.capacity(),
            capacity
        );
    }

    pub fn reserve(&mut self, capacity: usize) -> Result<(), VectorError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        Self::check_len(capacity)?;
        self.relocate(capacity);
        Ok(())
    }

    pub fn resize(&mut self, len: usize, value: T) -> Result<(), VectorError>
    where
        T: Clone,
    {
        if len <= self.len {
            self.truncate(len);
            return Ok(());
        }
        self.reserve(len)?;
        while self.len + 1 < len {
            // SAFETY: `reserve` guarantees room for `len` elements.
            unsafe { self.write_back(value.clone()) };
        }
        // SAFETY: as above, this is the final slot below `len`.
        unsafe { self.write_back(value) };
        Ok(())
    }

    /// Drops every element past `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = self.len - len;
        // A panicking destructor leaks the remaining tail instead of letting
        // it be dropped twice.
        self.len = len;
        // SAFETY: slots `len..len + tail` were initialised and are no longer
        // reachable through `self.len`.
        unsafe {
            let tail = slice::from_raw_parts_mut(self.buf.as_mut_ptr().add(len), tail);
            ptr::drop_in_place(tail);
        }
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Writes `value` into the first free slot.
    ///
    /// # Safety
    /// `len < capacity` must hold.
    #[inline]
    unsafe fn write_back(&mut self, value: T) {
        ptr::write(self.buf.as_mut_ptr().add(self.len), value);
        self.len += 1;
    }

    pub fn try_push_back(&mut self, value: T) -> Result<(), VectorError> {
        if self.len == self.capacity() {
            let required = self.len + 1;
            Self::check_len(required)?;
            let capacity = self.next_capacity(required);
            self.relocate(capacity);
        }
        // SAFETY: capacity was grown above when the buffer was full.
        unsafe { self.write_back(value) };
        Ok(())
    }

    /// Appends `value`, doubling the capacity when the buffer is full.
    ///
    /// # Panics
    /// Panics if the new length would exceed [`Vector::max_size`].
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            capacity_overflow(err);
        }
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was initialised and is now outside the live
        // range, so it is read exactly once.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(VectorError::OutOfRange { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VectorError::OutOfRange { index, len })
    }

    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialised.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are initialised and uniquely borrowed.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    fn check_position(&self, pos: usize) -> Result<(), VectorError> {
        if pos > self.len {
            return Err(VectorError::InvalidPosition { pos, len: self.len });
        }
        Ok(())
    }

    /// Moves `count` values from `src` into the gap opened at `pos`.
    ///
    /// With enough spare capacity the tail is shifted right in place.
    /// Otherwise a new buffer receives the prefix, the new values and the
    /// suffix, in that order, before the old one is released.
    ///
    /// # Safety
    /// `pos <= len`, `len + count <= max_len`, and `src` points to `count`
    /// initialised values the caller gives up ownership of.
    unsafe fn splice_from(&mut self, pos: usize, src: *const T, count: usize) {
        let len = self.len;
        let required = len + count;
        if required <= self.capacity() {
            let base = self.buf.as_mut_ptr();
            ptr::copy(base.add(pos), base.add(pos + count), len - pos);
            ptr::copy_nonoverlapping(src, base.add(pos), count);
        } else {
            let capacity = self.next_capacity(required);
            let mut fresh = RawBuffer::with_capacity(capacity);
            let old = self.buf.as_ptr();
            let new = fresh.as_mut_ptr();
            ptr::copy_nonoverlapping(old, new, pos);
            ptr::copy_nonoverlapping(src, new.add(pos), count);
            ptr::copy_nonoverlapping(old.add(pos), new.add(pos + count), len - pos);
            let old = mem::replace(&mut self.buf, fresh);
            log::trace!(
                "vector relocated on insert: len={} capacity {} -> {}",
                required,
                old.capacity(),
                capacity
            );
        }
        self.len = required;
    }

    fn splice_staged(&mut self, pos: usize, mut staged: Vector<T>) -> Result<usize, VectorError> {
        Self::check_len(self.len + staged.len)?;
        let count = staged.len;
        // Ownership of the staged values moves into `self`.
        staged.len = 0;
        // SAFETY: `pos` was validated by the caller, the length was checked
        // above, and `staged` no longer considers its values live.
        unsafe { self.splice_from(pos, staged.buf.as_ptr(), count) };
        Ok(pos)
    }

    /// Inserts `value` before `pos` and returns `pos`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize, VectorError> {
        self.check_position(pos)?;
        Self::check_len(self.len + 1)?;
        let value = ManuallyDrop::new(value);
        // SAFETY: position and length validated; `value` is never dropped
        // here so its single copy now lives in the vector.
        unsafe { self.splice_from(pos, &*value as *const T, 1) };
        Ok(pos)
    }

    /// Inserts `count` clones of `value` before `pos` and returns `pos`.
    ///
    /// All clones are made before the vector is touched, so a panicking
    /// `Clone` leaves it unchanged.
    pub fn insert_n(&mut self, pos: usize, count: usize, value: T) -> Result<usize, VectorError>
    where
        T: Clone,
    {
        self.check_position(pos)?;
        if count == 0 {
            return Ok(pos);
        }
        Self::check_len(self.len.saturating_add(count))?;
        let staged = Vector::with_len(count, value)?;
        self.splice_staged(pos, staged)
    }

    /// Inserts every item of `iter` before `pos`, keeping their order, and
    /// returns `pos`.
    pub fn insert_iter<I>(&mut self, pos: usize, iter: I) -> Result<usize, VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_position(pos)?;
        let staged: Vector<T> = iter.into_iter().collect();
        if staged.is_empty() {
            return Ok(pos);
        }
        self.splice_staged(pos, staged)
    }

    /// Removes the element at `pos` and returns the index of the element
    /// that followed it.
    pub fn erase(&mut self, pos: usize) -> Result<usize, VectorError> {
        if pos >= self.len {
            return Err(VectorError::OutOfRange {
                index: pos,
                len: self.len,
            });
        }
        self.erase_range(pos, pos + 1)
    }

    /// Removes `first..last` and closes the gap. Capacity is kept.
    pub fn erase_range(&mut self, first: usize, last: usize) -> Result<usize, VectorError> {
        let len = self.len;
        if first > last || last > len {
            return Err(VectorError::InvalidRange { first, last, len });
        }
        let tail = len - last;
        // A panicking destructor leaks the tail instead of double-dropping.
        self.len = first;
        // SAFETY: `first..last` and `last..len` are initialised slots inside
        // the buffer; the removed range is dropped once before being
        // overwritten by the tail.
        unsafe {
            let base = self.buf.as_mut_ptr();
            let removed = slice::from_raw_parts_mut(base.add(first), last - first);
            ptr::drop_in_place(removed);
            ptr::copy(base.add(last), base.add(first), tail);
        }
        self.len = first + tail;
        Ok(first)
    }

    /// Replaces the contents with `len` clones of `value`.
    pub fn assign(&mut self, len: usize, value: T) -> Result<(), VectorError>
    where
        T: Clone,
    {
        Self::check_len(len)?;
        self.clear();
        self.resize(len, value)
    }

    /// Replaces the contents with the items of `iter`. The iterator is fully
    /// drained before the old contents are dropped.
    pub fn assign_iter<I>(&mut self, iter: I) -> Result<(), VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        let staged: Vector<T> = iter.into_iter().collect();
        self.clear();
        self.splice_staged(0, staged).map(|_| ())
    }

    /// Exchanges buffers with `other` without touching any element.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    pub fn begin(&self) -> SliceCursor<'_, T> {
        SliceCursor::begin(self.as_slice())
    }

    pub fn end(&self) -> SliceCursor<'_, T> {
        SliceCursor::end(self.as_slice())
    }

    pub fn rbegin(&self) -> Reverse<SliceCursor<'_, T>> {
        Reverse::new(self.end())
    }

    pub fn rend(&self) -> Reverse<SliceCursor<'_, T>> {
        Reverse::new(self.begin())
    }

    /// Takes the buffer out, leaving an empty vector whose destructor has
    /// nothing to drop.
    pub(crate) fn into_raw_parts(self) -> (RawBuffer<T>, usize) {
        let mut me = ManuallyDrop::new(self);
        let buf = mem::replace(&mut me.buf, RawBuffer::new());
        (buf, me.len)
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut out = Self {
            buf: RawBuffer::with_capacity(self.len),
            len: 0,
        };
        for item in self.iter() {
            // SAFETY: `out` was allocated with exactly `self.len` slots.
            unsafe { out.write_back(item.clone()) };
        }
        out
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && equal(self.iter(), other.iter())
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        partial_lexicographical_compare(self.iter(), other.iter())
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        lexicographical_compare(self.iter(), other.iter())
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let required = self.len.saturating_add(lower);
        if required > self.capacity() {
            if let Err(err) = Self::check_len(required) {
                capacity_overflow(err);
            }
            let capacity = self.next_capacity(required);
            self.relocate(capacity);
        }
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (buf, len) = self.into_raw_parts();
        IntoIter::new(buf, len)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}
