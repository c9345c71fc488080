use std::fmt;
use std::ptr;
use std::slice;

use crate::buffer::RawBuffer;

pub use std::slice::{Iter, IterMut};

/// Owning iterator returned by `Vector::into_iter`.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: RawBuffer<T>, len: usize) -> Self {
        Self {
            buf,
            front: 0,
            back: len,
        }
    }

    /// Elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `front..back` are initialised and not yet yielded.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.front), self.back - self.front) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        // SAFETY: slot `i` is initialised and leaves the live range here.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(i)) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: slot `back` is initialised and leaves the live range here.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.back)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.back - self.front;
        let start = self.front;
        self.front = self.back;
        // SAFETY: the un-yielded slots are initialised and dropped once.
        unsafe {
            let rest = slice::from_raw_parts_mut(self.buf.as_mut_ptr().add(start), remaining);
            ptr::drop_in_place(rest);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
