use std::mem::MaybeUninit;

/// Fixed-size block of slots that may or may not hold a live value.
///
/// The buffer never drops its contents; the owner tracks which slots are
/// initialised and drops them itself.
pub(crate) struct RawBuffer<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> RawBuffer<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new().into_boxed_slice(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        // SAFETY: `MaybeUninit<T>` needs no initialisation and the vector
        // holds room for `capacity` of them.
        unsafe { slots.set_len(capacity) };
        Self {
            slots: slots.into_boxed_slice(),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast()
    }
}
