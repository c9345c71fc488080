/// A position that can move one element forward or backward.
///
/// Valid positions are `begin..=end`, where `end` is one past the last
/// element. `get` yields `None` at `end`. Stepping out of that range is
/// refused: the step returns `false` and the cursor stays put.
pub trait Bidirectional: Clone {
    type Item;

    fn get(&self) -> Option<Self::Item>;

    fn step_forward(&mut self) -> bool;

    fn step_backward(&mut self) -> bool;

    fn is_end(&self) -> bool {
        self.get().is_none()
    }
}

/// A bidirectional cursor with O(1) jumps.
pub trait RandomAccess: Bidirectional {
    /// Offset from the first element.
    fn position(&self) -> usize;

    /// Length of the underlying sequence.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves by `n` elements (backward when negative). Returns `false` and
    /// does not move if the target lies outside `0..=len`.
    fn advance_by(&mut self, n: isize) -> bool;

    /// Reads the element `n` positions away without moving.
    fn get_at(&self, n: isize) -> Option<Self::Item>;

    fn distance_to(&self, other: &Self) -> isize {
        other.position() as isize - self.position() as isize
    }
}

/// Panics for cursor arithmetic that leaves the sequence.
#[cold]
pub fn cursor_out_of_range() -> ! {
    panic!("cursor moved out of range")
}
