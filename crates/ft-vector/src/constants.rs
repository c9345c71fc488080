/// Capacity of the first allocation made by a growing push.
pub const INITIAL_CAPACITY: usize = 1;

/// Multiplier applied to the capacity when a push or insert overflows it.
pub const GROWTH_FACTOR: usize = 2;

/// Largest allocation, in bytes, the vector will request.
pub const MAX_ALLOCATION_BYTES: usize = isize::MAX as usize;
