use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("requested length {requested} exceeds max_size {max}")]
    Length { requested: usize, max: usize },
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("position {pos} is past the end of length {len}")]
    InvalidPosition { pos: usize, len: usize },
    #[error("invalid range {first}..{last} for length {len}")]
    InvalidRange {
        first: usize,
        last: usize,
        len: usize,
    },
}

/// Panics with a capacity error. Used by the infallible growth paths.
#[cold]
pub(crate) fn capacity_overflow(err: VectorError) -> ! {
    panic!("{err}")
}
