use thiserror::Error;

/// Reasons a call on a range-sum structure is rejected.
///
/// Every variant is reported before the structure is touched, so a failed
/// call never leaves a partial update behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RangeError {
    /// An index or range bound lies outside `[0, len)`.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    /// The left bound of a range is greater than its right bound.
    #[error("range starts at {left} but ends at {right}")]
    InvalidRange { left: usize, right: usize },
    /// The structure was built from no elements, so nothing can be addressed.
    #[error("structure was built from an empty sequence")]
    Empty,
}
