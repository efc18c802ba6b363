use crate::core::error::RangeError;
use std::ops::{Bound, Range, RangeBounds};

/// Rejects every call on a zero-length structure.
#[inline]
pub fn check_not_empty(len: usize) -> Result<(), RangeError> {
    if len == 0 {
        log::debug!("rejecting call on an empty structure");
        return Err(RangeError::Empty);
    }

    Ok(())
}

/// Checks that `index` addresses an element, i.e. `index < len`.
pub fn check_index(index: usize, len: usize) -> Result<(), RangeError> {
    check_not_empty(len)?;
    if index >= len {
        log::debug!("rejecting index {index} for length {len}");
        return Err(RangeError::OutOfRange { index, len });
    }

    Ok(())
}

/// Checks an inclusive range `[left, right]`.
pub fn check_inclusive(left: usize, right: usize, len: usize) -> Result<(), RangeError> {
    check_index(left, len)?;
    check_index(right, len)?;
    if left > right {
        log::debug!("rejecting inverted range [{left}, {right}]");
        return Err(RangeError::InvalidRange { left, right });
    }

    Ok(())
}

/// Resolves any `RangeBounds<usize>` into a half-open range within `0..=len`.
///
/// An empty range `k..k` is accepted as long as `k <= len`.
pub fn to_range(range: impl RangeBounds<usize>, len: usize) -> Result<Range<usize>, RangeError> {
    check_not_empty(len)?;

    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start
            .checked_add(1)
            .ok_or(RangeError::OutOfRange { index: start, len })?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end
            .checked_add(1)
            .ok_or(RangeError::OutOfRange { index: end, len })?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > len {
        log::debug!("rejecting range start {start} for length {len}");
        return Err(RangeError::OutOfRange { index: start, len });
    }
    if end > len {
        log::debug!("rejecting range end {end} for length {len}");
        return Err(RangeError::OutOfRange {
            index: end - 1,
            len,
        });
    }
    if start > end {
        log::debug!("rejecting inverted range {start}..{end}");
        return Err(RangeError::InvalidRange {
            left: start,
            right: end,
        });
    }

    Ok(start..end)
}
