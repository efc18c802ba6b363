//! Fixed-size integer sequences with point updates and range sums, both in
//! O(log n).
//!
//! Two flat-array representations are provided, [`FenwickTree`] and
//! [`SegmentTree`], behind one [`RangeSum`] contract. [`RangeSumStructure`]
//! picks one of them at construction time.
//!
//! ```
//! use rangesum::{RangeSum, RangeSumStructure};
//!
//! let mut sums = RangeSumStructure::new([2, 1, 1, 3, 2, 3, 4, 5, 6, 7, 8, 9]);
//! assert_eq!(sums.range_sum(0, 5), Ok(12));
//!
//! sums.update(3, 9).unwrap();
//! assert_eq!(sums.range_sum(0, 5), Ok(18));
//! assert_eq!(sums.sum(..), Ok(57));
//! ```
pub mod core;
pub mod fenwick_tree;
pub mod segment_tree;

use crate::core::bounds;
pub use crate::core::error::RangeError;
pub use crate::core::summand::Summand;
pub use fenwick_tree::FenwickTree;
pub use segment_tree::SegmentTree;
use std::ops::{Range, RangeBounds};

/// Point updates and range sums over a fixed number of integers.
///
/// The length is fixed when the structure is built. Every operation checks
/// its arguments first and returns a [`RangeError`] without touching the
/// structure when they are invalid. A structure built from no elements
/// rejects every call with [`RangeError::Empty`].
pub trait RangeSum<T: Summand> {
    /// Number of elements.
    fn len(&self) -> usize;
    /// Returns the current value at `index`.
    fn get(&self, index: usize) -> Result<T, RangeError>;
    /// Replaces the value at `index` with `value`, returning the old value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rangesum::{RangeError, RangeSum, RangeSumStructure};
    ///
    /// let mut sums = RangeSumStructure::new([4, 5, 6]);
    /// assert_eq!(sums.update(1, 7), Ok(5));
    /// assert_eq!(sums.total(), Ok(17));
    /// assert_eq!(sums.update(3, 7), Err(RangeError::OutOfRange { index: 3, len: 3 }));
    /// ```
    fn update(&mut self, index: usize, value: T) -> Result<T, RangeError>;
    /// Adds `delta` to the value at `index`.
    fn add(&mut self, index: usize, delta: T) -> Result<(), RangeError>;
    /// Sums a half-open range. An empty range `k..k` with `k <= len` sums to
    /// zero.
    fn fold(&self, range: Range<usize>) -> Result<T, RangeError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Sums elements `0..=index`.
    fn prefix_sum(&self, index: usize) -> Result<T, RangeError> {
        bounds::check_index(index, self.len())?;
        self.fold(0..index + 1)
    }
    /// Sums the first `end` elements, so `prefix_sum_before(0)` is zero.
    fn prefix_sum_before(&self, end: usize) -> Result<T, RangeError> {
        self.fold(0..end)
    }
    /// Sums elements `left..=right`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rangesum::{RangeError, RangeSum, RangeSumStructure};
    ///
    /// let sums = RangeSumStructure::new([1, 2, 3, 4]);
    /// assert_eq!(sums.range_sum(1, 2), Ok(5));
    /// assert_eq!(sums.range_sum(2, 1), Err(RangeError::InvalidRange { left: 2, right: 1 }));
    /// ```
    fn range_sum(&self, left: usize, right: usize) -> Result<T, RangeError> {
        bounds::check_inclusive(left, right, self.len())?;
        self.fold(left..right + 1)
    }
    /// Sums any range expression, e.g. `sum(2..)`, `sum(..=4)` or `sum(..)`.
    fn sum<R: RangeBounds<usize>>(&self, range: R) -> Result<T, RangeError>
    where
        Self: Sized,
    {
        let range = bounds::to_range(range, self.len())?;
        self.fold(range)
    }
    /// Sum of every element.
    fn total(&self) -> Result<T, RangeError> {
        self.fold(0..self.len())
    }
    /// Current values, in order.
    fn to_vec(&self) -> Vec<T> {
        (0..self.len())
            .filter_map(|index| self.get(index).ok())
            .collect()
    }
}

/// Internal layout used by a [`RangeSumStructure`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Representation {
    /// `len + 1` slots indexed by lowest-set-bit arithmetic.
    Fenwick,
    /// `2 * len` slots in binary-heap order, built bottom-up.
    #[default]
    Segment,
}

/// A fixed-size sequence of integers supporting point updates and range sums.
///
/// Built once from its initial values, then mutated only through
/// [`RangeSum::update`] and [`RangeSum::add`].
///
/// # Examples
///
/// ```
/// use rangesum::{RangeSum, RangeSumStructure, Representation};
///
/// let sums = RangeSumStructure::with_representation(vec![3, 1, 4, 1, 5], Representation::Fenwick);
/// assert_eq!(sums.representation(), Representation::Fenwick);
/// assert_eq!(sums.prefix_sum(2), Ok(8));
///
/// let sums: RangeSumStructure<i64> = (1..=100).collect();
/// assert_eq!(sums.total(), Ok(5050));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RangeSumStructure<T: Summand> {
    Fenwick(FenwickTree<T>),
    Segment(SegmentTree<T>),
}

impl<T: Summand> RangeSumStructure<T> {
    /// Builds the default [`Representation`].
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self::with_representation(values, Representation::default())
    }
    /// Builds the given representation.
    pub fn with_representation(
        values: impl IntoIterator<Item = T>,
        representation: Representation,
    ) -> Self {
        match representation {
            Representation::Fenwick => RangeSumStructure::Fenwick(FenwickTree::new(values)),
            Representation::Segment => RangeSumStructure::Segment(SegmentTree::new(values)),
        }
    }
    pub fn representation(&self) -> Representation {
        match self {
            RangeSumStructure::Fenwick(_) => Representation::Fenwick,
            RangeSumStructure::Segment(_) => Representation::Segment,
        }
    }
    fn as_dyn(&self) -> &dyn RangeSum<T> {
        match self {
            RangeSumStructure::Fenwick(tree) => tree,
            RangeSumStructure::Segment(tree) => tree,
        }
    }
    fn as_dyn_mut(&mut self) -> &mut dyn RangeSum<T> {
        match self {
            RangeSumStructure::Fenwick(tree) => tree,
            RangeSumStructure::Segment(tree) => tree,
        }
    }
}

impl<T: Summand> RangeSum<T> for RangeSumStructure<T> {
    fn len(&self) -> usize {
        self.as_dyn().len()
    }
    fn get(&self, index: usize) -> Result<T, RangeError> {
        self.as_dyn().get(index)
    }
    fn update(&mut self, index: usize, value: T) -> Result<T, RangeError> {
        self.as_dyn_mut().update(index, value)
    }
    fn add(&mut self, index: usize, delta: T) -> Result<(), RangeError> {
        self.as_dyn_mut().add(index, delta)
    }
    fn fold(&self, range: Range<usize>) -> Result<T, RangeError> {
        self.as_dyn().fold(range)
    }
    fn total(&self) -> Result<T, RangeError> {
        self.as_dyn().total()
    }
    fn to_vec(&self) -> Vec<T> {
        self.as_dyn().to_vec()
    }
}

impl<T: Summand> Default for RangeSumStructure<T> {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl<T: Summand> FromIterator<T> for RangeSumStructure<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Summand> From<Vec<T>> for RangeSumStructure<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: Summand> From<&[T]> for RangeSumStructure<T> {
    fn from(values: &[T]) -> Self {
        Self::new(values.iter().copied())
    }
}
