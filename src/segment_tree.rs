use crate::core::bounds;
use crate::core::error::RangeError;
use crate::core::summand::Summand;
use crate::RangeSum;
use std::ops::Range;

/// A bottom-up segment tree stored as a flat binary heap.
///
/// With `n` elements the tree holds `2 * n` slots. Leaf `i` lives at slot
/// `n + i`, and every internal slot `p` in `1..n` holds
/// `tree[2 * p] + tree[2 * p + 1]`. Slot `1` therefore always holds the total,
/// and slot `0` is never read.
///
/// # Examples
///
/// ```
/// use rangesum::{RangeSum, SegmentTree};
///
/// let mut tree = SegmentTree::new([2, 1, 1, 3, 2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!(tree.range_sum(0, 5), Ok(12));
///
/// tree.update(3, 9).unwrap();
/// assert_eq!(tree.range_sum(0, 5), Ok(18));
/// assert_eq!(tree.total(), Ok(57));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentTree<T: Summand> {
    tree: Vec<T>,
}

impl<T: Summand> SegmentTree<T> {
    /// Builds the tree in O(n): leaves are copied in, then parents are filled
    /// from the last internal slot down to the root.
    pub fn new(container: impl IntoIterator<Item = T>) -> Self {
        let leaves: Vec<T> = container.into_iter().collect();
        let n = leaves.len();
        let mut tree: Vec<T> = vec![T::default(); n];
        tree.extend(leaves);
        for i in (1..n).rev() {
            tree[i] = tree[2 * i].plus(tree[2 * i + 1]);
        }

        log::trace!("built segment tree over {n} elements");

        Self { tree }
    }

    /// Current values, in order.
    pub fn leaves(&self) -> &[T] {
        &self.tree[self.len()..]
    }

    /// Sums the inclusive leaf range `[left, right]`. Both bounds must be valid.
    fn range_sum_unchecked(&self, left: usize, right: usize) -> T {
        let n = self.len();
        let (mut pos_left, mut pos_right) = (n + left, n + right);
        let mut sum = T::default();
        while pos_left <= pos_right {
            // A right child on the left edge is taken whole; its parent
            // reaches past the range.
            if pos_left % 2 == 1 {
                sum = sum.plus(self.tree[pos_left]);
                pos_left += 1;
            }
            // Likewise for a left child on the right edge.
            if pos_right % 2 == 0 {
                sum = sum.plus(self.tree[pos_right]);
                pos_right -= 1;
            }
            pos_left /= 2;
            pos_right /= 2;
        }

        sum
    }
}

impl<T: Summand> RangeSum<T> for SegmentTree<T> {
    fn len(&self) -> usize {
        self.tree.len() / 2
    }
    fn get(&self, index: usize) -> Result<T, RangeError> {
        bounds::check_index(index, self.len())?;

        Ok(self.tree[self.len() + index])
    }
    fn update(&mut self, index: usize, value: T) -> Result<T, RangeError> {
        bounds::check_index(index, self.len())?;

        let mut pos = self.len() + index;
        let old_value = std::mem::replace(&mut self.tree[pos], value);
        while pos > 1 {
            let (left, right) = if pos % 2 == 0 {
                (pos, pos + 1)
            } else {
                (pos - 1, pos)
            };
            self.tree[pos / 2] = self.tree[left].plus(self.tree[right]);
            pos /= 2;
        }

        Ok(old_value)
    }
    fn add(&mut self, index: usize, delta: T) -> Result<(), RangeError> {
        let current = self.get(index)?;
        self.update(index, current.plus(delta)).map(|_| ())
    }
    fn fold(&self, range: Range<usize>) -> Result<T, RangeError> {
        let Range { start, end } = bounds::to_range(range, self.len())?;
        if start == end {
            return Ok(T::default());
        }

        Ok(self.range_sum_unchecked(start, end - 1))
    }
    fn total(&self) -> Result<T, RangeError> {
        bounds::check_not_empty(self.len())?;

        Ok(self.tree[1])
    }
    fn to_vec(&self) -> Vec<T> {
        self.leaves().to_vec()
    }
}

impl<T: Summand> FromIterator<T> for SegmentTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SegmentTree::new(iter)
    }
}
