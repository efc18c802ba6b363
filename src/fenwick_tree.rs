use crate::core::bounds;
use crate::core::error::RangeError;
use crate::core::summand::Summand;
use crate::RangeSum;
use std::ops::Range;

#[inline]
fn least_significant_bit(idx: usize) -> usize {
    idx & idx.wrapping_neg()
}

fn most_significant_bit(idx: usize) -> usize {
    if idx == 0 {
        return 0;
    }

    1 << (usize::BITS - 1 - idx.leading_zeros())
}

/// A Fenwick tree (binary indexed tree) over a fixed number of integers.
///
/// The tree is a flat `Vec` of `len + 1` slots. Slot `0` is unused and slot
/// `x` holds the sum of the half-open range `(x - lowbit(x), x]` of the
/// 1-based conceptual array, so both updates and prefix sums touch at most
/// `log2(len) + 1` slots.
///
/// # Examples
///
/// ```
/// use rangesum::{FenwickTree, RangeSum};
///
/// let mut tree = FenwickTree::new([2, 1, 1, 3, 2, 3]);
/// assert_eq!(tree.prefix_sum(5), Ok(12));
///
/// tree.update(3, 9).unwrap();
/// assert_eq!(tree.prefix_sum(5), Ok(18));
/// assert_eq!(tree.range_sum(3, 4), Ok(11));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FenwickTree<T: Summand> {
    inner: Vec<T>,
}

impl<T: Summand> FenwickTree<T> {
    /// Builds the tree in O(n).
    ///
    /// Running prefix sums `P` are laid down first, then every slot is turned
    /// into `P[x] - P[x - lowbit(x)]`.
    pub fn new(container: impl IntoIterator<Item = T>) -> Self {
        let mut inner = vec![T::default()];
        let mut running = T::default();
        container.into_iter().for_each(|value| {
            running = running.plus(value);
            inner.push(running);
        });

        let prefix_sums = inner.clone();
        inner
            .iter_mut()
            .enumerate()
            .skip(1)
            .for_each(|(idx, item)| {
                *item = item.minus(prefix_sums[idx - least_significant_bit(idx)]);
            });

        log::trace!("built fenwick tree over {} elements", inner.len() - 1);

        FenwickTree { inner }
    }

    /// Sum of the first `end` elements. `end` must not exceed `len`.
    fn prefix_sum_unchecked(&self, end: usize) -> T {
        let mut sum = T::default();
        let mut current_idx = end;

        while current_idx > 0 {
            sum = sum.plus(self.inner[current_idx]);
            current_idx &= current_idx - 1
        }

        sum
    }

    /// Walks the slots covering 0-based `index`, towards higher positions.
    fn propagate(&mut self, index: usize, delta: T) {
        let len = self.len();
        let mut current_idx = index + 1;
        while current_idx <= len {
            self.inner[current_idx] = self.inner[current_idx].plus(delta);
            current_idx += least_significant_bit(current_idx);
        }
    }

    fn get_unchecked(&self, index: usize) -> T {
        let position = index + 1;
        let mut value = self.inner[position];
        // Slots between the covered range's start and `position` are
        // subtracted back out, leaving the single element.
        let stop = position - least_significant_bit(position);
        let mut current_idx = position - 1;
        while current_idx > stop {
            value = value.minus(self.inner[current_idx]);
            current_idx &= current_idx - 1
        }

        value
    }

    /// Finds the smallest index whose inclusive prefix sum is at least
    /// `target`, or `len` when even the total falls short.
    ///
    /// Only meaningful while every element is non-negative, since the search
    /// assumes prefix sums never decrease.
    ///
    /// # Examples
    ///
    /// ```
    /// use rangesum::FenwickTree;
    ///
    /// let tree = FenwickTree::new([1usize, 6, 3, 9, 2]);
    /// assert_eq!(tree.index_of(9), 2);
    /// assert_eq!(tree.index_of(22), 5);
    /// ```
    pub fn index_of(&self, target: T) -> usize {
        let length = self.len();
        let mut remaining = target;
        let mut idx = 0;
        let mut step = most_significant_bit(length);
        while step > 0 {
            let next = idx + step;
            if next <= length && self.inner[next] < remaining {
                idx = next;
                remaining = remaining.minus(self.inner[next]);
            }
            step >>= 1;
        }

        idx
    }
}

impl<T: Summand> RangeSum<T> for FenwickTree<T> {
    fn len(&self) -> usize {
        self.inner.len() - 1
    }
    fn get(&self, index: usize) -> Result<T, RangeError> {
        bounds::check_index(index, self.len())?;

        Ok(self.get_unchecked(index))
    }
    fn update(&mut self, index: usize, value: T) -> Result<T, RangeError> {
        bounds::check_index(index, self.len())?;
        let old_value = self.get_unchecked(index);
        self.propagate(index, value.minus(old_value));

        Ok(old_value)
    }
    fn add(&mut self, index: usize, delta: T) -> Result<(), RangeError> {
        bounds::check_index(index, self.len())?;
        self.propagate(index, delta);

        Ok(())
    }
    fn fold(&self, range: Range<usize>) -> Result<T, RangeError> {
        let Range { start, end } = bounds::to_range(range, self.len())?;

        Ok(self
            .prefix_sum_unchecked(end)
            .minus(self.prefix_sum_unchecked(start)))
    }
}

impl<T: Summand> FromIterator<T> for FenwickTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FenwickTree::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::{least_significant_bit, most_significant_bit, FenwickTree};
    use crate::core::error::RangeError;
    use crate::RangeSum;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_bits() {
        let cases: Vec<(usize, usize, usize)> =
            vec![(1, 1, 1), (6, 2, 4), (12, 4, 8), (16, 16, 16), (5, 1, 4)];
        cases.into_iter().for_each(|(idx, lsb, msb)| {
            assert_eq!(least_significant_bit(idx), lsb);
            assert_eq!(most_significant_bit(idx), msb);
        });
        assert_eq!(most_significant_bit(0), 0);
    }

    #[test]
    fn test_new() {
        let lengths: [usize; 5] = [1, 6, 3, 9, 2];
        let expected_inner: Vec<usize> = vec![0, 1, 7, 3, 19, 2];
        let actual = FenwickTree::new(lengths);
        assert_eq!(expected_inner, actual.inner)
    }

    #[test]
    fn test_slots_cover_lowbit_ranges() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let values: Vec<i64> = (0..37).map(|_| rng.gen_range(-50..50)).collect();
        let tree = FenwickTree::new(values.iter().copied());

        for x in 1..=values.len() {
            let covered: i64 = values[(x - least_significant_bit(x))..x].iter().sum();
            assert_eq!(tree.inner[x], covered, "slot {x}");
        }
    }

    #[test]
    fn test_prefix_sum() {
        let lengths = [1, 6, 3, 9, 2];
        let fenwick_array = FenwickTree::new(lengths);

        let cases: Vec<(usize, i32)> = vec![(0, 1), (1, 7), (2, 10), (3, 19), (4, 21)];
        cases.into_iter().for_each(|(idx, expected_sum)| {
            assert_eq!(fenwick_array.prefix_sum(idx), Ok(expected_sum))
        });
        assert_eq!(
            fenwick_array.prefix_sum(5),
            Err(RangeError::OutOfRange { index: 5, len: 5 })
        );
        // Nothing selected yet sums to zero.
        assert_eq!(fenwick_array.prefix_sum_before(0), Ok(0));
    }

    #[test]
    fn test_add() {
        let lengths = [1, 6, 3, 9, 2];
        let mut fenwick_array = FenwickTree::new(lengths);

        fenwick_array.add(0, 1).unwrap();

        let cases: Vec<(usize, i32)> = vec![(1, 2), (2, 8), (3, 3), (4, 20), (5, 2)];
        cases.into_iter().for_each(|(slot, expected_value)| {
            assert_eq!(fenwick_array.inner[slot], expected_value)
        });
        assert_eq!(fenwick_array.get(0), Ok(2));
    }

    #[test]
    fn test_get() {
        let values = [2, -1, 1, 3, 2, 3, 4, 5, 6, 7, 8, 9];
        let tree = FenwickTree::new(values);

        values
            .iter()
            .enumerate()
            .for_each(|(idx, value)| assert_eq!(tree.get(idx), Ok(*value)));
        assert_eq!(tree.to_vec(), values.to_vec());
    }

    #[test]
    fn test_update_scenario() {
        let mut tree = FenwickTree::new([2, 1, 1, 3, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(tree.prefix_sum(5), Ok(12));

        assert_eq!(tree.update(3, 9), Ok(3));
        assert_eq!(tree.prefix_sum(5), Ok(18));
        assert_eq!(tree.range_sum(0, 11), Ok(57));
        assert_eq!(tree.get(3), Ok(9));
    }

    #[test]
    fn test_rejected_update_leaves_tree_untouched() {
        let mut tree = FenwickTree::new([4, 5, 6]);
        let before = tree.clone();

        assert_eq!(
            tree.update(3, 5),
            Err(RangeError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            tree.add(7, 1),
            Err(RangeError::OutOfRange { index: 7, len: 3 })
        );
        assert_eq!(tree, before);
    }

    #[test]
    fn test_empty() {
        let mut tree: FenwickTree<i64> = FenwickTree::new(vec![]);
        assert!(tree.is_empty());
        assert_eq!(tree.prefix_sum(0), Err(RangeError::Empty));
        assert_eq!(tree.update(0, 1), Err(RangeError::Empty));
        assert_eq!(tree.sum(..), Err(RangeError::Empty));
        assert_eq!(tree.index_of(1), 0);
    }

    #[test]
    fn test_index_of() {
        let lengths: Vec<usize> = vec![1, 6, 3, 9, 2];
        let fenwick_array = FenwickTree::new(lengths);

        let cases: Vec<(usize, usize)> =
            vec![(0, 0), (1, 0), (2, 1), (6, 1), (9, 2), (18, 3), (20, 4), (21, 4), (22, 5)];

        cases
            .into_iter()
            .for_each(|(prefix_sum, idx)| assert_eq!(fenwick_array.index_of(prefix_sum), idx))
    }

    #[test]
    fn test_index_of_after_updates() {
        let mut tree = FenwickTree::new([0usize; 9]);
        tree.update(4, 3).unwrap();
        tree.add(7, 2).unwrap();

        assert_eq!(tree.index_of(1), 4);
        assert_eq!(tree.index_of(3), 4);
        assert_eq!(tree.index_of(4), 7);
        assert_eq!(tree.index_of(6), 9);
    }
}
