//! An array-backed segment tree answering range sums with point updates, both in `O(lg N)`.
//!
//! The backing array has `2 * size` slots where `size` is the smallest power of two holding
//! every input value. Slot 1 is the root, slots `[size, size + len)` are the leaves and every
//! slot `i` below `size` holds the sum of slots `2i` and `2i + 1`. Slot 0 is unused.
//!
//! # Examples
//!
//! ```
//! use arbor::segment_tree::SegmentTree;
//!
//! let mut tree = SegmentTree::new(&[1, 3, 5, 7, 9, 11]);
//! assert_eq!(tree.range_sum(1, 3), Ok(15));
//!
//! tree.update(2, 6).unwrap();
//! assert_eq!(tree.range_sum(1, 3), Ok(16));
//! ```

use std::ops::Add;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};

/// Range sums over a fixed-length array of `T`. `T::default()` acts as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawSegmentTree<T>",
        bound(
            deserialize = "T: Copy + Default + std::ops::Add<Output = T> + serde::Deserialize<'de>"
        )
    )
)]
pub struct SegmentTree<T> {
    tree: Vec<T>,
    /// Number of leaves, a power of two.
    size: usize,
    /// Number of leaves backed by input values.
    len: usize,
}

impl<T> SegmentTree<T>
where
    T: Copy + Default + Add<Output = T>,
{
    /// Builds the tree in `O(N)`: leaves are copied from `values`, padding leaves are zero and
    /// every internal slot is filled in one backward pass.
    pub fn new(values: &[T]) -> Self {
        let len = values.len();
        let size = len.next_power_of_two();

        let mut tree = vec![T::default(); 2 * size];
        tree[size..size + len].copy_from_slice(values);
        for i in (1..size).rev() {
            tree[i] = tree[2 * i] + tree[2 * i + 1];
        }

        debug!(len, size, "built segment tree");
        Self { tree, size, len }
    }

    /// Number of values in the logical array.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the logical array is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The value at `index`, if it is in bounds.
    pub fn get(&self, index: usize) -> Option<T> {
        if index < self.len {
            Some(self.tree[self.size + index])
        } else {
            None
        }
    }

    /// Overwrites the value at `index` and recomputes each of its ancestors.
    ///
    /// # Errors
    ///
    /// [`TreeError::IndexOutOfBounds`] if `index >= len`.
    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        self.check_bounds(index)?;

        let mut i = self.size + index;
        self.tree[i] = value;
        i /= 2;
        while i >= 1 {
            self.tree[i] = self.tree[2 * i] + self.tree[2 * i + 1];
            i /= 2;
        }

        trace!(index, "updated segment tree leaf");
        Ok(())
    }

    /// Sum of the values at `low..=high`.
    ///
    /// Walks up from both leaves at once. Whenever the low end is a right child it is folded in
    /// and stepped right, and whenever the high end is a left child it is folded in and stepped
    /// left, so that only whole subtrees inside the range are ever added.
    ///
    /// # Errors
    ///
    /// [`TreeError::IndexOutOfBounds`] if either end is `>= len`, and
    /// [`TreeError::InvalidRange`] if `low > high`.
    pub fn range_sum(&self, low: usize, high: usize) -> Result<T> {
        self.check_bounds(low)?;
        self.check_bounds(high)?;
        if low > high {
            return Err(TreeError::InvalidRange { low, high });
        }

        let mut low = self.size + low;
        let mut high = self.size + high;
        let mut sum = T::default();
        while low <= high {
            if low % 2 == 1 {
                sum = sum + self.tree[low];
                low += 1;
            }
            if high % 2 == 0 {
                sum = sum + self.tree[high];
                high -= 1;
            }
            low /= 2;
            high /= 2;
        }

        Ok(sum)
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(TreeError::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

/// A [`SegmentTree`] as it arrives off the wire. Only the shape and the leaves are trusted; the
/// internal sums are recomputed.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSegmentTree<T> {
    tree: Vec<T>,
    size: usize,
    len: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawSegmentTree<T>> for SegmentTree<T>
where
    T: Copy + Default + Add<Output = T>,
{
    type Error = TreeError;

    fn try_from(raw: RawSegmentTree<T>) -> Result<Self> {
        let malformed = |reason| TreeError::Malformed {
            structure: "segment tree",
            reason,
        };

        if raw.len.checked_next_power_of_two() != Some(raw.size) {
            return Err(malformed("leaf count is not the next power of two of the length"));
        }
        if raw.size.checked_mul(2) != Some(raw.tree.len()) {
            return Err(malformed("backing array is not twice the leaf count"));
        }

        Ok(Self::new(&raw.tree[raw.size..raw.size + raw.len]))
    }
}

impl<T> FromIterator<T> for SegmentTree<T>
where
    T: Copy + Default + Add<Output = T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        Self::new(&values)
    }
}
