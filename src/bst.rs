//! An unbalanced Binary Search Tree of unique values built from owned [`BinaryNode`]s.
//!
//! Nothing rebalances the tree, so inserting already sorted values degrades it into a linked
//! list with `O(N)` operations.
//!
//! # Examples
//!
//! ```
//! use arbor::bst::Bst;
//!
//! let mut tree: Bst<_> = [7, 3, 9, 1, 5, 8, 10].into_iter().collect();
//!
//! assert!(tree.contains(&5));
//! assert_eq!(tree.kth_smallest(3), Ok(&5));
//!
//! // Inserting a value that is already present changes nothing.
//! assert!(!tree.insert(5));
//!
//! // Deleting a value gives it back.
//! assert_eq!(tree.delete(&7), Some(7));
//! assert_eq!(tree.delete(&7), None);
//! assert!(tree.is_valid());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::binary_tree;
use crate::error::{Result, TreeError};
use crate::node::{BinaryNode, Link};

/// A Binary Search Tree holding each value at most once. For every node, all values in its left
/// subtree are strictly smaller and all values in its right subtree strictly greater.
pub struct Bst<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Bst<T> {
    // Dropping a `Box` chain recurses once per level which a degenerate tree can turn into a stack
    // overflow, so nodes are detached onto a heap stack first.
    fn drop(&mut self) {
        let mut stack: Vec<Box<BinaryNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Bst<T>
where
    T: Clone,
{
    // The derived `BinaryNode::clone` recurses once per level, so like `drop` this works off a
    // heap stack: nodes are visited parent first and rebuilt children first.
    fn clone(&self) -> Self {
        let mut order = Vec::with_capacity(self.len);
        let mut stack: Vec<&BinaryNode<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(node.left());
            stack.extend(node.right());
        }

        let mut built: Vec<Box<BinaryNode<T>>> = Vec::new();
        for node in order.into_iter().rev() {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(BinaryNode::with_children(
                node.value.clone(),
                left,
                right,
            )));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Bst<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<T> Bst<T> {
    /// Generate a new, empty `Bst`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of values stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, for use with the algorithms in [`binary_tree`].
    pub fn root(&self) -> Option<&BinaryNode<T>> {
        self.root.as_deref()
    }

    /// All values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        binary_tree::inorder_iterative(self.root())
    }

    /// The smallest value, if any.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value, if any.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }
}

impl<T> Bst<T>
where
    T: Ord,
{
    /// Finds the node holding `key` in `O(height)` comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| n.value), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &T) -> Option<&BinaryNode<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether `key` is stored in the tree.
    pub fn contains(&self, key: &T) -> bool {
        self.search(key).is_some()
    }

    /// Inserts `key` as a new leaf. Returns `false`, leaving the tree untouched, if it was already
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        *slot = BinaryNode::new(key).into_link();
        self.len += 1;
        trace!(len = self.len, "inserted bst node");
        true
    }

    /// Deletes `key` from the tree and returns it. If the tree does not contain `key`, nothing
    /// happens and `None` is returned.
    ///
    /// A node with two children takes over its in-order successor's value, and the successor's
    /// own node is unlinked in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::bst::Bst;
    ///
    /// let mut tree: Bst<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.root().map(|n| n.value), Some(3));
    /// assert_eq!(tree.delete(&2), None);
    /// ```
    pub fn delete(&mut self, key: &T) -> Option<T> {
        let deleted = delete_from(&mut self.root, key)?;
        self.len -= 1;
        trace!(len = self.len, "deleted bst node");
        Some(deleted)
    }

    /// The `k`th smallest value, counting from 1.
    ///
    /// # Errors
    ///
    /// [`TreeError::RankOutOfRange`] if `k` is 0 or larger than [`len`][Self::len].
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::bst::Bst;
    /// use arbor::TreeError;
    ///
    /// let tree: Bst<_> = [20, 10, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.kth_smallest(1), Ok(&10));
    /// assert_eq!(tree.kth_smallest(4), Err(TreeError::RankOutOfRange { k: 4, len: 3 }));
    /// ```
    pub fn kth_smallest(&self, k: usize) -> Result<&T> {
        let out_of_range = TreeError::RankOutOfRange { k, len: self.len };
        if k == 0 || k > self.len {
            return Err(out_of_range);
        }

        let mut remaining = k;
        let mut stack = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let node = stack.pop().ok_or(out_of_range)?;
            remaining -= 1;
            if remaining == 0 {
                return Ok(&node.value);
            }
            current = node.right();
        }
    }

    /// Checks the ordering invariant over the whole tree. See [`validate_bst`].
    pub fn is_valid(&self) -> bool {
        validate_bst(self.root())
    }
}

impl<T> FromIterator<T> for Bst<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Bst<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// Whether the tree rooted at `root` is a valid BST: every value lies strictly between the
/// bounds set by its ancestors.
///
/// ```
/// use arbor::binary_tree::from_level_order;
/// use arbor::bst::validate_bst;
///
/// let good = from_level_order(vec![Some(2), Some(1), Some(3)]).unwrap();
/// let bad = from_level_order(vec![Some(5), Some(1), Some(6), None, None, Some(3)]).unwrap();
///
/// assert!(validate_bst(good.as_deref()));
/// assert!(!validate_bst(bad.as_deref()));
/// ```
pub fn validate_bst<T>(root: Option<&BinaryNode<T>>) -> bool
where
    T: Ord,
{
    within(root, None, None)
}

fn within<T>(node: Option<&BinaryNode<T>>, low: Option<&T>, high: Option<&T>) -> bool
where
    T: Ord,
{
    let node = match node {
        Some(node) => node,
        None => return true,
    };
    if low.map_or(false, |low| node.value <= *low) || high.map_or(false, |high| node.value >= *high)
    {
        return false;
    }
    within(node.left(), low, Some(&node.value)) && within(node.right(), Some(&node.value), high)
}

/// Removes `key` from the subtree owned by `link`, returning it if it was there.
fn delete_from<T>(link: &mut Link<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let node = link.as_mut()?;
    match key.cmp(&node.value) {
        Ordering::Less => delete_from(&mut node.left, key),
        Ordering::Greater => delete_from(&mut node.right, key),
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            let successor = take_min(&mut node.right)?;
            Some(mem::replace(&mut node.value, successor))
        }
        Ordering::Equal => {
            let BinaryNode { value, left, right } = *link.take()?;
            *link = left.or(right);
            Some(value)
        }
    }
}

/// Unlinks the leftmost node of the subtree owned by `link`, handing its right child up to its
/// parent, and returns its value.
fn take_min<T>(link: &mut Link<T>) -> Option<T> {
    if link.as_ref()?.left.is_some() {
        return take_min(&mut link.as_mut()?.left);
    }
    let BinaryNode { value, right, .. } = *link.take()?;
    *link = right;
    Some(value)
}
