//! Algorithms over plain binary trees made of [`BinaryNode`]s.
//!
//! Every function takes the root as an `Option<&BinaryNode<T>>`, with `None` standing for the
//! empty tree, so they work equally well on a detached subtree or on the root of a
//! [`Bst`][crate::bst::Bst].
//!
//! # Examples
//!
//! ```
//! use arbor::binary_tree::{self, from_level_order};
//!
//! //     1
//! //    / \
//! //   2   3
//! //    \
//! //     4
//! let tree = from_level_order(vec![Some(1), Some(2), Some(3), None, Some(4)]).unwrap();
//! let root = tree.as_deref();
//!
//! assert_eq!(binary_tree::size(root), 4);
//! assert_eq!(binary_tree::height(root), 2);
//! assert_eq!(binary_tree::inorder_recursive(root), vec![&2, &4, &1, &3]);
//! assert_eq!(binary_tree::to_level_order(root), vec![Some(1), Some(2), Some(3), None, Some(4)]);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::ops::Add;
use std::ptr;

use crate::error::{Result, TreeError};
use crate::node::{BinaryNode, Link};

/// Number of nodes in the tree.
pub fn size<T>(root: Option<&BinaryNode<T>>) -> usize {
    root.map_or(0, |node| 1 + size(node.left()) + size(node.right()))
}

/// Number of edges on the longest downward path from the root. The empty tree has height -1 and
/// a lone leaf has height 0.
pub fn height<T>(root: Option<&BinaryNode<T>>) -> isize {
    root.map_or(-1, |node| 1 + height(node.left()).max(height(node.right())))
}

/// Whether, for every node, the heights of its two subtrees differ by at most one.
pub fn is_balanced<T>(root: Option<&BinaryNode<T>>) -> bool {
    balanced_height(root).is_some()
}

/// Height of a balanced subtree, or `None` as soon as any imbalance is found below.
fn balanced_height<T>(node: Option<&BinaryNode<T>>) -> Option<isize> {
    let node = match node {
        Some(node) => node,
        None => return Some(-1),
    };
    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;

    if (left - right).abs() > 1 {
        return None;
    }
    Some(1 + left.max(right))
}

/// Number of edges on the longest path between any two nodes. 0 for the empty tree.
pub fn diameter<T>(root: Option<&BinaryNode<T>>) -> usize {
    let mut longest = 0;
    longest_arm(root, &mut longest);
    longest
}

/// Post-order helper for [`diameter`]. Returns the height of `node` while folding the longest
/// path bending at `node` into `longest`.
fn longest_arm<T>(node: Option<&BinaryNode<T>>, longest: &mut usize) -> isize {
    let node = match node {
        Some(node) => node,
        None => return -1,
    };
    let left = longest_arm(node.left(), longest);
    let right = longest_arm(node.right(), longest);

    // Both heights are at least -1 so this is never negative.
    let through = (left + right + 2) as usize;
    *longest = (*longest).max(through);

    1 + left.max(right)
}

/// Node, left subtree, right subtree.
pub fn preorder_recursive<T>(root: Option<&BinaryNode<T>>) -> Vec<&T> {
    fn walk<'a, T>(node: Option<&'a BinaryNode<T>>, out: &mut Vec<&'a T>) {
        if let Some(node) = node {
            out.push(&node.value);
            walk(node.left(), out);
            walk(node.right(), out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Left subtree, node, right subtree.
pub fn inorder_recursive<T>(root: Option<&BinaryNode<T>>) -> Vec<&T> {
    fn walk<'a, T>(node: Option<&'a BinaryNode<T>>, out: &mut Vec<&'a T>) {
        if let Some(node) = node {
            walk(node.left(), out);
            out.push(&node.value);
            walk(node.right(), out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Left subtree, right subtree, node.
pub fn postorder_recursive<T>(root: Option<&BinaryNode<T>>) -> Vec<&T> {
    fn walk<'a, T>(node: Option<&'a BinaryNode<T>>, out: &mut Vec<&'a T>) {
        if let Some(node) = node {
            walk(node.left(), out);
            walk(node.right(), out);
            out.push(&node.value);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Same order as [`preorder_recursive`] using an explicit stack.
pub fn preorder_iterative<T>(root: Option<&BinaryNode<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    let mut stack: Vec<&BinaryNode<T>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        out.push(&node.value);
        // Right goes on first so left comes off first.
        stack.extend(node.right());
        stack.extend(node.left());
    }

    out
}

/// Same order as [`inorder_recursive`] using an explicit stack.
pub fn inorder_iterative<T>(root: Option<&BinaryNode<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;

    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        match stack.pop() {
            Some(node) => {
                out.push(&node.value);
                current = node.right();
            }
            None => break,
        }
    }

    out
}

/// Same order as [`postorder_recursive`] using an explicit stack. Visits node, right, left and
/// reverses the result.
pub fn postorder_iterative<T>(root: Option<&BinaryNode<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    let mut stack: Vec<&BinaryNode<T>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        out.push(&node.value);
        stack.extend(node.left());
        stack.extend(node.right());
    }

    out.reverse();
    out
}

/// Values grouped by depth, each level read left to right.
pub fn level_order<T>(root: Option<&BinaryNode<T>>) -> Vec<Vec<&T>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<&BinaryNode<T>> = root.into_iter().collect();

    while !queue.is_empty() {
        let width = queue.len();
        let mut level = Vec::with_capacity(width);
        for _ in 0..width {
            if let Some(node) = queue.pop_front() {
                level.push(&node.value);
                queue.extend(node.left());
                queue.extend(node.right());
            }
        }
        levels.push(level);
    }

    levels
}

/// Like [`level_order`] but every odd depth is read right to left.
pub fn zigzag_level_order<T>(root: Option<&BinaryNode<T>>) -> Vec<Vec<&T>> {
    let mut levels = level_order(root);
    levels
        .iter_mut()
        .skip(1)
        .step_by(2)
        .for_each(|level| level.reverse());
    levels
}

/// Every path from the root down to a leaf, left paths first.
pub fn root_to_leaf_paths<T>(root: Option<&BinaryNode<T>>) -> Vec<Vec<&T>> {
    fn walk<'a, T>(
        node: Option<&'a BinaryNode<T>>,
        path: &mut Vec<&'a T>,
        paths: &mut Vec<Vec<&'a T>>,
    ) {
        let node = match node {
            Some(node) => node,
            None => return,
        };
        path.push(&node.value);
        if node.is_leaf() {
            paths.push(path.clone());
        } else {
            walk(node.left(), path, paths);
            walk(node.right(), path, paths);
        }
        path.pop();
    }

    let mut paths = Vec::new();
    walk(root, &mut Vec::new(), &mut paths);
    paths
}

/// Whether the values along some root-to-leaf path add up to exactly `target`. Never true for
/// the empty tree.
///
/// # Panics
///
/// Sums use `T`'s own `+`, so a path whose integer sum overflows panics in debug builds even if
/// `target` could never be reached. Pick a wider `T`, or [`std::num::Wrapping`] for modular sums.
///
/// ```
/// use std::num::Wrapping;
///
/// use arbor::binary_tree::has_path_sum;
/// use arbor::node::BinaryNode;
///
/// let root = BinaryNode::with_children(
///     Wrapping(i32::MAX),
///     BinaryNode::new(Wrapping(1)).into_link(),
///     None,
/// );
/// assert!(has_path_sum(Some(&root), Wrapping(i32::MIN)));
/// ```
pub fn has_path_sum<T>(root: Option<&BinaryNode<T>>, target: T) -> bool
where
    T: Copy + Add<Output = T> + PartialEq,
{
    fn walk<T>(node: &BinaryNode<T>, so_far: Option<T>, target: T) -> bool
    where
        T: Copy + Add<Output = T> + PartialEq,
    {
        let sum = so_far.map_or(node.value, |so_far| so_far + node.value);
        if node.is_leaf() {
            return sum == target;
        }
        node.left().map_or(false, |left| walk(left, Some(sum), target))
            || node.right().map_or(false, |right| walk(right, Some(sum), target))
    }

    root.map_or(false, |root| walk(root, None, target))
}

/// The first node, in pre-order, whose value equals `value`.
///
/// Handy for getting hold of the node handles [`lowest_common_ancestor`] expects.
pub fn find<'a, T>(root: Option<&'a BinaryNode<T>>, value: &T) -> Option<&'a BinaryNode<T>>
where
    T: PartialEq,
{
    let node = root?;
    if node.value == *value {
        return Some(node);
    }
    find(node.left(), value).or_else(|| find(node.right(), value))
}

/// The deepest node having both `p` and `q` in its subtree. A node counts as its own ancestor.
///
/// `p` and `q` are matched by identity, not by value, so trees holding duplicate values are
/// fine. Both must be nodes reachable from `root`: if either is missing the result is
/// unspecified (it may be `None`, or the one node that was found).
///
/// # Examples
///
/// ```
/// use arbor::binary_tree::{find, from_level_order, lowest_common_ancestor};
///
/// let tree = from_level_order(vec![Some(3), Some(5), Some(1), Some(6), Some(2)]).unwrap();
/// let root = tree.as_deref();
/// let six = find(root, &6).unwrap();
/// let two = find(root, &2).unwrap();
///
/// let lca = lowest_common_ancestor(root, six, two).unwrap();
/// assert_eq!(lca.value, 5);
/// ```
pub fn lowest_common_ancestor<'a, T>(
    root: Option<&'a BinaryNode<T>>,
    p: &BinaryNode<T>,
    q: &BinaryNode<T>,
) -> Option<&'a BinaryNode<T>> {
    let node = root?;
    if ptr::eq(node, p) || ptr::eq(node, q) {
        return Some(node);
    }

    let left = lowest_common_ancestor(node.left(), p, q);
    let right = lowest_common_ancestor(node.right(), p, q);
    match (left, right) {
        (Some(_), Some(_)) => Some(node),
        (found, None) | (None, found) => found,
    }
}

/// Builds a tree from a breadth-first slot list where `None` marks a missing child.
///
/// The first slot is the root. After that, each node taken off the queue consumes the next two
/// slots as its left and right child; present children join the back of the queue. A list that
/// ends after a left slot leaves the right child absent.
///
/// # Errors
///
/// [`TreeError::OrphanedSlot`] if a slot holds a value once no node is left to adopt it (this
/// includes any value following an absent root).
pub fn from_level_order<T, I>(slots: I) -> Result<Link<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    let mut slots = slots.into_iter().enumerate();
    let root = match slots.next() {
        Some((_, Some(value))) => value,
        Some((_, None)) => return reject_orphans(slots).map(|()| None),
        None => return Ok(None),
    };

    // Shape first, using indices into `values`, so nodes can be owned bottom-up afterwards.
    let mut values = vec![root];
    let mut children: Vec<[Option<usize>; 2]> = vec![[None, None]];
    let mut pending = VecDeque::from([0]);

    'parents: while let Some(parent) = pending.pop_front() {
        for side in 0..2 {
            let slot = match slots.next() {
                Some((_, slot)) => slot,
                None => break 'parents,
            };
            if let Some(value) = slot {
                let id = values.len();
                values.push(value);
                children.push([None, None]);
                children[parent][side] = Some(id);
                pending.push_back(id);
            }
        }
    }
    reject_orphans(slots)?;

    // A child's id is always larger than its parent's.
    let mut built: Vec<Link<T>> = Vec::with_capacity(values.len());
    built.resize_with(values.len(), || None);
    for (id, value) in values.into_iter().enumerate().rev() {
        let [left, right] = children[id];
        let left = left.and_then(|child| built[child].take());
        let right = right.and_then(|child| built[child].take());
        built[id] = BinaryNode::with_children(value, left, right).into_link();
    }

    Ok(built.into_iter().next().flatten())
}

fn reject_orphans<T>(mut rest: impl Iterator<Item = (usize, Option<T>)>) -> Result<()> {
    match rest.find(|(_, slot)| slot.is_some()) {
        Some((position, _)) => Err(TreeError::OrphanedSlot { position }),
        None => Ok(()),
    }
}

/// The inverse of [`from_level_order`]: a breadth-first slot list with trailing `None`s trimmed.
pub fn to_level_order<T>(root: Option<&BinaryNode<T>>) -> Vec<Option<T>>
where
    T: Clone,
{
    let mut slots = Vec::new();
    let mut queue = VecDeque::new();
    if root.is_some() {
        queue.push_back(root);
    }

    while let Some(slot) = queue.pop_front() {
        match slot {
            Some(node) => {
                slots.push(Some(node.value.clone()));
                queue.push_back(node.left());
                queue.push_back(node.right());
            }
            None => slots.push(None),
        }
    }

    while slots.last().map_or(false, Option::is_none) {
        slots.pop();
    }
    slots
}

/// Draws the tree sideways, one node per line. Empty string for the empty tree.
///
/// ```
/// use arbor::binary_tree::{from_level_order, render};
///
/// let tree = from_level_order(vec![Some(1), Some(2), Some(3)]).unwrap();
/// assert_eq!(render(tree.as_deref()), "└── 1\n    ├── 2\n    └── 3\n");
/// ```
pub fn render<T>(root: Option<&BinaryNode<T>>) -> String
where
    T: fmt::Display,
{
    root.map(ToString::to_string).unwrap_or_default()
}

impl<T> fmt::Display for BinaryNode<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        draw(self, "", true, f)
    }
}

fn draw<T>(node: &BinaryNode<T>, indent: &str, last: bool, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: fmt::Display,
{
    let connector = if last { "└── " } else { "├── " };
    writeln!(f, "{}{}{}", indent, connector, node.value)?;

    let indent = format!("{}{}", indent, if last { "    " } else { "│   " });
    if let Some(left) = node.left() {
        draw(left, &indent, false, f)?;
    }
    if let Some(right) = node.right() {
        draw(right, &indent, true, f)?;
    }
    Ok(())
}
