//! This crate exposes classic tree structures and the algorithms that go with them,
//! mostly for educational purposes.
//!
//! ## Binary trees
//!
//! A binary tree is built out of [`BinaryNode`][node::BinaryNode]s, each of which owns up to two
//! children. The free functions in [`binary_tree`] compute structural properties (size, height,
//! balance, diameter), walk the tree in pre-, in-, post- and level order, enumerate root-to-leaf
//! paths and find lowest common ancestors. Trees can be read from and written to the usual
//! breadth-first "slot list" where `None` marks a missing child.
//!
//! ## Binary Search Tree
//!
//! [`Bst`][bst::Bst] keeps values in a binary tree such that:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Searching then takes `O(height)`. This tree does not rebalance itself, so its height depends
//! entirely on insertion order.
//!
//! ## Trie
//!
//! [`Trie`][trie::Trie] stores words symbol by symbol so that words sharing a prefix share the
//! nodes for it. Deleting a word prunes exactly the nodes no other word needs.
//!
//! ## Segment tree
//!
//! [`SegmentTree`][segment_tree::SegmentTree] keeps partial sums of a fixed-length array in a
//! flat, heap-ordered array for `O(lg N)` point updates and range sums.
//!
//! ## N-ary trees
//!
//! [`nary`] walks trees of [`NaryNode`][node::NaryNode]s with any number of ordered children.
//!
//! None of these structures synchronize internally. Share them across threads behind a lock.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary_tree;
pub mod bst;
pub mod error;
pub mod nary;
pub mod node;
pub mod segment_tree;
pub mod trie;

mod util;


pub use error::{Result, TreeError};
