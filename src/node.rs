//! Owned node types shared by the linked trees in this crate.
//!
//! Every node is owned by exactly one parent (or by the structure holding the root). There are
//! no parent pointers; algorithms that need ancestor context carry it themselves.

/// An optional, exclusively owned child. `None` is the empty subtree.
pub type Link<T> = Option<Box<BinaryNode<T>>>;

/// A node of a binary tree. It owns both of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryNode<T> {
    /// The value stored at this node.
    pub value: T,
    /// The left subtree.
    pub left: Link<T>,
    /// The right subtree.
    pub right: Link<T>,
}

impl<T> BinaryNode<T> {
    /// Construct a node with no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Construct a node owning the given subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::node::BinaryNode;
    ///
    /// let node = BinaryNode::with_children(
    ///     2,
    ///     Some(Box::new(BinaryNode::new(1))),
    ///     Some(Box::new(BinaryNode::new(3))),
    /// );
    ///
    /// assert_eq!(node.left().map(|n| n.value), Some(1));
    /// assert!(!node.is_leaf());
    /// ```
    pub fn with_children(value: T, left: Link<T>, right: Link<T>) -> Self {
        Self { value, left, right }
    }

    /// Wraps this node into a [`Link`].
    pub fn into_link(self) -> Link<T> {
        Some(Box::new(self))
    }

    /// A node with no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Borrows the left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Borrows the right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// A node of a general tree. Children are visited in the order they are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NaryNode<T> {
    /// The value stored at this node.
    pub value: T,
    /// Owned children, in traversal order.
    pub children: Vec<NaryNode<T>>,
}

impl<T> NaryNode<T> {
    /// Construct a node owning `children`.
    pub fn new(value: T, children: Vec<NaryNode<T>>) -> Self {
        Self { value, children }
    }

    /// Construct a node with no children.
    pub fn leaf(value: T) -> Self {
        Self::new(value, Vec::new())
    }
}
