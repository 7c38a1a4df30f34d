//! Traversals over general trees of [`NaryNode`]s.
//!
//! ```
//! use arbor::nary::{bfs, dfs};
//! use arbor::node::NaryNode;
//!
//! let root = NaryNode::new(
//!     1,
//!     vec![NaryNode::new(2, vec![NaryNode::leaf(4)]), NaryNode::leaf(3)],
//! );
//!
//! assert_eq!(dfs(Some(&root)), vec![&1, &2, &4, &3]);
//! assert_eq!(bfs(Some(&root)), vec![&1, &2, &3, &4]);
//! ```

use std::collections::VecDeque;

use crate::node::NaryNode;

/// Pre-order: a node, then each child's subtree in order.
pub fn dfs<T>(root: Option<&NaryNode<T>>) -> Vec<&T> {
    fn walk<'a, T>(node: &'a NaryNode<T>, out: &mut Vec<&'a T>) {
        out.push(&node.value);
        for child in &node.children {
            walk(child, out);
        }
    }

    let mut out = Vec::new();
    if let Some(root) = root {
        walk(root, &mut out);
    }
    out
}

/// Level order, without grouping by depth.
pub fn bfs<T>(root: Option<&NaryNode<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&NaryNode<T>> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        out.push(&node.value);
        queue.extend(&node.children);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree() {
        assert!(dfs::<i32>(None).is_empty());
        assert!(bfs::<i32>(None).is_empty());
    }

    #[test]
    fn wide_and_deep() {
        //        a
        //     /  |  \
        //    b   c   d
        //   / \      |
        //  e   f     g
        //            |
        //            h
        let root = NaryNode::new(
            'a',
            vec![
                NaryNode::new('b', vec![NaryNode::leaf('e'), NaryNode::leaf('f')]),
                NaryNode::leaf('c'),
                NaryNode::new('d', vec![NaryNode::new('g', vec![NaryNode::leaf('h')])]),
            ],
        );

        let pre: String = dfs(Some(&root)).into_iter().collect();
        let level: String = bfs(Some(&root)).into_iter().collect();
        assert_eq!(pre, "abefcdgh");
        assert_eq!(level, "abcdefgh");
    }
}
