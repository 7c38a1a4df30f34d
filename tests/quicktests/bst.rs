use arbor::binary_tree;
use arbor::bst::{validate_bst, Bst};

use std::collections::{BTreeSet, HashSet};

use crate::{init_tracing, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Bst<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
        if !bst.is_valid() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_tracing();
    let mut tree = Bst::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && tree.in_order().into_iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Bst<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Bst<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Bst<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
        && tree.is_valid()
}

#[quickcheck]
fn traversals_of_a_bst(xs: Vec<i8>) -> bool {
    let tree: Bst<_> = xs.iter().copied().collect();
    let root = tree.root();
    let sorted: BTreeSet<_> = xs.iter().collect();

    binary_tree::inorder_recursive(root).into_iter().eq(sorted.iter().copied())
        && binary_tree::size(root) == tree.len()
        && binary_tree::height(root) < tree.len() as isize
}

#[quickcheck]
fn level_order_rebuilds_an_equivalent_bst(xs: Vec<i8>) -> bool {
    let tree: Bst<_> = xs.into_iter().collect();
    let slots = binary_tree::to_level_order(tree.root());
    let rebuilt = binary_tree::from_level_order(slots).unwrap();

    validate_bst(rebuilt.as_deref())
        && binary_tree::inorder_iterative(rebuilt.as_deref()) == tree.in_order()
}

#[test]
fn reference_usage() {
    init_tracing();
    let mut tree: Bst<_> = [7, 3, 9, 1, 5, 8, 10].into_iter().collect();

    assert_eq!(tree.search(&5).map(|n| n.value), Some(5));
    assert_eq!(tree.kth_smallest(3), Ok(&5));
    assert!(tree.is_valid());

    tree.delete(&7);
    assert_eq!(
        binary_tree::render(tree.root()),
        "\
└── 8
    ├── 3
    │   ├── 1
    │   └── 5
    └── 9
        └── 10
"
    );
}
