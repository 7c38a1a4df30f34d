use arbor::binary_tree::{
    find, from_level_order, height, level_order, lowest_common_ancestor, to_level_order,
    zigzag_level_order,
};
use arbor::node::BinaryNode;

/// Builds a tree from the longest prefix of `slots` that is a valid level-order list.
fn tree_from(slots: &[Option<u8>]) -> Option<Box<BinaryNode<u8>>> {
    (0..=slots.len())
        .rev()
        .find_map(|end| from_level_order(slots[..end].to_vec()).ok())
        .flatten()
}

#[quickcheck]
fn serialization_round_trips(slots: Vec<Option<u8>>) -> bool {
    let tree = tree_from(&slots);
    let serialized = to_level_order(tree.as_deref());
    let rebuilt = from_level_order(serialized.clone()).unwrap();

    to_level_order(rebuilt.as_deref()) == serialized
        && serialized.last().map_or(true, Option::is_some)
}

#[quickcheck]
fn zigzag_keeps_level_grouping(slots: Vec<Option<u8>>) -> bool {
    let tree = tree_from(&slots);
    let root = tree.as_deref();
    let levels = level_order(root);
    let zigzag = zigzag_level_order(root);

    levels.len() as isize == height(root) + 1
        && levels.iter().zip(&zigzag).enumerate().all(|(depth, (level, zig))| {
            if depth % 2 == 0 {
                level == zig
            } else {
                level.iter().rev().eq(zig.iter())
            }
        })
}

#[quickcheck]
fn root_is_an_ancestor_of_everything(slots: Vec<Option<u8>>) -> bool {
    let tree = tree_from(&slots);
    let root = match tree.as_deref() {
        Some(root) => root,
        None => return true,
    };

    lowest_common_ancestor(Some(root), root, root).map_or(false, |lca| std::ptr::eq(lca, root))
        && root.left().map_or(true, |left| {
            root.right().map_or(true, |right| {
                lowest_common_ancestor(Some(root), left, right)
                    .map_or(false, |lca| std::ptr::eq(lca, root))
            })
        })
}

#[test]
fn reference_lca() {
    let tree = from_level_order(vec![
        Some(1),
        Some(2),
        Some(3),
        None,
        Some(4),
        Some(5),
        Some(6),
    ])
    .unwrap();
    let root = tree.as_deref();
    let four = find(root, &4).unwrap();
    let five = find(root, &5).unwrap();
    let two = find(root, &2).unwrap();

    // 4 sits under 2 and 5 under 3, so they only meet at the root.
    let lca = lowest_common_ancestor(root, four, five).unwrap();
    assert!(std::ptr::eq(lca, root.unwrap()));

    let lca = lowest_common_ancestor(root, four, two).unwrap();
    assert!(std::ptr::eq(lca, two));
}
