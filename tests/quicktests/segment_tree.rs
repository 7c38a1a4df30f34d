use arbor::segment_tree::SegmentTree;
use arbor::TreeError;

use crate::init_tracing;

#[quickcheck]
fn whole_range_is_total(values: Vec<i32>) -> bool {
    let values: Vec<i64> = values.into_iter().map(i64::from).collect();
    let tree = SegmentTree::new(&values);

    match values.len() {
        0 => tree.range_sum(0, 0).is_err(),
        n => tree.range_sum(0, n - 1) == Ok(values.iter().sum::<i64>()),
    }
}

#[quickcheck]
fn out_of_bounds_is_rejected(values: Vec<i32>, extra: usize) -> bool {
    let mut tree: SegmentTree<i64> = values.into_iter().map(i64::from).collect();
    let index = tree.len().saturating_add(extra % 1024);

    tree.update(index, 1) == Err(TreeError::IndexOutOfBounds { index, len: tree.len() })
        && tree.get(index).is_none()
}

#[test]
fn reference_usage() {
    init_tracing();
    let mut tree = SegmentTree::new(&[1, 3, 5, 7, 9, 11]);

    assert_eq!(tree.range_sum(1, 3), Ok(15));
    tree.update(2, 6).unwrap();
    assert_eq!(tree.range_sum(1, 3), Ok(16));
}
