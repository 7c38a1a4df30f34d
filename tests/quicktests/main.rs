use quickcheck::{Arbitrary, Gen};

#[macro_use]
extern crate quickcheck_macros;

mod bst;
mod level_order;
mod segment_tree;
mod trie;

/// An enum for the various kinds of "things" to do to
/// a set-like tree in a quicktest.
#[derive(Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Remove the K from the data structure
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}

/// Routes `tracing` output through the test harness. Set `RUST_LOG=arbor=trace` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
