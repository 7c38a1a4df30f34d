use arbor::trie::Trie;

use std::collections::BTreeSet;

use crate::{init_tracing, Op};

#[quickcheck]
fn search_only_finds_live_words(ops: Vec<Op<String>>) -> bool {
    init_tracing();
    let mut trie = Trie::new();
    let mut live = BTreeSet::new();

    for op in &ops {
        match op {
            Op::Insert(word) => {
                trie.insert(word.chars());
                live.insert(word.clone());
            }
            Op::Remove(word) => {
                trie.delete(word.chars());
                live.remove(word);
            }
        }
    }

    ops.iter().all(|op| {
        let word = match op {
            Op::Insert(word) | Op::Remove(word) => word,
        };
        trie.search(word.chars()) == live.contains(word)
    }) && trie.len() == live.len()
}

#[quickcheck]
fn every_prefix_of_a_word_is_a_prefix(words: Vec<String>) -> bool {
    let trie: Trie = words.iter().map(|word| word.chars()).collect();

    words.iter().all(|word| {
        word.char_indices()
            .all(|(end, _)| trie.starts_with(word[..end].chars()))
    })
}

#[quickcheck]
fn delete_all_leaves_only_root(words: Vec<String>) -> bool {
    let mut trie: Trie = words.iter().map(|word| word.chars()).collect();
    for word in &words {
        trie.delete(word.chars());
    }

    trie.is_empty() && trie.node_count() == 1
}

#[test]
fn reference_usage() {
    let mut trie = Trie::new();
    for word in ["cat", "car", "cart", "dog"] {
        trie.insert(word.chars());
    }

    assert!(trie.search("car".chars()));
    assert!(trie.starts_with("ca".chars()));
    assert!(trie.delete("car".chars()));
    assert!(!trie.search("car".chars()));
    assert!(trie.search("cart".chars()));
    assert!(trie.search("cat".chars()));
}
