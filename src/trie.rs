//! A prefix tree over sequences of symbols.
//!
//! Any ordered symbol type works as an alphabet; `char` is the default, so text is stored by
//! handing over `word.chars()`.
//!
//! # Examples
//!
//! ```
//! use arbor::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["cat", "car", "cart", "dog"] {
//!     trie.insert(word.chars());
//! }
//!
//! assert!(trie.search("car".chars()));
//! assert!(trie.starts_with("ca".chars()));
//! assert!(!trie.search("ca".chars()));
//!
//! // "car" goes, "cart" keeps its path alive.
//! assert!(trie.delete("car".chars()));
//! assert!(!trie.search("car".chars()));
//! assert!(trie.search("cart".chars()));
//! ```

use std::collections::BTreeMap;

use tracing::trace;

#[cfg(feature = "serde")]
use crate::error::TreeError;
use crate::util::DeleteResult;

/// One symbol position in a [`Trie`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "S: Ord + serde::Deserialize<'de>"))
)]
pub struct TrieNode<S> {
    children: BTreeMap<S, TrieNode<S>>,
    is_end: bool,
}

impl<S> Default for TrieNode<S> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            is_end: false,
        }
    }
}

impl<S> TrieNode<S> {
    /// Whether a stored word ends at this node.
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// The nodes one symbol further down.
    pub fn children(&self) -> &BTreeMap<S, TrieNode<S>> {
        &self.children
    }

    /// Number of nodes in this subtree, this one included.
    fn count(&self) -> usize {
        1 + self.children.values().map(Self::count).sum::<usize>()
    }

    /// A node that neither ends a word nor leads to one.
    fn is_prunable(&self) -> bool {
        !self.is_end && self.children.is_empty()
    }

    /// Number of words ending in this subtree, or `None` if a node below this one leads to no word.
    #[cfg(feature = "serde")]
    fn live_words(&self) -> Option<usize> {
        let mut words = usize::from(self.is_end);
        for child in self.children.values() {
            if child.is_prunable() {
                return None;
            }
            words += child.live_words()?;
        }
        Some(words)
    }

    fn after_delete(&self) -> DeleteResult {
        if self.is_prunable() {
            DeleteResult::Prune
        } else {
            DeleteResult::Keep
        }
    }
}

impl<S> TrieNode<S>
where
    S: Ord,
{
    /// Unmarks `word[depth..]` below this node, dropping any child left empty on the way back up.
    fn delete(&mut self, word: &[S], depth: usize) -> DeleteResult {
        let symbol = match word.get(depth) {
            Some(symbol) => symbol,
            None if self.is_end => {
                self.is_end = false;
                return self.after_delete();
            }
            None => return DeleteResult::NotFound,
        };
        let child = match self.children.get_mut(symbol) {
            Some(child) => child,
            None => return DeleteResult::NotFound,
        };

        match child.delete(word, depth + 1) {
            DeleteResult::Prune => {
                self.children.remove(symbol);
                trace!(depth = depth + 1, "pruned trie node");
                self.after_delete()
            }
            result => result,
        }
    }
}

/// A set of words stored by shared prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawTrie<S>",
        bound(deserialize = "S: Ord + serde::Deserialize<'de>")
    )
)]
pub struct Trie<S = char> {
    root: TrieNode<S>,
    len: usize,
}

/// A [`Trie`] as it arrives off the wire, before its shape is checked.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "S: Ord + serde::Deserialize<'de>"))]
struct RawTrie<S> {
    root: TrieNode<S>,
    len: usize,
}

#[cfg(feature = "serde")]
impl<S> TryFrom<RawTrie<S>> for Trie<S> {
    type Error = TreeError;

    fn try_from(raw: RawTrie<S>) -> Result<Self, Self::Error> {
        let malformed = |reason| TreeError::Malformed {
            structure: "trie",
            reason,
        };

        let words = raw
            .root
            .live_words()
            .ok_or_else(|| malformed("a node leads to no stored word"))?;
        if words != raw.len {
            return Err(malformed("length does not match the stored words"));
        }

        Ok(Self {
            root: raw.root,
            len: raw.len,
        })
    }
}

impl<S> Default for Trie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Trie<S> {
    /// Generate a new, empty `Trie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            len: 0,
        }
    }

    /// Number of words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no words are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The node for the empty prefix.
    pub fn root(&self) -> &TrieNode<S> {
        &self.root
    }

    /// Number of nodes, root included. A trie holding no words has exactly one.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}

impl<S> Trie<S>
where
    S: Ord,
{
    /// Stores `word`, creating a node for each symbol not already present. Returns `false` if the
    /// word was already stored.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: IntoIterator<Item = S>,
    {
        let mut node = &mut self.root;
        for symbol in word {
            node = node.children.entry(symbol).or_default();
        }
        if node.is_end {
            return false;
        }

        node.is_end = true;
        self.len += 1;
        true
    }

    /// Whether `word` itself was stored. Prefixes of stored words don't count.
    pub fn search<W>(&self, word: W) -> bool
    where
        W: IntoIterator<Item = S>,
    {
        self.node_at(word).map_or(false, TrieNode::is_end)
    }

    /// Whether some stored word begins with `prefix`. The empty prefix matches as soon as any
    /// word is stored.
    pub fn starts_with<W>(&self, prefix: W) -> bool
    where
        W: IntoIterator<Item = S>,
    {
        // Deletion prunes eagerly, so only the root can sit on a path with no word below it.
        self.node_at(prefix)
            .map_or(false, |node| node.is_end || !node.children.is_empty())
    }

    /// Removes `word`, pruning every node that no other word needs any more. Returns `false`,
    /// changing nothing, if `word` was not stored.
    ///
    /// ```
    /// use arbor::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("to".chars());
    /// trie.insert("tea".chars());
    ///
    /// assert!(!trie.delete("te".chars()));
    /// assert!(trie.delete("tea".chars()));
    /// // Only the root, 't' and 'o' remain.
    /// assert_eq!(trie.node_count(), 3);
    /// ```
    pub fn delete<W>(&mut self, word: W) -> bool
    where
        W: IntoIterator<Item = S>,
    {
        let word: Vec<S> = word.into_iter().collect();
        match self.root.delete(&word, 0) {
            DeleteResult::NotFound => false,
            DeleteResult::Prune | DeleteResult::Keep => {
                self.len -= 1;
                true
            }
        }
    }

    fn node_at<W>(&self, word: W) -> Option<&TrieNode<S>>
    where
        W: IntoIterator<Item = S>,
    {
        word.into_iter()
            .try_fold(&self.root, |node, symbol| node.children.get(&symbol))
    }
}

impl<S, W> Extend<W> for Trie<S>
where
    S: Ord,
    W: IntoIterator<Item = S>,
{
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<S, W> FromIterator<W> for Trie<S>
where
    S: Ord,
    W: IntoIterator<Item = S>,
{
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}
