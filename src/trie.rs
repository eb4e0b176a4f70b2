//! Prefix tree over sorted, same-length key sequences.
//!
//! The tree is generic over the key type because the identical grouping
//! algorithm serves two purposes: letter tries over a length bucket (keys are
//! `char`, leaves are dictionary words) drive the solver's prefix search, and
//! the tree-shaped output encoding groups whole solutions by shared
//! word-by-word prefixes (keys are words, leaves are full solution strings).
//!
//! Construction exploits sortedness: a single left-to-right scan groups
//! contiguous runs sharing the key at the current depth and recurses per run,
//! so building is linear in the total key count, independent of entry count.
//! [`WordList`](crate::word_list::WordList) establishes the sorted,
//! duplicate-free precondition at load time; `build` re-checks it with debug
//! assertions since an unsorted input would silently produce an incomplete
//! tree rather than failing loudly.

use std::fmt::Display;
use std::rc::Rc;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One input to [`Trie::build`]: a key sequence plus the value stored at the
/// leaf reached by following it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrieEntry<K> {
    pub keys: Vec<K>,
    pub value: Rc<str>,
}

impl TrieEntry<char> {
    /// Entry for a dictionary word: keys are its letters, the leaf is the word.
    #[must_use]
    pub fn for_word(word: &str) -> Self {
        TrieEntry {
            keys: word.chars().collect(),
            value: Rc::from(word),
        }
    }
}

/// A node of the prefix tree: either a terminal leaf holding a complete
/// value, or an inner node with one labeled edge per distinct next key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trie<K> {
    Leaf(Rc<str>),
    Branch(Vec<(K, Trie<K>)>),
}

impl<K: Ord + Clone> Trie<K> {
    /// Build a tree from alphabetically sorted, duplicate-free entries, all
    /// of the same key-sequence length.
    ///
    /// Callers partition by length before invoking; `depth` is the position
    /// currently being branched on (0 at the root). When the (then unique)
    /// first entry's length equals `depth`, that entry's value becomes a
    /// terminal leaf.
    ///
    /// # Panics
    /// Panics if `entries` is empty. Empty buckets mean an empty working set;
    /// the solver short-circuits before building a tree for them.
    #[must_use]
    pub fn build(entries: &[TrieEntry<K>]) -> Trie<K> {
        assert!(!entries.is_empty(), "cannot build a trie from zero entries");
        debug_assert!(
            entries.windows(2).all(|w| w[0].keys < w[1].keys),
            "trie input must be sorted and duplicate-free"
        );
        debug_assert!(
            entries.iter().all(|e| e.keys.len() == entries[0].keys.len()),
            "trie input must be partitioned by length"
        );

        Self::build_at(entries, 0)
    }

    fn build_at(entries: &[TrieEntry<K>], depth: usize) -> Trie<K> {
        if entries[0].keys.len() == depth {
            // Sorted + deduplicated input guarantees this run is a single entry.
            debug_assert_eq!(entries.len(), 1);
            return Trie::Leaf(Rc::clone(&entries[0].value));
        }

        let mut branches = Vec::new();
        let mut run_start = 0;
        for i in 1..=entries.len() {
            if i == entries.len() || entries[i].keys[depth] != entries[run_start].keys[depth] {
                branches.push((
                    entries[run_start].keys[depth].clone(),
                    Self::build_at(&entries[run_start..i], depth + 1),
                ));
                run_start = i;
            }
        }

        Trie::Branch(branches)
    }
}

impl<K: Eq> Trie<K> {
    /// Follow the edge labeled `key`, if present. Leaves have no edges.
    #[must_use]
    pub fn child(&self, key: &K) -> Option<&Trie<K>> {
        self.branches().iter().find(|(k, _)| k == key).map(|(_, sub)| sub)
    }
}

impl<K> Trie<K> {
    /// The labeled edges of an inner node (empty for leaves).
    #[must_use]
    pub fn branches(&self) -> &[(K, Trie<K>)] {
        match self {
            Trie::Leaf(_) => &[],
            Trie::Branch(branches) => branches,
        }
    }

    /// The complete value at a terminal leaf.
    #[must_use]
    pub fn leaf_value(&self) -> Option<&Rc<str>> {
        match self {
            Trie::Leaf(value) => Some(value),
            Trie::Branch(_) => None,
        }
    }
}

/// Serializes a leaf as its string value and an inner node as a map from edge
/// label to subtree, which is exactly the nested-document form the tree
/// output is persisted in.
impl<K: Display> Serialize for Trie<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Trie::Leaf(value) => serializer.serialize_str(value),
            Trie::Branch(branches) => {
                let mut map = serializer.serialize_map(Some(branches.len()))?;
                for (key, sub) in branches {
                    map.serialize_entry(&key.to_string(), sub)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_trie(words: &[&str]) -> Trie<char> {
        let entries: Vec<_> = words.iter().map(|w| TrieEntry::for_word(w)).collect();
        Trie::build(&entries)
    }

    #[test]
    fn test_single_word() {
        let trie = word_trie(&["cat"]);

        let c = trie.child(&'c').expect("edge 'c'");
        let a = c.child(&'a').expect("edge 'a'");
        let t = a.child(&'t').expect("edge 't'");
        assert_eq!(t.leaf_value().map(Rc::as_ref), Some("cat"));
    }

    #[test]
    fn test_shared_prefixes_grouped() {
        let trie = word_trie(&["cab", "cat", "cot", "dog"]);

        // root branches on first letter: c, d
        let labels: Vec<char> = trie.branches().iter().map(|(k, _)| *k).collect();
        assert_eq!(labels, vec!['c', 'd']);

        // under 'c': a (cab, cat) and o (cot)
        let c = trie.child(&'c').unwrap();
        let labels: Vec<char> = c.branches().iter().map(|(k, _)| *k).collect();
        assert_eq!(labels, vec!['a', 'o']);

        let ca = c.child(&'a').unwrap();
        assert_eq!(ca.branches().len(), 2); // cab, cat
    }

    #[test]
    fn test_missing_edge() {
        let trie = word_trie(&["cat"]);
        assert!(trie.child(&'x').is_none());
    }

    #[test]
    fn test_leaf_has_no_branches() {
        let trie = word_trie(&["a"]);
        let leaf = trie.child(&'a').unwrap();
        assert!(leaf.branches().is_empty());
        assert!(leaf.child(&'a').is_none());
    }

    #[test]
    fn test_inner_node_has_no_leaf_value() {
        let trie = word_trie(&["cat", "cot"]);
        assert!(trie.leaf_value().is_none());
        assert!(trie.child(&'c').unwrap().leaf_value().is_none());
    }

    #[test]
    #[should_panic(expected = "zero entries")]
    fn test_empty_input_panics() {
        let entries: Vec<TrieEntry<char>> = Vec::new();
        let _ = Trie::build(&entries);
    }

    #[test]
    fn test_build_from_word_keys() {
        // the same algorithm builds the solution tree, keyed by whole words
        let entries = vec![
            TrieEntry { keys: vec!["no".to_string(), "on".to_string()], value: Rc::from("no on") },
            TrieEntry { keys: vec!["on".to_string(), "no".to_string()], value: Rc::from("on no") },
        ];
        let trie = Trie::build(&entries);

        let no = trie.child(&"no".to_string()).unwrap();
        let leaf = no.child(&"on".to_string()).unwrap();
        assert_eq!(leaf.leaf_value().map(Rc::as_ref), Some("no on"));
    }

    #[test]
    fn test_serialize_letter_trie() {
        let trie = word_trie(&["no", "on"]);
        let json = serde_json::to_string(&trie).unwrap();
        assert_eq!(json, r#"{"n":{"o":"no"},"o":{"n":"on"}}"#);
    }

    #[test]
    fn test_serialize_word_trie() {
        let entries = vec![
            TrieEntry { keys: vec!["on".to_string(), "no".to_string()], value: Rc::from("on no") },
        ];
        let trie = Trie::build(&entries);
        let json = serde_json::to_string(&trie).unwrap();
        assert_eq!(json, r#"{"on":{"no":"on no"}}"#);
    }
}
