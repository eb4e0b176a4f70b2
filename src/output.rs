//! Result rendering and persistence.
//!
//! The solver hands over decodings in original template word order; this
//! module renders them either as a flat list of strings (one complete
//! decoding per entry) or as a nested tree grouping decodings by shared
//! word-by-word prefixes. The tree form is a compact alternate *encoding* of
//! the same set — it carries no additional semantics — and is built with the
//! same trie algorithm the solver uses on letter buckets, just keyed by whole
//! words. Persistence writes the flat form as newline-delimited text and the
//! tree form as a JSON document.

use std::io;
use std::path::Path;
use std::rc::Rc;

use crate::solver::SolveResult;
use crate::trie::{Trie, TrieEntry};

/// Each decoding as a single space-joined line, in solver output order.
#[must_use]
pub fn flat_lines(result: &SolveResult) -> Vec<String> {
    result.solutions.iter().map(|s| s.text()).collect()
}

/// The decodings grouped by shared word-by-word prefixes; leaves hold the
/// full decoded strings. An empty result renders as an empty tree.
#[must_use]
pub fn solution_tree(result: &SolveResult) -> Trie<Rc<str>> {
    let mut entries: Vec<TrieEntry<Rc<str>>> = result
        .solutions
        .iter()
        .map(|s| TrieEntry {
            keys: s.words.clone(),
            value: Rc::from(s.text()),
        })
        .collect();
    // Trie construction requires sorted, duplicate-free input; the solver
    // emits distinct decodings but in search order, not sorted order.
    entries.sort();
    entries.dedup_by(|a, b| a.keys == b.keys);

    if entries.is_empty() {
        return Trie::Branch(Vec::new());
    }
    Trie::build(&entries)
}

/// Write the flat form, one decoding per line.
///
/// # Errors
/// Will return an `Error` if the destination cannot be written.
pub fn write_flat<P: AsRef<Path>>(path: P, result: &SolveResult) -> io::Result<()> {
    let mut contents = String::new();
    for line in flat_lines(result) {
        contents.push_str(&line);
        contents.push('\n');
    }
    std::fs::write(path, contents)
}

/// Write the tree form as a JSON document.
///
/// # Errors
/// Will return an `Error` if the destination cannot be written.
pub fn write_tree<P: AsRef<Path>>(path: P, result: &SolveResult) -> io::Result<()> {
    let tree = solution_tree(result);
    let file = std::fs::File::create(path)?;
    serde_json::to_writer(io::BufWriter::new(file), &tree)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;
    use crate::word_list::WordList;
    use std::time::Duration;

    fn reversed_pair_result() -> SolveResult {
        let list = WordList::parse_from_str("on\nno\nof\ngo");
        solve("XY YX", &list, Duration::from_secs(30)).unwrap()
    }

    #[test]
    fn test_flat_lines() {
        let result = reversed_pair_result();
        let mut lines = flat_lines(&result);
        lines.sort();

        assert_eq!(lines, vec!["no on", "on no"]);
    }

    #[test]
    fn test_solution_tree_groups_by_first_word() {
        let result = reversed_pair_result();
        let tree = solution_tree(&result);

        let no = tree.child(&Rc::from("no")).expect("branch for \"no\"");
        let leaf = no.child(&Rc::from("on")).expect("branch for \"on\"");
        assert_eq!(leaf.leaf_value().map(Rc::as_ref), Some("no on"));
    }

    #[test]
    fn test_solution_tree_json() {
        let result = reversed_pair_result();
        let json = serde_json::to_string(&solution_tree(&result)).unwrap();

        assert_eq!(json, r#"{"no":{"on":"no on"},"on":{"no":"on no"}}"#);
    }

    #[test]
    fn test_empty_result_renders_empty() {
        let list = WordList::parse_from_str("on\nno\nof\ngo");
        let result = solve("XX", &list, Duration::from_secs(30)).unwrap();

        assert!(flat_lines(&result).is_empty());
        let json = serde_json::to_string(&solution_tree(&result)).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_write_flat_and_tree() {
        let result = reversed_pair_result();
        let dir = std::env::temp_dir();

        let flat_path = dir.join("subcipher_test_flat.txt");
        write_flat(&flat_path, &result).unwrap();
        let contents = std::fs::read_to_string(&flat_path).unwrap();
        let mut lines: Vec<&str> = contents.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["no on", "on no"]);

        let tree_path = dir.join("subcipher_test_tree.json");
        write_tree(&tree_path, &result).unwrap();
        let contents = std::fs::read_to_string(&tree_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed["on"]["no"], "on no");

        let _ = std::fs::remove_file(flat_path);
        let _ = std::fs::remove_file(tree_path);
    }
}
