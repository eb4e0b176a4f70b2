//! `word_list` — Module to load and preprocess the dictionary for the solver.
//!
//! This module reads a plain word list (one word per line, no scores or other
//! metadata) and partitions it into *length buckets*: `bucket(n)` holds every
//! distinct n-letter word, alphabetically sorted.
//!
//! The parsing logic:
//! - Each line is trimmed; empty lines are skipped.
//! - All words are normalized to lowercase.
//! - Lines containing non-letter characters are skipped silently — they can
//!   never match a letters-only ciphertext token.
//! - Words longer than [`MAX_WORD_LEN`] are skipped with a warning.
//! - Each bucket is sorted and deduplicated, and trailing empty buckets
//!   beyond the longest observed word are trimmed.
//!
//! Sorting and deduplicating here is load-bearing, not cosmetic: trie
//! construction ([`crate::trie::Trie::build`]) requires alphabetically
//! sorted, duplicate-free input, and enforcing that once at load time means
//! no caller can hand the trie builder a malformed bucket.

use log::warn;

use crate::letters::MAX_WORD_LEN;

/// A word list partitioned into per-length buckets.
///
/// `buckets[n]` holds the sorted, deduplicated n-letter words; index 0 exists
/// but is always empty (there are no zero-letter words).
#[derive(Debug, Clone)]
pub struct WordList {
    buckets: Vec<Vec<String>>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// # Arguments
    /// * `contents` — The raw file contents, one word per line.
    ///
    /// # Behavior:
    /// 1. Splits the input into lines and trims each.
    /// 2. Skips empty lines and lines with non-letter characters.
    /// 3. Converts each word to lowercase.
    /// 4. Buckets words by character length, skipping over-long ones.
    /// 5. Sorts and deduplicates every bucket.
    /// 6. Trims trailing empty buckets.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut buckets: Vec<Vec<String>> = vec![Vec::new(); MAX_WORD_LEN + 1];

        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            if !line.chars().all(|c| c.is_ascii_alphabetic()) {
                // Not an error: such a word could never decode a letters-only token.
                continue;
            }
            if line.len() > MAX_WORD_LEN {
                warn!("skipping {}-letter word (maximum supported is {MAX_WORD_LEN})", line.len());
                continue;
            }
            buckets[line.len()].push(line.to_lowercase());
        }

        // Sortedness and uniqueness per bucket is the precondition for trie
        // construction; establish it once here.
        for bucket in &mut buckets {
            bucket.sort();
            bucket.dedup();
        }

        while buckets.last().is_some_and(Vec::is_empty) {
            buckets.pop();
        }

        WordList { buckets }
    }

    /// Read a word list from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// The sorted, deduplicated words of a given length. Empty slice for any
    /// length with no words (including lengths beyond the longest observed).
    #[must_use]
    pub fn bucket(&self, len: usize) -> &[String] {
        self.buckets.get(len).map_or(&[], Vec::as_slice)
    }

    /// Length of the longest word in the list (0 if the list is empty).
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.buckets.len().saturating_sub(1)
    }

    /// Total number of distinct words across all buckets.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Whether `word` (already lowercase) is present in the list.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.bucket(word.len()).binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_bucketing() {
        let list = WordList::parse_from_str("cat\ndog\nbird\nof");

        assert_eq!(list.bucket(2), ["of"]);
        assert_eq!(list.bucket(3), ["cat", "dog"]);
        assert_eq!(list.bucket(4), ["bird"]);
        assert_eq!(list.word_count(), 4);
    }

    #[test]
    fn test_buckets_are_sorted() {
        let list = WordList::parse_from_str("zebra\napple\nmango");
        assert_eq!(list.bucket(5), ["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_parse_deduplicates() {
        let list = WordList::parse_from_str("cat\ndog\ncat\nCAT");
        assert_eq!(list.bucket(3), ["cat", "dog"]);
    }

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let list = WordList::parse_from_str("CAT\nDog");
        assert_eq!(list.bucket(3), ["cat", "dog"]);
    }

    #[test]
    fn test_parse_skips_empty_lines_and_whitespace() {
        let list = WordList::parse_from_str("  cat  \n\n\ndog\n\n");
        assert_eq!(list.bucket(3), ["cat", "dog"]);
    }

    #[test]
    fn test_parse_skips_non_letter_lines() {
        let list = WordList::parse_from_str("cat\ndon't\nrock-n-roll\nx1\ndog");
        assert_eq!(list.bucket(3), ["cat", "dog"]);
        assert_eq!(list.word_count(), 2);
    }

    #[test]
    fn test_parse_skips_over_long_words() {
        let long = "x".repeat(MAX_WORD_LEN + 1);
        let list = WordList::parse_from_str(&format!("cat\n{long}"));
        assert_eq!(list.word_count(), 1);
        assert_eq!(list.max_len(), 3);
    }

    #[test]
    fn test_trailing_buckets_trimmed() {
        let list = WordList::parse_from_str("cat");
        assert_eq!(list.max_len(), 3);
        // asking past the end is fine and yields an empty bucket
        assert!(list.bucket(10).is_empty());
    }

    #[test]
    fn test_parse_empty_input() {
        let list = WordList::parse_from_str("");
        assert_eq!(list.word_count(), 0);
        assert_eq!(list.max_len(), 0);
        assert!(list.bucket(3).is_empty());
    }

    #[test]
    fn test_contains() {
        let list = WordList::parse_from_str("on\nno\nof\ngo");
        assert!(list.contains("on"));
        assert!(list.contains("go"));
        assert!(!list.contains("fo"));
        assert!(!list.contains("onn"));
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let err = WordList::load_from_path("/definitely/not/a/real/path.txt").unwrap_err();
        assert!(err.to_string().contains("failed to read word list"));
    }
}
