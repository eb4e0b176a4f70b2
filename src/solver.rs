//! The backtracking search over whole ciphertext messages.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with one variant:
//!
//! - S001: `InvalidInput` (Ciphertext validation failed (wraps [`TemplateError`]))
//!
//! Finding *no* decoding is not an error: the result then carries an empty
//! solution list. Callers can always distinguish "ran successfully, found
//! nothing" from "could not run".
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use std::time::Duration;
//! use subcipher::{solver, word_list::WordList};
//!
//! let words = WordList::parse_from_str("on\nno\nof\ngo");
//! let result = solver::solve("XY YX", &words, Duration::from_secs(30))?;
//!
//! println!("Found {} decodings", result.solutions.len());
//! for solution in &result.solutions {
//!     println!("{}", solution.text());
//! }
//! # Ok::<(), subcipher::solver::SolverError>(())
//! ```
//!
//! ## Handling Errors with Detailed Messages
//!
//! ```
//! use std::time::Duration;
//! use subcipher::{solver, word_list::WordList};
//!
//! let words = WordList::parse_from_str("on\nno");
//! match solver::solve("XY  YX", &words, Duration::from_secs(30)) {
//!     Ok(result) => println!("Success: {} decodings", result.solutions.len()),
//!     Err(e) => {
//!         // Show detailed error with code and help
//!         eprintln!("{}", e.display_detailed());
//!     }
//! }
//! ```
//!
//! # Algorithm
//!
//! Template words are processed longest-first: long words carry the most
//! letter constraints and collapse the mapping space fastest, while short
//! common words are numerous and weakly constraining — handling them last
//! means each resolves against a mostly pinned-down mapping. The first word's
//! candidates seed a working set of one-word partial decodings; every later
//! word extends each entry through a prefix tree over its length bucket, and
//! the union of extensions wholesale-replaces the working set. An empty
//! generation ends the search early with the empty result.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::candidates::candidates_for;
use crate::errors::TemplateError;
use crate::mapping::Mapping;
use crate::template::Template;
use crate::trie::{Trie, TrieEntry};
use crate::word_list::WordList;

/// Status of a solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// The search ran to completion; the result holds every decoding.
    Complete,

    /// The wall-clock budget expired between extension steps. Contains the
    /// elapsed time. Partial decodings are discarded — the solution list is
    /// empty, since an interrupted search cannot vouch for completeness.
    TimedOut { elapsed: Duration },
}

/// One complete, validated decoding of the whole template.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Plaintext words in the template's original order.
    pub words: Vec<Rc<str>>,
    /// The letter mapping shared by every word of this decoding.
    pub mapping: Mapping,
}

impl Solution {
    /// The decoded message as a single space-joined string.
    #[must_use]
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Successful solver run (even if it found nothing).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Every complete decoding, in no significant order.
    pub solutions: Vec<Solution>,
    /// Whether the search ran to completion.
    pub status: SolveStatus,
}

impl IntoIterator for SolveResult {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

/// Unified error type for the solver pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The ciphertext failed validation before any search work began.
    ///
    /// These originate from template parsing (`TemplateError`), which we box
    /// to keep the error type size stable.
    #[error("invalid ciphertext: {0}")]
    InvalidInput(#[from] Box<TemplateError>),
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "S001",
        }
    }

    /// Formats the error with code and help text from the underlying cause
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::InvalidInput(te) => {
                // delegate to TemplateError's detailed display
                format!("{}\n  caused by: {}", self.code(), te.display_detailed())
            }
        }
    }
}

/// Simple helper to enforce a wall-clock time limit.
///
/// The search is worst-case exponential in the number of unconstrained
/// letters (many short, weakly constraining words), so the solver checks this
/// between word-extension steps as a safety valve.
struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// A consistent decoding of the first k processed words, with the mapping
/// accumulated across all of them.
#[derive(Debug, Clone)]
struct PartialDecoding {
    words: Vec<Rc<str>>,
    mapping: Mapping,
}

/// Walk `node` under the constraints of `mapping`, emitting one extended
/// partial decoding per reachable leaf.
///
/// - A cipher letter that is already mapped follows only the edge its target
///   dictates; a missing edge kills the branch.
/// - An unmapped cipher letter branches over every edge whose label is not
///   yet the target of *any* mapped letter, binding it on an independent copy
///   of the mapping so sibling branches never observe each other's tentative
///   bindings.
///
/// A single mismatch therefore collapses an entire subtree of same-prefix
/// words at once, which is the point of searching the trie instead of
/// re-scanning the bucket per partial decoding.
fn prefix_search(
    remaining: &[char],
    mapping: &Mapping,
    node: &Trie<char>,
    words_so_far: &[Rc<str>],
    out: &mut Vec<PartialDecoding>,
) {
    let Some(&cipher) = remaining.first() else {
        // Buckets are partitioned by length, so exhausting the cipher word
        // lands exactly on a terminal leaf.
        if let Some(word) = node.leaf_value() {
            let mut words = words_so_far.to_vec();
            words.push(Rc::clone(word));
            out.push(PartialDecoding { words, mapping: mapping.clone() });
        } else {
            debug_assert!(false, "trie depth must equal word length at the base case");
        }
        return;
    };

    if let Some(plain) = mapping.get(cipher) {
        if let Some(sub) = node.child(&plain) {
            prefix_search(&remaining[1..], mapping, sub, words_so_far, out);
        }
        return;
    }

    for (plain, sub) in node.branches() {
        if mapping.is_target_used(*plain) {
            continue;
        }
        let mut extended = mapping.clone();
        let bound = extended.bind(cipher, *plain);
        debug_assert!(bound, "binding an unmapped letter to a fresh target cannot fail");
        prefix_search(&remaining[1..], &extended, sub, words_so_far, out);
    }
}

/// Parse `ciphertext` and enumerate every complete decoding against `word_list`.
///
/// # Errors
/// Returns [`SolverError::InvalidInput`] if the ciphertext contains a
/// non-letter character, an empty token, or an over-long token. No search
/// work happens in that case.
pub fn solve(
    ciphertext: &str,
    word_list: &WordList,
    time_budget: Duration,
) -> Result<SolveResult, SolverError> {
    let template: Template = ciphertext.parse()?;
    Ok(solve_template(&template, word_list, time_budget))
}

/// Enumerate every complete decoding of an already-validated template.
///
/// Infallible by design: an unsolvable template yields an empty solution
/// list with [`SolveStatus::Complete`].
#[must_use]
pub fn solve_template(
    template: &Template,
    word_list: &WordList,
    time_budget: Duration,
) -> SolveResult {
    let budget = TimeBudget::new(time_budget);
    let n = template.len();

    // 1. Reorder the template longest-first, remembering original positions
    //    so the assembler can undo the reordering. The sort is stable, so
    //    equal-length words keep their relative order.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| Reverse(template.words()[i].len()));
    let sorted_words: Vec<&str> = order.iter().map(|&i| template.words()[i].as_str()).collect();

    info!(
        "solving {n}-word template against {} dictionary words",
        word_list.word_count()
    );

    // 2. Seeding: the first word's candidates become one-word partial decodings.
    let t_seed = Instant::now();
    let first = sorted_words[0];
    let mut working: Vec<PartialDecoding> = candidates_for(first, word_list.bucket(first.len()))
        .into_iter()
        .map(|c| PartialDecoding { words: vec![c.word], mapping: c.mapping })
        .collect();
    debug!(
        "seeded {} partial decodings from \"{first}\" in {:.3}s",
        working.len(),
        t_seed.elapsed().as_secs_f64()
    );

    // 3. Extending: fold in each remaining word. Tries are cached per word
    //    length, since equal-length cipher words share the same bucket.
    let t_extend = Instant::now();
    let mut tries: HashMap<usize, Rc<Trie<char>>> = HashMap::new();
    let mut status = SolveStatus::Complete;
    for &word in &sorted_words[1..] {
        if working.is_empty() {
            // No decoding survives; nothing left to extend. This is the
            // valid empty result, not an error.
            break;
        }
        if budget.expired() {
            status = SolveStatus::TimedOut { elapsed: budget.elapsed() };
            working.clear();
            break;
        }

        let bucket = word_list.bucket(word.len());
        if bucket.is_empty() {
            working.clear();
            break;
        }

        let trie = Rc::clone(tries.entry(word.len()).or_insert_with(|| {
            let entries: Vec<_> = bucket.iter().map(|w| TrieEntry::for_word(w)).collect();
            Rc::new(Trie::build(&entries))
        }));

        debug!("extending through \"{word}\" ({} partial decodings)", working.len());

        let cipher: Vec<char> = word.chars().collect();
        let mut next_generation = Vec::new();
        for partial in &working {
            prefix_search(&cipher, &partial.mapping, &trie, &partial.words, &mut next_generation);
        }
        // The new generation wholesale-replaces the old; previous generations
        // are never mutated in place.
        working = next_generation;
    }
    debug!(
        "cross-word matching finished in {:.3}s ({} decodings)",
        t_extend.elapsed().as_secs_f64(),
        working.len()
    );

    // 4. Reassembly: scatter each decoding's words (longest-first order) back
    //    into their original template positions.
    let solutions = working
        .into_iter()
        .map(|partial| {
            debug_assert_eq!(partial.words.len(), n);
            let mut words: Vec<Rc<str>> = vec![Rc::from(""); n];
            for (j, word) in partial.words.into_iter().enumerate() {
                words[order[j]] = word;
            }
            Solution { words, mapping: partial.mapping }
        })
        .collect();

    SolveResult { solutions, status }
}
