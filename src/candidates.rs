//! Per-word candidate generation.
//!
//! Matches one ciphertext word against its length bucket in isolation: each
//! surviving dictionary word is paired with the partial mapping it implies.
//! Only intra-word constraints are checked here — a candidate's mapping may
//! later prove incompatible with other words' choices and is re-validated
//! during the cross-word search.

use std::rc::Rc;

use crate::mapping::Mapping;

/// A dictionary word that decodes one ciphertext word in isolation, paired
/// with the letter mapping that decoding implies.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub word: Rc<str>,
    pub mapping: Mapping,
}

/// All candidates for `cipher_word` among the same-length `bucket` words.
///
/// For each bucket word, letter positions are scanned left to right, binding
/// cipher letters as they are first seen. A position whose cipher letter is
/// already bound to a different plaintext letter, or whose plaintext letter
/// is already the target of a different cipher letter, discards the word
/// immediately without checking further positions.
#[must_use]
pub fn candidates_for(cipher_word: &str, bucket: &[String]) -> Vec<Candidate> {
    debug_assert!(
        bucket.iter().all(|w| w.len() == cipher_word.len()),
        "bucket must hold words of the ciphertext word's length"
    );

    let mut candidates = Vec::new();
    'words: for word in bucket {
        let mut mapping = Mapping::default();
        for (cipher, plain) in cipher_word.chars().zip(word.chars()) {
            // bind() enforces both invariants: an existing binding must agree
            // (functional), and the target must be fresh (injective)
            if !mapping.bind(cipher, plain) {
                continue 'words;
            }
        }
        candidates.push(Candidate {
            word: Rc::from(word.as_str()),
            mapping,
        });
    }

    candidates
}
