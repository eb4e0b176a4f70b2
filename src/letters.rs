#[cfg(test)]
use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
#[cfg(test)]
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';

/// Upper bound on supported word length. The word index allocates one bucket
/// per length up to this; a ciphertext token longer than this can never match
/// and is rejected at parse time.
pub const MAX_WORD_LEN: usize = 50;

/// Convert a lowercase letter to its 0-based alphabet index.
///
/// Returns `None` for anything outside 'a'..='z'. Callers that have already
/// validated their input can unwrap via [`letter_index`].
#[inline]
pub(crate) fn try_letter_index(c: char) -> Option<usize> {
    (c as usize).checked_sub('a' as usize).filter(|&i| i < ALPHABET_SIZE)
}

/// Convert a validated lowercase letter to its 0-based alphabet index.
///
/// # Panics
/// Panics if `c` is not in 'a'..='z'. Template parsing validates every letter
/// before it reaches the mapping or the solver, so an invalid character here
/// indicates a programming error, not invalid user input.
#[inline]
pub(crate) fn letter_index(c: char) -> usize {
    match try_letter_index(c) {
        Some(i) => i,
        None => panic!("Invalid letter: '{c}' (template parsing should have validated this)"),
    }
}

/// Inverse of [`letter_index`].
#[inline]
pub(crate) fn index_letter(i: usize) -> char {
    debug_assert!(i < ALPHABET_SIZE, "alphabet index {i} out of range");
    (b'a' + i as u8) as char
}
