use std::fmt;
use std::fmt::{Display, Formatter};

use crate::letters::{index_letter, letter_index, ALPHABET_SIZE};

/// `Mapping` is a partial function from cipher letters to plaintext letters.
///
/// Two invariants hold for the lifetime of a search branch:
/// - *functional*: a cipher letter, once bound, never changes target;
/// - *injective*: no plaintext letter is the target of two cipher letters.
///
/// [`Mapping::bind`] refuses any binding that would violate either one, so a
/// `Mapping` can never be observed in an inconsistent state.
///
/// Uses array-based storage instead of `HashMap` since both alphabets are
/// limited to 'a'-'z'; `used` is a bitmask of plaintext letters already taken
/// as targets, so the injectivity check is a single bit test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    /// Index 0-25 for cipher letters 'a'-'z'; the value is the plaintext target.
    slots: [Option<char>; ALPHABET_SIZE],
    /// Bitmask of plaintext letters currently used as targets.
    used: u32,
}

impl Display for Mapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.iter()
            .map(|(c, p)| format!("{c}→{p}"))
            .collect();
        write!(f, "[{}]", pairs.join(", "))
    }
}

impl Mapping {
    /// Retrieve the plaintext target for a cipher letter, if bound.
    #[must_use]
    pub fn get(&self, cipher: char) -> Option<char> {
        self.slots[letter_index(cipher)]
    }

    /// Whether `plain` is already the target of some cipher letter.
    #[must_use]
    pub fn is_target_used(&self, plain: char) -> bool {
        self.used & (1u32 << letter_index(plain)) != 0
    }

    /// Bind `cipher -> plain`, upholding both invariants.
    ///
    /// Returns `true` if the binding took effect or was already present
    /// identically. Returns `false` (leaving the mapping untouched) if
    /// `cipher` is bound to a different target, or `plain` is already the
    /// target of a different cipher letter.
    pub fn bind(&mut self, cipher: char, plain: char) -> bool {
        let i = letter_index(cipher);
        match self.slots[i] {
            Some(existing) => existing == plain,
            None => {
                if self.is_target_used(plain) {
                    false
                } else {
                    self.slots[i] = Some(plain);
                    self.used |= 1u32 << letter_index(plain);
                    true
                }
            }
        }
    }

    /// Number of cipher letters currently bound.
    #[must_use]
    pub fn len(&self) -> usize {
        self.used.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Apply the mapping letter-by-letter to a ciphertext word.
    ///
    /// Returns `None` if any letter of `word` is unbound. A solution's
    /// mapping decodes every word of its template (the round-trip property),
    /// so `None` here indicates an incomplete mapping, not an error state.
    #[must_use]
    pub fn decode(&self, word: &str) -> Option<String> {
        word.chars().map(|c| self.get(c)).collect()
    }

    /// Iterate over `(cipher, plain)` pairs in alphabetical cipher order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, opt)| {
            opt.map(|plain| (index_letter(i), plain))
        })
    }
}
