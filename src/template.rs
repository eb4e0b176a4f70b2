//! Parsing and validation of the ciphertext template.
//!
//! A template is the ordered sequence of ciphertext words exactly as given,
//! immutable once parsed. Validation is eager: a non-letter character, an
//! empty token (consecutive spaces), or an over-long token aborts parsing
//! before any search work begins, so the solver only ever sees well-formed
//! input.

use std::str::FromStr;

use crate::errors::TemplateError;
use crate::letters::MAX_WORD_LEN;

/// The parsed ciphertext: ordered, lowercase, letters-only words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    words: Vec<String>,
}

impl Template {
    /// The ciphertext words in original input order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the template.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromStr for Template {
    type Err = Box<TemplateError>;

    /// Parse a single-space-separated ciphertext string.
    ///
    /// Input is normalized to lowercase (case must merely be consistent
    /// between ciphertext and word list, and the word list is lowercased on
    /// load). Tokens are validated in order, so the first offending token
    /// determines the error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Box::new(TemplateError::EmptyInput));
        }

        let mut words = Vec::new();
        for (position, token) in s.split(' ').enumerate() {
            if token.is_empty() {
                return Err(Box::new(TemplateError::EmptyToken { position }));
            }
            if let Some(invalid_char) = token.chars().find(|c| !c.is_ascii_alphabetic()) {
                return Err(Box::new(TemplateError::InvalidChar {
                    token: token.to_string(),
                    invalid_char,
                }));
            }
            if token.len() > MAX_WORD_LEN {
                return Err(Box::new(TemplateError::WordTooLong {
                    token: token.to_string(),
                    len: token.len(),
                }));
            }
            words.push(token.to_lowercase());
        }

        Ok(Template { words })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let t: Template = "XY YX".parse().unwrap();
        assert_eq!(t.words(), ["xy", "yx"]);
        assert_eq!(t.len(), 2);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_parse_single_word() {
        let t: Template = "pnvk".parse().unwrap();
        assert_eq!(t.words(), ["pnvk"]);
    }

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let t: Template = "AbC xyz".parse().unwrap();
        assert_eq!(t.words(), ["abc", "xyz"]);
    }

    #[test]
    fn test_parse_preserves_word_order() {
        let t: Template = "ccc a bb".parse().unwrap();
        assert_eq!(t.words(), ["ccc", "a", "bb"]);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = "".parse::<Template>().unwrap_err();
        assert!(matches!(*err, TemplateError::EmptyInput));
    }

    #[test]
    fn test_double_space_rejected() {
        // "XY  Z" contains an empty token between the two spaces
        let err = "XY  Z".parse::<Template>().unwrap_err();
        assert!(matches!(*err, TemplateError::EmptyToken { position: 1 }));
    }

    #[test]
    fn test_leading_space_rejected() {
        let err = " XY".parse::<Template>().unwrap_err();
        assert!(matches!(*err, TemplateError::EmptyToken { position: 0 }));
    }

    #[test]
    fn test_trailing_space_rejected() {
        let err = "XY ".parse::<Template>().unwrap_err();
        assert!(matches!(*err, TemplateError::EmptyToken { position: 1 }));
    }

    #[test]
    fn test_non_letter_rejected() {
        let err = "XY Z3".parse::<Template>().unwrap_err();
        match *err {
            TemplateError::InvalidChar { ref token, invalid_char } => {
                assert_eq!(token, "Z3");
                assert_eq!(invalid_char, '3');
            }
            other => panic!("expected InvalidChar, got {other:?}"),
        }
    }

    #[test]
    fn test_punctuation_rejected() {
        assert!("don't".parse::<Template>().is_err());
        assert!("end.".parse::<Template>().is_err());
    }

    #[test]
    fn test_over_long_token_rejected() {
        let long = "x".repeat(MAX_WORD_LEN + 1);
        let err = long.parse::<Template>().unwrap_err();
        assert!(matches!(*err, TemplateError::WordTooLong { len, .. } if len == MAX_WORD_LEN + 1));
    }

    #[test]
    fn test_max_length_token_accepted() {
        let long = "x".repeat(MAX_WORD_LEN);
        assert!(long.parse::<Template>().is_ok());
    }
}
