//! Error types for ciphertext validation with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E004) for documentation lookup:
//!
//! - E001: `EmptyInput` (Empty ciphertext string)
//! - E002: `EmptyToken` (Empty token from consecutive spaces)
//! - E003: `InvalidChar` (Non-letter character in a token)
//! - E004: `WordTooLong` (Token longer than the supported maximum)
//!
//! All of these are detected eagerly at parse time, before any search work
//! begins. "No solution found" is deliberately *not* an error — a search that
//! runs to completion and finds nothing returns an empty, successful result.

use crate::letters::MAX_WORD_LEN;

/// Validation errors for a ciphertext template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Empty ciphertext string")]
    EmptyInput,

    #[error("Empty token at position {position} (consecutive spaces?)")]
    EmptyToken { position: usize },

    #[error("Invalid character '{invalid_char}' in token \"{token}\" (only letters allowed)")]
    InvalidChar { token: String, invalid_char: char },

    #[error("Token \"{token}\" is {len} letters long (maximum supported is {MAX_WORD_LEN})")]
    WordTooLong { token: String, len: usize },
}

impl TemplateError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            TemplateError::EmptyInput => "E001",
            TemplateError::EmptyToken { .. } => "E002",
            TemplateError::InvalidChar { .. } => "E003",
            TemplateError::WordTooLong { .. } => "E004",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            TemplateError::EmptyInput => Some("Provide at least one word of ciphertext, e.g. \"XY YX\""),
            TemplateError::EmptyToken { .. } => Some("Separate words with exactly one space"),
            TemplateError::InvalidChar { .. } => Some("Strip punctuation and digits before solving; only A-Z / a-z and single spaces are accepted"),
            TemplateError::WordTooLong { .. } => Some("No natural-language word list reaches this length; check the input for missing spaces"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
