//! Validation type definitions

use thiserror::Error;

/// Input validator configuration
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Minimum trimmed length accepted
    pub min_length: usize,

    /// Maximum trimmed length accepted
    pub max_length: usize,

    /// A run of this many identical characters marks the input degenerate
    pub max_char_run: usize,

    /// A single word occurring more often than this marks the input degenerate
    pub max_word_repeats: usize,

    /// Fraction of all words one word may occupy before the input is
    /// considered degenerate (only applied once there are enough words
    /// for the ratio to mean anything)
    pub max_word_ratio: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_length: 5,
            max_length: 2000,
            max_char_run: 5,
            max_word_repeats: 10,
            max_word_ratio: 0.5,
        }
    }
}

/// Reasons the validator rejects input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("too short: please describe your symptoms in at least {min} characters")]
    TooShort { min: usize },

    #[error("too long: description is {len} characters, keep it under {max}")]
    TooLong { len: usize, max: usize },

    #[error("degenerate input: {reason}")]
    Degenerate { reason: String },
}

/// An accepted, normalized symptom description.
///
/// Immutable once constructed; whitespace runs are collapsed and the
/// ends trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomInput {
    text: String,
    chars: usize,
}

impl SymptomInput {
    pub(crate) fn new(text: String) -> Self {
        let chars = text.chars().count();
        Self { text, chars }
    }

    /// Normalized symptom text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character length of the normalized text
    pub fn chars(&self) -> usize {
        self.chars
    }
}

impl std::fmt::Display for SymptomInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
