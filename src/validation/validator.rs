//! Symptom input validator
//!
//! Length and content checks applied before any provider traffic.
//! Order matters: length limits first, then repetition, then the
//! meaningful-content check on the normalized text.

use crate::validation::types::{SymptomInput, ValidationError, ValidatorConfig};

/// Ratio check is skipped below this many words; with only a handful of
/// words a single repeat would dominate trivially.
const MIN_WORDS_FOR_RATIO: usize = 10;

/// Validate a raw symptom description.
///
/// Returns the accepted, whitespace-normalized input or the first
/// rejection reason found. Pure function, no side effects.
pub fn validate_symptoms(
    raw: &str,
    config: &ValidatorConfig,
) -> Result<SymptomInput, ValidationError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();

    if len < config.min_length {
        return Err(ValidationError::TooShort {
            min: config.min_length,
        });
    }

    if len > config.max_length {
        return Err(ValidationError::TooLong {
            len,
            max: config.max_length,
        });
    }

    // Degeneracy checks run on the normalized text so a run of
    // accidental spaces never counts as a repeated character.
    let normalized = normalize_whitespace(trimmed);

    if has_char_run(&normalized, config.max_char_run) {
        return Err(ValidationError::Degenerate {
            reason: "excessive repetition of a single character".to_string(),
        });
    }

    if let Some(word) = dominant_word(&normalized, config) {
        return Err(ValidationError::Degenerate {
            reason: format!("the word '{}' is repeated excessively", word),
        });
    }

    if !normalized.chars().any(|c| c.is_alphabetic()) {
        return Err(ValidationError::Degenerate {
            reason: "no descriptive text found".to_string(),
        });
    }

    Ok(SymptomInput::new(normalized))
}

/// True when any character repeats `max_run` or more times in a row
fn has_char_run(text: &str, max_run: usize) -> bool {
    let mut run = 0usize;
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= max_run {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}

/// Returns the word that dominates the input, if any.
///
/// A word dominates when it occurs more than `max_word_repeats` times,
/// or occupies more than `max_word_ratio` of all words once the input
/// is long enough for the ratio to be meaningful. Words of one or two
/// characters are ignored so "a", "of", "is" never trip the check.
fn dominant_word(text: &str, config: &ValidatorConfig) -> Option<String> {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    let total = words.len();

    let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for word in &words {
        if word.chars().count() <= 2 {
            continue;
        }
        let count = counts.entry(word.as_str()).or_insert(0);
        *count += 1;

        if *count > config.max_word_repeats {
            return Some(word.clone());
        }
        if total >= MIN_WORDS_FOR_RATIO && (*count as f64) / (total as f64) > config.max_word_ratio
        {
            return Some(word.clone());
        }
    }
    None
}

/// Collapse internal whitespace runs to single spaces
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ValidatorConfig {
        ValidatorConfig::default()
    }

    #[test]
    fn test_rejects_too_short() {
        let result = validate_symptoms("ache", &config());
        assert_eq!(result, Err(ValidationError::TooShort { min: 5 }));
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(matches!(
            validate_symptoms("", &config()),
            Err(ValidationError::TooShort { .. })
        ));
        assert!(matches!(
            validate_symptoms("    \t  ", &config()),
            Err(ValidationError::TooShort { .. })
        ));
    }

    #[test]
    fn test_rejects_too_long() {
        let long = "chest pain ".repeat(300);
        let result = validate_symptoms(&long, &config());
        assert!(matches!(result, Err(ValidationError::TooLong { .. })));
    }

    #[test]
    fn test_rejects_single_char_repeated_500_times() {
        let input = "a".repeat(500);
        let result = validate_symptoms(&input, &config());
        assert!(matches!(result, Err(ValidationError::Degenerate { .. })));
    }

    #[test]
    fn test_rejects_char_run_inside_text() {
        let result = validate_symptoms("my head hurts soooooo much", &config());
        assert!(matches!(result, Err(ValidationError::Degenerate { .. })));
    }

    #[test]
    fn test_rejects_repeated_word() {
        let input = "pain ".repeat(15);
        let result = validate_symptoms(&input, &config());
        assert!(matches!(result, Err(ValidationError::Degenerate { .. })));
    }

    #[test]
    fn test_rejects_numeric_only_input() {
        let result = validate_symptoms("12345 678 90", &config());
        assert!(matches!(result, Err(ValidationError::Degenerate { .. })));
    }

    #[test]
    fn test_accepts_and_normalizes_whitespace() {
        let input = validate_symptoms("  severe      headache \n with  nausea  ", &config())
            .expect("should be accepted");
        assert_eq!(input.text(), "severe headache with nausea");
        assert_eq!(input.chars(), input.text().chars().count());
    }

    #[test]
    fn test_accepts_realistic_description() {
        let input = validate_symptoms(
            "severe chest pain and shortness of breath for 2 hours",
            &config(),
        )
        .expect("should be accepted");
        assert!(input.text().contains("chest pain"));
    }

    #[test]
    fn test_short_stopwords_do_not_trip_repetition() {
        let input = "it is in my arm and in my leg and in my back, it comes and it goes";
        assert!(validate_symptoms(input, &config()).is_ok());
    }
}
