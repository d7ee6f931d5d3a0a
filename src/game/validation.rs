//! Word validation
//!
//! A word is playable when:
//! - The hand holds every letter it needs (with multiplicity)
//! - The word exists in the dictionary
//!
//! Neither the hand nor the dictionary is modified.

use super::{Dictionary, Hand};

/// Result of word validation with specific error messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Word is valid
    Valid,
    /// Word uses letters the hand cannot supply
    InvalidLetters { missing: Vec<char> },
    /// Word not found in dictionary
    NotInDictionary,
}

impl ValidationResult {
    /// Returns true if the word is valid
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns a user-friendly error message
    pub fn message(&self) -> String {
        match self {
            ValidationResult::Valid => "Valid word!".to_string(),
            ValidationResult::InvalidLetters { missing } => {
                let letters: String = missing.iter().collect();
                format!("Missing letters: {}", letters)
            }
            ValidationResult::NotInDictionary => "Not in dictionary".to_string(),
        }
    }
}

/// Validate a word against the hand and dictionary
///
/// Letter availability is checked first, then dictionary membership.
pub fn validate_word(word: &str, hand: &Hand, dictionary: &Dictionary) -> ValidationResult {
    if let Some(missing) = check_letters_available(word, hand) {
        return ValidationResult::InvalidLetters { missing };
    }

    if !dictionary.contains(word) {
        return ValidationResult::NotInDictionary;
    }

    ValidationResult::Valid
}

/// Returns None if the hand covers the word, Some(missing_letters) otherwise.
/// Missing letters are listed once each, in the order they appear in the word.
fn check_letters_available(word: &str, hand: &Hand) -> Option<Vec<char>> {
    let needed: Hand = word.chars().collect();
    let missing: Vec<char> = needed
        .iter()
        .filter(|&(letter, count)| count > hand.count(letter))
        .map(|(letter, _)| letter)
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(missing)
    }
}
