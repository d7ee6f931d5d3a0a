//! Word scoring
//!
//! A word scores the sum of its letter values times its length, plus a
//! flat bonus when it uses a full hand.

use super::letter_value;
use crate::error::{GameError, Result};

/// Bonus for playing every letter of a full hand in one word
pub const FULL_HAND_BONUS: u32 = 50;

/// Score `word` for a game dealing `hand_size` letters per hand.
pub fn word_score(word: &str, hand_size: usize) -> Result<u32> {
    let length = word.chars().count();
    let overflow = || GameError::ScoreOverflow { len: length };

    let mut letter_sum: u32 = 0;
    for letter in word.chars() {
        let value = letter_value(letter).ok_or(GameError::UnscorableLetter(letter))?;
        letter_sum = letter_sum.checked_add(value).ok_or_else(overflow)?;
    }

    let mut score = u32::try_from(length)
        .ok()
        .and_then(|len| letter_sum.checked_mul(len))
        .ok_or_else(overflow)?;
    if length == hand_size {
        score = score.checked_add(FULL_HAND_BONUS).ok_or_else(overflow)?;
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_word_no_bonus() {
        assert_eq!(word_score("cat", 7).unwrap(), 15);
    }

    #[test]
    fn test_full_hand_bonus() {
        assert_eq!(word_score("cattle", 6).unwrap(), 98);
        assert_eq!(word_score("cattle", 7).unwrap(), 48);
    }

    #[test]
    fn test_high_value_letters() {
        assert_eq!(word_score("quiz", 7).unwrap(), 88);
        assert_eq!(word_score("jazz", 7).unwrap(), (8 + 1 + 10 + 10) * 4);
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(word_score("", 7).unwrap(), 0);
    }

    #[test]
    fn test_long_word_overflow_is_an_error() {
        // 10 * 30_000 * 30_000 does not fit in a u32
        let word = "z".repeat(30_000);
        assert!(matches!(
            word_score(&word, 7),
            Err(GameError::ScoreOverflow { len: 30_000 })
        ));

        // Still fits
        let word = "z".repeat(20_000);
        assert_eq!(word_score(&word, 7).unwrap(), 10 * 20_000 * 20_000);
    }

    #[test]
    fn test_rejects_unknown_characters() {
        assert!(matches!(
            word_score("ca7", 7),
            Err(GameError::UnscorableLetter('7'))
        ));
        assert!(matches!(
            word_score("Cat", 7),
            Err(GameError::UnscorableLetter('C'))
        ));
    }
}
