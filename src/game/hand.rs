//! A hand of letters, kept as a multiset
//!
//! Letters are stored with their remaining counts in the order they were
//! first drawn. Playing a word produces a new hand; counts that reach zero
//! stay in place rather than being removed.

use crate::error::{GameError, Result};

/// A player's letters for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    counts: Vec<(char, u32)>,
}

impl Hand {
    /// Create an empty hand
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from explicit letter counts, merging repeated letters.
    #[cfg(test)]
    pub fn from_counts(counts: &[(char, u32)]) -> Self {
        let mut hand = Self::new();
        for &(letter, count) in counts {
            hand.add_many(letter, count);
        }
        hand
    }

    /// Add one copy of a letter
    pub fn add(&mut self, letter: char) {
        self.add_many(letter, 1);
    }

    fn add_many(&mut self, letter: char, count: u32) {
        match self.counts.iter_mut().find(|(c, _)| *c == letter) {
            Some((_, n)) => *n += count,
            None => self.counts.push((letter, count)),
        }
    }

    /// How many of `letter` remain
    pub fn count(&self, letter: char) -> u32 {
        self.counts
            .iter()
            .find(|(c, _)| *c == letter)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Total number of letters remaining
    pub fn len(&self) -> usize {
        self.counts.iter().map(|(_, n)| *n as usize).sum()
    }

    /// A hand is exhausted once every count is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(letter, count)` pairs in draw order, including spent letters.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts.iter().copied()
    }

    /// Every remaining letter, repeated by its count.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.counts
            .iter()
            .flat_map(|&(c, n)| std::iter::repeat(c).take(n as usize))
    }

    /// Return a new hand with the letters of `word` used up.
    ///
    /// The caller is expected to have validated the word against this hand.
    /// If it was not, this fails instead of letting a count go negative.
    pub fn update(&self, word: &str) -> Result<Hand> {
        let mut next = self.clone();
        for letter in word.chars() {
            let slot = next
                .counts
                .iter_mut()
                .find(|(c, n)| *c == letter && *n > 0)
                .ok_or(GameError::HandUnderflow { letter })?;
            slot.1 -= 1;
        }
        Ok(next)
    }
}

impl FromIterator<char> for Hand {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut hand = Hand::new();
        for letter in iter {
            hand.add(letter);
        }
        hand
    }
}
