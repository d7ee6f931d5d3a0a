//! Game logic: letter values, dealing hands, validation, scoring, turns and rounds

pub mod arbitrator;
pub mod dictionary;
pub mod hand;
pub mod match_state;
pub mod scoring;
pub mod turn;
pub mod validation;

pub use dictionary::Dictionary;
pub use hand::Hand;

use once_cell::sync::Lazy;
use rand::prelude::*;
use std::collections::HashMap;

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub const CONSONANTS: [char; 21] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w',
    'x', 'y', 'z',
];

/// Default number of letters dealt per turn
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Largest hand the command line accepts
pub const MAX_HAND_SIZE: usize = 30;

/// Scrabble letter values.
pub static LETTER_VALUES: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    [
        ('a', 1),
        ('b', 3),
        ('c', 3),
        ('d', 2),
        ('e', 1),
        ('f', 4),
        ('g', 2),
        ('h', 4),
        ('i', 1),
        ('j', 8),
        ('k', 5),
        ('l', 1),
        ('m', 3),
        ('n', 1),
        ('o', 1),
        ('p', 3),
        ('q', 10),
        ('r', 1),
        ('s', 1),
        ('t', 1),
        ('u', 1),
        ('v', 4),
        ('w', 4),
        ('x', 8),
        ('y', 4),
        ('z', 10),
    ]
    .into_iter()
    .collect()
});

/// Point value of a single lowercase letter
pub fn letter_value(letter: char) -> Option<u32> {
    LETTER_VALUES.get(&letter).copied()
}

/// Deal a hand of `size` letters.
///
/// The first `size / 3` draws come from the vowels and the rest from the
/// consonants, each draw uniform and independent.
pub fn deal_hand<R: Rng>(size: usize, rng: &mut R) -> Hand {
    let num_vowels = size / 3;

    let vowels = (0..num_vowels).map(|_| VOWELS[rng.random_range(0..VOWELS.len())]);
    let mut hand: Hand = vowels.collect();

    for _ in num_vowels..size {
        hand.add(CONSONANTS[rng.random_range(0..CONSONANTS.len())]);
    }

    hand
}

/// Source of fresh hands for each turn.
pub trait Dealer {
    fn deal(&mut self, size: usize) -> Hand;
}

/// Deals random hands from an owned RNG.
pub struct RandomDealer<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomDealer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Dealer for RandomDealer<R> {
    fn deal(&mut self, size: usize) -> Hand {
        let hand = deal_hand(size, &mut self.rng);
        log::debug!("dealt {} letters: {}", hand.len(), hand.letters().collect::<String>());
        hand
    }
}
