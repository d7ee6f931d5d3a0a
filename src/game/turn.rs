//! One player's turn
//!
//! A turn starts with a dealt hand and accepts one input at a time until
//! the player stops or the hand runs out. Console handling stays outside;
//! the turn only reports what each input did.

use super::scoring::word_score;
use super::validation::{validate_word, ValidationResult};
use super::{Dictionary, Hand};
use crate::error::{GameError, Result};

/// Input that ends a turn voluntarily
pub const STOP_SIGNAL: &str = ".";

/// Why a turn finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    /// Every letter in the hand was used
    OutOfLetters,
    /// The player entered the stop signal
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingInput,
    Finished(TurnEnd),
}

/// What a single submission did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// The player stopped; the turn is over
    Stopped,
    /// The word was rejected; the hand is unchanged
    Rejected(ValidationResult),
    /// The word was accepted and its letters used
    Scored {
        word: String,
        points: u32,
        total: u32,
    },
    /// The turn had already finished
    Ignored,
}

/// Final result of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummary {
    pub score: u32,
    pub end: TurnEnd,
}

pub struct Turn<'a> {
    dictionary: &'a Dictionary,
    hand: Hand,
    hand_size: usize,
    score: u32,
    state: TurnState,
}

impl<'a> Turn<'a> {
    /// Start a turn with a dealt hand. `hand_size` is the full-hand bonus threshold.
    pub fn new(dictionary: &'a Dictionary, hand: Hand, hand_size: usize) -> Self {
        let state = if hand.is_empty() {
            TurnState::Finished(TurnEnd::OutOfLetters)
        } else {
            TurnState::AwaitingInput
        };

        Self {
            dictionary,
            hand,
            hand_size,
            score: 0,
            state,
        }
    }

    /// Handle one line of player input.
    pub fn submit(&mut self, input: &str) -> Result<TurnEvent> {
        if self.is_finished() {
            return Ok(TurnEvent::Ignored);
        }

        if input == STOP_SIGNAL {
            self.state = TurnState::Finished(TurnEnd::Stopped);
            return Ok(TurnEvent::Stopped);
        }

        let result = validate_word(input, &self.hand, self.dictionary);
        if !result.is_valid() {
            log::debug!("rejected {:?}: {}", input, result.message());
            return Ok(TurnEvent::Rejected(result));
        }

        let points = word_score(input, self.hand_size)?;
        let total = self
            .score
            .checked_add(points)
            .ok_or_else(|| GameError::ScoreOverflow {
                len: input.chars().count(),
            })?;
        self.hand = self.hand.update(input)?;
        self.score = total;
        log::debug!("accepted {:?} for {} points", input, points);

        if self.hand.is_empty() {
            self.state = TurnState::Finished(TurnEnd::OutOfLetters);
        }

        Ok(TurnEvent::Scored {
            word: input.to_string(),
            points,
            total: self.score,
        })
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[cfg(test)]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[cfg(test)]
    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, TurnState::Finished(_))
    }

    /// The turn's result, once it has finished
    pub fn summary(&self) -> Option<TurnSummary> {
        match self.state {
            TurnState::Finished(end) => Some(TurnSummary {
                score: self.score,
                end,
            }),
            TurnState::AwaitingInput => None,
        }
    }
}
