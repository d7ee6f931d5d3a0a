//! Game text rendering
//!
//! Every function returns the text to print; styling is applied only when
//! the console asks for it, so plain output stays byte-for-byte stable.

use crate::app::prompt::MAX_PLAYERS;
use crate::game::arbitrator::RoundOutcome;
use crate::game::letter_value;
use crate::game::match_state::Roster;
use crate::game::turn::{TurnEnd, TurnSummary};
use crate::game::validation::ValidationResult;
use crate::game::Hand;
use crossterm::style::{Color, Stylize};

const STARS: &str = "**********";

/// Scoring rules shown once at startup
pub const RULES: [&str; 4] = [
    "->The score for the hand is the sum of the scores for each word formed.",
    "->The score for a word is the sum of the points for letters in the word, multiplied by the length of the word, plus 50 points if all letters of the hand are used in one word.",
    "->The score for each letter is shown in brackets next to it.",
    "->Enter a single \".\" to end your turn early.",
];

pub const WORD_PROMPT: &str = "Enter word, or a \".\" to indicate that you are finished: ";

pub const PLAYER_COUNT_PROMPT: &str = "Number of players: ";

pub const REPLAY_PROMPT: &str = "Play again[Y/N]? ";

/// Color and embolden text when styling is on
pub fn paint(text: &str, color: Color, styled: bool) -> String {
    if styled {
        text.with(color).bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn rules_heading(styled: bool) -> String {
    paint("Scoring:", Color::Cyan, styled)
}

pub fn welcome_banner(styled: bool) -> [String; 2] {
    [
        paint(STARS, Color::Yellow, styled),
        paint("Welcome to the word game!", Color::Yellow, styled),
    ]
}

pub fn player_name_prompt(player: usize) -> String {
    format!("Player-{}: ", player)
}

pub fn invalid_player_count() -> String {
    format!(
        "Please enter a whole number of players, from 1 to {}.",
        MAX_PLAYERS
    )
}

pub fn threshold_line(threshold: u32) -> String {
    format!("First one to win {} rounds wins!", threshold)
}

pub fn round_header(round: u32, styled: bool) -> String {
    paint(&format!("{} ROUND {} {}", STARS, round, STARS), Color::Yellow, styled)
}

pub fn turn_announcement(name: &str, styled: bool) -> String {
    format!("{}, your turn", paint(name, Color::Cyan, styled))
}

/// Render the remaining letters as `letter(value)` tokens in draw order.
pub fn hand_line(hand: &Hand) -> String {
    let tokens: Vec<String> = hand
        .letters()
        .map(|c| match letter_value(c) {
            Some(value) => format!("{}({})", c, value),
            None => c.to_string(),
        })
        .collect();
    format!("Current Hand: {}", tokens.join(" "))
}

pub fn rejection_line(result: &ValidationResult, styled: bool) -> String {
    format!(
        "{} ({})",
        paint("Invalid word, please try again.", Color::Red, styled),
        result.message()
    )
}

pub fn word_scored_line(word: &str, points: u32, total: u32) -> String {
    format!("\"{}\" earned {} points. Total: {} points", word, points, total)
}

pub fn turn_summary_line(summary: &TurnSummary) -> String {
    match summary.end {
        TurnEnd::OutOfLetters => {
            format!("You ran out of letters. Total score: {} points.", summary.score)
        }
        TurnEnd::Stopped => {
            format!("Oh! that's all you got? Total score: {} points.", summary.score)
        }
    }
}

pub fn round_outcome_line(outcome: &RoundOutcome, roster: &Roster, styled: bool) -> String {
    match outcome {
        RoundOutcome::Winner { player, score } => paint(
            &format!("{} wins the round with {} points!", roster.name(*player), score),
            Color::Green,
            styled,
        ),
        RoundOutcome::Tie { players, score } => {
            let names: Vec<&str> = players.iter().map(|&p| roster.name(p)).collect();
            paint(
                &format!(
                    "Damn, the round ends in a tie! {} scored {} points each.",
                    join_names(&names),
                    score
                ),
                Color::Magenta,
                styled,
            )
        }
    }
}

/// "Ann", "Ann and Bob", "Ann, Bob and Cy"
fn join_names(names: &[&str]) -> String {
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        Some((last, _)) => last.to_string(),
        None => String::new(),
    }
}

pub fn match_winner_lines(name: &str, styled: bool) -> [String; 2] {
    [
        paint(&format!("{} wins the game!", name), Color::Green, styled),
        paint("CONGRATULATIONS, YOU LEGEND!", Color::Yellow, styled),
    ]
}

pub fn farewell() -> &'static str {
    "Thanks for playing! Hope you enjoyed! :)"
}
