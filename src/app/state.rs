//! Application state: the interactive session
//!
//! Runs matches until a player declines to replay. Each match collects a
//! roster, then plays rounds until someone reaches the win threshold.
//! Rules live in `crate::game`; this module only sequences them and talks
//! to the console.

use super::prompt::{normalize_word, parse_player_count, player_name, ReplayChoice};
use crate::console::{self, Console};
use crate::error::Result;
use crate::game::arbitrator::{PlayerId, RoundStandings};
use crate::game::match_state::{MatchState, Roster};
use crate::game::turn::{Turn, TurnEvent, TurnSummary};
use crate::game::{Dictionary, Dealer};
use std::io::{BufRead, Write};

/// How a match ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub roster: Roster,
    pub state: MatchState,
    pub winners: Vec<PlayerId>,
}

/// Main application state
pub struct App<R, W, D> {
    dictionary: Dictionary,
    dealer: D,
    console: Console<R, W>,
    /// Letters dealt per hand, also the full-hand bonus length
    hand_size: usize,
}

impl<R: BufRead, W: Write, D: Dealer> App<R, W, D> {
    /// Create a session around a loaded dictionary
    pub fn new(dictionary: Dictionary, dealer: D, console: Console<R, W>, hand_size: usize) -> Self {
        Self {
            dictionary,
            dealer,
            console,
            hand_size,
        }
    }

    /// Show the rules, then play matches until the player answers "N".
    pub fn run(&mut self) -> Result<()> {
        self.show_rules()?;

        loop {
            let report = self.play_match()?;
            let winners: Vec<&str> = report
                .winners
                .iter()
                .map(|&p| report.roster.name(p))
                .collect();
            log::info!(
                "match over after {} rounds, winners: {:?}",
                report.state.rounds_played(),
                winners
            );

            let answer = self.console.prompt(console::REPLAY_PROMPT)?;
            if ReplayChoice::parse(&answer) == ReplayChoice::Quit {
                self.console.line(console::farewell())?;
                return Ok(());
            }
        }
    }

    fn show_rules(&mut self) -> Result<()> {
        let styled = self.console.styled();
        self.console.line(console::rules_heading(styled))?;
        self.console.blank()?;
        for rule in console::RULES {
            self.console.line(rule)?;
            self.console.blank()?;
        }
        Ok(())
    }

    /// Play one full match with a fresh roster and fresh round wins.
    pub fn play_match(&mut self) -> Result<MatchReport> {
        let styled = self.console.styled();
        self.console.blank()?;
        for line in console::welcome_banner(styled) {
            self.console.line(line)?;
        }

        let roster = self.read_roster()?;
        let mut state = MatchState::new(roster.len());
        self.console.blank()?;
        self.console.line(console::threshold_line(state.threshold()))?;

        while !state.is_over() {
            self.console.blank()?;
            self.console
                .line(console::round_header(state.rounds_played() + 1, styled))?;

            let standings = self.play_round(&roster)?;
            if let Some(outcome) = state.record_round(&standings) {
                self.console
                    .line(console::round_outcome_line(&outcome, &roster, styled))?;
            }
        }

        self.console.blank()?;
        let winners = state.winners();
        for &player in &winners {
            for line in console::match_winner_lines(roster.name(player), styled) {
                self.console.line(line)?;
            }
        }

        Ok(MatchReport {
            roster,
            state,
            winners,
        })
    }

    /// Every player takes one turn, in order.
    pub fn play_round(&mut self, roster: &Roster) -> Result<RoundStandings> {
        let styled = self.console.styled();
        let mut standings = RoundStandings::new();

        for player in roster.players() {
            self.console
                .line(console::turn_announcement(roster.name(player), styled))?;
            let summary = self.play_hand()?;
            standings.record(player, summary.score);
            self.console.blank()?;
        }

        Ok(standings)
    }

    /// Deal a fresh hand and run one turn to completion.
    pub fn play_hand(&mut self) -> Result<TurnSummary> {
        let styled = self.console.styled();
        let hand = self.dealer.deal(self.hand_size);
        let mut turn = Turn::new(&self.dictionary, hand, self.hand_size);

        let summary = loop {
            if let Some(summary) = turn.summary() {
                break summary;
            }

            self.console.line(console::hand_line(turn.hand()))?;
            let word = normalize_word(&self.console.prompt(console::WORD_PROMPT)?);

            match turn.submit(&word)? {
                TurnEvent::Rejected(result) => {
                    self.console.line(console::rejection_line(&result, styled))?;
                    self.console.blank()?;
                }
                TurnEvent::Scored {
                    word,
                    points,
                    total,
                } => {
                    self.console
                        .line(console::word_scored_line(&word, points, total))?;
                    self.console.blank()?;
                }
                TurnEvent::Stopped | TurnEvent::Ignored => {}
            }
        };

        self.console.line(console::turn_summary_line(&summary))?;
        Ok(summary)
    }

    /// Ask for the player count until it parses, then each player's name.
    fn read_roster(&mut self) -> Result<Roster> {
        let players = loop {
            let answer = self.console.prompt(console::PLAYER_COUNT_PROMPT)?;
            match parse_player_count(&answer) {
                Some(n) => break n,
                None => self.console.line(console::invalid_player_count())?,
            }
        };

        let mut names = Vec::new();
        for player in 1..=players {
            let answer = self.console.prompt(&console::player_name_prompt(player))?;
            names.push(player_name(&answer, player));
        }
        Ok(Roster::new(names))
    }

    /// Get the console (for inspecting output)
    #[cfg(test)]
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }
}
