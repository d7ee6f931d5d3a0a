//! Match bookkeeping: roster, round wins and the win threshold

use super::arbitrator::{PlayerId, RoundOutcome, RoundStandings};

/// Round wins needed to take a match with `players` players:
/// `floor((players + 1) / 2) + 1`, saturating at `u32::MAX`.
pub fn win_threshold(players: usize) -> u32 {
    let half = players / 2 + players % 2;
    u32::try_from(half).map_or(u32::MAX, |h| h.saturating_add(1))
}

/// Player names, indexed from 1 in turn order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Display name for a 1-based player index
    pub fn name(&self, player: PlayerId) -> &str {
        player
            .checked_sub(1)
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
            .unwrap_or("?")
    }

    /// Player indices in turn order
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        1..=self.names.len()
    }
}

/// Round wins for every player across one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    wins: Vec<u32>,
    threshold: u32,
    rounds_played: u32,
}

impl MatchState {
    pub fn new(players: usize) -> Self {
        Self {
            wins: vec![0; players],
            threshold: win_threshold(players),
            rounds_played: 0,
        }
    }

    /// Apply a finished round. A tie changes no win counts.
    pub fn record_round(&mut self, standings: &RoundStandings) -> Option<RoundOutcome> {
        self.rounds_played += 1;
        let outcome = standings.outcome();

        if let Some(RoundOutcome::Winner { player, .. }) = &outcome {
            if let Some(wins) = player.checked_sub(1).and_then(|i| self.wins.get_mut(i)) {
                *wins += 1;
            }
        }

        log::info!("round {} outcome: {:?}", self.rounds_played, outcome);
        outcome
    }

    /// Round wins for a player
    #[cfg(test)]
    pub fn wins(&self, player: PlayerId) -> u32 {
        player
            .checked_sub(1)
            .and_then(|i| self.wins.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Most round wins held by any player
    pub fn leader_wins(&self) -> u32 {
        self.wins.iter().copied().max().unwrap_or(0)
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The match ends once anyone reaches the threshold.
    pub fn is_over(&self) -> bool {
        self.leader_wins() >= self.threshold
    }

    /// Every player at the threshold, in turn order.
    pub fn winners(&self) -> Vec<PlayerId> {
        self.wins
            .iter()
            .enumerate()
            .filter(|(_, w)| **w >= self.threshold)
            .map(|(i, _)| i + 1)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(scores: &[u32]) -> RoundStandings {
        let mut standings = RoundStandings::new();
        for (i, score) in scores.iter().enumerate() {
            standings.record(i + 1, *score);
        }
        standings
    }

    #[test]
    fn test_win_threshold() {
        assert_eq!(win_threshold(1), 2);
        assert_eq!(win_threshold(2), 2);
        assert_eq!(win_threshold(3), 3);
        assert_eq!(win_threshold(4), 3);
        assert_eq!(win_threshold(5), 4);
        assert_eq!(win_threshold(20), 11);
        // No overflow for absurd rosters
        assert!(win_threshold(usize::MAX) > u32::MAX / 2);
    }

    #[test]
    fn test_tie_changes_nothing() {
        let mut state = MatchState::new(2);
        let outcome = state.record_round(&round(&[20, 20]));

        assert!(matches!(outcome, Some(RoundOutcome::Tie { .. })));
        assert_eq!(state.wins(1), 0);
        assert_eq!(state.wins(2), 0);
        assert_eq!(state.rounds_played(), 1);
    }

    #[test]
    fn test_winner_gains_a_round() {
        let mut state = MatchState::new(3);
        state.record_round(&round(&[5, 30, 10]));
        assert_eq!(state.wins(2), 1);
        assert_eq!(state.leader_wins(), 1);
        assert!(!state.is_over());
    }

    #[test]
    fn test_three_player_match_ends_at_third_win() {
        let mut state = MatchState::new(3);
        assert_eq!(state.threshold(), 3);

        let rounds = [
            [10, 0, 0],
            [0, 15, 0],
            [7, 7, 1],
            [12, 3, 3],
            [0, 20, 19],
            [40, 1, 2],
            [0, 0, 99],
        ];

        let mut ended_after = None;
        for (i, scores) in rounds.iter().enumerate() {
            state.record_round(&round(scores));
            if state.is_over() {
                ended_after = Some(i + 1);
                break;
            }
        }

        assert_eq!(ended_after, Some(6));
        assert_eq!(state.winners(), vec![1]);
        assert_eq!(state.wins(1), 3);
        assert_eq!(state.wins(2), 2);
        assert_eq!(state.wins(3), 0);
    }

    #[test]
    fn test_roster_names() {
        let roster = Roster::new(vec!["Ann".to_string(), "Raj".to_string()]);
        assert_eq!(roster.name(1), "Ann");
        assert_eq!(roster.name(2), "Raj");
        assert_eq!(roster.name(0), "?");
        assert_eq!(roster.players().collect::<Vec<_>>(), vec![1, 2]);
    }
}
