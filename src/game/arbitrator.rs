//! Round arbitration
//!
//! Collects each player's turn score for a round and decides whether the
//! round has a single winner or ends in a tie.

/// 1-based player index, in turn order
pub type PlayerId = usize;

/// Outcome of a completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// One player scored strictly more than everyone else
    Winner { player: PlayerId, score: u32 },
    /// More than one player shares the top score; nobody wins the round
    Tie { players: Vec<PlayerId>, score: u32 },
}

/// Turn scores for one round, in the order players took their turns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundStandings {
    scores: Vec<(PlayerId, u32)>,
}

impl RoundStandings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a player's turn score, replacing any earlier entry.
    pub fn record(&mut self, player: PlayerId, score: u32) {
        match self.scores.iter_mut().find(|(p, _)| *p == player) {
            Some(entry) => entry.1 = score,
            None => self.scores.push((player, score)),
        }
    }

    /// Highest score this round
    pub fn max_score(&self) -> Option<u32> {
        self.scores.iter().map(|(_, s)| *s).max()
    }

    /// Decide the round. Returns None if nobody has played.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        let top = self.max_score()?;
        let leaders: Vec<PlayerId> = self
            .scores
            .iter()
            .filter(|(_, s)| *s == top)
            .map(|(p, _)| *p)
            .collect();

        if leaders.len() == 1 {
            Some(RoundOutcome::Winner {
                player: leaders[0],
                score: top,
            })
        } else {
            Some(RoundOutcome::Tie {
                players: leaders,
                score: top,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings(scores: &[u32]) -> RoundStandings {
        let mut standings = RoundStandings::new();
        for (i, score) in scores.iter().enumerate() {
            standings.record(i + 1, *score);
        }
        standings
    }

    #[test]
    fn test_unique_top_score_wins() {
        assert_eq!(
            standings(&[12, 40, 7]).outcome(),
            Some(RoundOutcome::Winner {
                player: 2,
                score: 40
            })
        );
    }

    #[test]
    fn test_two_way_tie() {
        assert_eq!(
            standings(&[20, 20]).outcome(),
            Some(RoundOutcome::Tie {
                players: vec![1, 2],
                score: 20
            })
        );
    }

    #[test]
    fn test_tie_below_top_does_not_matter() {
        assert_eq!(
            standings(&[5, 5, 9]).outcome(),
            Some(RoundOutcome::Winner { player: 3, score: 9 })
        );
    }

    #[test]
    fn test_all_zero_is_a_tie() {
        assert!(matches!(
            standings(&[0, 0, 0]).outcome(),
            Some(RoundOutcome::Tie { score: 0, .. })
        ));
    }

    #[test]
    fn test_single_player_always_wins() {
        assert_eq!(
            standings(&[0]).outcome(),
            Some(RoundOutcome::Winner { player: 1, score: 0 })
        );
    }

    #[test]
    fn test_empty_round_has_no_outcome() {
        assert_eq!(RoundStandings::new().outcome(), None);
    }

    #[test]
    fn test_record_replaces_score() {
        let mut standings = standings(&[3, 4]);
        standings.record(1, 10);
        assert_eq!(standings.max_score(), Some(10));
        assert_eq!(
            standings.outcome(),
            Some(RoundOutcome::Winner {
                player: 1,
                score: 10
            })
        );

        // Re-recording the old score ties instead of adding a third entry
        standings.record(1, 4);
        assert_eq!(
            standings.outcome(),
            Some(RoundOutcome::Tie {
                players: vec![1, 2],
                score: 4
            })
        );
    }
}
