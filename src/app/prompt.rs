//! Parsing of the answers players type at prompts

/// Answer to the replay question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    PlayAgain,
    Quit,
}

impl ReplayChoice {
    /// Only a literal "N" quits. Anything else, lowercase "n" included, plays on.
    pub fn parse(answer: &str) -> Self {
        if answer == "N" {
            ReplayChoice::Quit
        } else {
            ReplayChoice::PlayAgain
        }
    }
}

/// Largest roster a match accepts
pub const MAX_PLAYERS: usize = 20;

/// Parse a player count between 1 and `MAX_PLAYERS`.
pub fn parse_player_count(answer: &str) -> Option<usize> {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_PLAYERS).contains(n))
}

/// Use the typed name, or `Player-<n>` when left blank.
pub fn player_name(answer: &str, player: usize) -> String {
    let name = answer.trim();
    if name.is_empty() {
        format!("Player-{}", player)
    } else {
        name.to_string()
    }
}

/// Normalize a typed word: surrounding whitespace dropped, lower-cased.
pub fn normalize_word(answer: &str) -> String {
    answer.trim().to_lowercase()
}
