//! Error types shared across the game

use std::io;
use std::path::PathBuf;

/// Errors that can end a session or reject an internal operation.
///
/// Mistakes a player makes at the prompt are not errors; the session
/// re-prompts for those.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The word list could not be read. The game cannot start without it.
    #[error("could not read word list {}: {source}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to the console failed
    #[error("console error: {0}")]
    Io(#[from] io::Error),

    /// The input stream reached end of file
    #[error("input closed")]
    InputClosed,

    /// A word contained a character with no letter value
    #[error("'{0}' has no letter value")]
    UnscorableLetter(char),

    /// A word was removed from a hand that could not supply it
    #[error("hand has no '{letter}' left to remove")]
    HandUnderflow { letter: char },

    /// A score no longer fits in a `u32`
    #[error("score for a {len}-letter word is out of range")]
    ScoreOverflow { len: usize },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GameError>;
