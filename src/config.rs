//! Command-line configuration

use crate::game::{DEFAULT_HAND_SIZE, MAX_HAND_SIZE};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Word list looked up when `--words` is not given
pub const DEFAULT_WORDLIST_FILENAME: &str = "words.txt";

#[derive(Parser, Debug)]
#[command(name = "wordgame", version, about = "Spell words from a random hand of letters and win rounds")]
pub struct Config {
    /// Word list, one word per line
    #[arg(short = 'w', long)]
    pub words: Option<PathBuf>,

    /// Letters dealt per hand; a word using all of them earns the bonus
    #[arg(short = 'n', long, default_value_t = DEFAULT_HAND_SIZE, value_parser = parse_hand_size)]
    pub hand_size: usize,

    /// Seed for dealing, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level spec (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

/// Accept a hand size from 1 to `MAX_HAND_SIZE`.
fn parse_hand_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a whole number", s))?;
    if (1..=MAX_HAND_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("hand size must be between 1 and {}", MAX_HAND_SIZE))
    }
}

impl Config {
    /// Where to read the word list from.
    ///
    /// Checks `--words`, then `words.txt` in the working directory, then the
    /// same file in the OS data directory. Falls back to the working
    /// directory path so a missing list is reported there.
    pub fn dictionary_path(&self) -> PathBuf {
        if let Some(path) = &self.words {
            return path.clone();
        }

        let local = PathBuf::from(DEFAULT_WORDLIST_FILENAME);
        if local.is_file() {
            return local;
        }

        if let Some(path) = Self::data_dir()
            .map(|dir| dir.join(DEFAULT_WORDLIST_FILENAME))
            .filter(|path| path.is_file())
        {
            return path;
        }

        local
    }

    /// Get the OS-standard data directory for the game
    ///
    /// - Linux: `$XDG_DATA_HOME/wordgame/` or `~/.local/share/wordgame/`
    /// - macOS: `~/Library/Application Support/wordgame/`
    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordgame").map(|dirs| dirs.data_dir().to_path_buf())
    }
}
