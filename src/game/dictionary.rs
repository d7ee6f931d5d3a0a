//! Dictionary module for word validation
//!
//! Loads a plain-text word list once at startup, one word per line.
//! Provides O(1) hash set lookup. Entries are lower-cased and trimmed on
//! load; lookups are exact.

use crate::error::{GameError, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The set of playable words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a word list from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let to_error = |source| GameError::Dictionary {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(to_error)?;
        let dictionary = Self::from_reader(BufReader::new(file)).map_err(to_error)?;

        if dictionary.is_empty() {
            log::warn!("word list {} is empty; no word can be played", path.display());
        } else {
            log::info!("loaded {} words from {}", dictionary.len(), path.display());
        }
        Ok(dictionary)
    }

    /// Read one word per line from any buffered source.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            words.insert(line?.trim().to_lowercase());
        }
        Ok(Self { words })
    }

    /// Check if a word is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the total number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the word list had no lines at all
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_lines_are_normalized() {
        let dict = Dictionary::from_reader(Cursor::new("Hello\n  world  \r\nCAT\n")).unwrap();
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(dict.contains("cat"));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_lookup_is_exact() {
        let dict: Dictionary = ["cat"].into_iter().collect();
        assert!(dict.contains("cat"));
        assert!(!dict.contains("CAT"));
        assert!(!dict.contains("cats"));
    }

    #[test]
    fn test_blank_line_becomes_empty_word() {
        let dict = Dictionary::from_reader(Cursor::new("cat\n\ndog\n")).unwrap();
        assert!(dict.contains(""));

        let dict = Dictionary::from_reader(Cursor::new("cat\ndog\n")).unwrap();
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "Banana").unwrap();

        let dict = Dictionary::load(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("banana"));
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let dict = Dictionary::load(file.path()).unwrap();
        assert!(dict.is_empty());
        assert!(!dict.contains("cat"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = Dictionary::load(&path).unwrap_err();
        match err {
            GameError::Dictionary { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected Dictionary error, got {:?}", other),
        }
    }
}
