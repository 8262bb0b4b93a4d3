//! Dictionary loading and membership lookup.
//!
//! The solver only ever asks "is this a word?", so the dictionary is modeled
//! as the [`WordList`] capability; any set-like source satisfies it. The
//! production implementation loads a newline-separated word file, either from
//! the path in the `WORD_GRID_DICT` environment variable or from the list
//! embedded in the binary.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::server::DICT_PATH_ENV;
use crate::game::types::GameError;

/// Word list embedded in the binary, used when no external file is configured.
const EMBEDDED_WORDS: &str = include_str!("../../data/words.txt");

/// Membership lookup against a word list. Matching is case-insensitive.
pub trait WordList {
    fn contains(&self, word: &str) -> bool;
}

/// Dictionary backed by an in-memory set of lowercased words.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from newline-separated words. Surrounding
    /// whitespace and blank lines are dropped; entries are lowercased.
    pub fn from_lines(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();
        Dictionary { words }
    }

    /// Load a dictionary from a word file (one word per line).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let text = fs::read_to_string(path).map_err(GameError::DictionaryLoad)?;
        Ok(Self::from_lines(&text))
    }

    /// Load the word list configured for this process: the file named by
    /// `WORD_GRID_DICT`, or the embedded list when the variable is unset.
    pub fn load_default() -> Result<Self, GameError> {
        match std::env::var(DICT_PATH_ENV) {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(Self::from_lines(EMBEDDED_WORDS)),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordList for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}
