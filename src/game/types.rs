use derive_more::{Display, Error};
use serde::{Serialize, Deserialize};

/// Letter grid for one game round. Indexed as `board[row][col]`, every cell
/// an uppercase letter.
pub type Board = Vec<Vec<char>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Classification of a word-check attempt.
///
/// Serializes to the wire values `"ok"`, `"not-word"` and `"not-on-board"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// Dictionary word with a valid path on the board.
    Ok,
    /// Not a dictionary word; the board is never consulted.
    NotWord,
    /// Dictionary word, but no path of adjacent unused cells spells it.
    NotOnBoard,
}

/// Error taxonomy of the game core.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// Board generation was asked for a zero-sized grid or an empty alphabet.
    #[display("invalid board dimensions")]
    InvalidDimension,
    /// A word check was requested while the session has no active board.
    #[display("no active board in session")]
    MissingBoard,
    /// A reported score did not parse as a non-negative integer.
    #[display("score is not a valid integer")]
    MalformedScore,
    /// The configured word-list file could not be read.
    #[display("failed to load dictionary: {_0}")]
    DictionaryLoad(#[error(source)] std::io::Error),
}
