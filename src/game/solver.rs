//! Word-check core: dictionary membership plus path search on the board.

use crate::game::types::{Board, Position, Verdict};
use crate::game::words::WordList;

/// Offsets to the up-to-8 neighbors of a cell (orthogonal and diagonal).
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Classify a submitted word against the board and the word list.
///
/// The dictionary check runs first: a string absent from the word list is
/// `NotWord` even if its letters happen to trace a path, and only dictionary
/// entries reach the path search. The empty word is `NotWord`. The board is
/// never mutated, so repeated calls with the same inputs agree.
pub fn check_word(board: &Board, word: &str, words: &impl WordList) -> Verdict {
    let word = word.trim();
    let letters: Vec<char> = word.to_uppercase().chars().collect();
    if letters.is_empty() || !words.contains(word) {
        return Verdict::NotWord;
    }

    if has_path(board, &letters) {
        Verdict::Ok
    } else {
        Verdict::NotOnBoard
    }
}

/// Whether `letters` can be traced on the board as a chain of adjacent
/// cells, none used twice. Tries a depth-first extension from every cell
/// holding the first letter; a cell consumed by one attempt is free again in
/// the next.
fn has_path(board: &Board, letters: &[char]) -> bool {
    board.iter().enumerate()
        .flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, letter)| {
                if *letter == letters[0] {
                    Some(Position { row, col })
                } else {
                    None
                }
            })
        })
        .any(|start| {
            let mut path = vec![start];
            extend_path(board, letters, &mut path)
        })
}

/// Depth-first extension of `path`, which already spells
/// `letters[..path.len()]`, one letter at a time. Cells in `path` are off
/// limits for the rest of this attempt.
fn extend_path(board: &Board, letters: &[char], path: &mut Vec<Position>) -> bool {
    if path.len() == letters.len() {
        return true;
    }

    let wanted = letters[path.len()];
    let last = path[path.len() - 1]; // path starts non-empty

    for (row_step, col_step) in NEIGHBOR_OFFSETS {
        let row = last.row as isize + row_step;
        let col = last.col as isize + col_step;
        if row < 0 || row as usize >= board.len() {
            continue;
        }
        if col < 0 || col as usize >= board[row as usize].len() {
            continue;
        }

        let pos = Position { row: row as usize, col: col as usize };
        if board[pos.row][pos.col] != wanted || path.contains(&pos) {
            continue;
        }

        path.push(pos);
        if extend_path(board, letters, path) {
            return true;
        }
        path.pop();
    }
    false
}
