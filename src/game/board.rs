use rand::Rng;

use crate::game::types::{Board, GameError};

/// Generate a `rows` x `cols` board with every cell drawn independently and
/// uniformly from `alphabet`.
///
/// The random source is an explicit parameter so callers can pass a seeded
/// generator and get reproducible boards.
pub fn generate_board<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    alphabet: &[char],
    rng: &mut R,
) -> Result<Board, GameError> {
    if rows == 0 || cols == 0 || alphabet.is_empty() {
        return Err(GameError::InvalidDimension);
    }

    let board = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect()
        })
        .collect();
    Ok(board)
}
