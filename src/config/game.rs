/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as grid dimensions
/// and the alphabet boards are drawn from.
/// Number of rows in the game grid.
pub const GRID_ROW: usize = 5;

/// Number of columns in the game grid.
pub const GRID_COL: usize = 5;

/// Letters a board cell can hold. Each cell is drawn uniformly from this set.
pub const BOARD_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
