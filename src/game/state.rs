use serde::{Serialize, Deserialize};

use crate::game::stats::PlayerStats;
use crate::game::types::Board;

/// Per-player game state, loaded by the server layer before each request and
/// saved back afterwards.
///
/// Handlers pass this object into the core functions explicitly instead of
/// letting them reach into framework session storage, so the core stays pure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSession {
    /// Board of the round in progress, if a game has been started.
    pub current_board: Option<Board>,
    /// Running highscore and games-played counters. These outlive any single
    /// board: starting a new round leaves them untouched.
    pub stats: PlayerStats,
}

impl PlayerSession {
    /// Start a new round. The previous board, if any, is discarded.
    pub fn start_game(&mut self, board: Board) {
        self.current_board = Some(board);
    }
}
