use serde::{Serialize, Deserialize};

/// Per-session aggregate score statistics.
///
/// `highscore` never decreases and `games_played` only ever advances; both
/// start at zero when a session first touches them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub highscore: u32,
    pub games_played: u32,
}

/// Fold one finished game's score into the running stats.
///
/// `games_played` advances by one unconditionally. The returned flag is true
/// when `score` strictly beats the previous highscore, in which case the
/// highscore becomes `score`.
pub fn record(stats: PlayerStats, score: u32) -> (PlayerStats, bool) {
    let broke_record = score > stats.highscore;
    let updated = PlayerStats {
        highscore: if broke_record { score } else { stats.highscore },
        games_played: stats.games_played + 1,
    };
    (updated, broke_record)
}
