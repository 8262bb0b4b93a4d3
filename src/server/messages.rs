use serde::{Serialize, Deserialize};

use crate::game::types::Verdict;

/// Response body for `GET /check`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub result: Verdict,
}

/// Request body for `POST /playerdata`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerDataRequest {
    pub score: ScoreValue,
}

/// Score as sent on the wire: the browser client posts it as a JSON string
/// (`{"score":"50"}`), but a bare integer is accepted too.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Number(u32),
    Text(String),
}

impl ScoreValue {
    /// The numeric score, or the raw text when it does not parse.
    pub fn parse(&self) -> Result<u32, String> {
        match self {
            ScoreValue::Number(score) => Ok(*score),
            ScoreValue::Text(text) => text.trim().parse().map_err(|_| text.clone()),
        }
    }
}

/// Response body for `POST /playerdata`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerDataResponse {
    #[serde(rename = "brokeRecord")]
    pub broke_record: bool,
    pub highscore: u32,
    pub games_played: u32,
}
