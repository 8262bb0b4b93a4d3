//! JSON endpoints: word checking and end-of-game score reporting.

use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, warn};
use std::borrow::Cow;

use crate::game::solver::check_word;
use crate::game::stats;
use crate::game::types::GameError;
use crate::server::http_error::game_error_response;
use crate::server::messages::{CheckResponse, PlayerDataRequest, PlayerDataResponse};
use crate::server::sessions::{load_session, save_session, session_cookie};
use crate::server::state::AppState;

/// `GET /check?word=<string>` — classify a submitted word against the
/// session's current board.
///
/// Responds 200 with `{"result": ...}` for all three verdicts. A missing
/// `word` parameter is treated as the empty word; a session with no active
/// board is a client error.
pub async fn check(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    // Parse query parameters for the submitted word.
    let mut word = String::new();
    for kv in req.query_string().split('&') {
        let mut split = kv.split('=');
        if let (Some("word"), Some(value)) = (split.next(), split.next()) {
            word = urlencoding::decode(value)
                .unwrap_or_else(|_| Cow::Borrowed(""))
                .into_owned();
        }
    }

    let (id, session) = load_session(&req, &state);
    let board = match &session.current_board {
        Some(board) => board,
        None => {
            warn!("session {}: word check without an active board", id);
            return game_error_response(&GameError::MissingBoard, None);
        }
    };

    let verdict = check_word(board, &word, &state.dictionary);
    debug!("session {}: check {:?} -> {:?}", id, word, verdict);

    HttpResponse::Ok()
        .cookie(session_cookie(id))
        .json(CheckResponse { result: verdict })
}

/// `POST /playerdata` — fold a finished game's score into the session stats.
///
/// Responds with the updated counters and whether the score set a new
/// session record; the updated stats are persisted into the session.
pub async fn player_data(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<PlayerDataRequest>,
) -> HttpResponse {
    let score = match body.score.parse() {
        Ok(score) => score,
        Err(raw) => {
            warn!("rejected playerdata score: {:?}", raw);
            return game_error_response(&GameError::MalformedScore, Some(&raw));
        }
    };

    let (id, mut session) = load_session(&req, &state);
    let (updated, broke_record) = stats::record(session.stats, score);
    session.stats = updated;
    save_session(&state, id, session);
    debug!(
        "session {}: recorded score {} (broke record: {})",
        id, score, broke_record
    );

    HttpResponse::Ok()
        .cookie(session_cookie(id))
        .json(PlayerDataResponse {
            broke_record,
            highscore: updated.highscore,
            games_played: updated.games_played,
        })
}
