//! Session-cookie plumbing around the per-player state store.
//!
//! A `session-id` cookie carries a v4 UUID keying into the process-local
//! store. Handlers load a snapshot of the player's state, call into the game
//! core with it, and save the updated value back; the core never sees the
//! store or the cookie.

use actix_web::HttpRequest;
use actix_web::cookie::Cookie;
use std::sync::PoisonError;
use uuid::Uuid;

use crate::config::server::SESSION_COOKIE;
use crate::game::state::PlayerSession;
use crate::server::state::AppState;

/// Session id from the request cookie, if present and well formed.
pub fn session_id(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

/// Load the player's session, minting a fresh id when the request carries
/// none (or an unparseable one). Returns the id alongside a snapshot of the
/// state; an unknown id yields the default empty session.
pub fn load_session(req: &HttpRequest, state: &AppState) -> (Uuid, PlayerSession) {
    let id = session_id(req).unwrap_or_else(Uuid::new_v4);
    let session = state
        .sessions
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
        .cloned()
        .unwrap_or_default();
    (id, session)
}

/// Persist the session value under `id`, replacing any previous snapshot.
pub fn save_session(state: &AppState, id: Uuid, session: PlayerSession) {
    state
        .sessions
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(id, session);
}

/// Cookie pinning `id` to the client for subsequent requests.
pub fn session_cookie(id: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/")
        .finish()
}
