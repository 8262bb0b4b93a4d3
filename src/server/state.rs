// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the shared dictionary and the per-player session store.
//! Used to share state between the HTTP handlers.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::game::state::PlayerSession;
use crate::game::words::Dictionary;

/// Shared application state, injected into HTTP handlers.
pub struct AppState {
    /// Word list every check request is validated against. Immutable after
    /// startup, shared freely across requests.
    pub dictionary: Dictionary,
    /// Per-player sessions, keyed by the id carried in the session cookie.
    /// Handlers hold the lock for one load/compute/save cycle at a time.
    pub sessions: Mutex<HashMap<Uuid, PlayerSession>>,
}

impl AppState {
    /// Create a new AppState around the given dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        AppState {
            dictionary,
            sessions: Mutex::new(HashMap::new()),
        }
    }
}
