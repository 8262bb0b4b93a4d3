/// Server configuration constants.
///
/// This module defines the HTTP bind address and session/dictionary settings.
/// Address and port the HTTP server binds to.
pub const BIND_ADDR: (&str, u16) = ("127.0.0.1", 8080);

/// Name of the cookie carrying the player's session id.
pub const SESSION_COOKIE: &str = "session-id";

/// Environment variable pointing at an external word-list file (one word per
/// line). When unset, the word list embedded in the binary is used.
pub const DICT_PATH_ENV: &str = "WORD_GRID_DICT";
