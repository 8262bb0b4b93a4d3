/// Centralized helpers for HTTP error responses.
///
/// Use these helpers to ensure all error bodies are consistent, explicit, and
/// include a code and context.
use actix_web::{HttpResponse, http::StatusCode};

use crate::game::types::GameError;

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "MISSING_BOARD").
/// - `message`: Human-readable error message (in English).
/// - `context`: Optional context (e.g. the rejected input).
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let context_str = context.unwrap_or("");
    let body = format!(
        r#"{{"error":{{"code":"{}","message":"{}","context":"{}"}}}}"#,
        code, message, context_str
    );
    HttpResponse::build(status).content_type("application/json").body(body)
}

/// Returns the HTTP response for a core error: client errors (bad input,
/// no active board) map to 400, everything else to 500. The error's display
/// form becomes the message.
pub fn game_error_response(err: &GameError, context: Option<&str>) -> HttpResponse {
    let (code, status) = match err {
        GameError::MissingBoard => ("MISSING_BOARD", StatusCode::BAD_REQUEST),
        GameError::MalformedScore => ("MALFORMED_SCORE", StatusCode::BAD_REQUEST),
        GameError::InvalidDimension => ("INVALID_DIMENSION", StatusCode::INTERNAL_SERVER_ERROR),
        GameError::DictionaryLoad(_) => ("DICTIONARY_LOAD", StatusCode::INTERNAL_SERVER_ERROR),
    };
    http_error_response(code, &err.to_string(), context, status)
}
