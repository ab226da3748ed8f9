//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable. The session layer maps an error to either a
//! silent session reset (failed verification) or a display message (failed
//! login/register) via [`ApiError::display_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by the [`AuthApi`](super::api::AuthApi) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// A 2xx response whose body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
    /// No browser transport is available (server-side render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message for the user, or `fallback` when the backend
    /// supplied nothing usable.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { body, .. } => message_from_body(body).unwrap_or_else(|| fallback.to_owned()),
            _ => fallback.to_owned(),
        }
    }
}

/// Pull a message out of an error body.
///
/// The backend answers rejections with plain text (`"Error: ..."`), but a
/// JSON string or a `{ "message" | "error": ... }` object is also accepted.
fn message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(s)) => non_blank(&s),
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .and_then(non_blank),
        _ => Some(trimmed.to_owned()),
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}
