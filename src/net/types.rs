//! Wire DTOs for the `/auth/*` endpoints.
//!
//! DESIGN
//! ======
//! Request bodies borrow their fields so credentials are never copied into
//! owned buffers that outlive the request.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in identity, as returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login/register response.
///
/// The backend also sends a token `type` (always `"Bearer"`); unknown fields
/// are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub email: String,
}

impl AuthResponse {
    /// Split into the bearer token and the user identity it belongs to.
    pub fn into_parts(self) -> (String, User) {
        (
            self.token,
            User {
                username: self.username,
                email: self.email,
            },
        )
    }
}
