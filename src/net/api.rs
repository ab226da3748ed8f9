//! REST calls against the rating backend's `/auth/*` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! The session manager is written against the [`AuthApi`] trait so its
//! lifecycle can be driven by an in-memory backend in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthResponse, User};
use crate::config::ApiConfig;

/// The three backend operations the session manager depends on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `GET /auth/me` with `token` as bearer credential.
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;

    /// `POST /auth/login`.
    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/register`.
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError>;
}

/// [`AuthApi`] over HTTP.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[cfg(any(feature = "hydrate", test))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
impl AuthApi for HttpAuthApi {
    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.endpoint("/auth/me"))
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::LoginRequest { username, password };
            post_json(&self.config.endpoint("/auth/login"), &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::RegisterRequest {
                username,
                email,
                password,
            };
            post_json(&self.config.endpoint("/auth/register"), &body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
