//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so overrides are baked in at
//! compile time via `option_env!`. Every value has a default that matches the
//! rating backend's stock deployment (API mounted under `/api`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default API mount point, relative to the page origin.
pub const DEFAULT_API_BASE: &str = "/api";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Client-side route for the sign-in screen.
pub const LOGIN_PATH: &str = "/login";

/// Client-side route for the guarded dashboard.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Where the rating backend lives and where the session token is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_owned(),
            token_key: TOKEN_STORAGE_KEY.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Resolve the config from `RATING_API_BASE` captured at build time.
    pub fn from_build_env() -> Self {
        Self::with_base(option_env!("RATING_API_BASE"))
    }

    fn with_base(base: Option<&str>) -> Self {
        let base_url = base
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map_or_else(|| DEFAULT_API_BASE.to_owned(), |b| b.trim_end_matches('/').to_owned());
        Self { base_url, ..Self::default() }
    }

    /// Join an endpoint path such as `/auth/me` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Browser log level, from `RATING_LOG_LEVEL` at build time (default `info`).
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("RATING_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(log::Level::Info)
}
