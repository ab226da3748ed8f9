//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect and
//! sign-out behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::LOGIN_PATH;
use crate::net::api::AuthApi;
use crate::state::session::{Session, SessionManager};
use crate::state::storage::TokenStore;

/// Whether a page should leave for `/login`: verification is done and no
/// user came out of it.
pub fn should_redirect_unauth(state: &Session) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// End the session, then leave for `/login`.
pub fn logout_and_redirect<A, S, F>(manager: &SessionManager<A, S>, navigate: &F)
where
    A: AuthApi,
    S: TokenStore,
    F: Fn(&str, NavigateOptions),
{
    manager.logout();
    navigate(LOGIN_PATH, NavigateOptions::default());
}
