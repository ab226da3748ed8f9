//! Auth-session state and lifecycle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionManager`] is created when the app mounts. It owns the session
//! snapshot, talks to the backend through [`AuthApi`], and persists the
//! bearer token through [`TokenStore`]. Route guards and the dashboard read
//! the snapshot; they never mutate it directly.
//!
//! DESIGN
//! ======
//! Every transition is a [`SessionEvent`] applied by [`Session::apply`], a
//! pure reducer. The manager performs I/O, dispatches the resulting event, and
//! then notifies subscribers with the new snapshot. Locks are released before
//! observers run and are never held across an `.await`.
//!
//! The manager counts outstanding backend requests (startup verification
//! included) next to the session. Only the completion that brings the count to
//! zero emits [`SessionEvent::Settled`], so `loading` stays true until every
//! answer that could change `user` has arrived.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::storage::TokenStore;
use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, User};

/// Shown when a rejected login carries no usable message.
pub const LOGIN_FAILED_MESSAGE: &str = "Login gagal";

/// Shown when a rejected registration carries no usable message.
pub const REGISTER_FAILED_MESSAGE: &str = "Registrasi gagal";

/// Authentication state: bearer token, verified identity, and whether a
/// request that can change either is still in flight.
///
/// `user` is only ever set while `token` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::starting(None)
    }
}

/// A state transition of [`Session`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A login/register request was sent.
    RequestStarted,
    /// No request is in flight any more.
    Settled,
    /// `GET /auth/me` accepted `token`.
    Verified { token: String, user: User },
    /// `GET /auth/me` rejected `token`.
    VerificationFailed { token: String },
    /// Login or register succeeded.
    Authenticated { token: String, user: User },
    /// Explicit sign-out.
    LoggedOut,
}

impl Session {
    /// Unresolved session for a token just read from storage.
    pub fn starting(token: Option<String>) -> Self {
        Self {
            token,
            user: None,
            loading: true,
        }
    }

    /// Whether a verified identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Apply `event` in place.
    ///
    /// Verification results only take effect while the token they were issued
    /// for is still current, so a late `/auth/me` answer cannot resurrect a
    /// session that was logged out or replaced in the meantime. Only
    /// `RequestStarted` and `Settled` touch `loading`.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::RequestStarted => self.loading = true,
            SessionEvent::Settled => self.loading = false,
            SessionEvent::Verified { token, user } => {
                if self.token.as_deref() == Some(token.as_str()) {
                    self.user = Some(user);
                }
            }
            SessionEvent::VerificationFailed { token } => {
                if self.token.as_deref() == Some(token.as_str()) {
                    self.token = None;
                    self.user = None;
                }
            }
            SessionEvent::Authenticated { token, user } => {
                self.token = Some(token);
                self.user = Some(user);
            }
            SessionEvent::LoggedOut => {
                self.token = None;
                self.user = None;
            }
        }
    }
}

/// Result of [`SessionManager::login`] and [`SessionManager::register`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure { message: String },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { message } => Some(message),
        }
    }
}

/// Sign-in or sign-up input. Lives only until the request is sent.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    SignIn {
        username: String,
        password: String,
    },
    Register {
        username: String,
        email: String,
        password: String,
    },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignIn { username, .. } => f
                .debug_struct("SignIn")
                .field("username", username)
                .finish_non_exhaustive(),
            Self::Register { username, email, .. } => f
                .debug_struct("Register")
                .field("username", username)
                .field("email", email)
                .finish_non_exhaustive(),
        }
    }
}

/// Handle returned by [`SessionManager::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Arc<dyn Fn(&Session) + Send + Sync>;

/// Session plus the number of backend requests whose answers are pending.
struct Tracked {
    session: Session,
    in_flight: usize,
}

struct Inner<A, S> {
    api: A,
    store: S,
    state: Mutex<Tracked>,
    observers: Mutex<Vec<(SubscriptionId, Observer)>>,
    next_subscription: AtomicU64,
    initialized: AtomicBool,
}

/// Owns the session lifecycle. Cheap to clone; clones share state.
pub struct SessionManager<A, S> {
    inner: Arc<Inner<A, S>>,
}

impl<A, S> Clone for SessionManager<A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: AuthApi, S: TokenStore> SessionManager<A, S> {
    /// Create the manager, reading the persisted token once.
    ///
    /// Startup verification counts as in flight from here until
    /// [`Self::initialize`] resolves it.
    pub fn new(api: A, store: S) -> Self {
        let token = store.load();
        Self {
            inner: Arc::new(Inner {
                api,
                store,
                state: Mutex::new(Tracked {
                    session: Session::starting(token),
                    in_flight: 1,
                }),
                observers: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(1),
                initialized: AtomicBool::new(false),
            }),
        }
    }

    /// Current session.
    pub fn snapshot(&self) -> Session {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .session
            .clone()
    }

    /// Register `observer` to run after every transition.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(sub, _)| *sub != id);
    }

    /// Mutate the tracked state under the lock, then notify observers once.
    fn transition(&self, change: impl FnOnce(&mut Tracked)) {
        let next = {
            let mut tracked = self.inner.state.lock().unwrap_or_else(PoisonError::into_inner);
            change(&mut tracked);
            tracked.session.clone()
        };
        let observers: Vec<Observer> = self
            .inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, o)| Arc::clone(o))
            .collect();
        for observer in observers {
            observer(&next);
        }
    }

    fn dispatch(&self, event: SessionEvent) {
        self.transition(|t| t.session.apply(event));
    }

    fn begin_request(&self) {
        self.transition(|t| {
            t.in_flight += 1;
            t.session.apply(SessionEvent::RequestStarted);
        });
    }

    /// Apply the outcome of one request; settle if it was the last one.
    fn finish_request(&self, event: Option<SessionEvent>) {
        self.transition(|t| {
            t.in_flight = t.in_flight.saturating_sub(1);
            if let Some(event) = event {
                t.session.apply(event);
            }
            if t.in_flight == 0 {
                t.session.apply(SessionEvent::Settled);
            }
        });
    }

    /// Verify the persisted token against `GET /auth/me`.
    ///
    /// Runs once per manager; later calls return immediately. Leaves
    /// `loading` false unless a login or register is still in flight.
    pub async fn initialize(&self) {
        if self.inner.initialized.swap(true, Ordering::AcqRel) {
            log::debug!("session already initialized");
            return;
        }

        let Some(token) = self.snapshot().token else {
            log::debug!("no stored token; starting logged out");
            self.finish_request(None);
            return;
        };

        match self.inner.api.current_user(&token).await {
            Ok(user) => {
                log::info!("session restored for {}", user.username);
                self.finish_request(Some(SessionEvent::Verified { token, user }));
            }
            Err(e) => {
                match e.status() {
                    Some(status) => log::warn!("stored token rejected with status {status}"),
                    None => log::warn!("could not verify stored token: {e}"),
                }
                let still_current = self.snapshot().token.as_deref() == Some(token.as_str());
                if still_current {
                    self.inner.store.clear();
                }
                self.finish_request(Some(SessionEvent::VerificationFailed { token }));
            }
        }
    }

    /// Sign in with `POST /auth/login`.
    pub async fn login(&self, username: &str, password: &str) -> AuthOutcome {
        self.begin_request();
        let result = self.inner.api.login(username, password).await;
        self.finish_auth(result, LOGIN_FAILED_MESSAGE)
    }

    /// Create an account with `POST /auth/register` and sign in as it.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> AuthOutcome {
        self.begin_request();
        let result = self.inner.api.register(username, email, password).await;
        self.finish_auth(result, REGISTER_FAILED_MESSAGE)
    }

    /// Dispatch `credentials` to [`Self::login`] or [`Self::register`].
    pub async fn submit(&self, credentials: Credentials) -> AuthOutcome {
        match credentials {
            Credentials::SignIn { username, password } => self.login(&username, &password).await,
            Credentials::Register {
                username,
                email,
                password,
            } => self.register(&username, &email, &password).await,
        }
    }

    fn finish_auth(&self, result: Result<AuthResponse, ApiError>, fallback: &str) -> AuthOutcome {
        match result {
            Ok(resp) => {
                let (token, user) = resp.into_parts();
                self.inner.store.save(&token);
                log::info!("signed in as {}", user.username);
                self.finish_request(Some(SessionEvent::Authenticated { token, user }));
                AuthOutcome::Success
            }
            Err(e) => {
                log::warn!("authentication rejected: {e}");
                self.finish_request(None);
                AuthOutcome::Failure {
                    message: e.display_message(fallback),
                }
            }
        }
    }

    /// Forget the token and identity. No network call; safe to repeat.
    pub fn logout(&self) {
        self.inner.store.clear();
        self.dispatch(SessionEvent::LoggedOut);
        log::debug!("session cleared");
    }
}
