//! In-memory backend and token store for driving the session lifecycle in
//! tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, User};
use crate::state::storage::TokenStore;

#[derive(Default)]
pub(crate) struct FakeApi {
    pub(crate) me: Mutex<Option<Result<User, ApiError>>>,
    /// When set, `/auth/me` waits for the answer sent through this channel.
    pub(crate) me_gate: Mutex<Option<oneshot::Receiver<Result<User, ApiError>>>>,
    pub(crate) auth: Mutex<Option<Result<AuthResponse, ApiError>>>,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn with_me(result: Result<User, ApiError>) -> Self {
        let api = Self::default();
        *api.me.lock().unwrap() = Some(result);
        api
    }

    pub(crate) fn with_auth(result: Result<AuthResponse, ApiError>) -> Self {
        let api = Self::default();
        *api.auth.lock().unwrap() = Some(result);
        api
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn take_auth(&self) -> Result<AuthResponse, ApiError> {
        self.auth
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Err(ApiError::Transport("no response scripted".to_owned())))
    }
}

impl AuthApi for Arc<FakeApi> {
    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        self.record(format!("me:{token}"));
        let gate = self.me_gate.lock().unwrap().take();
        if let Some(answer) = gate {
            return answer
                .await
                .unwrap_or(Err(ApiError::Transport("answer dropped".to_owned())));
        }
        self.me
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Err(ApiError::Transport("no response scripted".to_owned())))
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.record(format!("login:{username}:{password}"));
        self.take_auth()
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.record(format!("register:{username}:{email}:{password}"));
        self.take_auth()
    }
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    pub(crate) token: Mutex<Option<String>>,
    pub(crate) writes: AtomicUsize,
}

impl MemoryStore {
    pub(crate) fn holding(token: &str) -> Self {
        let store = Self::default();
        *store.token.lock().unwrap() = Some(token.to_owned());
        store
    }

    pub(crate) fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

impl TokenStore for Arc<MemoryStore> {
    fn load(&self) -> Option<String> {
        self.get()
    }

    fn save(&self, token: &str) {
        self.writes.fetch_add(1, Ordering::Relaxed);
        *self.token.lock().unwrap() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
        *self.token.lock().unwrap() = None;
    }
}
