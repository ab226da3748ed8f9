//! Durable home of the bearer token.
//!
//! Reads and writes `localStorage` in the browser. Outside a browser every
//! operation is a no-op and [`TokenStore::load`] reports no token, so a
//! server render always starts logged out.

/// Persistence seam for the session manager.
///
/// Writes are best-effort: a storage failure leaves the in-memory session
/// authoritative for the rest of the page lifetime.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// [`TokenStore`] over `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self::new(crate::config::TOKEN_STORAGE_KEY)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(&self.key)
                .ok()
                .flatten()
                .filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; token kept in memory only");
                return;
            };
            if storage.set_item(&self.key, token).is_err() {
                log::warn!("failed to persist session token");
            }
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}
