//! Credential-token session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once via context by `App`. The route guard reads it on every
//! protected navigation; login/register success writes it; logout clears it.
//! Nothing else touches the underlying store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::util::storage::{CredentialStore, LocalStorageStore, MemoryStore};

/// Fixed storage key for the credential token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Injected handle over the persisted credential token.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("authenticated", &self.is_authenticated()).finish()
    }
}

impl Session {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// `localStorage`-backed session in the browser, empty in-memory on the server.
    pub fn browser() -> Self {
        if cfg!(feature = "hydrate") {
            Self::new(LocalStorageStore::new(TOKEN_STORAGE_KEY))
        } else {
            Self::new(MemoryStore::default())
        }
    }

    /// The stored token, treating an empty value as absent.
    pub fn token(&self) -> Option<String> {
        self.store.read().filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a freshly issued token. Empty tokens are ignored.
    pub fn sign_in(&self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.store.write(token);
    }

    pub fn sign_out(&self) {
        self.store.remove();
    }
}
