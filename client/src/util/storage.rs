//! Persistent key/value backends for the credential token.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LocalStorageStore` centralizes hydrate-only `localStorage` glue so the
//! session layer never touches `web-sys` directly. `MemoryStore` backs SSR
//! rendering and unit tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex};

/// Read/write/remove access to one persisted string value.
pub trait CredentialStore: Send + Sync {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
    fn remove(&self);
}

/// Browser `localStorage` entry under a fixed key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for LocalStorageStore {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(self.key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}

/// In-process store shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        Self { value: Arc::new(Mutex::new(Some(value.to_owned()))) }
    }
}

impl CredentialStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.value.lock().ok().and_then(|guard| guard.clone())
    }

    fn write(&self, value: &str) {
        if let Ok(mut guard) = self.value.lock() {
            *guard = Some(value.to_owned());
        }
    }

    fn remove(&self) {
        if let Ok(mut guard) = self.value.lock() {
            *guard = None;
        }
    }
}
