use std::{cell::RefCell, collections::HashMap};

use thiserror::Error;
use web_sys::{Storage, Window};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("failed to read `{0}`")]
    Read(String),
    #[error("failed to write `{0}`")]
    Write(String),
}

/// Process-wide key-value store the session is persisted in.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

pub fn window() -> Result<Window, StorageError> {
    web_sys::window().ok_or_else(|| StorageError::Unavailable("No window object".into()))
}

pub fn local_storage() -> Result<Storage, StorageError> {
    window()?
        .local_storage()
        .map_err(|_| StorageError::Unavailable("No localStorage".into()))?
        .ok_or_else(|| StorageError::Unavailable("No localStorage".into()))
}

/// `window.localStorage`, resolved lazily on every access so a store that
/// becomes unavailable later surfaces as an error instead of a panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.items.borrow_mut().extend(
            items
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        store
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Picks the browser store when running in a page and falls back to memory
/// elsewhere (host tests, SSR).
pub fn default_store() -> std::rc::Rc<dyn KeyValueStore> {
    if cfg!(target_arch = "wasm32") {
        std::rc::Rc::new(BrowserStorage)
    } else {
        std::rc::Rc::new(MemoryStorage::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_and_removes() {
        let store = MemoryStorage::new();
        assert!(store.is_empty());
        store.set_item("isLoggedIn", "true").unwrap();
        assert_eq!(store.get_item("isLoggedIn").unwrap().as_deref(), Some("true"));
        store.remove_item("isLoggedIn").unwrap();
        assert_eq!(store.get_item("isLoggedIn").unwrap(), None);
    }

    #[test]
    fn memory_storage_seeds_items() {
        let store = MemoryStorage::with_items([("token", "abc"), ("isLoggedIn", "true")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_item("token").unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn storage_error_messages_name_the_key() {
        assert_eq!(
            StorageError::Read("userData".into()).to_string(),
            "failed to read `userData`"
        );
    }
}
