//! Durable key/value storage for the bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser backs this with `localStorage`, the CLI with a JSON file. The
//! session store is the only writer of [`TOKEN_KEY`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::StorageError;
use crate::types::BearerToken;

/// Key under which the raw bearer token is persisted.
pub const TOKEN_KEY: &str = "token";

/// `localStorage`-shaped string store.
pub trait DurableStorage {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the value could not be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store could not be updated.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        storage
    }
}

impl DurableStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Read the persisted token; blank values count as absent.
pub fn load_token(storage: &impl DurableStorage) -> Option<BearerToken> {
    storage
        .get_item(TOKEN_KEY)
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
        .map(BearerToken::new)
}

/// # Errors
///
/// Propagates the store's write failure.
pub fn persist_token(storage: &impl DurableStorage, token: &BearerToken) -> Result<(), StorageError> {
    storage.set_item(TOKEN_KEY, token.as_str())
}

/// # Errors
///
/// Propagates the store's write failure.
pub fn forget_token(storage: &impl DurableStorage) -> Result<(), StorageError> {
    storage.remove_item(TOKEN_KEY)
}
