//! Synchronous key/value storage contracts and adapters.
//!
//! Browser `localStorage` is synchronous, so unlike the async service contracts this trait keeps
//! plain `Result` returns. Every method may fail when the backing store is disabled, over quota,
//! or blocked by privacy settings; callers decide how to degrade.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for small string values persisted across page loads.
pub trait KeyValueStore {
    /// Reads the raw string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be reached or rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set_item(key, value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store for unsupported targets and baseline tests.
pub struct NoopKeyValueStore;

impl KeyValueStore for NoopKeyValueStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string. Clones share the same backing map.
pub struct MemoryKeyValueStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    /// Builds a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        store
    }

    /// Returns the raw value under `key` without going through the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
