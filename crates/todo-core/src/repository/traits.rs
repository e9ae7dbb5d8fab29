//! Repository Layer - Core Traits
//!
//! Abstract durable key-value storage. The browser build backs this with
//! `localStorage`; tests use [`MemoryStorage`](super::MemoryStorage).

use crate::domain::StoreResult;

/// String key-value storage
///
/// Methods take `&self`: storage handles are cheap shared references to an
/// external area (browser storage, a shared map).
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}
