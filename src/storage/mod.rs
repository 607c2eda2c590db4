//! Key/value storage backends for persisted planner state.
//!
//! Stores serialize their whole state to a single string under a single
//! key, the way a browser's local storage is used. Backends only move
//! strings around; parsing and defaulting live in the stores.

mod file;
mod in_memory;
mod unavailable;

use crate::error::StorageError;

/// String key/value storage.
pub trait KeyValueStorage: Send + Sync {
    /// Whether writes actually persist anything. Stores skip loading and
    /// saving entirely when this is false.
    fn is_available(&self) -> bool {
        true
    }

    /// Read the value under `key`. Returns `None` if nothing was stored.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

pub use file::FileStorage;
pub use in_memory::InMemoryStorage;
pub use unavailable::UnavailableStorage;
