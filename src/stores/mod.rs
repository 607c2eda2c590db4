//! Persisted user stores.
//!
//! Each store keeps its whole state in an [`Observable`](crate::observable::Observable)
//! and mirrors it as one JSON blob under one storage key. The blob is read
//! once when the store is opened; every mutation replaces the state,
//! rewrites the blob, then notifies subscribers. A reset removes the blob.
//!
//! Nothing here is fatal: unreadable or malformed blobs load as empty,
//! failed writes are logged and the in-memory state carries on.

mod loadouts;
pub mod migration;
mod prices;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::storage::KeyValueStorage;

pub use loadouts::LoadoutStore;
pub use prices::{PriceStore, PriceTable, MAX_PRICE};

/// A storage handle bound to one key.
#[derive(Clone)]
pub(crate) struct Persistence {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl Persistence {
    pub(crate) fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    /// Parsed blob, or `None` when storage is unavailable, nothing is
    /// stored, or the blob is unreadable.
    pub(crate) fn load(&self) -> Option<Value> {
        if !self.storage.is_available() {
            return None;
        }
        let text = match self.storage.get_item(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read persisted state");
                return None;
            }
        };
        if text.trim().is_empty() {
            return None;
        }
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key = %self.key, error = %err, "persisted state is not valid JSON, starting empty");
                None
            }
        }
    }

    pub(crate) fn save<T: Serialize>(&self, state: &T) {
        if !self.storage.is_available() {
            return;
        }
        let text = match serde_json::to_string(state) {
            Ok(text) => text,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to serialize state");
                return;
            }
        };
        match self.storage.set_item(&self.key, &text) {
            Ok(()) => debug!(key = %self.key, bytes = text.len(), "state persisted"),
            Err(err) => warn!(key = %self.key, error = %err, "failed to persist state"),
        }
    }

    /// Drop the persisted blob; the next load finds nothing.
    pub(crate) fn clear(&self) {
        if !self.storage.is_available() {
            return;
        }
        match self.storage.remove_item(&self.key) {
            Ok(()) => debug!(key = %self.key, "persisted state cleared"),
            Err(err) => warn!(key = %self.key, error = %err, "failed to clear persisted state"),
        }
    }
}
