use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use super::Persistence;
use crate::observable::{Observable, SubscriptionId};
use crate::storage::KeyValueStorage;

/// Equipment name -> price. Every stored price is a positive integer.
pub type PriceTable = BTreeMap<String, u64>;

/// Largest accepted price, 2^53 - 1. Anything above cannot round-trip
/// through a JSON number exactly and is dropped.
pub const MAX_PRICE: u64 = (1 << 53) - 1;

/// User-entered prices, persisted as a JSON object under one key.
pub struct PriceStore {
    state: Observable<PriceTable>,
    persistence: Persistence,
}

impl PriceStore {
    pub fn open(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let persistence = Persistence::new(storage, key);
        let table = persistence.load().map(table_from_blob).unwrap_or_default();
        debug!(key = persistence.key(), count = table.len(), "prices loaded");
        Self {
            state: Observable::new(table),
            persistence,
        }
    }

    pub fn table(&self) -> &PriceTable {
        self.state.get()
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.table().get(name).copied()
    }

    /// Set the price of `name`, rounded to the nearest integer. A missing,
    /// non-positive or non-finite price, one that rounds to zero, or one
    /// above [`MAX_PRICE`] removes the entry instead.
    pub fn set_price(&mut self, name: &str, price: Option<f64>) {
        let mut next = self.table().clone();
        match price.and_then(to_price) {
            Some(price) => {
                next.insert(name.to_string(), price);
            }
            None => {
                if let Some(price) = price.filter(|p| *p > MAX_PRICE as f64) {
                    warn!(name, price, "price out of range, entry removed");
                }
                next.remove(name);
            }
        }
        self.commit(next);
    }

    /// Forget every price, persisted blob included.
    pub fn reset(&mut self) {
        self.persistence.clear();
        self.state.set(PriceTable::new());
    }

    /// Called with the full table after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(PriceTable) + Send + Sync + 'static,
    {
        self.state.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: &str) -> bool {
        self.state.unsubscribe(id)
    }

    fn commit(&mut self, next: PriceTable) {
        self.persistence.save(&next);
        self.state.set(next);
    }
}

fn to_price(value: f64) -> Option<u64> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let rounded = value.round();
    (1.0..=MAX_PRICE as f64)
        .contains(&rounded)
        .then_some(rounded as u64)
}

fn table_from_blob(blob: Value) -> PriceTable {
    let Value::Object(entries) = blob else {
        warn!("persisted prices are not an object, starting empty");
        return PriceTable::new();
    };
    let mut table = PriceTable::new();
    for (name, value) in entries {
        match value.as_f64().and_then(to_price) {
            Some(price) => {
                table.insert(name, price);
            }
            None => debug!(name = %name, value = %value, "dropped invalid persisted price"),
        }
    }
    table
}
