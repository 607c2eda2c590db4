//! Observable value container.
//!
//! Holds a value that is only ever replaced whole, plus a list of
//! subscribers notified after each replace. Delivery goes through
//! `event_emitter_rs`, which runs each listener on its own thread; the
//! join handles are awaited before a mutating call returns, so from the
//! caller's point of view notification is synchronous.

use event_emitter_rs::EventEmitter;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

const CHANGED: &str = "changed";

/// Handle returned by [`Observable::subscribe`].
pub type SubscriptionId = String;

pub struct Observable<T> {
    value: T,
    emitter: EventEmitter,
    subscribers: usize,
}

impl<T> Observable<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    pub fn new(value: T) -> Self {
        Self {
            value,
            emitter: EventEmitter::new(),
            subscribers: 0,
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify subscribers.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Replace the value with one computed from the current value, then
    /// notify subscribers.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.set(next);
    }

    /// Register a callback receiving a copy of every new value.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.subscribers += 1;
        self.emitter.on(CHANGED, listener)
    }

    /// Remove a subscriber. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: &str) -> bool {
        let removed = self.emitter.remove_listener(id).is_some();
        if removed {
            self.subscribers -= 1;
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
    }

    fn notify(&mut self) {
        if self.subscribers == 0 {
            return;
        }
        for handle in self.emitter.emit(CHANGED, &self.value) {
            if handle.join().is_err() {
                warn!("observable subscriber panicked");
            }
        }
    }
}

impl<T> Default for Observable<T>
where
    T: Default + Serialize + DeserializeOwned + Send + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}
