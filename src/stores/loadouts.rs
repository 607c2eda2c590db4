use std::sync::Arc;

use tracing::debug;

use super::migration::migrate_loadouts;
use super::Persistence;
use crate::loadout::{Loadout, SlotId, Slots, DEFAULT_LOADOUT_NAME};
use crate::observable::{Observable, SubscriptionId};
use crate::storage::KeyValueStorage;

/// The user's loadouts, persisted as a JSON array under one key.
///
/// Mutations never edit a loadout in place: the edited loadout is rebuilt
/// (slot maps included) and the whole list replaced, so subscribers always
/// receive a new value.
pub struct LoadoutStore {
    state: Observable<Vec<Loadout>>,
    persistence: Persistence,
}

impl LoadoutStore {
    /// Open the store, loading whatever is persisted under `key`.
    pub fn open(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let persistence = Persistence::new(storage, key);
        let loadouts = persistence.load().map(migrate_loadouts).unwrap_or_default();
        debug!(key = persistence.key(), count = loadouts.len(), "loadouts loaded");
        Self {
            state: Observable::new(loadouts),
            persistence,
        }
    }

    pub fn list(&self) -> &[Loadout] {
        self.state.get()
    }

    pub fn get(&self, id: &str) -> Option<&Loadout> {
        self.list().iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Create an empty loadout and return its id. A blank name falls back
    /// to [`DEFAULT_LOADOUT_NAME`].
    pub fn add(&mut self, name: &str) -> String {
        let name = match name.trim() {
            "" => DEFAULT_LOADOUT_NAME,
            trimmed => trimmed,
        };
        let loadout = Loadout::new(name);
        let id = loadout.id.clone();

        let mut next = self.list().to_vec();
        next.push(loadout);
        self.commit(next);
        id
    }

    /// Returns false if no loadout has this id.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        let next = self.list().iter().filter(|l| l.id != id).cloned().collect();
        self.commit(next);
        true
    }

    /// Rename a loadout. A blank name is ignored.
    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.modify(id, |loadout| Loadout {
            name: name.to_string(),
            ..loadout.clone()
        })
    }

    pub fn set_description(&mut self, id: &str, description: &str) -> bool {
        self.modify(id, |loadout| Loadout {
            description: Some(description.to_string()),
            ..loadout.clone()
        })
    }

    /// Put `equipment` in `slot`, or empty the slot with `None`.
    pub fn set_slot(&mut self, id: &str, slot: SlotId, equipment: Option<String>) -> bool {
        self.modify(id, |loadout| Loadout {
            slots: loadout.slots.with(slot, equipment),
            ..loadout.clone()
        })
    }

    pub fn clear_slot(&mut self, id: &str, slot: SlotId) -> bool {
        self.set_slot(id, slot, None)
    }

    /// Empty every slot of a loadout.
    pub fn reset_slots(&mut self, id: &str) -> bool {
        self.modify(id, |loadout| Loadout {
            slots: Slots::empty(),
            ..loadout.clone()
        })
    }

    /// Append a copy of a loadout and return the copy's id.
    pub fn duplicate(&mut self, id: &str) -> Option<String> {
        let copy = self.get(id)?.duplicate();
        let copy_id = copy.id.clone();

        let mut next = self.list().to_vec();
        next.push(copy);
        self.commit(next);
        Some(copy_id)
    }

    /// Drop every loadout, persisted blob included.
    pub fn reset(&mut self) {
        self.persistence.clear();
        self.state.set(Vec::new());
    }

    /// Called with the full list after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(Vec<Loadout>) + Send + Sync + 'static,
    {
        self.state.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: &str) -> bool {
        self.state.unsubscribe(id)
    }

    /// Replace the loadout `id` with `edit(loadout)`, stamping the modified time.
    fn modify<F>(&mut self, id: &str, edit: F) -> bool
    where
        F: FnOnce(&Loadout) -> Loadout,
    {
        let Some(index) = self.list().iter().position(|l| l.id == id) else {
            debug!(id, "no loadout with this id");
            return false;
        };
        let mut edited = edit(&self.list()[index]);
        edited.touch();

        let mut next = self.list().to_vec();
        next[index] = edited;
        self.commit(next);
        true
    }

    fn commit(&mut self, next: Vec<Loadout>) {
        self.persistence.save(&next);
        self.state.set(next);
    }
}
