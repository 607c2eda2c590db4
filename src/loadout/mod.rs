//! User-built loadouts.

mod slots;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use slots::{SlotCategory, SlotDefinition, SlotId, Slots, SLOT_DEFINITIONS};

/// Name given to a loadout created with a blank name.
pub const DEFAULT_LOADOUT_NAME: &str = "Nouvelle panoplie";

/// Suffix appended to the name of a duplicated loadout.
pub const COPY_SUFFIX: &str = " (copie)";

/// A loadout the user is building. Serialized with the field names the
/// persisted blobs use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "emplacements")]
    pub slots: Slots,
    #[serde(rename = "creeLe")]
    pub created_at: String,
    #[serde(rename = "modifieLe")]
    pub modified_at: String,
}

impl Loadout {
    /// Fresh loadout: new id, empty description, every slot empty.
    pub fn new(name: impl Into<String>) -> Self {
        let now = now_timestamp();
        Self {
            id: generate_id(),
            name: name.into(),
            description: Some(String::new()),
            slots: Slots::empty(),
            created_at: now.clone(),
            modified_at: now,
        }
    }

    /// Copy under a new id and fresh timestamps, name suffixed with
    /// [`COPY_SUFFIX`].
    pub fn duplicate(&self) -> Self {
        let now = now_timestamp();
        Self {
            id: generate_id(),
            name: format!("{}{}", self.name, COPY_SUFFIX),
            description: self.description.clone(),
            slots: self.slots.clone(),
            created_at: now.clone(),
            modified_at: now,
        }
    }

    /// Names of the equipment in non-empty slots.
    pub fn equipped(&self) -> impl Iterator<Item = &str> {
        self.slots.equipped()
    }

    pub(crate) fn touch(&mut self) {
        self.modified_at = now_timestamp();
    }
}

/// Random UUID v4 in its hyphenated form.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC time as RFC 3339 with milliseconds, e.g.
/// `2024-05-01T12:30:00.000Z`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_loadout_is_empty() {
        let loadout = Loadout::new("Test");
        assert_eq!(loadout.name, "Test");
        assert!(loadout.slots.is_empty());
        assert_eq!(loadout.created_at, loadout.modified_at);
        assert!(Uuid::parse_str(&loadout.id).is_ok());
    }

    #[test]
    fn duplicate_gets_new_id_and_independent_slots() {
        let mut original = Loadout::new("Base");
        original.slots = original
            .slots
            .with(SlotId::Weapon, Some("Épée X".to_string()));

        let mut copy = original.duplicate();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.name, "Base (copie)");
        assert_eq!(copy.slots, original.slots);

        copy.slots = copy.slots.with(SlotId::Weapon, None);
        assert_eq!(original.slots.get(SlotId::Weapon), Some("Épée X"));
    }

    #[test]
    fn timestamps_are_utc_millis() {
        let ts = now_timestamp();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        // 2024-05-01T12:30:00.000Z
        assert_eq!(ts.len(), 24);
    }

    #[test]
    fn serializes_with_wire_names() {
        let loadout = Loadout::new("Wire");
        let json = serde_json::to_value(&loadout).unwrap();
        assert_eq!(json["nom"], "Wire");
        assert!(json["emplacements"].is_object());
        assert!(json["creeLe"].is_string());
        assert!(json["modifieLe"].is_string());
    }
}
