//! Persisted loadout migration.
//!
//! Loadouts have been persisted in two shapes:
//! - V2: slots as an object keyed by slot id (`"emplacements": {"arme": "..."}`)
//! - V1: equipment as an ordered list (`"equipements": ["...", "..."]`),
//!   back-filled into slots in canonical slot order
//!
//! Every entry is brought to the current [`Loadout`] shape; missing or
//! mistyped fields get defaults instead of failing the whole load.

use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::loadout::{generate_id, now_timestamp, Loadout, SlotId, Slots};

/// Name given to a persisted loadout whose name is missing or blank.
pub const UNNAMED_LOADOUT: &str = "Panoplie sans nom";

/// Slot layout detected on a persisted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadoutShape {
    /// `emplacements` object keyed by slot id.
    SlotMap,
    /// `equipements` ordered list.
    NameList,
    /// Neither: the loadout loads with every slot empty.
    Unknown,
}

pub fn detect_shape(entry: &Map<String, Value>) -> LoadoutShape {
    if entry.get("emplacements").is_some_and(Value::is_object) {
        LoadoutShape::SlotMap
    } else if entry.get("equipements").is_some_and(Value::is_array) {
        LoadoutShape::NameList
    } else {
        LoadoutShape::Unknown
    }
}

/// Migrate a whole persisted blob. Anything but a JSON array yields an
/// empty list; entries that are not objects are dropped.
pub fn migrate_loadouts(blob: Value) -> Vec<Loadout> {
    let Value::Array(entries) = blob else {
        warn!("persisted loadouts are not a list, starting empty");
        return Vec::new();
    };
    let total = entries.len();
    let loadouts: Vec<Loadout> = entries.iter().filter_map(migrate_loadout).collect();
    if loadouts.len() != total {
        debug!(
            dropped = total - loadouts.len(),
            "skipped persisted loadouts that are not objects"
        );
    }
    loadouts
}

/// Migrate a single persisted entry. Returns `None` if it is not an object.
pub fn migrate_loadout(entry: &Value) -> Option<Loadout> {
    let entry = entry.as_object()?;

    let slots = match detect_shape(entry) {
        LoadoutShape::SlotMap => slots_from_map(&entry["emplacements"]),
        LoadoutShape::NameList => slots_from_list(&entry["equipements"]),
        LoadoutShape::Unknown => Slots::empty(),
    };

    let name = string_field(entry, "nom")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNNAMED_LOADOUT)
        .to_string();
    let created_at = string_field(entry, "creeLe")
        .map(str::to_string)
        .unwrap_or_else(now_timestamp);
    let modified_at = string_field(entry, "modifieLe")
        .map(str::to_string)
        .unwrap_or_else(|| created_at.clone());

    Some(Loadout {
        id: string_field(entry, "id")
            .map(str::to_string)
            .unwrap_or_else(generate_id),
        name,
        description: string_field(entry, "description").map(str::to_string),
        slots,
        created_at,
        modified_at,
    })
}

fn string_field<'a>(entry: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    entry.get(field).and_then(Value::as_str)
}

fn non_blank(value: &Value) -> Option<&str> {
    value.as_str().filter(|name| !name.trim().is_empty())
}

fn slots_from_map(map: &Value) -> Slots {
    let Some(map) = map.as_object() else {
        return Slots::empty();
    };
    map.iter()
        .filter_map(|(key, value)| {
            let slot = SlotId::from_str(key).ok()?;
            Some((slot, non_blank(value)?))
        })
        .fold(Slots::empty(), |slots, (slot, name)| {
            slots.with(slot, Some(name.to_string()))
        })
}

fn slots_from_list(list: &Value) -> Slots {
    let Some(list) = list.as_array() else {
        return Slots::empty();
    };
    list.iter()
        .filter_map(non_blank)
        .zip(SlotId::all())
        .fold(Slots::empty(), |slots, (name, slot)| {
            slots.with(slot, Some(name.to_string()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn current_shape_keeps_known_non_blank_slots() {
        let loadout = migrate_loadout(&json!({
            "id": "abc",
            "nom": "  Terre  ",
            "description": "pvp",
            "emplacements": {
                "arme": "Épée X",
                "chapeau": "   ",
                "bottes": null,
                "inconnu": "Objet",
                "anneau_1": 42
            },
            "creeLe": "2024-01-01T00:00:00.000Z",
            "modifieLe": "2024-01-02T00:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(loadout.id, "abc");
        assert_eq!(loadout.name, "Terre");
        assert_eq!(loadout.description.as_deref(), Some("pvp"));
        assert_eq!(loadout.slots.equipped().collect::<Vec<_>>(), vec!["Épée X"]);
        assert_eq!(loadout.slots.get(SlotId::Weapon), Some("Épée X"));
        assert_eq!(loadout.created_at, "2024-01-01T00:00:00.000Z");
        assert_eq!(loadout.modified_at, "2024-01-02T00:00:00.000Z");
    }

    #[test]
    fn legacy_list_back_fills_in_slot_order() {
        let loadout = migrate_loadout(&json!({
            "nom": "Ancienne",
            "equipements": ["Coiffe", "", "Cape", 3, "Amulette"]
        }))
        .unwrap();

        assert_eq!(detect_shape(json!({"equipements": []}).as_object().unwrap()), LoadoutShape::NameList);
        assert_eq!(loadout.slots.get(SlotId::Hat), Some("Coiffe"));
        assert_eq!(loadout.slots.get(SlotId::Cloak), Some("Cape"));
        assert_eq!(loadout.slots.get(SlotId::Amulet), Some("Amulette"));
        assert_eq!(loadout.slots.get(SlotId::Belt), None);
    }

    #[test]
    fn legacy_list_longer_than_slots_is_truncated() {
        let names: Vec<String> = (0..20).map(|i| format!("Objet {}", i)).collect();
        let loadout = migrate_loadout(&json!({ "equipements": names })).unwrap();
        assert_eq!(loadout.slots.equipped().count(), 16);
        assert_eq!(loadout.slots.get(SlotId::Dofus6), Some("Objet 15"));
    }

    #[test]
    fn missing_fields_get_defaults() {
        let loadout = migrate_loadout(&json!({ "nom": "   " })).unwrap();
        assert_eq!(loadout.name, UNNAMED_LOADOUT);
        assert!(!loadout.id.is_empty());
        assert_eq!(loadout.description, None);
        assert!(loadout.slots.is_empty());
        assert_eq!(loadout.modified_at, loadout.created_at);
    }

    #[test]
    fn slot_map_wins_over_list() {
        let entry = json!({
            "emplacements": {"arme": "Épée X"},
            "equipements": ["Coiffe"]
        });
        assert_eq!(detect_shape(entry.as_object().unwrap()), LoadoutShape::SlotMap);
        let loadout = migrate_loadout(&entry).unwrap();
        assert_eq!(loadout.slots.get(SlotId::Hat), None);
    }

    #[test]
    fn list_valued_slot_map_falls_back_to_the_name_list() {
        let entry = json!({
            "emplacements": ["Épée X"],
            "equipements": ["Coiffe"]
        });
        assert_eq!(detect_shape(entry.as_object().unwrap()), LoadoutShape::NameList);
        let loadout = migrate_loadout(&entry).unwrap();
        assert_eq!(loadout.slots.get(SlotId::Hat), Some("Coiffe"));
        assert_eq!(loadout.slots.equipped().count(), 1);

        let alone = migrate_loadout(&json!({ "emplacements": ["Épée X"] })).unwrap();
        assert!(alone.slots.is_empty());
    }

    #[test]
    fn non_objects_and_non_arrays() {
        assert!(migrate_loadout(&json!("loadout")).is_none());
        assert!(migrate_loadouts(json!({"a": 1})).is_empty());

        let loadouts = migrate_loadouts(json!([1, null, {"nom": "ok"}]));
        assert_eq!(loadouts.len(), 1);
        assert_eq!(loadouts[0].name, "ok");
    }
}
