use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Identifier of a loadout slot. The set is fixed; declaration order is the
/// canonical slot order (used to back-fill legacy list-shaped loadouts).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum SlotId {
    #[serde(rename = "chapeau")]
    #[strum(serialize = "chapeau")]
    Hat,
    #[serde(rename = "cape")]
    #[strum(serialize = "cape")]
    Cloak,
    #[serde(rename = "collier")]
    #[strum(serialize = "collier")]
    Amulet,
    #[serde(rename = "ceinture")]
    #[strum(serialize = "ceinture")]
    Belt,
    #[serde(rename = "anneau_1")]
    #[strum(serialize = "anneau_1")]
    Ring1,
    #[serde(rename = "anneau_2")]
    #[strum(serialize = "anneau_2")]
    Ring2,
    #[serde(rename = "bottes")]
    #[strum(serialize = "bottes")]
    Boots,
    #[serde(rename = "arme")]
    #[strum(serialize = "arme")]
    Weapon,
    #[serde(rename = "bouclier")]
    #[strum(serialize = "bouclier")]
    Shield,
    #[serde(rename = "familier")]
    #[strum(serialize = "familier")]
    Pet,
    #[serde(rename = "dofus_1")]
    #[strum(serialize = "dofus_1")]
    Dofus1,
    #[serde(rename = "dofus_2")]
    #[strum(serialize = "dofus_2")]
    Dofus2,
    #[serde(rename = "dofus_3")]
    #[strum(serialize = "dofus_3")]
    Dofus3,
    #[serde(rename = "dofus_4")]
    #[strum(serialize = "dofus_4")]
    Dofus4,
    #[serde(rename = "dofus_5")]
    #[strum(serialize = "dofus_5")]
    Dofus5,
    #[serde(rename = "dofus_6")]
    #[strum(serialize = "dofus_6")]
    Dofus6,
}

/// Visual grouping of slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotCategory {
    #[serde(rename = "équipement")]
    Equipment,
    #[serde(rename = "dofus")]
    Dofus,
    #[serde(rename = "compagnon")]
    Companion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotDefinition {
    pub id: SlotId,
    /// Label shown to the user.
    pub label: &'static str,
    pub category: SlotCategory,
    /// Equipment types the slot accepts; `None` accepts every type.
    pub compatible_types: Option<&'static [&'static str]>,
}

impl SlotDefinition {
    pub fn accepts(&self, equipment_type: &str) -> bool {
        match self.compatible_types {
            Some(types) => types.contains(&equipment_type),
            None => true,
        }
    }
}

const TROPHY_TYPES: &[&str] = &["Dofus", "Trophée", "Badge"];

const fn equipment_slot(
    id: SlotId,
    label: &'static str,
    types: &'static [&'static str],
) -> SlotDefinition {
    SlotDefinition {
        id,
        label,
        category: SlotCategory::Equipment,
        compatible_types: Some(types),
    }
}

const fn dofus_slot(id: SlotId, label: &'static str) -> SlotDefinition {
    SlotDefinition {
        id,
        label,
        category: SlotCategory::Dofus,
        compatible_types: Some(TROPHY_TYPES),
    }
}

/// Every slot, in canonical order.
pub static SLOT_DEFINITIONS: [SlotDefinition; 16] = [
    equipment_slot(SlotId::Hat, "Chapeau", &["Chapeau"]),
    equipment_slot(SlotId::Cloak, "Cape", &["Cape"]),
    equipment_slot(SlotId::Amulet, "Collier", &["Amulette"]),
    equipment_slot(SlotId::Belt, "Ceinture", &["Ceinture"]),
    equipment_slot(SlotId::Ring1, "Anneau 1", &["Anneau"]),
    equipment_slot(SlotId::Ring2, "Anneau 2", &["Anneau"]),
    equipment_slot(SlotId::Boots, "Bottes", &["Bottes"]),
    SlotDefinition {
        id: SlotId::Weapon,
        label: "Arme",
        category: SlotCategory::Equipment,
        compatible_types: None,
    },
    equipment_slot(SlotId::Shield, "Bouclier", &["Bouclier"]),
    SlotDefinition {
        id: SlotId::Pet,
        label: "Familier / Monture",
        category: SlotCategory::Companion,
        compatible_types: Some(&["Objet vivant", "Sac à dos"]),
    },
    dofus_slot(SlotId::Dofus1, "Dofus ou Idole 1"),
    dofus_slot(SlotId::Dofus2, "Dofus ou Idole 2"),
    dofus_slot(SlotId::Dofus3, "Dofus ou Idole 3"),
    dofus_slot(SlotId::Dofus4, "Dofus ou Idole 4"),
    dofus_slot(SlotId::Dofus5, "Dofus ou Idole 5"),
    dofus_slot(SlotId::Dofus6, "Dofus ou Idole 6"),
];

impl SlotId {
    pub fn definition(self) -> &'static SlotDefinition {
        // SLOT_DEFINITIONS follows declaration order
        &SLOT_DEFINITIONS[self as usize]
    }

    /// All slots in canonical order.
    pub fn all() -> impl Iterator<Item = SlotId> {
        <Self as IntoEnumIterator>::iter()
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Slot contents of a loadout. Always holds every [`SlotId`]; an empty
/// slot is `None`.
///
/// Updates go through [`Slots::with`], which returns a new map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<SlotId, Option<String>>",
    into = "BTreeMap<SlotId, Option<String>>"
)]
pub struct Slots(BTreeMap<SlotId, Option<String>>);

impl Slots {
    pub fn empty() -> Self {
        Self(SlotId::all().map(|slot| (slot, None)).collect())
    }

    pub fn get(&self, slot: SlotId) -> Option<&str> {
        self.0.get(&slot).and_then(|value| value.as_deref())
    }

    /// Copy of these slots with `slot` set to `equipment`. A blank name
    /// empties the slot.
    pub fn with(&self, slot: SlotId, equipment: Option<String>) -> Self {
        let mut next = self.0.clone();
        next.insert(slot, equipment.filter(|name| !name.trim().is_empty()));
        Self(next)
    }

    /// Every slot with its contents, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, Option<&str>)> {
        self.0.iter().map(|(slot, value)| (*slot, value.as_deref()))
    }

    /// Names held by non-empty slots, in canonical order.
    pub fn equipped(&self) -> impl Iterator<Item = &str> {
        self.0.values().filter_map(|value| value.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.equipped().next().is_none()
    }
}

impl Default for Slots {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<BTreeMap<SlotId, Option<String>>> for Slots {
    fn from(map: BTreeMap<SlotId, Option<String>>) -> Self {
        let mut slots = Self::empty();
        for (slot, value) in map {
            slots.0.insert(slot, value.filter(|name| !name.trim().is_empty()));
        }
        slots
    }
}

impl From<Slots> for BTreeMap<SlotId, Option<String>> {
    fn from(slots: Slots) -> Self {
        slots.0
    }
}
