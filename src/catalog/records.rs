//! Static catalog records.
//!
//! Field names on the wire are the French ones used by the data files
//! (`nom`, `Type`, `niveau`, `effets`, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value of a single effect on an equipment: either fixed or a roll range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EffectValue {
    Fixed(i64),
    Range([i64; 2]),
}

impl EffectValue {
    /// `(min, max)` contribution of this value. A fixed value counts for both.
    pub fn bounds(&self) -> (i64, i64) {
        match *self {
            EffectValue::Fixed(value) => (value, value),
            EffectValue::Range([min, max]) => (min, max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "niveau", default)]
    pub level: u32,
    #[serde(rename = "effets", default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<BTreeMap<String, EffectValue>>,
    /// Resource name -> quantity.
    #[serde(rename = "recette", default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<BTreeMap<String, u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustration_url: Option<String>,
}

impl Equipment {
    /// Effects of this equipment, empty when it has none.
    pub fn effects(&self) -> impl Iterator<Item = (&String, &EffectValue)> {
        self.effects.iter().flat_map(|effects| effects.iter())
    }
}

/// Bonus tiers of an official set. The data files use both a flat list of
/// effect maps and a list of lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SetBonuses {
    Tiers(Vec<BTreeMap<String, i64>>),
    Grouped(Vec<Vec<BTreeMap<String, i64>>>),
}

impl SetBonuses {
    /// Number of bonus tiers.
    pub fn len(&self) -> usize {
        match self {
            SetBonuses::Tiers(tiers) => tiers.len(),
            SetBonuses::Grouped(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Official equipment set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSet {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(
        rename = "bonus de la panoplie",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bonuses: Option<SetBonuses>,
    /// Names of the equipment belonging to the set.
    #[serde(default)]
    pub composition: Vec<String>,
    #[serde(rename = "niveau", default)]
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustration_url: Option<String>,
}

/// Crafting resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "niveau", default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustration_url: Option<String>,
}
