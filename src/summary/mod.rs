//! Loadout summaries: totals of cost, level and effects over the equipped
//! items, and side-by-side comparison of two summaries.

mod compare;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, EffectValue};
use crate::loadout::Slots;
use crate::stores::PriceTable;

pub use compare::{compare_effects, ComparisonRow};

/// Accumulated `[min, max]` of one effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EffectRange {
    pub min: i64,
    pub max: i64,
}

impl EffectRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    fn add(&mut self, value: &EffectValue) {
        let (min, max) = value.bounds();
        self.min = self.min.saturating_add(min);
        self.max = self.max.saturating_add(max);
    }
}

/// Derived figures for a loadout. Never stored; recompute with
/// [`summarize`] whenever the loadout or prices change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Non-empty slots, whether or not the catalog knows the item.
    #[serde(rename = "nombreEquipements")]
    pub item_count: usize,
    #[serde(rename = "coutTotal")]
    pub total_cost: u64,
    /// Level required to wear everything: the highest item level.
    #[serde(rename = "niveauMinimum")]
    pub min_level: u32,
    /// Keyed by effect name, in ascending byte order: `"Vitalité"` sorts
    /// before `"Érosion"` and before lowercase-initial names.
    #[serde(rename = "effets")]
    pub effects: BTreeMap<String, EffectRange>,
}

/// Sum up the equipment held in `slots`.
///
/// Names the catalog does not know still count towards `item_count` but
/// add nothing else: no level, no price, no effects.
pub fn summarize(catalog: &Catalog, slots: &Slots, prices: &PriceTable) -> Summary {
    let mut summary = Summary::default();

    for name in slots.equipped() {
        summary.item_count += 1;

        let Some(equipment) = catalog.lookup_equipment(name) else {
            continue;
        };

        summary.min_level = summary.min_level.max(equipment.level);
        let price = prices.get(name).copied().unwrap_or(0);
        summary.total_cost = summary.total_cost.saturating_add(price);

        for (effect, value) in equipment.effects() {
            summary
                .effects
                .entry(effect.clone())
                .or_default()
                .add(value);
        }
    }

    summary
}
