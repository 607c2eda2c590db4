//! Read-only catalog of equipment, official sets and resources.
//!
//! Loaded once from three static JSON collections. Every lookup is a
//! linear scan in catalog order; the first match wins.

mod normalize;
mod records;

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::loadout::SlotId;

pub use normalize::normalize_text;
pub use records::{EffectValue, Equipment, ItemSet, Resource, SetBonuses};

/// File names read by [`Catalog::load_dir`].
pub const EQUIPMENT_FILE: &str = "equipements.json";
pub const SETS_FILE: &str = "panoplie.json";
pub const RESOURCES_FILE: &str = "ressources.json";

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    equipment: Vec<Equipment>,
    sets: Vec<ItemSet>,
    resources: Vec<Resource>,
}

impl Catalog {
    pub fn new(equipment: Vec<Equipment>, sets: Vec<ItemSet>, resources: Vec<Resource>) -> Self {
        Self {
            equipment,
            sets,
            resources,
        }
    }

    /// Parse the three collections from JSON text (each a JSON array).
    pub fn from_json(equipment: &str, sets: &str, resources: &str) -> Result<Self, CatalogError> {
        let equipment = serde_json::from_str(equipment).map_err(|source| CatalogError::Json {
            collection: "equipment",
            source,
        })?;
        let sets = serde_json::from_str(sets).map_err(|source| CatalogError::Json {
            collection: "set",
            source,
        })?;
        let resources = serde_json::from_str(resources).map_err(|source| CatalogError::Json {
            collection: "resource",
            source,
        })?;
        Ok(Self::new(equipment, sets, resources))
    }

    /// Load `equipements.json`, `panoplie.json` and `ressources.json` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
        };
        let catalog = Self::from_json(
            &read(EQUIPMENT_FILE)?,
            &read(SETS_FILE)?,
            &read(RESOURCES_FILE)?,
        )?;
        debug!(
            equipment = catalog.equipment.len(),
            sets = catalog.sets.len(),
            resources = catalog.resources.len(),
            dir = %dir.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn sets(&self) -> &[ItemSet] {
        &self.sets
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Exact, case- and accent-sensitive lookup. Logs a warning on miss.
    pub fn find_equipment(&self, name: &str) -> Option<&Equipment> {
        let found = self.lookup_equipment(name);
        if found.is_none() {
            warn!(name, "equipment not found");
            let sample: Vec<&str> = self
                .equipment
                .iter()
                .take(5)
                .map(|e| e.name.as_str())
                .collect();
            debug!(?sample, "some available equipment names");
        }
        found
    }

    /// Same match as [`Catalog::find_equipment`], without the miss diagnostics.
    pub(crate) fn lookup_equipment(&self, name: &str) -> Option<&Equipment> {
        self.equipment
            .iter()
            .find(|e| !e.name.trim().is_empty() && e.name == name)
    }

    /// Official set whose composition contains `equipment_name`, compared
    /// accent- and case-insensitively.
    pub fn find_set_by_equipment(&self, equipment_name: &str) -> Option<&ItemSet> {
        let wanted = normalize_text(equipment_name);
        self.sets.iter().find(|set| {
            set.composition
                .iter()
                .any(|member| normalize_text(member) == wanted)
        })
    }

    /// Exact lookup in the resource collection.
    pub fn find_resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Every effect name used by any equipment, deduplicated and sorted.
    pub fn list_all_effect_names(&self) -> Vec<String> {
        self.equipment
            .iter()
            .flat_map(|e| e.effects().map(|(name, _)| name.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Equipment that can go in `slot`, in catalog order.
    pub fn equipment_for_slot(&self, slot: SlotId) -> Vec<&Equipment> {
        let definition = slot.definition();
        self.equipment
            .iter()
            .filter(|e| !e.name.trim().is_empty() && definition.accepts(&e.kind))
            .collect()
    }
}
