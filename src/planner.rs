//! The planner context: catalog, user stores and icon URLs behind one
//! handle, created once and passed to whatever needs it.

use std::sync::Arc;

use tracing::info;

use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::icons::EffectIcons;
use crate::storage::{KeyValueStorage, UnavailableStorage};
use crate::stores::{LoadoutStore, PriceStore};
use crate::summary::{compare_effects, summarize, ComparisonRow, Summary};

pub struct Planner {
    config: PlannerConfig,
    catalog: Catalog,
    loadouts: LoadoutStore,
    prices: PriceStore,
    icons: EffectIcons,
}

impl Planner {
    /// Open both stores on `storage`. With `persistence_enabled` off the
    /// storage is ignored and the stores live only in memory.
    pub fn new(config: PlannerConfig, catalog: Catalog, storage: Arc<dyn KeyValueStorage>) -> Self {
        let storage: Arc<dyn KeyValueStorage> = if config.persistence_enabled {
            storage
        } else {
            Arc::new(UnavailableStorage)
        };
        let loadouts = LoadoutStore::open(Arc::clone(&storage), config.loadouts_key.clone());
        let prices = PriceStore::open(Arc::clone(&storage), config.prices_key.clone());
        let icons = EffectIcons::new(config.icon_base_url.clone());
        info!(
            persistence = storage.is_available(),
            loadouts = loadouts.len(),
            prices = prices.table().len(),
            "planner ready"
        );
        Self {
            config,
            catalog,
            loadouts,
            prices,
            icons,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn loadouts(&self) -> &LoadoutStore {
        &self.loadouts
    }

    pub fn loadouts_mut(&mut self) -> &mut LoadoutStore {
        &mut self.loadouts
    }

    pub fn prices(&self) -> &PriceStore {
        &self.prices
    }

    pub fn prices_mut(&mut self) -> &mut PriceStore {
        &mut self.prices
    }

    pub fn icon_url(&self, effect: &str) -> String {
        self.icons.url(effect)
    }

    /// Summary of the loadout `id` against the current prices.
    pub fn summarize(&self, id: &str) -> Option<Summary> {
        let loadout = self.loadouts.get(id)?;
        Some(summarize(&self.catalog, &loadout.slots, self.prices.table()))
    }

    /// Effect comparison of two loadouts. An unknown or missing id is an
    /// absent side.
    pub fn compare(&self, a: Option<&str>, b: Option<&str>) -> Vec<ComparisonRow> {
        let a = a.and_then(|id| self.summarize(id));
        let b = b.and_then(|id| self.summarize(id));
        compare_effects(a.as_ref(), b.as_ref())
    }

    /// Clear both stores, persisted state included.
    pub fn reset(&mut self) {
        self.loadouts.reset();
        self.prices.reset();
        info!("planner state reset");
    }
}
