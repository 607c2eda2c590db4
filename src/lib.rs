pub mod catalog;
pub mod config;
mod error;
pub mod icons;
pub mod loadout;
pub mod logging;
pub mod observable;
mod planner;
pub mod storage;
pub mod stores;
pub mod summary;

pub use catalog::{Catalog, EffectValue, Equipment, ItemSet, Resource};
pub use config::PlannerConfig;
pub use error::{CatalogError, ConfigError, StorageError};
pub use icons::{effect_icon_url, EffectIcons};
pub use loadout::{Loadout, SlotId, Slots};
pub use observable::{Observable, SubscriptionId};
pub use planner::Planner;
pub use storage::{FileStorage, InMemoryStorage, KeyValueStorage, UnavailableStorage};
pub use stores::{LoadoutStore, PriceStore, PriceTable};
pub use summary::{compare_effects, summarize, ComparisonRow, EffectRange, Summary};
