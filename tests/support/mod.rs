#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use loadout_planner::{Catalog, InMemoryStorage, Planner, PlannerConfig};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn catalog() -> Catalog {
    Catalog::load_dir(fixtures_dir()).unwrap()
}

/// Planner over a fresh in-memory storage. The returned storage handle
/// shares entries with the planner's, so a second planner opened on it
/// sees what the first persisted.
pub fn planner() -> (Planner, InMemoryStorage) {
    let storage = InMemoryStorage::new();
    let planner = planner_on(&storage);
    (planner, storage)
}

pub fn planner_on(storage: &InMemoryStorage) -> Planner {
    Planner::new(
        PlannerConfig::default(),
        catalog(),
        Arc::new(storage.clone()),
    )
}
