//! End-to-end tests through the planner context.

mod support;

use std::sync::Arc;

use loadout_planner::stores::migration::UNNAMED_LOADOUT;
use loadout_planner::stores::MAX_PRICE;
use loadout_planner::{
    EffectRange, FileStorage, InMemoryStorage, KeyValueStorage, Planner, PlannerConfig, SlotId,
};
use serde_json::json;

#[test]
fn catalog_fixture_lookups() {
    let catalog = support::catalog();

    assert_eq!(catalog.find_equipment("Epée X").unwrap().level, 50);
    assert!(catalog.find_equipment("Épée X").is_none());
    assert!(catalog.find_equipment("Épée Inexistante").is_none());

    // composition spells it "Épée X", the catalog "Epée X"
    assert_eq!(
        catalog.find_set_by_equipment("Epée X").unwrap().name,
        "Panoplie d'Entraînement"
    );
    assert_eq!(
        catalog.find_set_by_equipment("anneau du bouftou").unwrap().name,
        "Panoplie du Bouftou"
    );

    assert_eq!(
        catalog.list_all_effect_names(),
        vec![
            "% Résistance Terre",
            "Agilité",
            "Force",
            "Prospection",
            "Sagesse",
            "Vitalité"
        ]
    );
    assert_eq!(
        catalog.find_resource("Planche de Frêne").unwrap().level,
        Some(10)
    );
}

#[test]
fn summary_of_a_built_loadout() {
    let (mut planner, _) = support::planner();

    let id = planner.loadouts_mut().add("Bouftou");
    let loadouts = planner.loadouts_mut();
    loadouts.set_slot(&id, SlotId::Weapon, Some("Epée X".into()));
    loadouts.set_slot(&id, SlotId::Ring1, Some("Anneau du Bouftou".into()));
    loadouts.set_slot(&id, SlotId::Hat, Some("Coiffe Oubliée".into()));
    planner.prices_mut().set_price("Epée X", Some(100.0));
    planner.prices_mut().set_price("Anneau du Bouftou", Some(49.5));
    planner.prices_mut().set_price("Coiffe Oubliée", Some(1000.0));

    let summary = planner.summarize(&id).unwrap();
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.total_cost, 150);
    assert_eq!(summary.min_level, 50);
    assert_eq!(summary.effects["Force"], EffectRange::new(12, 14));
    assert_eq!(summary.effects["Vitalité"], EffectRange::new(15, 28));
    assert_eq!(summary.effects["Agilité"], EffectRange::new(3, 3));

    let keys: Vec<&String> = summary.effects.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    assert!(planner.summarize("missing").is_none());
}

#[test]
fn huge_prices_never_break_the_summary() {
    let (mut planner, _) = support::planner();
    let id = planner.loadouts_mut().add("Chère");
    planner
        .loadouts_mut()
        .set_slot(&id, SlotId::Weapon, Some("Epée X".into()));
    planner
        .loadouts_mut()
        .set_slot(&id, SlotId::Ring1, Some("Anneau du Bouftou".into()));

    planner.prices_mut().set_price("Epée X", Some(1e19));
    planner.prices_mut().set_price("Anneau du Bouftou", Some(1e19));
    assert!(planner.prices().table().is_empty());
    assert_eq!(planner.summarize(&id).unwrap().total_cost, 0);

    planner.prices_mut().set_price("Epée X", Some(MAX_PRICE as f64));
    planner.prices_mut().set_price("Anneau du Bouftou", Some(MAX_PRICE as f64));
    assert_eq!(planner.summarize(&id).unwrap().total_cost, 2 * MAX_PRICE);
}

#[test]
fn comparison_between_two_loadouts() {
    let (mut planner, _) = support::planner();
    let a = planner.loadouts_mut().add("A");
    let b = planner.loadouts_mut().add("B");
    planner
        .loadouts_mut()
        .set_slot(&a, SlotId::Weapon, Some("Epée X".into()));
    planner
        .loadouts_mut()
        .set_slot(&b, SlotId::Cloak, Some("Cape du Bouftou".into()));

    let rows = planner.compare(Some(&a), Some(&b));
    let rendered = serde_json::to_value(&rows).unwrap();
    assert_eq!(
        rendered,
        json!([
            {"effet": "Force", "a": {"min": 10, "max": 10}, "b": null},
            {"effet": "Prospection", "a": null, "b": {"min": 5, "max": 5}},
            {"effet": "Vitalité", "a": {"min": 5, "max": 8}, "b": {"min": 6, "max": 10}}
        ])
    );

    let one_sided = planner.compare(Some(&a), None);
    assert!(one_sided.iter().all(|row| row.b.is_none()));
    assert!(planner.compare(Some("missing"), None).is_empty());
}

#[test]
fn state_survives_reopening() {
    let (mut planner, storage) = support::planner();
    let id = planner.loadouts_mut().add("Persistante");
    planner
        .loadouts_mut()
        .set_slot(&id, SlotId::Dofus1, Some("Dofus Émeraude".into()));
    planner.loadouts_mut().duplicate(&id);
    planner.prices_mut().set_price("Dofus Émeraude", Some(2_000_000.0));

    let reopened = support::planner_on(&storage);
    assert_eq!(reopened.loadouts().list(), planner.loadouts().list());
    assert_eq!(reopened.prices().table(), planner.prices().table());
    assert_eq!(
        reopened.summarize(&id).unwrap().total_cost,
        2_000_000
    );
}

#[test]
fn legacy_blobs_are_migrated_on_load() {
    let config = PlannerConfig::default();
    let storage = InMemoryStorage::new();
    storage
        .set_item(
            &config.loadouts_key,
            &json!([
                {
                    "id": "ancienne",
                    "nom": "Ancienne",
                    "equipements": ["Coiffe du Bouftou", "Cape du Bouftou"],
                    "creeLe": "2023-06-01T10:00:00.000Z"
                },
                {
                    "emplacements": {"arme": "Epée X"}
                },
                "pas une panoplie"
            ])
            .to_string(),
        )
        .unwrap();

    let planner = Planner::new(config, support::catalog(), Arc::new(storage));
    let list = planner.loadouts().list();
    assert_eq!(list.len(), 2);

    let legacy = planner.loadouts().get("ancienne").unwrap();
    assert_eq!(legacy.slots.get(SlotId::Hat), Some("Coiffe du Bouftou"));
    assert_eq!(legacy.slots.get(SlotId::Cloak), Some("Cape du Bouftou"));
    assert_eq!(legacy.modified_at, "2023-06-01T10:00:00.000Z");

    assert_eq!(list[1].name, UNNAMED_LOADOUT);
    assert_eq!(planner.summarize(&list[1].id).unwrap().min_level, 50);
}

#[test]
fn disabled_persistence_never_writes() {
    let storage = InMemoryStorage::new();
    let mut planner = Planner::new(
        PlannerConfig::in_memory(),
        support::catalog(),
        Arc::new(storage.clone()),
    );
    let id = planner.loadouts_mut().add("Éphémère");
    planner.prices_mut().set_price("Epée X", Some(10.0));

    assert!(planner.loadouts().get(&id).is_some());
    assert_eq!(planner.prices().get("Epée X"), Some(10));
    assert!(storage.is_empty());
}

#[test]
fn reset_clears_everything() {
    let (mut planner, storage) = support::planner();
    planner.loadouts_mut().add("Une");
    planner.prices_mut().set_price("Epée X", Some(10.0));

    planner.reset();
    assert!(planner.loadouts().is_empty());
    assert!(planner.prices().table().is_empty());

    let reopened = support::planner_on(&storage);
    assert!(reopened.loadouts().is_empty());
    assert!(reopened.prices().table().is_empty());
}

#[test]
fn file_storage_backs_a_planner() {
    let dir = tempfile::tempdir().unwrap();
    let id = {
        let storage = FileStorage::open(dir.path()).unwrap();
        let mut planner =
            Planner::new(PlannerConfig::default(), support::catalog(), Arc::new(storage));
        let id = planner.loadouts_mut().add("Sur disque");
        planner
            .loadouts_mut()
            .set_slot(&id, SlotId::Pet, Some("Sac à Patates".into()));
        id
    };

    let storage = FileStorage::open(dir.path()).unwrap();
    let planner = Planner::new(PlannerConfig::default(), support::catalog(), Arc::new(storage));
    assert_eq!(
        planner.loadouts().get(&id).unwrap().slots.get(SlotId::Pet),
        Some("Sac à Patates")
    );
}

#[test]
fn icon_urls_follow_config() {
    let (planner, _) = support::planner();
    assert_eq!(
        planner.icon_url("Force"),
        "https://dofusdb.fr/icons/effects/terre.png"
    );

    let config = PlannerConfig {
        icon_base_url: "https://cdn.example/icons".into(),
        ..PlannerConfig::in_memory()
    };
    let planner = Planner::new(config, support::catalog(), Arc::new(InMemoryStorage::new()));
    assert_eq!(
        planner.icon_url("Dommage(s) Spéciaux"),
        "https://cdn.example/icons/dommagesspéciaux.png"
    );
}

#[test]
fn slot_candidates_come_from_the_catalog() {
    let catalog = support::catalog();
    let names = |slot| -> Vec<String> {
        catalog
            .equipment_for_slot(slot)
            .into_iter()
            .map(|e| e.name.clone())
            .collect()
    };
    assert_eq!(names(SlotId::Ring2), vec!["Anneau du Bouftou"]);
    assert_eq!(names(SlotId::Dofus4), vec!["Dofus Émeraude"]);
    assert_eq!(names(SlotId::Pet), vec!["Sac à Patates"]);
    assert_eq!(names(SlotId::Weapon).len(), 6);
    assert!(names(SlotId::Shield).is_empty());
}
