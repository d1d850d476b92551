mod aux;

use std::collections::HashSet;

use catalog::{Catalog, CatalogConfig, CharacterFilter, CharacterRepository, TierRepository};
use gamedata::ids;
use models::{Language, Role, TierLabel};

fn bundled() -> Catalog {
    Catalog::bundled(&CatalogConfig::default()).expect("bundled catalog should build")
}

#[test]
fn every_bundled_character_is_reachable_by_id() {
    let catalog = bundled();
    assert_eq!(catalog.characters().len(), ids::CHARACTER_IDS.len());
    for id in ids::CHARACTER_IDS {
        assert_eq!(catalog.find_by_id(id).map(|c| c.id.as_str()), Some(*id));
    }
}

#[test]
fn tier_union_matches_character_set() {
    let catalog = bundled();
    let ranked: HashSet<&str> = TierRepository::all_tiers()
        .iter()
        .flat_map(|tier| catalog.tiers().characters_in_tier(*tier))
        .map(|c| c.id.as_str())
        .collect();
    let known: HashSet<&str> = catalog.characters().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ranked, known);
}

#[test]
fn bundled_support_characters() {
    let catalog = bundled();
    let supports = catalog
        .characters()
        .filter(&CharacterFilter::from_options("support", "All").unwrap());
    let found: Vec<&str> = supports.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(found, vec![ids::LUNA, ids::ZEPHYR, ids::PHOENIX]);
    assert!(supports.iter().all(|c| c.role == Role::Support));
}

#[test]
fn bundled_detail_page_in_vietnamese() {
    let catalog = bundled();
    let detail = catalog.detail(ids::KALKA, Language::Vi).unwrap();
    assert_eq!(detail.overview.map(|o| o.starts_with("Một chiến binh")), Some(true));
    assert!(!detail.skills.is_empty());
    assert_eq!(catalog.tiers().tier_of(ids::KALKA), Some(TierLabel::Ex));
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn catalog_is_shareable_across_threads() {
    assert_send_sync::<Catalog>();
    assert_send_sync::<CharacterRepository>();
    assert_send_sync::<TierRepository>();

    let catalog = std::sync::Arc::new(bundled());
    let shared = std::sync::Arc::clone(&catalog);
    let found = std::thread::spawn(move || shared.find_by_id(ids::KALKA).is_some())
        .join()
        .unwrap();
    assert!(found);
}
