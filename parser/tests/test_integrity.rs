mod aux;

use aux::read_bundle;
use models::{MissingReferencePolicy, TierLabel};
use parser::{DatasetBuilder, DatasetError};
use rstest::rstest;
use std::path::PathBuf;

fn error_of(file: &str) -> anyhow::Error {
    let path = PathBuf::from(format!("tests/datasets/invalid/{file}"));
    let json = std::fs::read_to_string(&path).expect("fixture should exist");
    DatasetBuilder::from_bundle_str(&json)
        .and_then(|builder| builder.build())
        .expect_err("fixture should be rejected")
}

#[rstest]
#[case::dangling("dangling_tier_reference.json", "ReferentialIntegrityViolation")]
#[case::duplicate_id("duplicate_id.json", "DuplicateCharacterId")]
#[case::duplicate_entry("duplicate_tier_entry.json", "DuplicateTierEntry")]
#[case::unknown_tier("unknown_tier.json", "UnknownTier")]
#[case::unknown_role("unknown_role.json", "InvalidField")]
#[case::unknown_weapon("unknown_weapon.json", "InvalidField")]
#[case::rarity("rarity_out_of_range.json", "InvalidField")]
#[case::skill_type("unknown_skill_type.json", "InvalidField")]
#[case::uppercase_id("uppercase_id.json", "InvalidSlug")]
#[case::missing_role("missing_role.json", "MissingField")]
#[case::missing_tierlist("missing_tierlist.json", "MissingField")]
#[case::truncated("truncated.json", "InvalidJson")]
fn rejected_with_expected_kind(#[case] file: &str, #[case] kind: &str) {
    let error = error_of(file);
    let dataset_error = error
        .downcast_ref::<DatasetError>()
        .unwrap_or_else(|| panic!("`{file}` failed with untyped error {error}"));
    let debug = format!("{dataset_error:?}");
    assert!(
        debug.starts_with(kind),
        "`{file}` failed with {debug}, expected {kind}"
    );
}

#[test]
fn dangling_reference_names_tier_and_id() {
    let error = error_of("dangling_tier_reference.json");
    assert!(matches!(
        error.downcast_ref::<DatasetError>(),
        Some(DatasetError::ReferentialIntegrityViolation { tier: TierLabel::S, id }) if id == "kagami"
    ));
}

#[test]
fn duplicate_entry_reports_higher_tier_first() {
    let error = error_of("duplicate_tier_entry.json");
    assert!(matches!(
        error.downcast_ref::<DatasetError>(),
        Some(DatasetError::DuplicateTierEntry { first: TierLabel::S, second: TierLabel::A, .. })
    ));
}

#[test]
fn slug_error_suggests_replacement() {
    let error = error_of("uppercase_id.json");
    assert!(matches!(
        error.downcast_ref::<DatasetError>(),
        Some(DatasetError::InvalidSlug { suggestion, .. }) if suggestion == "kalka"
    ));
}

#[test]
fn skip_policy_drops_dangling_entries() -> Result<(), Box<dyn std::error::Error>> {
    let builder = read_bundle(&PathBuf::from(
        "tests/datasets/invalid/dangling_tier_reference.json",
    ))?
    .missing_reference_policy(MissingReferencePolicy::Skip);
    let dataset = builder.build()?;
    assert_eq!(dataset.tiers.s, vec!["kalka".to_string()]);
    Ok(())
}

#[test]
fn split_documents_load_like_a_bundle() -> Result<(), Box<dyn std::error::Error>> {
    let characters = r#"{ "data": [
        { "id": "luna", "name": { "en": "Luna", "vi": "Luna" }, "role": "Support", "weapon": "Staff",
          "image": "/characters/luna.svg", "splash": "/characters/luna.svg", "rarity": "4★", "element": "Light" }
    ] }"#;
    let tierlist = r#"{ "data": { "A": ["luna"] } }"#;
    let dataset = DatasetBuilder::from_json_strs(characters, tierlist)?.build()?;
    assert_eq!(dataset.characters.len(), 1);
    assert_eq!(dataset.tiers.tier_of("luna"), Some(TierLabel::A));
    Ok(())
}

#[test]
fn split_documents_require_data_root() {
    let error = DatasetBuilder::from_json_strs(r#"{ "characters": [] }"#, r#"{ "data": {} }"#)
        .err()
        .expect("missing data root should fail");
    assert!(matches!(
        error.downcast_ref::<DatasetError>(),
        Some(DatasetError::MissingField { field, .. }) if field == "data"
    ));
}
