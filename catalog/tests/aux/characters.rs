use std::path::PathBuf;

use models::{
    Character, Dataset, Element, LocalizedString, Rarity, Role, TierList, Weapon,
};

#[allow(unused)]
pub fn character(id: &str, role: Role, weapon: Weapon) -> Character {
    let name = format!("{}{}", id[..1].to_uppercase(), &id[1..]);
    Character {
        id: id.to_string(),
        name: LocalizedString::new(name.clone(), name),
        role,
        weapon,
        image: PathBuf::from(format!("/characters/{id}.svg")),
        splash: PathBuf::from(format!("/characters/{id}.svg")),
        rarity: Rarity::new(5).unwrap(),
        element: Element::Fire,
        overview: None,
        skills: None,
        build: None,
        synergy: None,
        pros: None,
        cons: None,
    }
}

/// Five characters in a fixed order, ranked over three tiers.
#[allow(unused)]
pub fn roster() -> Dataset {
    let characters = vec![
        character("kalka", Role::Vanguard, Weapon::Sword),
        character("luna", Role::Support, Weapon::Staff),
        character("yuna", Role::Annihilator, Weapon::Sniper),
        character("nova", Role::Vanguard, Weapon::Sword),
        character("kai", Role::Vanguard, Weapon::Spear),
    ];
    let mut tiers = TierList::default();
    tiers.ex = vec!["nova".to_string(), "kalka".to_string()];
    tiers.s = vec!["luna".to_string()];
    tiers.c = vec!["kai".to_string(), "yuna".to_string()];
    Dataset { characters, tiers }
}
