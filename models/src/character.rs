use std::path::PathBuf;

use super::{Element, LocalizedString, Rarity, Role, Skill, Weapon};

#[derive(Debug, Clone, PartialEq)]
pub struct SynergyEntry {
    /// Character identifier or display name.
    pub partner: String,
    pub reason: LocalizedString,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildGuide {
    pub weapons: Vec<String>,
    pub artifacts: Vec<String>,
    pub stat_priority: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: String,
    pub name: LocalizedString,
    pub role: Role,
    pub weapon: Weapon,
    pub image: PathBuf,
    pub splash: PathBuf,
    pub rarity: Rarity,
    pub element: Element,
    pub overview: Option<LocalizedString>,
    pub skills: Option<Vec<Skill>>,
    pub build: Option<BuildGuide>,
    pub synergy: Option<Vec<SynergyEntry>>,
    pub pros: Option<Vec<LocalizedString>>,
    pub cons: Option<Vec<LocalizedString>>,
}

impl Character {
    /// Whether `partner` names this character, by id or English name.
    pub fn is_named(&self, partner: &str) -> bool {
        let partner = partner.trim();
        self.id == partner || self.name.en.eq_ignore_ascii_case(partner)
    }

    pub fn skills(&self) -> &[Skill] {
        self.skills.as_deref().unwrap_or_default()
    }

    pub fn synergy(&self) -> &[SynergyEntry] {
        self.synergy.as_deref().unwrap_or_default()
    }

    pub fn pros(&self) -> &[LocalizedString] {
        self.pros.as_deref().unwrap_or_default()
    }

    pub fn cons(&self) -> &[LocalizedString] {
        self.cons.as_deref().unwrap_or_default()
    }
}
