use std::path::Path;

use models::{
    BuildGuide, Character, Element, Language, LocalizedString, Rarity, Role, SkillType, Weapon,
    MAX_STARS,
};

use crate::{
    Resolver, SynergyPartner, SECTION_ABILITIES, SECTION_BUILD, SECTION_DESCRIPTION,
    SECTION_INFORMATION, SECTION_PROS_CONS, SECTION_SYNERGY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSection {
    Information,
    Description,
    Abilities,
    Build,
    Synergy,
    ProsCons,
}

impl DetailSection {
    pub const ALL: [DetailSection; 6] = [
        DetailSection::Information,
        DetailSection::Description,
        DetailSection::Abilities,
        DetailSection::Build,
        DetailSection::Synergy,
        DetailSection::ProsCons,
    ];

    /// Anchor used by the table of contents.
    pub fn anchor(&self) -> &'static str {
        match self {
            DetailSection::Information => "information",
            DetailSection::Description => "description",
            DetailSection::Abilities => "abilities",
            DetailSection::Build => "build",
            DetailSection::Synergy => "synergy",
            DetailSection::ProsCons => "pros-cons",
        }
    }

    pub fn label(&self) -> &'static LocalizedString {
        match self {
            DetailSection::Information => &SECTION_INFORMATION,
            DetailSection::Description => &SECTION_DESCRIPTION,
            DetailSection::Abilities => &SECTION_ABILITIES,
            DetailSection::Build => &SECTION_BUILD,
            DetailSection::Synergy => &SECTION_SYNERGY,
            DetailSection::ProsCons => &SECTION_PROS_CONS,
        }
    }
}

/// Character as shown in list and tier grids.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterCard<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub role: Role,
    pub weapon: Weapon,
    pub element: Element,
    pub rarity: Rarity,
    pub image: &'a Path,
}

impl<'a> CharacterCard<'a> {
    pub fn new(character: &'a Character, resolver: Resolver) -> Self {
        Self {
            id: &character.id,
            name: resolver.t(&character.name),
            role: character.role,
            weapon: character.weapon,
            element: character.element,
            rarity: character.rarity,
            image: &character.image,
        }
    }

    /// Filled stars for the rarity followed by empty ones, five in total.
    pub fn star_rating(&self) -> String {
        let filled = self.rarity.stars().min(MAX_STARS) as usize;
        let empty = MAX_STARS as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillView<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub ty: SkillType,
    pub cooldown: Option<&'a str>,
    pub cost: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynergyView<'a> {
    pub partner: &'a str,
    /// Set when the partner is a character of the catalog.
    pub partner_id: Option<&'a str>,
    pub reason: &'a str,
}

/// Everything the detail page renders, resolved to one language.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterDetail<'a> {
    pub card: CharacterCard<'a>,
    pub splash: &'a Path,
    pub overview: Option<&'a str>,
    pub skills: Vec<SkillView<'a>>,
    pub build: Option<&'a BuildGuide>,
    pub synergy: Vec<SynergyView<'a>>,
    pub pros: Vec<&'a str>,
    pub cons: Vec<&'a str>,
}

impl<'a> CharacterDetail<'a> {
    pub fn new(
        character: &'a Character,
        partners: &[SynergyPartner<'a>],
        resolver: Resolver,
    ) -> Self {
        Self {
            card: CharacterCard::new(character, resolver),
            splash: &character.splash,
            overview: resolver.t_opt(character.overview.as_ref()),
            skills: character
                .skills()
                .iter()
                .map(|skill| SkillView {
                    name: resolver.t(&skill.name),
                    description: resolver.t(&skill.description),
                    ty: skill.ty,
                    cooldown: skill.cooldown.as_deref(),
                    cost: skill.cost.as_deref(),
                })
                .collect(),
            build: character.build.as_ref(),
            synergy: partners
                .iter()
                .map(|p| SynergyView {
                    partner: &p.entry.partner,
                    partner_id: p.character.map(|c| c.id.as_str()),
                    reason: resolver.t(&p.entry.reason),
                })
                .collect(),
            pros: resolver.t_all(character.pros()),
            cons: resolver.t_all(character.cons()),
        }
    }

    pub fn active_skills(&self) -> impl Iterator<Item = &SkillView<'a>> {
        self.skills_of(SkillType::Active)
    }

    pub fn passive_skills(&self) -> impl Iterator<Item = &SkillView<'a>> {
        self.skills_of(SkillType::Passive)
    }

    fn skills_of(&self, ty: SkillType) -> impl Iterator<Item = &SkillView<'a>> {
        self.skills.iter().filter(move |skill| skill.ty == ty)
    }

    /// Sections with content, in page order.
    pub fn available_sections(&self) -> Vec<DetailSection> {
        DetailSection::ALL
            .into_iter()
            .filter(|section| match section {
                DetailSection::Information => true,
                DetailSection::Description => self.overview.is_some(),
                DetailSection::Abilities => !self.skills.is_empty(),
                DetailSection::Build => self.build.is_some(),
                DetailSection::Synergy => !self.synergy.is_empty(),
                DetailSection::ProsCons => !self.pros.is_empty() || !self.cons.is_empty(),
            })
            .collect()
    }
}

/// Result count line shown above the character grid.
pub fn result_summary(shown: usize, total: usize, language: Language) -> String {
    match language {
        Language::En => format!("Showing {shown} of {total} characters"),
        Language::Vi => format!("Hiển thị {shown} trên {total} nhân vật"),
    }
}
