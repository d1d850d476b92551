use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use models::{Character, Role, SynergyEntry, Weapon};
use parser::DatasetError;

use crate::ALL_FILTER_OPTION;

use super::CharacterFilter;

/// A synergy entry with its partner resolved, when the partner is a known
/// character.
#[derive(Debug, Clone)]
pub struct SynergyPartner<'a> {
    pub entry: &'a SynergyEntry,
    pub character: Option<&'a Arc<Character>>,
}

/// Read-only character collection in listed order, keyed by id.
#[derive(Debug, Default, Clone)]
pub struct CharacterRepository {
    characters: IndexMap<String, Arc<Character>>,
    roles: IndexSet<Role>,
    weapons: IndexSet<Weapon>,
}

impl CharacterRepository {
    pub fn new<I>(characters: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = Character>,
    {
        let mut repository = Self::default();
        for character in characters {
            if repository.characters.contains_key(&character.id) {
                return Err(DatasetError::DuplicateCharacterId(character.id).into());
            }
            repository.roles.insert(character.role);
            repository.weapons.insert(character.weapon);
            repository
                .characters
                .insert(character.id.clone(), Arc::new(character));
        }

        #[cfg(feature = "trace")]
        tracing::debug!(
            characters = repository.characters.len(),
            roles = repository.roles.len(),
            weapons = repository.weapons.len(),
            "Build character repository"
        );

        Ok(repository)
    }

    /// Exact, case-sensitive lookup.
    pub fn find_by_id(&self, id: &str) -> Option<&Arc<Character>> {
        self.characters.get(id)
    }

    pub fn filter(&self, filter: &CharacterFilter) -> Vec<Arc<Character>> {
        let matched: Vec<Arc<Character>> = self
            .characters
            .values()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();

        #[cfg(feature = "trace")]
        tracing::debug!(?filter, matched = matched.len(), "Filter characters");

        matched
    }

    /// Distinct roles in first-seen order.
    pub fn list_roles(&self) -> &IndexSet<Role> {
        &self.roles
    }

    /// Distinct weapons in first-seen order.
    pub fn list_weapons(&self) -> &IndexSet<Weapon> {
        &self.weapons
    }

    pub fn role_options(&self) -> Vec<String> {
        std::iter::once(ALL_FILTER_OPTION.to_string())
            .chain(self.roles.iter().map(|r| r.to_string()))
            .collect()
    }

    pub fn weapon_options(&self) -> Vec<String> {
        std::iter::once(ALL_FILTER_OPTION.to_string())
            .chain(self.weapons.iter().map(|w| w.to_string()))
            .collect()
    }

    /// Synergy entries of `id`, or `None` when `id` is unknown.
    pub fn synergy_partners(&self, id: &str) -> Option<Vec<SynergyPartner<'_>>> {
        let character = self.find_by_id(id)?;
        Some(
            character
                .synergy()
                .iter()
                .map(|entry| SynergyPartner {
                    entry,
                    character: self.characters.values().find(|c| c.is_named(&entry.partner)),
                })
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Character>> {
        self.characters.values()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
