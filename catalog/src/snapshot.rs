use std::sync::Arc;

use models::{Character, Dataset, Language};

use crate::{
    CatalogConfig, CharacterCard, CharacterDetail, CharacterRepository, Resolver, TierRepository,
};

/// Immutable, query-ready view of one dataset.
///
/// Refreshing data means building a new `Catalog` and replacing the old
/// value; nothing inside is mutated after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    characters: CharacterRepository,
    tiers: TierRepository,
    default_language: Language,
}

impl Catalog {
    pub fn from_dataset(dataset: Dataset, config: &CatalogConfig) -> anyhow::Result<Self> {
        let characters = CharacterRepository::new(dataset.characters)?;
        let tiers =
            TierRepository::new(&dataset.tiers, &characters, config.missing_tier_reference)?;

        #[cfg(feature = "trace")]
        tracing::info!(
            characters = characters.len(),
            ranked = tiers.len(),
            language = %config.default_language,
            "Build catalog"
        );

        Ok(Self {
            characters,
            tiers,
            default_language: config.default_language,
        })
    }

    /// Catalog over the dataset bundled with `gamedata`.
    pub fn bundled(config: &CatalogConfig) -> anyhow::Result<Self> {
        Self::from_dataset(gamedata::DATASET.clone(), config)
    }

    pub fn characters(&self) -> &CharacterRepository {
        &self.characters
    }

    pub fn tiers(&self) -> &TierRepository {
        &self.tiers
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn resolver(&self, language: Option<Language>) -> Resolver {
        Resolver::new(language.unwrap_or(self.default_language))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Arc<Character>> {
        self.characters.find_by_id(id)
    }

    pub fn card(&self, id: &str, language: Language) -> Option<CharacterCard<'_>> {
        self.find_by_id(id)
            .map(|c| CharacterCard::new(c, Resolver::new(language)))
    }

    pub fn detail(&self, id: &str, language: Language) -> Option<CharacterDetail<'_>> {
        let character = self.find_by_id(id)?;
        let partners = self.characters.synergy_partners(id)?;
        Some(CharacterDetail::new(
            character,
            &partners,
            Resolver::new(language),
        ))
    }
}
