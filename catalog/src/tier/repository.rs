use std::sync::Arc;

use indexmap::IndexMap;
use models::{Character, MissingReferencePolicy, TierLabel, TierList, TieredValue};
use parser::DatasetError;

use crate::{CharacterFilter, CharacterRepository};

use super::TierRow;

/// Tier list with every entry resolved to its character.
#[derive(Debug, Default, Clone)]
pub struct TierRepository {
    tiers: TieredValue<Vec<Arc<Character>>>,
    placement: IndexMap<String, TierLabel>,
}

impl TierRepository {
    pub fn new(
        tier_list: &TierList,
        characters: &CharacterRepository,
        policy: MissingReferencePolicy,
    ) -> anyhow::Result<Self> {
        let mut repository = Self::default();
        for (tier, ids) in tier_list.iter() {
            for id in ids {
                let Some(character) = characters.find_by_id(id) else {
                    match policy {
                        MissingReferencePolicy::Fail => {
                            return Err(DatasetError::ReferentialIntegrityViolation {
                                tier,
                                id: id.clone(),
                            }
                            .into());
                        }
                        MissingReferencePolicy::Skip => {
                            #[cfg(feature = "trace")]
                            tracing::warn!(%tier, %id, "Skip unknown tier entry");
                            continue;
                        }
                    }
                };
                if let Some(first) = repository.placement.insert(id.clone(), tier) {
                    return Err(DatasetError::DuplicateTierEntry {
                        id: id.clone(),
                        first,
                        second: tier,
                    }
                    .into());
                }
                tier.select_mut(&mut repository.tiers)
                    .push(Arc::clone(character));
            }
        }
        Ok(repository)
    }

    /// Every tier label, highest first, whether occupied or not.
    pub fn all_tiers() -> &'static [TierLabel] {
        &TierLabel::ALL
    }

    /// Characters of `tier` in their listed order.
    pub fn characters_in_tier(&self, tier: TierLabel) -> &[Arc<Character>] {
        tier.select(&self.tiers).as_slice()
    }

    pub fn tier_of(&self, id: &str) -> Option<TierLabel> {
        self.placement.get(id).copied()
    }

    /// Tiers in rank order with their characters narrowed by `filter`.
    /// `only` keeps a single tier; `None` keeps all of them, empty or not.
    pub fn rows(&self, filter: &CharacterFilter, only: Option<TierLabel>) -> Vec<TierRow> {
        Self::all_tiers()
            .iter()
            .filter(|&&tier| only.map_or(true, |only| only == tier))
            .map(|&tier| TierRow {
                tier,
                characters: self
                    .characters_in_tier(tier)
                    .iter()
                    .filter(|c| filter.matches(c))
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    /// Number of ranked characters.
    pub fn len(&self) -> usize {
        self.placement.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placement.is_empty()
    }
}
