use std::collections::{HashMap, HashSet};

use models::{is_slug, slugify, Character, Dataset, MissingReferencePolicy, TierLabel, TierList};

use super::{describe, parse_character, untranslated_fields, DatasetError};

fn parse_json(document: &str, json: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(json).map_err(|e| {
        DatasetError::InvalidJson {
            document: document.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

fn root_field<'a>(
    document: &str,
    value: &'a serde_json::Value,
    field: &str,
) -> anyhow::Result<&'a serde_json::Value> {
    match &value[field] {
        serde_json::Value::Null => Err(DatasetError::MissingField {
            context: document.to_string(),
            field: field.to_string(),
        }
        .into()),
        node => Ok(node),
    }
}

/// Loads and validates the static character database.
///
/// Characters keep their listed order. Every character id must be a unique
/// lowercase slug and every tier entry must name a loaded character, unless
/// the builder is told to skip dangling tier entries.
pub struct DatasetBuilder {
    characters: Vec<serde_json::Value>,
    tiers: serde_json::Map<String, serde_json::Value>,
    policy: MissingReferencePolicy,
}

impl DatasetBuilder {
    /// `characters_json` is `{ "data": [...] }`, `tierlist_json` is
    /// `{ "data": { "EX": [...], ... } }`.
    pub fn from_json_strs(characters_json: &str, tierlist_json: &str) -> anyhow::Result<Self> {
        let characters = parse_json("characters.json", characters_json)?;
        let tiers = parse_json("tierlist.json", tierlist_json)?;
        Self::from_nodes(
            "characters.json",
            root_field("characters.json", &characters, "data")?,
            "tierlist.json",
            root_field("tierlist.json", &tiers, "data")?,
        )
    }

    /// Single document of the form `{ "characters": [...], "tierlist": {...} }`.
    pub fn from_bundle_str(json: &str) -> anyhow::Result<Self> {
        let bundle = parse_json("bundle", json)?;
        Self::from_nodes(
            "bundle",
            root_field("bundle", &bundle, "characters")?,
            "bundle",
            root_field("bundle", &bundle, "tierlist")?,
        )
    }

    fn from_nodes(
        characters_document: &str,
        characters: &serde_json::Value,
        tiers_document: &str,
        tiers: &serde_json::Value,
    ) -> anyhow::Result<Self> {
        let characters = characters
            .as_array()
            .ok_or_else(|| DatasetError::InvalidField {
                id: characters_document.to_string(),
                field: "characters".to_string(),
                reason: "expected a list of characters".to_string(),
            })?
            .clone();
        let tiers = tiers
            .as_object()
            .ok_or_else(|| DatasetError::InvalidField {
                id: tiers_document.to_string(),
                field: "tierlist".to_string(),
                reason: "expected an object keyed by tier label".to_string(),
            })?
            .clone();
        Ok(Self {
            characters,
            tiers,
            policy: MissingReferencePolicy::default(),
        })
    }

    pub fn missing_reference_policy(mut self, policy: MissingReferencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(&self) -> anyhow::Result<Dataset> {
        let characters = self.build_characters()?;
        let known: HashSet<&str> = characters.iter().map(|c| c.id.as_str()).collect();
        let tiers = self.build_tiers(&known)?;

        tracing::info!(
            characters = characters.len(),
            tiered = tiers.iter().map(|(_, ids)| ids.len()).sum::<usize>(),
            "loaded dataset"
        );
        Ok(Dataset { characters, tiers })
    }

    fn build_characters(&self) -> anyhow::Result<Vec<Character>> {
        let mut seen: HashSet<String> = HashSet::with_capacity(self.characters.len());
        let mut characters = Vec::with_capacity(self.characters.len());
        for node in &self.characters {
            let character = parse_character(node).inspect_err(|e| {
                tracing::error!(entry = %describe(node), error = %e, "rejecting character")
            })?;
            if !is_slug(&character.id) {
                return Err(DatasetError::InvalidSlug {
                    suggestion: slugify(&character.id),
                    id: character.id,
                }
                .into());
            }
            if !seen.insert(character.id.clone()) {
                return Err(DatasetError::DuplicateCharacterId(character.id).into());
            }
            for field in untranslated_fields(&character) {
                tracing::warn!(id = %character.id, %field, "missing vietnamese translation");
            }
            characters.push(character);
        }
        Ok(characters)
    }

    fn build_tiers(&self, known: &HashSet<&str>) -> anyhow::Result<TierList> {
        let mut labelled: Vec<(TierLabel, &serde_json::Value)> = self
            .tiers
            .iter()
            .map(|(label, ids)| {
                TierLabel::try_from(label.as_str())
                    .map(|tier| (tier, ids))
                    .map_err(|_| DatasetError::UnknownTier(label.clone()).into())
            })
            .collect::<anyhow::Result<_>>()?;
        labelled.sort_by_key(|(tier, _)| *tier);

        let mut tiers = TierList::default();
        let mut placed: HashMap<String, TierLabel> = HashMap::new();
        for (tier, ids) in labelled {
            let ids = ids.as_array().ok_or_else(|| DatasetError::InvalidField {
                id: format!("tier {tier}"),
                field: tier.to_string(),
                reason: "expected a list of character ids".to_string(),
            })?;
            for id in ids {
                let id = id.as_str().ok_or_else(|| DatasetError::InvalidField {
                    id: format!("tier {tier}"),
                    field: tier.to_string(),
                    reason: format!("non-string entry {id}"),
                })?;
                if !known.contains(id) {
                    match self.policy {
                        MissingReferencePolicy::Fail => {
                            return Err(DatasetError::ReferentialIntegrityViolation {
                                tier,
                                id: id.to_string(),
                            }
                            .into());
                        }
                        MissingReferencePolicy::Skip => {
                            tracing::warn!(%tier, %id, "skipping tier entry for unknown character");
                            continue;
                        }
                    }
                }
                if let Some(first) = placed.insert(id.to_string(), tier) {
                    return Err(DatasetError::DuplicateTierEntry {
                        id: id.to_string(),
                        first,
                        second: tier,
                    }
                    .into());
                }
                tier.select_mut(&mut tiers).push(id.to_string());
            }
        }
        Ok(tiers)
    }
}
