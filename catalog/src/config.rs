use std::path::Path;

use models::{Language, MissingReferencePolicy};
use serde::Deserialize;

/// Settings for building a [`crate::Catalog`], read from TOML.
///
/// ```toml
/// default_language = "vi"
/// missing_tier_reference = "skip"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub default_language: Language,
    pub missing_tier_reference: MissingReferencePolicy,
}

impl CatalogConfig {
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str::<CatalogConfig>(toml_str)
            .map_err(|e| anyhow::anyhow!("invalid catalog config: {e}"))
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("unable to read {path:?} ({e})"))?;
        Self::from_toml_str(&toml_str)
    }
}
