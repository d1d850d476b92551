use std::path::Path;

use models::Dataset;

use super::{join_strlist, ConstName};

/// Generates `pub const` identifiers for every character in a dataset.
pub struct IdSourceBuilder<'a> {
    dataset: &'a Dataset,
}

impl<'a> IdSourceBuilder<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub fn to_source_code(&self) -> anyhow::Result<String> {
        let mut source = String::new();
        let mut const_names = Vec::with_capacity(self.dataset.characters.len());
        for id in self.dataset.character_ids() {
            let ConstName(const_name) = ConstName::character(id);
            source.push_str(&format!("pub const {const_name}: &str = {id:?};\n"));
            const_names.push(const_name);
        }
        source.push_str(&format!(
            "pub const CHARACTER_IDS: &[&str] = &[{}];\n",
            join_strlist(&const_names)
        ));

        let syntax_tree: syn::File = syn::parse_str(&source)
            .map_err(|e| anyhow::anyhow!("invalid rust syntax ({e}):\n{source}"))?;
        Ok(format!(
            "// @generated\n{}",
            prettyplease::unparse(&syntax_tree)
        ))
    }

    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_source_code()?)
            .map_err(|e| anyhow::anyhow!("unable to write {path:?} ({e})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatasetBuilder;

    #[test]
    fn emits_one_constant_per_character() {
        let dataset = DatasetBuilder::from_bundle_str(
            r#"{
                "characters": [
                    { "id": "kalka", "name": { "en": "Kalka" }, "role": "Vanguard", "weapon": "Sword",
                      "image": "a", "splash": "b", "rarity": "5★", "element": "Fire" },
                    { "id": "mr-storm", "name": { "en": "Storm" }, "role": "Vanguard", "weapon": "Spear",
                      "image": "a", "splash": "b", "rarity": "4★", "element": "Lightning" }
                ],
                "tierlist": {}
            }"#,
        )
        .and_then(|b| b.build())
        .expect("fixture should load");

        let source = IdSourceBuilder::new(&dataset).to_source_code().unwrap();
        assert!(source.starts_with("// @generated"));
        assert!(source.contains(r#"pub const KALKA: &str = "kalka";"#));
        assert!(source.contains(r#"pub const MR_STORM: &str = "mr-storm";"#));
        assert!(source.contains("pub const CHARACTER_IDS: &[&str]"));
    }
}
