use models::Dataset;
use parser::DatasetBuilder;

pub const CHARACTERS_JSON: &str = include_str!("../res/characters.json");
pub const TIERLIST_JSON: &str = include_str!("../res/tierlist.json");

/// Identifier constants for every bundled character.
pub mod ids {
    include!(concat!(env!("OUT_DIR"), "/ids.rs"));
}

pub fn load() -> anyhow::Result<Dataset> {
    DatasetBuilder::from_json_strs(CHARACTERS_JSON, TIERLIST_JSON)?.build()
}

lazy_static::lazy_static! {
    /// The bundled dataset. `build.rs` rejects the crate if it does not validate.
    pub static ref DATASET: Dataset = load().expect("bundled dataset failed validation");
}
