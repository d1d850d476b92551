use super::{Character, TierList};

/// Validated contents of the static character database.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dataset {
    pub characters: Vec<Character>,
    pub tiers: TierList,
}

impl Dataset {
    pub fn character_ids(&self) -> impl Iterator<Item = &str> {
        self.characters.iter().map(|c| c.id.as_str())
    }
}
