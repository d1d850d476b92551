use std::sync::Arc;

use models::{Character, TierLabel};

/// One tier of the tier list with the characters it shows.
#[derive(Debug, Clone)]
pub struct TierRow {
    pub tier: TierLabel,
    pub characters: Vec<Arc<Character>>,
}

impl TierRow {
    pub fn description(&self) -> &'static str {
        self.tier.description()
    }

    pub fn count_label(&self) -> String {
        match self.characters.len() {
            1 => "1 character".to_string(),
            n => format!("{n} characters"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
