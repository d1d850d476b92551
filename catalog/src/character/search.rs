use std::sync::Arc;

use models::Character;

use super::CharacterRepository;

fn matches_query(character: &Character, query: &str) -> bool {
    character.id.contains(query)
        || character.name.contains_ignore_case(query)
        || character.role.as_str().to_lowercase().contains(query)
        || character.weapon.as_str().to_lowercase().contains(query)
        || character.element.as_str().to_lowercase().contains(query)
        || character.rarity.to_string().contains(query)
}

impl CharacterRepository {
    /// Free text search over name (either language), id, role, weapon,
    /// element and rarity. A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<Arc<Character>> {
        let query = query.trim().to_lowercase();
        let found: Vec<Arc<Character>> = self
            .iter()
            .filter(|c| query.is_empty() || matches_query(c, &query))
            .cloned()
            .collect();

        #[cfg(feature = "trace")]
        tracing::debug!(%query, found = found.len(), "Search characters");

        found
    }
}
