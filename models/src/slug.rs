use heck::ToKebabCase;

use super::SLUG_REGEX;

/// Lowercase, dash separated identifier used for lookup and routing.
pub fn is_slug(id: &str) -> bool {
    SLUG_REGEX.is_match(id)
}

pub fn slugify(name: &str) -> String {
    name.to_kebab_case()
}
