use models::{Character, Role, Weapon};

use crate::ALL_FILTER_OPTION;

/// Role and weapon constraints; `None` matches every character.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CharacterFilter {
    pub role: Option<Role>,
    pub weapon: Option<Weapon>,
}

fn parse_option<T>(value: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> TryFrom<&'a str, Error = anyhow::Error>,
{
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL_FILTER_OPTION) {
        return Ok(None);
    }
    T::try_from(value).map(Some)
}

impl CharacterFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    /// Builds a filter from select box values. `All` or an empty value leaves
    /// that field unconstrained; other values parse case-insensitively.
    pub fn from_options(role: &str, weapon: &str) -> anyhow::Result<Self> {
        Ok(Self {
            role: parse_option(role)?,
            weapon: parse_option(weapon)?,
        })
    }

    pub fn is_unconstrained(&self) -> bool {
        self.role.is_none() && self.weapon.is_none()
    }

    pub fn matches(&self, character: &Character) -> bool {
        self.role.map_or(true, |role| character.role == role)
            && self.weapon.map_or(true, |weapon| character.weapon == weapon)
    }
}
