use super::RARITY_REGEX;

pub const MAX_STARS: u8 = 5;

/// Star rating of a character, written `5★` in the data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rarity(u8);

impl Rarity {
    pub fn new(stars: u8) -> anyhow::Result<Self> {
        if stars == 0 || stars > MAX_STARS {
            anyhow::bail!("rarity must be between 1 and {MAX_STARS} stars, got {stars}");
        }
        Ok(Self(stars))
    }

    pub fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<&str> for Rarity {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let stars = RARITY_REGEX
            .captures(value)
            .and_then(|c| c.get(1))
            .ok_or(anyhow::anyhow!("invalid rarity {value:?}"))?
            .as_str()
            .parse::<u8>()
            .map_err(|e| anyhow::anyhow!("invalid rarity {value:?}: {e}"))?;
        Rarity::new(stars)
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}★", self.0)
    }
}
