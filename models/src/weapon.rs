#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Weapon {
    Sword,
    Spear,
    Sniper,
    Bow,
    Staff,
}

impl Weapon {
    pub const ALL: [Weapon; 5] = [
        Weapon::Sword,
        Weapon::Spear,
        Weapon::Sniper,
        Weapon::Bow,
        Weapon::Staff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weapon::Sword => "Sword",
            Weapon::Spear => "Spear",
            Weapon::Sniper => "Sniper",
            Weapon::Bow => "Bow",
            Weapon::Staff => "Staff",
        }
    }
}

impl TryFrom<&str> for Weapon {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "sword" => Ok(Weapon::Sword),
            "spear" => Ok(Weapon::Spear),
            "sniper" => Ok(Weapon::Sniper),
            "bow" => Ok(Weapon::Bow),
            "staff" => Ok(Weapon::Staff),
            weapon => anyhow::bail!("invalid weapon {weapon}"),
        }
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
