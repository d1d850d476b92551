#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Vanguard,
    Support,
    Annihilator,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Vanguard, Role::Support, Role::Annihilator];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Vanguard => "Vanguard",
            Role::Support => "Support",
            Role::Annihilator => "Annihilator",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "vanguard" => Ok(Role::Vanguard),
            "support" => Ok(Role::Support),
            "annihilator" => Ok(Role::Annihilator),
            role => anyhow::bail!("invalid role {role}"),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
