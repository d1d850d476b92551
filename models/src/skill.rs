use super::LocalizedString;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SkillType {
    Active,
    Passive,
}

impl TryFrom<&str> for SkillType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "active" => Ok(SkillType::Active),
            "passive" => Ok(SkillType::Passive),
            ty => anyhow::bail!("invalid skill type {ty}"),
        }
    }
}

impl std::fmt::Display for SkillType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillType::Active => write!(f, "active"),
            SkillType::Passive => write!(f, "passive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: LocalizedString,
    pub description: LocalizedString,
    pub ty: SkillType,
    pub cooldown: Option<String>,
    pub cost: Option<String>,
}
