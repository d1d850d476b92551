use std::path::PathBuf;

use models::{
    BuildGuide, Character, Element, LocalizedString, Rarity, Role, Skill, SkillType,
    SynergyEntry, Weapon,
};

use super::{describe, parse_field, JsonValue};

pub struct JsonSkillFields {
    name: LocalizedString,
    description: LocalizedString,
    ty: String,
    cooldown: Option<String>,
    cost: Option<String>,
}

impl TryFrom<&serde_json::Value> for JsonSkillFields {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let JsonValue(name) = JsonValue::<LocalizedString>::extract(value, &["name"])?;
        let JsonValue(description) =
            JsonValue::<LocalizedString>::extract(value, &["description"])?;
        let JsonValue(ty) = JsonValue::<String>::extract(value, &["type"])?;
        let JsonValue(cooldown) = JsonValue::<Option<String>>::extract(value, &["cooldown"])?;
        let JsonValue(cost) = JsonValue::<Option<String>>::extract(value, &["cost"])?;
        Ok(Self {
            name,
            description,
            ty,
            cooldown,
            cost,
        })
    }
}

impl JsonSkillFields {
    pub fn into_skill(self, owner: &serde_json::Value) -> anyhow::Result<Skill> {
        Ok(Skill {
            ty: parse_field::<SkillType>(owner, "skills.type", &self.ty)?,
            name: self.name,
            description: self.description,
            cooldown: self.cooldown,
            cost: self.cost,
        })
    }
}

pub struct JsonCharacterFields {
    id: String,
    name: LocalizedString,
    role: String,
    weapon: String,
    image: String,
    splash: String,
    rarity: String,
    element: String,
    overview: Option<LocalizedString>,
    skills: Option<Vec<serde_json::Value>>,
    build: Option<BuildGuide>,
    synergy: Option<Vec<serde_json::Value>>,
    pros: Option<Vec<LocalizedString>>,
    cons: Option<Vec<LocalizedString>>,
}

impl TryFrom<&serde_json::Value> for JsonCharacterFields {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let JsonValue(id) = JsonValue::<String>::extract(value, &["id"])?;
        let JsonValue(name) = JsonValue::<LocalizedString>::extract(value, &["name"])?;
        let JsonValue(role) = JsonValue::<String>::extract(value, &["role"])?;
        let JsonValue(weapon) = JsonValue::<String>::extract(value, &["weapon"])?;
        let JsonValue(image) = JsonValue::<String>::extract(value, &["image"])?;
        let JsonValue(splash) = JsonValue::<String>::extract(value, &["splash"])?;
        let JsonValue(rarity) = JsonValue::<String>::extract(value, &["rarity"])?;
        let JsonValue(element) = JsonValue::<String>::extract(value, &["element"])?;
        let JsonValue(overview) =
            JsonValue::<Option<LocalizedString>>::extract(value, &["overview"])?;
        let JsonValue(skills) =
            JsonValue::<Option<Vec<serde_json::Value>>>::extract(value, &["skills"])?;
        let JsonValue(synergy) =
            JsonValue::<Option<Vec<serde_json::Value>>>::extract(value, &["synergy"])?;
        let JsonValue(pros) = JsonValue::<Option<Vec<LocalizedString>>>::extract(value, &["pros"])?;
        let JsonValue(cons) = JsonValue::<Option<Vec<LocalizedString>>>::extract(value, &["cons"])?;

        let build = match value["build"] {
            serde_json::Value::Null => None,
            _ => {
                let JsonValue(weapons) =
                    JsonValue::<Vec<String>>::extract(value, &["build", "weapons"])?;
                let JsonValue(artifacts) =
                    JsonValue::<Vec<String>>::extract(value, &["build", "artifacts"])?;
                let JsonValue(stat_priority) =
                    JsonValue::<Vec<String>>::extract(value, &["build", "statPriority"])?;
                Some(BuildGuide {
                    weapons,
                    artifacts,
                    stat_priority,
                })
            }
        };

        Ok(Self {
            id,
            name,
            role,
            weapon,
            image,
            splash,
            rarity,
            element,
            overview,
            skills,
            build,
            synergy,
            pros,
            cons,
        })
    }
}

impl JsonCharacterFields {
    /// Converts the raw strings into closed model types.
    ///
    /// `value` is the node the fields came from and is only used to label
    /// errors.
    pub fn into_character(self, value: &serde_json::Value) -> anyhow::Result<Character> {
        if self.name.en.trim().is_empty() {
            return Err(crate::DatasetError::InvalidField {
                id: describe(value),
                field: "name.en".to_string(),
                reason: "display name must not be empty".to_string(),
            }
            .into());
        }

        let skills = self
            .skills
            .map(|nodes| {
                nodes
                    .iter()
                    .map(|node| JsonSkillFields::try_from(node)?.into_skill(value))
                    .collect::<anyhow::Result<Vec<Skill>>>()
            })
            .transpose()?;

        let synergy = self
            .synergy
            .map(|nodes| {
                nodes
                    .iter()
                    .map(|node| {
                        let JsonValue(partner) = JsonValue::<String>::extract(node, &["partner"])?;
                        let JsonValue(reason) =
                            JsonValue::<LocalizedString>::extract(node, &["reason"])?;
                        Ok(SynergyEntry { partner, reason })
                    })
                    .collect::<anyhow::Result<Vec<SynergyEntry>>>()
            })
            .transpose()?;

        Ok(Character {
            role: parse_field::<Role>(value, "role", &self.role)?,
            weapon: parse_field::<Weapon>(value, "weapon", &self.weapon)?,
            rarity: parse_field::<Rarity>(value, "rarity", &self.rarity)?,
            element: parse_field::<Element>(value, "element", &self.element)?,
            id: self.id,
            name: self.name,
            image: PathBuf::from(self.image),
            splash: PathBuf::from(self.splash),
            overview: self.overview,
            skills,
            build: self.build,
            synergy,
            pros: self.pros,
            cons: self.cons,
        })
    }
}

/// Labels of every UI-visible text on `character` lacking a Vietnamese variant.
pub fn untranslated_fields(character: &Character) -> Vec<String> {
    let mut fields = Vec::new();
    let mut check = |label: String, text: &LocalizedString| {
        if !text.has_vietnamese() {
            fields.push(label);
        }
    };

    check("name".to_string(), &character.name);
    if let Some(overview) = &character.overview {
        check("overview".to_string(), overview);
    }
    for (i, skill) in character.skills().iter().enumerate() {
        check(format!("skills[{i}].name"), &skill.name);
        check(format!("skills[{i}].description"), &skill.description);
    }
    for (i, entry) in character.synergy().iter().enumerate() {
        check(format!("synergy[{i}].reason"), &entry.reason);
    }
    for (i, pro) in character.pros().iter().enumerate() {
        check(format!("pros[{i}]"), pro);
    }
    for (i, con) in character.cons().iter().enumerate() {
        check(format!("cons[{i}]"), con);
    }
    fields
}

pub fn parse_character(value: &serde_json::Value) -> anyhow::Result<Character> {
    JsonCharacterFields::try_from(value)?.into_character(value)
}
