#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Water,
    Ice,
    Wind,
    Electro,
    Lightning,
    Light,
    Dark,
}

impl Element {
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Ice => "Ice",
            Element::Wind => "Wind",
            Element::Electro => "Electro",
            Element::Lightning => "Lightning",
            Element::Light => "Light",
            Element::Dark => "Dark",
        }
    }
}

impl TryFrom<&str> for Element {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "fire" => Ok(Element::Fire),
            "water" => Ok(Element::Water),
            "ice" => Ok(Element::Ice),
            "wind" => Ok(Element::Wind),
            "electro" => Ok(Element::Electro),
            "lightning" => Ok(Element::Lightning),
            "light" => Ok(Element::Light),
            "dark" => Ok(Element::Dark),
            element => anyhow::bail!("invalid element {element}"),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
