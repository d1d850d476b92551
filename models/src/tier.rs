use serde::Deserialize;

/// One value per tier, highest rank first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TieredValue<T> {
    pub ex: T,
    pub s: T,
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
    pub e: T,
}

/// Character identifiers ranked into tiers, in their listed order.
pub type TierList = TieredValue<Vec<String>>;

/// What to do with a tier entry naming a character that does not exist.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingReferencePolicy {
    #[default]
    Fail,
    Skip,
}

/// Ranked bucket, ordered from `Ex` (highest) to `E` (lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TierLabel {
    Ex,
    S,
    A,
    B,
    C,
    D,
    E,
}

impl TierLabel {
    pub const ALL: [TierLabel; 7] = [
        TierLabel::Ex,
        TierLabel::S,
        TierLabel::A,
        TierLabel::B,
        TierLabel::C,
        TierLabel::D,
        TierLabel::E,
    ];

    pub fn select<'a, T>(&self, t: &'a TieredValue<T>) -> &'a T {
        match self {
            TierLabel::Ex => &t.ex,
            TierLabel::S => &t.s,
            TierLabel::A => &t.a,
            TierLabel::B => &t.b,
            TierLabel::C => &t.c,
            TierLabel::D => &t.d,
            TierLabel::E => &t.e,
        }
    }

    pub fn select_mut<'a, T>(&self, t: &'a mut TieredValue<T>) -> &'a mut T {
        match self {
            TierLabel::Ex => &mut t.ex,
            TierLabel::S => &mut t.s,
            TierLabel::A => &mut t.a,
            TierLabel::B => &mut t.b,
            TierLabel::C => &mut t.c,
            TierLabel::D => &mut t.d,
            TierLabel::E => &mut t.e,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TierLabel::Ex => "EX",
            TierLabel::S => "S",
            TierLabel::A => "A",
            TierLabel::B => "B",
            TierLabel::C => "C",
            TierLabel::D => "D",
            TierLabel::E => "E",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TierLabel::Ex => "Exceptional",
            TierLabel::S => "Superior",
            TierLabel::A => "Advanced",
            TierLabel::B => "Balanced",
            TierLabel::C => "Competent",
            TierLabel::D => "Decent",
            TierLabel::E => "Entry Level",
        }
    }
}

impl TryFrom<&str> for TierLabel {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_uppercase().as_str() {
            "EX" => Ok(TierLabel::Ex),
            "S" => Ok(TierLabel::S),
            "A" => Ok(TierLabel::A),
            "B" => Ok(TierLabel::B),
            "C" => Ok(TierLabel::C),
            "D" => Ok(TierLabel::D),
            "E" => Ok(TierLabel::E),
            tier => anyhow::bail!("invalid tier {tier}"),
        }
    }
}

impl std::fmt::Display for TierLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TierList {
    pub fn iter(&self) -> impl Iterator<Item = (TierLabel, &Vec<String>)> {
        TierLabel::ALL.into_iter().map(|tier| (tier, tier.select(self)))
    }

    /// Rank of `id`, looking from the highest tier down.
    pub fn tier_of(&self, id: &str) -> Option<TierLabel> {
        self.iter()
            .find(|(_, ids)| ids.iter().any(|i| i == id))
            .map(|(tier, _)| tier)
    }
}
