use regex::Regex;

lazy_static::lazy_static! {
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
    pub static ref RARITY_REGEX: Regex = Regex::new(r"^\s*(\d+)\s*★?\s*$").unwrap();
}
