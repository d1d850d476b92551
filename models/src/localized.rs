use serde::Deserialize;

use super::Language;

/// One piece of display text in English and Vietnamese.
///
/// Either key may be missing from the source data; a missing key reads as an
/// empty string so that resolution never fails.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct LocalizedString {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub vi: String,
}

impl LocalizedString {
    pub fn new(en: impl Into<String>, vi: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            vi: vi.into(),
        }
    }

    pub fn english(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            vi: String::new(),
        }
    }

    /// Whether the Vietnamese text has anything besides whitespace.
    pub fn has_vietnamese(&self) -> bool {
        !self.vi.trim().is_empty()
    }

    /// Vietnamese when requested and present, English otherwise. Blank
    /// Vietnamese text counts as absent.
    pub fn resolve(&self, language: Language) -> &str {
        match language {
            Language::Vi if self.has_vietnamese() => &self.vi,
            _ => &self.en,
        }
    }

    pub fn is_translated(&self) -> bool {
        !self.en.trim().is_empty() && self.has_vietnamese()
    }

    pub fn contains_ignore_case(&self, needle_lowercase: &str) -> bool {
        self.en.to_lowercase().contains(needle_lowercase)
            || self.vi.to_lowercase().contains(needle_lowercase)
    }
}
