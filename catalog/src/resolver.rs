use models::{Language, LocalizedString};

/// Display string of `text` in `language`, falling back to English.
pub fn resolve(text: &LocalizedString, language: Language) -> &str {
    text.resolve(language)
}

/// Like [`resolve`], for a raw language tag. Unknown tags read as English.
pub fn resolve_tag<'a>(text: &'a LocalizedString, tag: &str) -> &'a str {
    text.resolve(Language::from_tag_or_default(tag))
}

/// Resolves bilingual text for one display language.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    pub language: Language,
}

impl Resolver {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn t<'a>(&self, text: &'a LocalizedString) -> &'a str {
        resolve(text, self.language)
    }

    pub fn t_opt<'a>(&self, text: Option<&'a LocalizedString>) -> Option<&'a str> {
        text.map(|t| self.t(t))
    }

    pub fn t_all<'a>(&self, texts: &'a [LocalizedString]) -> Vec<&'a str> {
        texts.iter().map(|t| self.t(t)).collect()
    }
}
