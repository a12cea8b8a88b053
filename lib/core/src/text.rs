use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A display string carried in English plus one or more translations.
///
/// Accepts either a bare string (taken as English) or an object keyed by
/// language code, e.g. `{"en": "Negroni", "he": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LocalizedRepr")]
pub struct LocalizedText {
    pub en: String,
    #[serde(flatten)]
    pub translations: BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LocalizedRepr {
    Plain(String),
    Map {
        #[serde(default)]
        en: String,
        #[serde(flatten)]
        translations: BTreeMap<String, String>,
    },
}

impl From<LocalizedRepr> for LocalizedText {
    fn from(repr: LocalizedRepr) -> Self {
        match repr {
            LocalizedRepr::Plain(en) => Self {
                en,
                translations: BTreeMap::new(),
            },
            LocalizedRepr::Map { en, translations } => Self { en, translations },
        }
    }
}

impl LocalizedText {
    /// Create a text with only an English variant
    pub fn new(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            translations: BTreeMap::new(),
        }
    }

    /// Add a translation for the given language code
    #[must_use]
    pub fn with_translation(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(lang.into(), text.into());
        self
    }

    /// Look up the variant for a language code
    pub fn get(&self, lang: &str) -> Option<&str> {
        if lang == "en" {
            Some(self.en.as_str())
        } else {
            self.translations.get(lang).map(String::as_str)
        }
    }

    /// True when no variant carries any visible text
    pub fn is_blank(&self) -> bool {
        self.en.trim().is_empty() && self.translations.values().all(|t| t.trim().is_empty())
    }

    /// Case-insensitive match of `name` against any variant
    pub fn matches(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        std::iter::once(&self.en)
            .chain(self.translations.values())
            .any(|variant| variant.trim().to_lowercase() == needle)
    }

    /// Whether two texts name the same thing: any non-blank variant of
    /// `other` matches a variant of `self`
    pub fn same_identity(&self, other: &LocalizedText) -> bool {
        std::iter::once(&other.en)
            .chain(other.translations.values())
            .any(|variant| self.matches(variant))
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.en.is_empty() {
            return write!(f, "{}", self.en);
        }
        match self.translations.values().next() {
            Some(t) => write!(f, "{}", t),
            None => Ok(()),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(s: &str) -> Self {
        LocalizedText::new(s)
    }
}

impl From<String> for LocalizedText {
    fn from(s: String) -> Self {
        LocalizedText::new(s)
    }
}
