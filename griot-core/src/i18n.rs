//! User-facing strings in French, English and Wolof.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use griot_contracts::translate::Translate;
use griot_model::Locale;
use tracing::trace;

use crate::error::Result;

type Entry = HashMap<Locale, String>;

/// Key → per-locale text.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: BTreeMap<String, Entry>,
}

const BUILTIN: &[(&str, &str, &str, &str)] = &[
    ("hello", "Bonjour", "Hello", "Nanga def"),
    (
        "welcomeMuseum",
        "Bienvenue au Musée des Civilisations Noires",
        "Welcome to Museum of Black Civilisations",
        "Dalal ak jàmm ci Muséem bi",
    ),
    ("searchPlaceholder", "Rechercher", "Search", "Seet"),
    ("seeMore", "Voir plus", "See more", "Gëna xem"),
    ("settings", "Paramètres", "Settings", "Tànneef"),
    ("griot", "Griot", "Griot", "Gewël"),
    (
        "writeToGriot",
        "Écris au griot...",
        "Write to the griot...",
        "Bindeel ci gewël bi...",
    ),
];

impl Dictionary {
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(key, fr, en, wolof)| {
                let entry = Entry::from([
                    (Locale::Fr, (*fr).to_string()),
                    (Locale::En, (*en).to_string()),
                    (Locale::Wolof, (*wolof).to_string()),
                ]);
                ((*key).to_string(), entry)
            })
            .collect();
        Self { entries }
    }

    /// Parse `{"key": {"fr": "...", "en": "..."}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, Entry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Overlay `other` onto `self`, locale by locale.
    pub fn merge(&mut self, other: Dictionary) {
        for (key, entry) in other.entries {
            self.entries.entry(key).or_default().extend(entry);
        }
    }

    pub fn merge_json(&mut self, json: &str) -> Result<()> {
        let other = Self::from_json(json)?;
        self.merge(other);
        Ok(())
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        locale: Locale,
        text: impl Into<String>,
    ) {
        self.entries
            .entry(key.into())
            .or_default()
            .insert(locale, text.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Text for `key` in `locale`, falling back to French, then to the key.
    pub fn lookup<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        let Some(entry) = self.entries.get(key) else {
            trace!(key, "no dictionary entry");
            return key;
        };
        entry
            .get(&locale)
            .or_else(|| entry.get(&Locale::Fr))
            .map(String::as_str)
            .unwrap_or(key)
    }
}

impl Translate for Dictionary {
    fn translate<'a>(&'a self, locale: Locale, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(self.lookup(locale, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_translates_each_locale() {
        let dict = Dictionary::builtin();
        assert_eq!(dict.translate(Locale::Fr, "seeMore"), "Voir plus");
        assert_eq!(dict.translate(Locale::En, "seeMore"), "See more");
        assert_eq!(dict.translate(Locale::Wolof, "seeMore"), "Gëna xem");
        assert_eq!(dict.keys().count(), 7);
    }

    #[test]
    fn unknown_key_comes_back_unchanged() {
        let dict = Dictionary::builtin();
        assert_eq!(dict.translate(Locale::En, "museumHours"), "museumHours");
    }

    #[test]
    fn missing_locale_falls_back_to_french() {
        let mut dict = Dictionary::builtin();
        dict.merge_json(r#"{"openingHours": {"fr": "Horaires"}}"#)
            .unwrap();
        assert_eq!(dict.translate(Locale::Wolof, "openingHours"), "Horaires");

        dict.insert("onlyEnglish", Locale::En, "Only English");
        assert_eq!(dict.translate(Locale::Fr, "onlyEnglish"), "onlyEnglish");
    }

    #[test]
    fn merge_overrides_per_locale() {
        let mut dict = Dictionary::builtin();
        dict.merge_json(r#"{"hello": {"en": "Hi"}}"#).unwrap();
        assert_eq!(dict.translate(Locale::En, "hello"), "Hi");
        assert_eq!(dict.translate(Locale::Fr, "hello"), "Bonjour");
        assert!(dict.merge_json(r#"{"hello": {"de": "Hallo"}}"#).is_err());
    }
}
