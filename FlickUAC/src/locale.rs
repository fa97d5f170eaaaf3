//! Language resolution and UI label tables
//!
//! Label tables are flat JSON maps embedded per language. Resolving a
//! language is an explicit ordered lookup: exact menu-name match, then a
//! small locale-code fallback table, then the English baseline. A lookup
//! therefore never yields an empty table.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{FlickError, Result};

/// Languages with an embedded label table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    TraditionalChinese,
    SimplifiedChinese,
    English,
}

/// Menu entries shown in the language selector, in display order
pub const LANGUAGE_MENU: [(&str, Language); 3] = [
    ("中文繁體", Language::TraditionalChinese),
    ("中文简体", Language::SimplifiedChinese),
    ("English", Language::English),
];

/// Label identifiers the UI renders; every table must provide them
pub const REQUIRED_LABELS: [&str; 11] = [
    "ReFlash",
    "ItemDelete",
    "ItemLocation",
    "ItemAdd",
    "message",
    "error",
    "theSelectedFilePathIs",
    "registryValueAdded",
    "noActionTaken",
    "whetherToDeleteTheValue",
    "registryValueDeleted",
];

impl Language {
    /// Exact match against the language menu names.
    pub fn from_menu_name(name: &str) -> Option<Language> {
        LANGUAGE_MENU
            .iter()
            .find(|(menu_name, _)| *menu_name == name)
            .map(|(_, language)| *language)
    }

    /// Map a system locale code to a supported language. Anything outside
    /// the fallback table defaults to the English baseline.
    pub fn from_locale_code(code: &str) -> Language {
        match code {
            "zh-TW" => Language::TraditionalChinese,
            "zh-CN" => Language::SimplifiedChinese,
            "en-US" => Language::English,
            _ => Language::English,
        }
    }

    /// Ordered lookup: menu name first, then locale code, then English.
    pub fn resolve(input: &str) -> Language {
        Self::from_menu_name(input).unwrap_or_else(|| Self::from_locale_code(input))
    }

    pub fn menu_name(self) -> &'static str {
        match self {
            Language::TraditionalChinese => LANGUAGE_MENU[0].0,
            Language::SimplifiedChinese => LANGUAGE_MENU[1].0,
            Language::English => LANGUAGE_MENU[2].0,
        }
    }

    fn resource_json(self) -> &'static str {
        match self {
            Language::TraditionalChinese => {
                include_str!("../resources/lang/TraditionalChinese.json")
            }
            Language::SimplifiedChinese => {
                include_str!("../resources/lang/SimplifiedChinese.json")
            }
            Language::English => include_str!("../resources/lang/English.json"),
        }
    }
}

/// Flat mapping from label identifiers to display strings
#[derive(Debug, Clone, Deserialize)]
pub struct LabelTable {
    #[serde(flatten)]
    labels: HashMap<String, String>,
}

/// Baseline table; embedded data, validated by the locale tests
static ENGLISH: Lazy<LabelTable> = Lazy::new(|| {
    LabelTable::parse(Language::English.resource_json())
        .expect("embedded English label table must parse")
});

impl LabelTable {
    /// Load the embedded table for a language. The previous table stays in
    /// use when this fails; callers must not apply a partial update.
    pub fn load(language: Language) -> Result<LabelTable> {
        LabelTable::parse(language.resource_json())
    }

    fn parse(json: &str) -> Result<LabelTable> {
        let table: LabelTable = serde_json::from_str(json)?;
        for key in REQUIRED_LABELS {
            if !table.labels.contains_key(key) {
                return Err(FlickError::Resource(format!(
                    "label table is missing \"{}\"",
                    key
                )));
            }
        }
        Ok(table)
    }

    /// Display string for a label identifier. Falls back to the English
    /// baseline, then to the identifier itself; never empty.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels
            .get(key)
            .or_else(|| ENGLISH.labels.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        ENGLISH.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_table_loads() {
        for (_, language) in LANGUAGE_MENU {
            let table = LabelTable::load(language).unwrap();
            for key in REQUIRED_LABELS {
                assert!(!table.get(key).is_empty(), "{key} empty for {language:?}");
            }
        }
    }

    #[test]
    fn test_menu_name_resolution() {
        assert_eq!(
            Language::from_menu_name("中文繁體"),
            Some(Language::TraditionalChinese)
        );
        assert_eq!(
            Language::from_menu_name("中文简体"),
            Some(Language::SimplifiedChinese)
        );
        assert_eq!(Language::from_menu_name("English"), Some(Language::English));
        assert_eq!(Language::from_menu_name("Deutsch"), None);
    }

    #[test]
    fn test_locale_code_fallback() {
        assert_eq!(
            Language::from_locale_code("zh-TW"),
            Language::TraditionalChinese
        );
        assert_eq!(
            Language::from_locale_code("zh-CN"),
            Language::SimplifiedChinese
        );
        assert_eq!(Language::from_locale_code("en-US"), Language::English);
        // Unrecognized codes default to the baseline
        assert_eq!(Language::from_locale_code("de-DE"), Language::English);
        assert_eq!(Language::from_locale_code(""), Language::English);
    }

    #[test]
    fn test_resolve_prefers_menu_name() {
        assert_eq!(Language::resolve("中文简体"), Language::SimplifiedChinese);
        assert_eq!(Language::resolve("zh-TW"), Language::TraditionalChinese);
        assert_eq!(Language::resolve("fr-FR"), Language::English);
    }

    #[test]
    fn test_get_falls_back_to_key() {
        let table = LabelTable::default();
        assert_eq!(table.get("noSuchLabel"), "noSuchLabel");
    }

    #[test]
    fn test_menu_name_round_trip() {
        for (name, language) in LANGUAGE_MENU {
            assert_eq!(language.menu_name(), name);
            assert_eq!(Language::resolve(name), language);
        }
    }
}
