use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Canonical language identifier understood by the translation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "vi")]
    Vietnamese,
}

/// Supported languages as (code, display name) rows.
/// Adding a language is one variant plus one row here.
pub const SUPPORTED_LANGUAGES: &[(LanguageCode, &str)] = &[
    (LanguageCode::English, "English"),
    (LanguageCode::Vietnamese, "Vietnamese"),
];

impl LanguageCode {
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Vietnamese => "vi",
        }
    }

    pub fn display_name(&self) -> &'static str {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(code, _)| code == self)
            .map(|(_, name)| *name)
            .unwrap_or_else(|| self.code())
    }

    pub fn all() -> impl Iterator<Item = LanguageCode> {
        SUPPORTED_LANGUAGES.iter().map(|(code, _)| *code)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Maps human-readable display names to canonical codes
#[derive(Debug, Clone)]
pub struct LanguageTable {
    by_name: HashMap<&'static str, LanguageCode>,
    names: Vec<&'static str>,
}

impl LanguageTable {
    pub fn new(rows: &[(LanguageCode, &'static str)]) -> Self {
        Self {
            by_name: rows.iter().map(|(code, name)| (*name, *code)).collect(),
            names: rows.iter().map(|(_, name)| *name).collect(),
        }
    }

    /// Exact, case-sensitive lookup of a display name
    pub fn lookup(&self, name: &str) -> Option<LanguageCode> {
        self.by_name.get(name).copied()
    }

    /// Resolve free-form field text to a code.
    ///
    /// Blank text yields `default_if_empty`, a known display name yields its
    /// code, and anything else yields `default_if_unrecognized` without error.
    pub fn resolve(
        &self,
        raw_text: &str,
        default_if_empty: LanguageCode,
        default_if_unrecognized: LanguageCode,
    ) -> LanguageCode {
        if raw_text.trim().is_empty() {
            return default_if_empty;
        }
        self.lookup(raw_text).unwrap_or(default_if_unrecognized)
    }

    /// Autocomplete candidates, case-insensitive prefix match
    pub fn suggestions(&self, prefix: &str) -> Vec<&'static str> {
        let prefix = prefix.trim().to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .copied()
            .collect()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::new(SUPPORTED_LANGUAGES)
    }
}
