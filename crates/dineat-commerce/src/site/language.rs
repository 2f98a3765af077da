//! Interface language preference.

use std::fmt;
use std::str::FromStr;

use dineat_storage::{keys, KeyValueStore};
use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::notify::Notifier;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ta,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ta => "ta",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ta => "Tamil",
        }
    }

    /// Tamil text is set in its own font.
    pub fn uses_tamil_font(&self) -> bool {
        matches!(self, Language::Ta)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ta" => Ok(Language::Ta),
            other => Err(SiteError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Language preference stored under [`keys::SELECTED_LANGUAGE`].
pub struct LanguagePreference<'a> {
    storage: &'a dyn KeyValueStore,
    notifier: &'a dyn Notifier,
}

impl<'a> LanguagePreference<'a> {
    pub fn new(storage: &'a dyn KeyValueStore, notifier: &'a dyn Notifier) -> Self {
        Self { storage, notifier }
    }

    /// Switch to the language with code `code` (`"en"` or `"ta"`).
    pub fn switch_language(&self, code: &str) -> Result<Language, SiteError> {
        let language: Language = code.parse()?;
        self.storage.set(keys::SELECTED_LANGUAGE, language.code())?;

        tracing::debug!(language = language.code(), "language switched");
        self.notifier.success(&format!(
            "Language switched to {}",
            language.display_name()
        ));
        Ok(language)
    }

    /// The stored language, English if none or unrecognised.
    pub fn saved_language(&self) -> Language {
        match self.storage.get(keys::SELECTED_LANGUAGE) {
            Ok(Some(code)) => code.parse::<Language>().unwrap_or_default(),
            Ok(None) => Language::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read language preference");
                Language::default()
            }
        }
    }
}
