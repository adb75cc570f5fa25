// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Display text lives in one nested TOML document per language under
//! `assets/i18n/`, addressed with dotted keys such as `nav.about`.
//!
//! # Features
//!
//! - Two static languages, English (primary) and Spanish
//! - Typed keys ([`keys::TextKey`]) for every string the chrome uses
//! - Dotted-key resolution for keys composed at runtime from content slugs
//! - Runtime language switching, persisted through a [`PreferenceStore`]
//! - Missing keys echo back unchanged so a typo is visible, never blank
//!
//! [`PreferenceStore`]: crate::preferences::PreferenceStore

pub mod keys;
pub mod store;
pub mod table;

use std::fmt;
use unic_langid::LanguageIdentifier;

/// Display languages supported by the text tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// All languages in switcher order. The first entry is the primary one.
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// Short code used for persistence and table file names.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Label shown on the language switcher.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Spanish => "ES",
        }
    }

    /// Parses a language tag, matching on its primary language subtag.
    ///
    /// Accepts bare codes (`es`) as well as full BCP-47 tags (`es-MX`,
    /// `en-US`). Unsupported or malformed input yields `None`.
    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        let id: LanguageIdentifier = raw.trim().parse().ok()?;
        match id.language.as_str() {
            "en" => Some(Language::English),
            "es" => Some(Language::Spanish),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
