// SPDX-License-Identifier: MPL-2.0
//! The current display language plus lookup into the text table.

use super::keys::TextKey;
use super::table::TextTable;
use super::Language;
use crate::preferences::PreferenceStore;
use std::fmt;

/// Preference key under which the chosen language is persisted.
pub const LANGUAGE_KEY: &str = "portfolio-language";

/// Owns the display language and resolves text for it.
///
/// There is a single writer (the application update loop); view functions
/// borrow the store immutably.
pub struct LocaleStore {
    table: TextTable,
    language: Language,
    store: Box<dyn PreferenceStore>,
}

impl LocaleStore {
    /// Creates the store, adopting the persisted language when it is one we
    /// recognize and falling back to the primary language otherwise.
    pub fn new(table: TextTable, store: Box<dyn PreferenceStore>) -> Self {
        let language = match store.get(LANGUAGE_KEY) {
            Some(raw) => Language::from_code(&raw).unwrap_or_else(|| {
                tracing::debug!(value = %raw, "ignoring unrecognized persisted language");
                Language::default()
            }),
            None => Language::default(),
        };

        Self {
            table,
            language,
            store,
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the display language and persists the choice.
    ///
    /// Resolution uses the new language immediately, even if the write fails.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Err(error) = self.store.set(LANGUAGE_KEY, language.code()) {
            tracing::warn!(%error, language = %language, "failed to persist language preference");
        }
    }

    /// Switches the display language for this session only.
    pub fn use_session_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Resolves a dotted key in the current language.
    ///
    /// Returns the key itself when any segment is missing, the value is not
    /// a string, or the string is empty.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        match self.table.lookup(self.language, key) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!(key, language = %self.language, "missing translation");
                key.to_string()
            }
        }
    }

    /// Resolves a typed key in the current language.
    #[must_use]
    pub fn tr(&self, key: TextKey) -> String {
        self.resolve(key.as_str())
    }

    #[must_use]
    pub fn table(&self) -> &TextTable {
        &self.table
    }

    /// Gives back the preference store, dropping the locale state.
    pub fn into_store(self) -> Box<dyn PreferenceStore> {
        self.store
    }
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
