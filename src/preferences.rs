// SPDX-License-Identifier: MPL-2.0
//! Key/value persistence for user preferences.
//!
//! The locale layer only needs a tiny string store, so it talks to the
//! [`PreferenceStore`] trait. [`SettingsStore`] writes through to the
//! `[preferences]` table of `settings.toml`; [`MemoryStore`] keeps values in
//! memory for tests and for sessions that must not touch disk.

use crate::config;
use crate::error::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// A string key/value store that survives across application launches.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by the `[preferences]` table of the settings file.
///
/// Every write re-reads the file first so that other sections edited since
/// start-up are preserved.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    base_dir: Option<PathBuf>,
    cached: config::Config,
}

impl SettingsStore {
    /// Opens the store in the default config directory.
    #[must_use]
    pub fn open() -> Self {
        Self::open_with_override(None)
    }

    /// Opens the store in `base_dir`, or the default config directory when `None`.
    ///
    /// An unreadable settings file is logged by the config loader and
    /// treated as empty.
    #[must_use]
    pub fn open_with_override(base_dir: Option<PathBuf>) -> Self {
        let (cached, _warning) = config::load_with_override(base_dir.clone());
        Self { base_dir, cached }
    }

    /// The settings as last read or written by this store.
    #[must_use]
    pub fn config(&self) -> &config::Config {
        &self.cached
    }
}

impl PreferenceStore for SettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cached.preferences.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let (mut current, _warning) = config::load_with_override(self.base_dir.clone());
        current
            .preferences
            .insert(key.to_string(), value.to_string());
        // Keep the in-memory copy current even when the write below fails.
        self.cached = current.clone();
        config::save_with_override(&current, self.base_dir.clone())
    }
}
