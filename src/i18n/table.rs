// SPDX-License-Identifier: MPL-2.0
//! Static bilingual text table.
//!
//! Each language is one TOML document whose nested tables mirror the dotted
//! keys used for lookup. The table is built once at start-up and never
//! mutated afterwards.

use super::Language;
use crate::error::{LocaleError, Result};
use rust_embed::RustEmbed;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use toml::{Table, Value};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Read-only mapping `language -> dotted key -> string`.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    tables: HashMap<Language, Table>,
}

impl TextTable {
    /// A table with no entries: every lookup misses.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the table from the documents compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut sources = Vec::with_capacity(Language::ALL.len());
        for language in Language::ALL {
            let file_name = format!("{}.toml", language.code());
            let file = Asset::get(&file_name)
                .ok_or_else(|| LocaleError::MissingSource(language.code().to_string()))?;
            sources.push((language, String::from_utf8_lossy(file.data.as_ref()).into_owned()));
        }
        Self::from_sources(sources)
    }

    /// Builds the table from `<code>.toml` files in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut sources = Vec::with_capacity(Language::ALL.len());
        for language in Language::ALL {
            let path = dir.join(format!("{}.toml", language.code()));
            if !path.exists() {
                return Err(LocaleError::MissingSource(language.code().to_string()).into());
            }
            sources.push((language, fs::read_to_string(&path)?));
        }
        Self::from_sources(sources)
    }

    /// Parses one TOML document per language.
    pub fn from_sources<S: AsRef<str>>(
        sources: impl IntoIterator<Item = (Language, S)>,
    ) -> Result<Self> {
        let mut tables = HashMap::new();
        for (language, source) in sources {
            let table = toml::from_str::<Table>(source.as_ref()).map_err(|err| {
                LocaleError::Parse {
                    language: language.code().to_string(),
                    message: err.to_string(),
                }
            })?;
            tables.insert(language, table);
        }
        Ok(Self { tables })
    }

    /// Walks the nested table of `language` along the `.`-separated segments
    /// of `key`.
    ///
    /// Returns `None` when a segment is missing, when the path ends on a
    /// table or any other non-string value, or when the string is empty.
    #[must_use]
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let table = self.tables.get(&language)?;
        let mut segments = key.split('.');
        let mut value = table.get(segments.next()?)?;
        for segment in segments {
            value = value.as_table()?.get(segment)?;
        }
        value.as_str().filter(|text| !text.is_empty())
    }

    /// Every dotted key of `language` that ends on a string value.
    #[must_use]
    pub fn leaf_keys(&self, language: Language) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        if let Some(table) = self.tables.get(&language) {
            collect_leaves(table, "", &mut keys);
        }
        keys
    }

    /// Keys present for one language but missing for another.
    ///
    /// Each entry names the language that lacks the key.
    #[must_use]
    pub fn parity_gaps(&self) -> Vec<(Language, String)> {
        let all_keys: Vec<(Language, BTreeSet<String>)> = Language::ALL
            .iter()
            .map(|&language| (language, self.leaf_keys(language)))
            .collect();

        let mut gaps = Vec::new();
        for (language, keys) in &all_keys {
            for (other, other_keys) in &all_keys {
                if other == language {
                    continue;
                }
                for missing in other_keys.difference(keys) {
                    gaps.push((*language, missing.clone()));
                }
            }
        }
        gaps.sort();
        gaps.dedup();
        gaps
    }
}

fn collect_leaves(table: &Table, prefix: &str, out: &mut BTreeSet<String>) {
    for (name, value) in table {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            Value::Table(nested) => collect_leaves(nested, &path, out),
            Value::String(_) => {
                out.insert(path);
            }
            _ => {}
        }
    }
}
