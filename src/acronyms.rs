//! Acronym table used by the camelCase / PascalCase conversions.
//!
//! A table maps an exact input string to a pre-split replacement, e.g.
//! `"HTTPServer" -> "Http Server"`, so that the capitals of a known acronym are
//! not flattened by the uppercase-run collapse. Lookups are exact matches on
//! the trimmed input; there is no substring or prefix matching.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

static PROCESS_ACRONYMS: OnceLock<Acronyms> = OnceLock::new();

/// Exact-match table of acronym substitutions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acronyms {
    entries: BTreeMap<String, String>,
}

impl Acronyms {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a replacement for an exact input string
    pub fn register(
        &mut self,
        key: impl Into<String>,
        replacement: impl Into<String>,
    ) -> &mut Self {
        self.entries.insert(key.into(), replacement.into());
        self
    }

    /// Look up the replacement for an input string
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Install this table as the process-wide default.
    ///
    /// The process table can be set only once and is read-only afterwards, so it
    /// must be installed before any concurrent conversions start. If a table is
    /// already installed the rejected one is handed back.
    pub fn install(self) -> Result<(), Acronyms> {
        let count = self.len();
        PROCESS_ACRONYMS.set(self)?;
        tracing::debug!(entries = count, "installed process acronym table");
        Ok(())
    }

    /// The process-wide table, if one was installed
    pub fn global() -> Option<&'static Acronyms> {
        PROCESS_ACRONYMS.get()
    }
}

impl<K, V> FromIterator<(K, V)> for Acronyms
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Acronyms {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
