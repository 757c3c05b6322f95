//! Immutable token -> entry map

use super::document::{compare_tokens, DictionaryDocument};
use super::entry::DictionaryEntry;
use super::generator::{merge_with_precedence, shadowed_builtins};
use super::language::Language;
use super::markdown::parse_markdown;
use super::DictionaryError;
use crate::config::compile_time::dictionary::MAX_ENTRIES;
use crate::logging::codes;
use std::collections::HashMap;

/// Read-only dictionary, shared between analyzers with `Arc`
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    entries: HashMap<String, DictionaryEntry>,
    /// Document-only entries, never returned by `lookup`
    shadowed: Vec<DictionaryEntry>,
}

impl DictionaryStore {
    /// Build the map, validating each entry. A later duplicate overwrites
    /// the earlier one.
    pub fn load<I>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut map: HashMap<String, DictionaryEntry> = HashMap::new();
        let mut count = 0usize;

        for entry in entries {
            count += 1;
            if count > MAX_ENTRIES {
                return Err(DictionaryError::TooManyEntries { max: MAX_ENTRIES });
            }
            entry.validate()?;

            if let Some(previous) = map.insert(entry.token.clone(), entry) {
                crate::log_debug!(
                    code = codes::dictionary::DUPLICATE_ENTRY,
                    "Duplicate dictionary token overwritten",
                    "token" => previous.token,
                    "previous_category" => previous.category
                );
            }
        }

        crate::log_success!(
            codes::success::DICTIONARY_LOADED,
            "Dictionary loaded",
            "entries" => map.len()
        );

        Ok(Self {
            entries: map,
            shadowed: Vec::new(),
        })
    }

    /// Parse a markdown reference, resolve duplicates by precedence, load
    pub fn from_markdown(source: &str) -> Result<Self, DictionaryError> {
        let parsed = parse_markdown(source)?;
        let merged = merge_with_precedence(parsed.iter().cloned());
        let shadowed = shadowed_builtins(&parsed, &merged);
        let mut store = Self::load(merged)?;
        store.shadowed = shadowed;
        Ok(store)
    }

    /// Load a JSON list of entries (the generator's definitions output)
    pub fn from_json(source: &str) -> Result<Self, DictionaryError> {
        let entries: Vec<DictionaryEntry> =
            serde_json::from_str(source).map_err(|e| DictionaryError::InvalidJson {
                message: e.to_string(),
            })?;
        Self::load(entries)
    }

    /// Embedded reference for a language
    pub fn builtin(language: Language) -> Result<Self, DictionaryError> {
        Self::from_markdown(language.reference_source())
    }

    /// Exact, case-sensitive lookup
    pub fn lookup(&self, token: &str) -> Option<&DictionaryEntry> {
        self.entries.get(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.values()
    }

    /// Entries sorted case-insensitively by token
    pub fn sorted_entries(&self) -> Vec<&DictionaryEntry> {
        let mut entries: Vec<&DictionaryEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| compare_tokens(&a.token, &b.token));
        entries
    }

    /// Builtin constants listed in the reference but shadowed by a keyword
    pub fn shadowed(&self) -> &[DictionaryEntry] {
        &self.shadowed
    }

    pub fn document(&self, title: &str) -> DictionaryDocument {
        DictionaryDocument::from_entries(title, self.entries.values().chain(&self.shadowed))
    }
}
