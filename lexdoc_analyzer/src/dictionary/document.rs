//! Sectioned reference document used by the docs page and generator output

use super::category::Section;
use super::entry::DictionaryEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSection {
    pub section: Section,
    pub title: String,
    pub entries: Vec<DictionaryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryDocument {
    pub title: String,
    pub sections: Vec<DocumentSection>,
}

impl DictionaryDocument {
    /// Bucket entries by section, every section present even when empty
    pub fn from_entries<'a, I>(title: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = &'a DictionaryEntry>,
    {
        let mut sections: Vec<DocumentSection> = Section::ALL
            .iter()
            .map(|section| DocumentSection {
                section: *section,
                title: section.title().to_string(),
                entries: Vec::new(),
            })
            .collect();

        for entry in entries {
            if let Some(section) = entry.category.section() {
                if let Some(bucket) = sections.iter_mut().find(|s| s.section == section) {
                    bucket.entries.push(entry.clone());
                }
            }
        }

        for section in &mut sections {
            section.entries.sort_by(|a, b| compare_tokens(&a.token, &b.token));
        }

        Self {
            title: title.into(),
            sections,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn section(&self, section: Section) -> Option<&DocumentSection> {
        self.sections.iter().find(|s| s.section == section)
    }

    pub fn find(&self, token: &str) -> Option<&DictionaryEntry> {
        self.sections
            .iter()
            .flat_map(|s| s.entries.iter())
            .find(|e| e.token == token)
    }
}

/// Case-insensitive order with exact text as tiebreak
pub fn compare_tokens(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
