//! Dictionary generation: markdown reference to merged JSON outputs

use super::category::Category;
use super::document::{compare_tokens, DictionaryDocument};
use super::entry::DictionaryEntry;
use super::markdown::{parse_markdown, MarkdownError};
use crate::logging::codes;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DEFINITIONS_FILE: &str = "built-in-definitions.json";
pub const DEFAULT_DICTIONARY_FILE: &str = "dictionary.json";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Markdown(#[from] MarkdownError),

    #[error("Failed to write '{path}': {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GeneratorError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            GeneratorError::Markdown(e) => e.error_code(),
            GeneratorError::Io { .. } => codes::source::IO_ERROR,
            GeneratorError::Serialize(_) => codes::system::INTERNAL_ERROR,
        }
    }
}

/// Resolve duplicate tokens.
///
/// Keyword beats operator beats builtin. On equal precedence the longer
/// description and the longer example are kept independently. First
/// appearance order is preserved.
pub fn merge_with_precedence<I>(items: I) -> Vec<DictionaryEntry>
where
    I: IntoIterator<Item = DictionaryEntry>,
{
    let mut merged: Vec<DictionaryEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        if item.token.is_empty() {
            continue;
        }
        let Some(&slot) = index.get(&item.token) else {
            index.insert(item.token.clone(), merged.len());
            merged.push(item);
            continue;
        };

        let existing = &mut merged[slot];
        let incoming = item.category.coarse().precedence();
        let current = existing.category.coarse().precedence();

        if incoming > current {
            *existing = item;
        } else if incoming == current {
            if item.description.len() > existing.description.len() {
                existing.description = item.description;
            }
            let incoming_example = item.example.as_deref().map_or(0, str::len);
            let current_example = existing.example.as_deref().map_or(0, str::len);
            if incoming_example > current_example {
                existing.example = item.example;
            }
        }
    }

    merged
}

/// Builtin constants whose token also appears as a keyword.
///
/// The keyword wins the merge and owns lookups, but the builtin text is
/// still listed in the Builtins section of the document (`True`, `False`
/// and `None` in the Python reference). One entry per token, first wins.
pub fn shadowed_builtins(parsed: &[DictionaryEntry], merged: &[DictionaryEntry]) -> Vec<DictionaryEntry> {
    let keywords: HashSet<&str> = merged
        .iter()
        .filter(|e| e.category == Category::Keyword)
        .map(|e| e.token.as_str())
        .collect();

    let mut seen = HashSet::new();
    parsed
        .iter()
        .filter(|e| e.category == Category::BuiltinConstant)
        .filter(|e| keywords.contains(e.token.as_str()))
        .filter(|e| seen.insert(e.token.clone()))
        .cloned()
        .collect()
}

/// Merged definitions plus the sectioned document built from them
#[derive(Debug, Clone)]
pub struct GeneratedDictionary {
    /// One entry per token, as loaded by the store
    pub definitions: Vec<DictionaryEntry>,
    /// Builtin constants displaced by a keyword, listed only in the document
    pub shadowed: Vec<DictionaryEntry>,
    pub document: DictionaryDocument,
}

/// Parse, merge and sort a markdown reference
pub fn generate(source: &str, title: &str) -> Result<GeneratedDictionary, GeneratorError> {
    let parsed = parse_markdown(source)?;
    let mut definitions = merge_with_precedence(parsed.iter().cloned());
    definitions.sort_by(|a, b| compare_tokens(&a.token, &b.token));
    let shadowed = shadowed_builtins(&parsed, &definitions);
    let document = DictionaryDocument::from_entries(title, definitions.iter().chain(&shadowed));

    crate::log_debug!("Merged markdown reference",
        "parsed" => parsed.len(),
        "unique" => definitions.len(),
        "shadowed" => shadowed.len()
    );

    Ok(GeneratedDictionary {
        definitions,
        shadowed,
        document,
    })
}

impl GeneratedDictionary {
    /// Write the flat definitions list and the sectioned document as JSON
    pub fn write(
        &self,
        out_dir: &Path,
        definitions_file: &str,
        dictionary_file: &str,
    ) -> Result<(PathBuf, PathBuf), GeneratorError> {
        fs::create_dir_all(out_dir).map_err(|e| GeneratorError::Io {
            path: out_dir.to_path_buf(),
            message: e.to_string(),
        })?;

        let definitions_path = out_dir.join(definitions_file);
        let dictionary_path = out_dir.join(dictionary_file);

        write_json(&definitions_path, &serde_json::to_string_pretty(&self.definitions)?)?;
        write_json(&dictionary_path, &serde_json::to_string_pretty(&self.document)?)?;

        crate::log_success!(
            codes::success::GENERATION_COMPLETE,
            "Dictionary outputs written",
            "entries" => self.definitions.len(),
            "definitions" => definitions_path.display(),
            "dictionary" => dictionary_path.display()
        );

        Ok((definitions_path, dictionary_path))
    }
}

fn write_json(path: &Path, content: &str) -> Result<(), GeneratorError> {
    fs::write(path, content).map_err(|e| GeneratorError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
