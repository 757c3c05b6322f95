//! Static language reference dictionary
//!
//! Entries are authored as markdown (`dictionaries/*.md`), embedded at build
//! time, merged by category precedence and loaded into an immutable
//! [`DictionaryStore`].

pub mod category;
pub mod document;
pub mod entry;
pub mod generator;
pub mod language;
pub mod markdown;
pub mod store;

pub use category::{Category, CoarseKind, Section, UnknownCategory};
pub use document::{DictionaryDocument, DocumentSection};
pub use entry::DictionaryEntry;
pub use generator::{generate, merge_with_precedence, GeneratedDictionary, GeneratorError};
pub use language::Language;
pub use markdown::{document_title, parse_markdown, MarkdownError};
pub use store::DictionaryStore;

use crate::config::compile_time::dictionary::MAX_DESCRIPTION_LENGTH;
use crate::logging::codes;
use thiserror::Error;

/// Dictionary load errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("Dictionary entry has an empty token")]
    EmptyToken,

    #[error("Dictionary token '{token}' contains whitespace")]
    WhitespaceInToken { token: String },

    #[error("Dictionary entry '{token}' has no description")]
    MissingDescription { token: String },

    #[error("Dictionary entry '{token}' uses the reserved identifier category")]
    ReservedCategory { token: String },

    #[error("Dictionary exceeds {max} entries")]
    TooManyEntries { max: usize },

    #[error(
        "Description for '{token}' is {length} bytes (limit {limit})",
        limit = MAX_DESCRIPTION_LENGTH
    )]
    DescriptionTooLong { token: String, length: usize },

    #[error("Invalid dictionary JSON: {message}")]
    InvalidJson { message: String },

    #[error(transparent)]
    Markdown(#[from] MarkdownError),
}

impl DictionaryError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            DictionaryError::EmptyToken => codes::dictionary::EMPTY_TOKEN,
            DictionaryError::WhitespaceInToken { .. } => codes::dictionary::WHITESPACE_IN_TOKEN,
            DictionaryError::MissingDescription { .. } => codes::dictionary::MISSING_DESCRIPTION,
            DictionaryError::ReservedCategory { .. } => codes::dictionary::RESERVED_CATEGORY,
            DictionaryError::TooManyEntries { .. } => codes::dictionary::TOO_MANY_ENTRIES,
            DictionaryError::DescriptionTooLong { .. } => codes::dictionary::DESCRIPTION_TOO_LONG,
            DictionaryError::InvalidJson { .. } => codes::dictionary::INVALID_JSON,
            DictionaryError::Markdown(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DictionaryError::EmptyToken.error_code(),
            codes::dictionary::EMPTY_TOKEN
        );
        let markdown = DictionaryError::from(MarkdownError::UnterminatedExample {
            token: "x".to_string(),
            line: 3,
        });
        assert_eq!(markdown.error_code(), codes::dictionary::UNTERMINATED_EXAMPLE);
    }

    #[test]
    fn test_builtin_dictionaries_load() {
        for language in Language::ALL {
            let store = DictionaryStore::builtin(language).unwrap();
            assert!(!store.is_empty());
            assert!(store.iter().all(|e| !e.category.is_identifier()));
        }
    }

    #[test]
    fn test_python_dictionary_precedence() {
        let store = DictionaryStore::builtin(Language::Python).unwrap();
        assert_eq!(store.lookup("True").unwrap().category, Category::Keyword);
        assert_eq!(store.lookup("None").unwrap().category, Category::Keyword);
        assert_eq!(store.lookup("print").unwrap().category, Category::BuiltinFunction);
        assert!(store.lookup("print").unwrap().example.is_some());
        assert_eq!(store.lookup("*").unwrap().category, Category::Operator);
        assert_eq!(store.lookup("(").unwrap().category, Category::Delimiter);
        assert_eq!(store.lookup("ValueError").unwrap().category, Category::ExceptionType);
        assert_eq!(store.lookup("DeprecationWarning").unwrap().category, Category::WarningType);
        assert_eq!(store.lookup("Ellipsis").unwrap().category, Category::BuiltinConstant);
        assert_eq!(store.lookup("int").unwrap().category, Category::BuiltinType);
        assert!(store.lookup("**").is_none());
    }

    #[test]
    fn test_c_dictionary_basics() {
        let store = DictionaryStore::builtin(Language::C).unwrap();
        assert_eq!(store.lookup("while").unwrap().category, Category::Keyword);
        assert_eq!(store.lookup("printf").unwrap().category, Category::BuiltinFunction);
        assert_eq!(store.lookup("size_t").unwrap().category, Category::BuiltinType);
        assert_eq!(store.lookup("NULL").unwrap().category, Category::BuiltinConstant);
        assert_eq!(store.lookup(";").unwrap().category, Category::Delimiter);
    }
}
