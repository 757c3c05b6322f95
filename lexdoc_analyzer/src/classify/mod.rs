//! Token classification by exact dictionary lookup

use crate::dictionary::{Category, DictionaryStore};

/// Description reported for tokens missing from the dictionary
pub const UNKNOWN_TOKEN_DESCRIPTION: &str = "Unknown token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub category: Category,
    pub description: &'a str,
    pub example: Option<&'a str>,
}

impl Classification<'_> {
    pub fn is_known(&self) -> bool {
        !self.category.is_identifier()
    }
}

/// Look `text` up verbatim. A miss is an identifier, never an error.
pub fn classify<'a>(text: &str, store: &'a DictionaryStore) -> Classification<'a> {
    match store.lookup(text) {
        Some(entry) => Classification {
            category: entry.category,
            description: &entry.description,
            example: entry.example.as_deref(),
        },
        None => Classification {
            category: Category::Identifier,
            description: UNKNOWN_TOKEN_DESCRIPTION,
            example: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryEntry;

    fn store() -> DictionaryStore {
        DictionaryStore::load(vec![
            DictionaryEntry::new("print", Category::BuiltinFunction, "Print objects")
                .with_example("print(1)"),
            DictionaryEntry::new("class", Category::Keyword, "Define a class"),
        ])
        .unwrap()
    }

    #[test]
    fn test_hit_returns_entry_fields() {
        let store = store();
        let result = classify("print", &store);
        assert_eq!(result.category, Category::BuiltinFunction);
        assert_eq!(result.description, "Print objects");
        assert_eq!(result.example, Some("print(1)"));
        assert!(result.is_known());
    }

    #[test]
    fn test_miss_is_identifier() {
        let store = store();
        for text in ["classFoo", "Class", "prin", "1"] {
            let result = classify(text, &store);
            assert_eq!(result.category, Category::Identifier);
            assert_eq!(result.description, UNKNOWN_TOKEN_DESCRIPTION);
            assert_eq!(result.example, None);
        }
    }

    #[test]
    fn test_empty_store_classifies_everything_as_identifier() {
        let store = DictionaryStore::default();
        assert_eq!(classify("def", &store).category, Category::Identifier);
    }
}
