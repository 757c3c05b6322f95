//! Analysis passes: scan + classify over one buffer
//!
//! An [`Analyzer`] pairs a compiled [`Tokenizer`] with a shared
//! [`DictionaryStore`]. Each call builds its own [`Analysis`]; nothing is
//! cached between passes.

pub mod groups;
pub mod hover;
pub mod status;

pub use groups::{group_matches, CategoryGroup, GroupedToken};
pub use hover::Hover;
pub use status::StatusLabel;

use crate::classify::classify;
use crate::dictionary::{Category, DictionaryStore};
use crate::lexical::{LexerError, RawToken, Tokenizer};
use crate::logging::codes;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Lexical error: {0}")]
    Lexer(#[from] LexerError),
}

impl AnalysisError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            AnalysisError::Lexer(e) => e.error_code(),
        }
    }
}

/// A classified match. Offsets are characters, end exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenMatch {
    pub text: String,
    pub category: Category,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl TokenMatch {
    pub fn from_raw(raw: &RawToken<'_>, store: &DictionaryStore) -> Self {
        let classification = classify(raw.text, store);
        Self {
            text: raw.text.to_string(),
            category: classification.category,
            description: classification.description.to_string(),
            example: classification.example.map(str::to_string),
            start_offset: raw.start,
            end_offset: raw.end,
        }
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start_offset <= offset && offset < self.end_offset
    }

    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }
}

/// Ordered matches from one full pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    matches: Vec<TokenMatch>,
}

impl Analysis {
    pub fn new(matches: Vec<TokenMatch>) -> Self {
        Self { matches }
    }

    pub fn matches(&self) -> &[TokenMatch] {
        &self.matches
    }

    pub fn into_matches(self) -> Vec<TokenMatch> {
        self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Match covering a character offset
    pub fn match_at(&self, offset: usize) -> Option<&TokenMatch> {
        let index = self.matches.partition_point(|m| m.end_offset <= offset);
        self.matches.get(index).filter(|m| m.start_offset <= offset)
    }

    /// Occurrences per category
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for m in &self.matches {
            *counts.entry(m.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn groups(&self, include_identifiers: bool) -> Vec<CategoryGroup> {
        group_matches(&self.matches, include_identifiers)
    }

    pub fn status(&self) -> StatusLabel {
        StatusLabel::Total {
            count: self.matches.len(),
        }
    }

    /// Category of the match under the cursor, else the total
    pub fn status_at(&self, offset: usize) -> StatusLabel {
        match self.match_at(offset) {
            Some(m) => StatusLabel::AtCursor {
                text: m.text.clone(),
                category: m.category,
            },
            None => self.status(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Analyzer {
    store: Arc<DictionaryStore>,
    tokenizer: Tokenizer,
}

impl Analyzer {
    pub fn new(store: Arc<DictionaryStore>) -> Result<Self, AnalysisError> {
        Ok(Self {
            store,
            tokenizer: Tokenizer::new()?,
        })
    }

    pub fn store(&self) -> &Arc<DictionaryStore> {
        &self.store
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// One full scan + classify pass
    pub fn analyze(&self, text: &str) -> Result<Analysis, AnalysisError> {
        let tokens = self.tokenizer.tokenize(text)?;
        let matches: Vec<TokenMatch> = tokens
            .iter()
            .map(|raw| TokenMatch::from_raw(raw, &self.store))
            .collect();
        let analysis = Analysis::new(matches);

        crate::log_success!(codes::success::ANALYSIS_COMPLETE,
            "Analysis pass complete",
            "matches" => analysis.len(),
            "identifiers" => analysis.counts().get(&Category::Identifier).copied().unwrap_or(0)
        );
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::UNKNOWN_TOKEN_DESCRIPTION;
    use crate::dictionary::DictionaryEntry;

    fn analyzer() -> Analyzer {
        let store = DictionaryStore::load(vec![
            DictionaryEntry::new("def", Category::Keyword, "Define a function"),
            DictionaryEntry::new("return", Category::Keyword, "Return a value"),
            DictionaryEntry::new("+", Category::Operator, "Addition"),
            DictionaryEntry::new("(", Category::Delimiter, "Open"),
            DictionaryEntry::new(")", Category::Delimiter, "Close"),
            DictionaryEntry::new(":", Category::Delimiter, "Block"),
        ])
        .unwrap();
        Analyzer::new(Arc::new(store)).unwrap()
    }

    #[test]
    fn test_analyze_classifies_in_order() {
        let analysis = analyzer().analyze("def f(x): return x+1").unwrap();
        let got: Vec<(&str, Category)> = analysis
            .matches()
            .iter()
            .map(|m| (m.text.as_str(), m.category))
            .collect();
        assert_eq!(
            got,
            vec![
                ("def", Category::Keyword),
                ("f", Category::Identifier),
                ("(", Category::Delimiter),
                ("x", Category::Identifier),
                (")", Category::Delimiter),
                (":", Category::Delimiter),
                ("return", Category::Keyword),
                ("x", Category::Identifier),
                ("+", Category::Operator),
                ("1", Category::Identifier),
            ]
        );
        assert_eq!(analysis.matches()[1].description, UNKNOWN_TOKEN_DESCRIPTION);
    }

    #[test]
    fn test_match_at_boundaries() {
        let analysis = analyzer().analyze("def  f").unwrap();
        assert_eq!(analysis.match_at(0).map(|m| m.text.as_str()), Some("def"));
        assert_eq!(analysis.match_at(2).map(|m| m.text.as_str()), Some("def"));
        assert!(analysis.match_at(3).is_none());
        assert!(analysis.match_at(4).is_none());
        assert_eq!(analysis.match_at(5).map(|m| m.text.as_str()), Some("f"));
        assert!(analysis.match_at(6).is_none());
    }

    #[test]
    fn test_counts_and_status() {
        let analysis = analyzer().analyze("def f(): return").unwrap();
        let counts = analysis.counts();
        assert_eq!(counts.get(&Category::Keyword), Some(&2));
        assert_eq!(counts.get(&Category::Delimiter), Some(&3));
        assert_eq!(counts.get(&Category::Identifier), Some(&1));
        assert_eq!(analysis.status().to_string(), "6 tokens");
        assert_eq!(analysis.status_at(0).to_string(), "keyword: def");
        assert_eq!(analysis.status_at(3).to_string(), "6 tokens");
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyzer().analyze("   \n").unwrap();
        assert!(analysis.is_empty());
        assert!(analysis.groups(true).is_empty());
        assert_eq!(analysis.status().to_string(), "0 tokens");
    }

    #[test]
    fn test_token_match_serialization() {
        let analysis = analyzer().analyze("+").unwrap();
        let json = serde_json::to_value(&analysis.matches()[0]).unwrap();
        assert_eq!(json["category"], "operator");
        assert_eq!(json["start_offset"], 0);
        assert_eq!(json["end_offset"], 1);
        assert!(json.get("example").is_none());
    }
}
