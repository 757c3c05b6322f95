//! Dictionary entry record and its load-time validation

use super::category::Category;
use super::DictionaryError;
use crate::config::compile_time::dictionary::MAX_DESCRIPTION_LENGTH;
use serde::{Deserialize, Deserializer, Serialize};

/// One static reference record for a recognized token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Exact, case-sensitive token text
    pub token: String,
    #[serde(alias = "type")]
    pub category: Category,
    pub description: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub example: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

impl DictionaryEntry {
    pub fn new(
        token: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            category,
            description: description.into(),
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        let example = example.into();
        self.example = if example.trim().is_empty() {
            None
        } else {
            Some(example)
        };
        self
    }

    /// Reject records the store cannot serve
    pub fn validate(&self) -> Result<(), DictionaryError> {
        if self.token.is_empty() {
            return Err(DictionaryError::EmptyToken);
        }
        if self.token.chars().any(char::is_whitespace) {
            return Err(DictionaryError::WhitespaceInToken {
                token: self.token.clone(),
            });
        }
        if self.category.is_identifier() {
            return Err(DictionaryError::ReservedCategory {
                token: self.token.clone(),
            });
        }
        if self.description.trim().is_empty() {
            return Err(DictionaryError::MissingDescription {
                token: self.token.clone(),
            });
        }
        if self.description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(DictionaryError::DescriptionTooLong {
                token: self.token.clone(),
                length: self.description.len(),
            });
        }
        Ok(())
    }
}
