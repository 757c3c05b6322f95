//! Hover lookups: the single match covering a character offset

use super::{AnalysisError, Analyzer, TokenMatch};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hover {
    pub token: TokenMatch,
}

impl Hover {
    /// Character range of the hovered token
    pub fn range(&self) -> (usize, usize) {
        (self.token.start_offset, self.token.end_offset)
    }

    pub fn is_known(&self) -> bool {
        !self.token.category.is_identifier()
    }
}

impl Analyzer {
    /// Classify the token covering `offset`. `None` over whitespace or past
    /// the end of the text.
    pub fn hover(&self, text: &str, offset: usize) -> Result<Option<Hover>, AnalysisError> {
        let found = self.tokenizer().token_at(text, offset)?;
        Ok(found.map(|raw| Hover {
            token: TokenMatch::from_raw(&raw, self.store()),
        }))
    }
}
