//! Lexical scanning
//!
//! A superficial regex scan producing ordered `(text, start, end)` matches.
//! Offsets are characters; use [`crate::utils::SourceMap`] for line/column.

pub mod tokenizer;

use crate::config::compile_time::input::MAX_INPUT_SIZE;
use crate::config::compile_time::lexical::MAX_TOKEN_COUNT;

pub use tokenizer::{LexerError, RawToken, Scan, Tokenizer, TOKEN_PATTERN};

/// Tokenize `text` with a fresh scanner
pub fn tokenize(text: &str) -> Result<Vec<RawToken<'_>>, LexerError> {
    Tokenizer::new()?.tokenize(text)
}

/// Compile-time scan limits (for reporting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimits {
    pub max_input_size: usize,
    pub max_token_count: usize,
}

pub fn scan_limits() -> ScanLimits {
    ScanLimits {
        max_input_size: MAX_INPUT_SIZE,
        max_token_count: MAX_TOKEN_COUNT,
    }
}
