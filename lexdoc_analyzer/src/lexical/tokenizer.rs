//! Single-pattern regex scanner
//!
//! Word boundaries come from one generic pattern: an identifier-like run, or
//! else a single non-whitespace character. Strings, comments, numbers and
//! multi-character operators get no special treatment.

use crate::config::compile_time::input::MAX_INPUT_SIZE;
use crate::config::compile_time::lexical::MAX_TOKEN_COUNT;
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use regex::{Matches, Regex};
use serde::Serialize;

/// Identifier-like run, else any single non-whitespace character
pub const TOKEN_PATTERN: &str = r"[A-Za-z_][A-Za-z0-9_]*|\S";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Input too large: {size} bytes (max {MAX_INPUT_SIZE})")]
    InputTooLarge { size: usize },

    #[error("Too many tokens: more than {MAX_TOKEN_COUNT}")]
    TooManyTokens { count: usize },

    #[error("Invalid token pattern: {message}")]
    InvalidPattern { message: String },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InputTooLarge { .. } => codes::lexical::INPUT_TOO_LARGE,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
            LexerError::InvalidPattern { .. } => codes::lexical::INVALID_PATTERN,
        }
    }
}

/// One pattern match with character and byte offsets (end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RawToken<'s> {
    pub text: &'s str,
    pub start: usize,
    pub end: usize,
    #[serde(skip)]
    pub byte_start: usize,
    #[serde(skip)]
    pub byte_end: usize,
}

impl RawToken<'_> {
    /// Length in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Compiled scanner; cheap to clone and safe to share
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self, LexerError> {
        let pattern = Regex::new(TOKEN_PATTERN).map_err(|e| LexerError::InvalidPattern {
            message: e.to_string(),
        })?;
        Ok(Self { pattern })
    }

    /// Lazily scan `text` left to right
    pub fn scan<'t, 's>(&'t self, text: &'s str) -> Result<Scan<'t, 's>, LexerError> {
        if text.len() > MAX_INPUT_SIZE {
            let error = LexerError::InputTooLarge { size: text.len() };
            log_error!(error.error_code(), "Input exceeds scan limit",
                "size" => text.len(),
                "max" => MAX_INPUT_SIZE
            );
            return Err(error);
        }

        Ok(Scan {
            matches: self.pattern.find_iter(text),
            source: text,
            byte_pos: 0,
            char_pos: 0,
        })
    }

    /// Scan the whole input, enforcing the token limit
    pub fn tokenize<'s>(&self, text: &'s str) -> Result<Vec<RawToken<'s>>, LexerError> {
        let mut tokens = Vec::new();
        for token in self.scan(text)? {
            if tokens.len() == MAX_TOKEN_COUNT {
                let error = LexerError::TooManyTokens {
                    count: tokens.len() + 1,
                };
                log_error!(error.error_code(), "Token limit exceeded",
                    "max" => MAX_TOKEN_COUNT
                );
                return Err(error);
            }
            tokens.push(token);
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Scan complete",
            "tokens" => tokens.len(),
            "bytes" => text.len()
        );
        Ok(tokens)
    }

    /// First token covering `offset`, stopping once matches start past it
    pub fn token_at<'s>(
        &self,
        text: &'s str,
        offset: usize,
    ) -> Result<Option<RawToken<'s>>, LexerError> {
        for token in self.scan(text)? {
            if token.start > offset {
                break;
            }
            if token.contains(offset) {
                return Ok(Some(token));
            }
        }
        log_debug!("No token at offset", "offset" => offset);
        Ok(None)
    }
}

/// Iterator over [`RawToken`]s of one input
#[derive(Debug)]
pub struct Scan<'t, 's> {
    matches: Matches<'t, 's>,
    source: &'s str,
    byte_pos: usize,
    char_pos: usize,
}

impl<'s> Iterator for Scan<'_, 's> {
    type Item = RawToken<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.matches.next()?;
        self.char_pos += self.source[self.byte_pos..m.start()].chars().count();
        let start = self.char_pos;
        self.char_pos += m.as_str().chars().count();
        self.byte_pos = m.end();

        Some(RawToken {
            text: m.as_str(),
            start,
            end: self.char_pos,
            byte_start: m.start(),
            byte_end: m.end(),
        })
    }
}
