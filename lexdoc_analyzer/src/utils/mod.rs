//! Shared location types used by the tokenizer, analysis and host layers

pub mod span;

pub use span::{Position, SourceMap, Span};
