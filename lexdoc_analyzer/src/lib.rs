// Internal modules
pub mod analysis;
pub mod classify;
pub mod config;
pub mod dictionary;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod render;
pub mod session;
pub mod source;
pub mod utils;

// Re-export key types for library consumers
pub use analysis::{Analysis, AnalysisError, Analyzer, Hover, StatusLabel, TokenMatch};
pub use classify::{classify, Classification, UNKNOWN_TOKEN_DESCRIPTION};
pub use dictionary::{Category, DictionaryEntry, DictionaryError, DictionaryStore, Language};
pub use lexical::{LexerError, RawToken, Tokenizer};
pub use session::{AnalysisSession, Debouncer};
pub use source::{SourceError, SourceFile};
