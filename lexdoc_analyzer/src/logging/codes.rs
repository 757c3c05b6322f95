//! Error and success codes with their metadata
//!
//! Single source of truth for every code the analyzer logs or attaches to an error.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub requires_halt: bool,
    pub description: &'static str,
}

impl ErrorMetadata {
    const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        requires_halt: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            requires_halt,
            description,
        }
    }
}

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Source file loading error codes
pub mod source {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const UNSUPPORTED_LANGUAGE: Code = Code::new("E006");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const POSITION_OUT_OF_RANGE: Code = Code::new("E012");
}

/// Tokenizer error codes
pub mod lexical {
    use super::Code;

    pub const INPUT_TOO_LARGE: Code = Code::new("E020");
    pub const TOO_MANY_TOKENS: Code = Code::new("E027");
    pub const INVALID_PATTERN: Code = Code::new("E029");
}

/// Dictionary load error codes
pub mod dictionary {
    use super::Code;

    pub const EMPTY_TOKEN: Code = Code::new("E060");
    pub const WHITESPACE_IN_TOKEN: Code = Code::new("E061");
    pub const MISSING_DESCRIPTION: Code = Code::new("E062");
    pub const RESERVED_CATEGORY: Code = Code::new("E063");
    pub const TOO_MANY_ENTRIES: Code = Code::new("E064");
    pub const DESCRIPTION_TOO_LONG: Code = Code::new("E065");
    pub const INVALID_JSON: Code = Code::new("E066");
    pub const UNTERMINATED_EXAMPLE: Code = Code::new("E070");
    pub const DUPLICATE_ENTRY: Code = Code::new("W060");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const DICTIONARY_LOADED: Code = Code::new("I010");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const ANALYSIS_COMPLETE: Code = Code::new("I030");
    pub const GENERATION_COMPLETE: Code = Code::new("I040");
}

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

const METADATA: &[ErrorMetadata] = &[
    ErrorMetadata::new("ERR001", "System", Severity::Critical, true, "Critical internal error"),
    ErrorMetadata::new("ERR002", "System", Severity::Critical, true, "Initialization failed"),
    ErrorMetadata::new("E005", "Source", Severity::High, true, "Source file not found"),
    ErrorMetadata::new("E006", "Source", Severity::Medium, true, "No dictionary for this file type"),
    ErrorMetadata::new("E007", "Source", Severity::High, true, "Source file exceeds size limit"),
    ErrorMetadata::new("E010", "Source", Severity::High, true, "Source file is not valid UTF-8"),
    ErrorMetadata::new("E011", "Source", Severity::High, true, "I/O error while reading source"),
    ErrorMetadata::new("E012", "Source", Severity::Medium, false, "Line and column fall outside the source"),
    ErrorMetadata::new("E020", "Lexical", Severity::High, true, "Input buffer exceeds size limit"),
    ErrorMetadata::new("E027", "Lexical", Severity::High, true, "Token count limit exceeded"),
    ErrorMetadata::new("E029", "Lexical", Severity::Critical, true, "Token pattern failed to compile"),
    ErrorMetadata::new("E060", "Dictionary", Severity::Critical, true, "Dictionary entry has an empty token"),
    ErrorMetadata::new("E061", "Dictionary", Severity::Critical, true, "Dictionary token contains whitespace"),
    ErrorMetadata::new("E062", "Dictionary", Severity::Critical, true, "Dictionary entry has no description"),
    ErrorMetadata::new("E063", "Dictionary", Severity::Critical, true, "Dictionary entry uses the reserved identifier category"),
    ErrorMetadata::new("E064", "Dictionary", Severity::Critical, true, "Dictionary exceeds entry limit"),
    ErrorMetadata::new("E065", "Dictionary", Severity::Critical, true, "Dictionary description exceeds length limit"),
    ErrorMetadata::new("E066", "Dictionary", Severity::Critical, true, "Dictionary JSON is malformed"),
    ErrorMetadata::new("E070", "Dictionary", Severity::Critical, true, "Example code fence is never closed"),
    ErrorMetadata::new("W060", "Dictionary", Severity::Low, false, "Later dictionary entry replaced an earlier one"),
    ErrorMetadata::new("I010", "Dictionary", Severity::Low, false, "Dictionary loaded"),
    ErrorMetadata::new("I020", "Lexical", Severity::Low, false, "Tokenization complete"),
    ErrorMetadata::new("I030", "Analysis", Severity::Low, false, "Analysis pass complete"),
    ErrorMetadata::new("I040", "Generator", Severity::Low, false, "Dictionary files generated"),
];

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| METADATA.iter().map(|m| (m.code, m.clone())).collect())
}

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_declared_code_has_metadata() {
        let declared = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            source::FILE_NOT_FOUND,
            source::UNSUPPORTED_LANGUAGE,
            source::FILE_TOO_LARGE,
            source::INVALID_ENCODING,
            source::IO_ERROR,
            source::POSITION_OUT_OF_RANGE,
            lexical::INPUT_TOO_LARGE,
            lexical::TOO_MANY_TOKENS,
            lexical::INVALID_PATTERN,
            dictionary::EMPTY_TOKEN,
            dictionary::WHITESPACE_IN_TOKEN,
            dictionary::MISSING_DESCRIPTION,
            dictionary::RESERVED_CATEGORY,
            dictionary::TOO_MANY_ENTRIES,
            dictionary::DESCRIPTION_TOO_LONG,
            dictionary::INVALID_JSON,
            dictionary::UNTERMINATED_EXAMPLE,
            dictionary::DUPLICATE_ENTRY,
            success::DICTIONARY_LOADED,
            success::TOKENIZATION_COMPLETE,
            success::ANALYSIS_COMPLETE,
            success::GENERATION_COMPLETE,
        ];

        for code in declared {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("X999"), "Unknown error");
        assert_eq!(get_category("X999"), "Unknown");
        assert_eq!(get_severity("X999"), Severity::Medium);
        assert!(!requires_halt("X999"));
    }

    #[test]
    fn test_dictionary_errors_halt() {
        assert!(requires_halt(dictionary::MISSING_DESCRIPTION.as_str()));
        assert!(!requires_halt(dictionary::DUPLICATE_ENTRY.as_str()));
        assert_eq!(get_category(lexical::TOO_MANY_TOKENS.as_str()), "Lexical");
    }
}
