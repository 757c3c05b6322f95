//! Closed token categories and the documentation sections they belong to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification label attached to a dictionary entry or token match.
///
/// `Identifier` is reserved for dictionary misses and is rejected when
/// loading entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Keyword,
    BuiltinConstant,
    #[serde(alias = "builtin")]
    BuiltinFunction,
    BuiltinType,
    ExceptionType,
    WarningType,
    Operator,
    Delimiter,
    Identifier,
}

/// The coarse labels used by the editor views (keyword/builtin/operator/identifier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoarseKind {
    Keyword,
    Builtin,
    Operator,
    Identifier,
}

impl CoarseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoarseKind::Keyword => "keyword",
            CoarseKind::Builtin => "builtin",
            CoarseKind::Operator => "operator",
            CoarseKind::Identifier => "identifier",
        }
    }

    /// Merge precedence when one token appears in several sections
    pub fn precedence(&self) -> u8 {
        match self {
            CoarseKind::Keyword => 3,
            CoarseKind::Operator => 2,
            CoarseKind::Builtin => 1,
            CoarseKind::Identifier => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Keyword,
        Category::BuiltinConstant,
        Category::BuiltinFunction,
        Category::BuiltinType,
        Category::ExceptionType,
        Category::WarningType,
        Category::Operator,
        Category::Delimiter,
        Category::Identifier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::BuiltinConstant => "builtin-constant",
            Category::BuiltinFunction => "builtin-function",
            Category::BuiltinType => "builtin-type",
            Category::ExceptionType => "exception-type",
            Category::WarningType => "warning-type",
            Category::Operator => "operator",
            Category::Delimiter => "delimiter",
            Category::Identifier => "identifier",
        }
    }

    /// Plural label for grouped views
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Keyword => "Keywords",
            Category::BuiltinConstant => "Built-in Constants",
            Category::BuiltinFunction => "Built-in Functions",
            Category::BuiltinType => "Built-in Types",
            Category::ExceptionType => "Exceptions",
            Category::WarningType => "Warnings",
            Category::Operator => "Operators",
            Category::Delimiter => "Delimiters",
            Category::Identifier => "Identifiers",
        }
    }

    pub fn coarse(&self) -> CoarseKind {
        match self {
            Category::Keyword => CoarseKind::Keyword,
            Category::BuiltinConstant
            | Category::BuiltinFunction
            | Category::BuiltinType
            | Category::ExceptionType
            | Category::WarningType => CoarseKind::Builtin,
            Category::Operator | Category::Delimiter => CoarseKind::Operator,
            Category::Identifier => CoarseKind::Identifier,
        }
    }

    /// Documentation section, `None` for identifiers
    pub fn section(&self) -> Option<Section> {
        match self.coarse() {
            CoarseKind::Keyword => Some(Section::Keywords),
            CoarseKind::Builtin => Some(Section::Builtins),
            CoarseKind::Operator => Some(Section::OperatorsAndDelimiters),
            CoarseKind::Identifier => None,
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Category::Identifier)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the kebab-case names plus the legacy `builtin` label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "builtin" {
            return Ok(Category::BuiltinFunction);
        }
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == trimmed)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Top-level sections of a reference dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Keywords,
    Builtins,
    OperatorsAndDelimiters,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Keywords,
        Section::Builtins,
        Section::OperatorsAndDelimiters,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Keywords => "Keywords",
            Section::Builtins => "Builtins",
            Section::OperatorsAndDelimiters => "Operators & Delimiters",
        }
    }

    /// Category assigned to entries before any group heading refines it
    pub fn default_category(&self) -> Category {
        match self {
            Section::Keywords => Category::Keyword,
            Section::Builtins => Category::BuiltinFunction,
            Section::OperatorsAndDelimiters => Category::Operator,
        }
    }

    /// Recognize a section from heading text such as "Python Builtins"
    pub fn from_heading(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        if lower.contains("keywords") {
            Some(Section::Keywords)
        } else if lower.contains("builtins") || lower.contains("built-ins") {
            Some(Section::Builtins)
        } else if lower.contains("operators") {
            Some(Section::OperatorsAndDelimiters)
        } else {
            None
        }
    }

    /// Category named by a group heading inside this section
    pub fn group_category(&self, group: &str) -> Option<Category> {
        let lower = group.to_lowercase();
        match self {
            Section::Keywords => None,
            Section::Builtins => {
                if lower.contains("warning") {
                    Some(Category::WarningType)
                } else if lower.contains("exception") {
                    Some(Category::ExceptionType)
                } else if lower.contains("constant") {
                    Some(Category::BuiltinConstant)
                } else if lower.contains("function") {
                    Some(Category::BuiltinFunction)
                } else if lower.contains("type") || lower.contains("class") {
                    Some(Category::BuiltinType)
                } else {
                    None
                }
            }
            Section::OperatorsAndDelimiters => {
                if lower.contains("delimiter") {
                    Some(Category::Delimiter)
                } else if lower.contains("operator") {
                    Some(Category::Operator)
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_legacy_builtin_label() {
        assert_eq!("builtin".parse::<Category>().unwrap(), Category::BuiltinFunction);
        let parsed: Category = serde_json::from_str("\"builtin\"").unwrap();
        assert_eq!(parsed, Category::BuiltinFunction);
    }

    #[test]
    fn test_unknown_category() {
        let err = "statement".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("statement".to_string()));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Category::ExceptionType).unwrap();
        assert_eq!(json, "\"exception-type\"");
    }

    #[test]
    fn test_coarse_mapping_and_precedence() {
        assert_eq!(Category::Delimiter.coarse(), CoarseKind::Operator);
        assert_eq!(Category::WarningType.coarse(), CoarseKind::Builtin);
        assert!(CoarseKind::Keyword.precedence() > CoarseKind::Operator.precedence());
        assert!(CoarseKind::Operator.precedence() > CoarseKind::Builtin.precedence());
        assert_eq!(Category::Identifier.section(), None);
    }

    #[test]
    fn test_section_headings() {
        assert_eq!(Section::from_heading("Python Builtins"), Some(Section::Builtins));
        assert_eq!(Section::from_heading("C Keywords"), Some(Section::Keywords));
        assert_eq!(
            Section::from_heading("Operators & Delimiters"),
            Some(Section::OperatorsAndDelimiters)
        );
        assert_eq!(Section::from_heading("Python Language Reference"), None);
    }

    #[test]
    fn test_group_headings() {
        assert_eq!(
            Section::Builtins.group_category("Built-in Exceptions"),
            Some(Category::ExceptionType)
        );
        assert_eq!(Section::Builtins.group_category("Types"), Some(Category::BuiltinType));
        assert_eq!(Section::Builtins.group_category("Iteration"), None);
        assert_eq!(
            Section::OperatorsAndDelimiters.group_category("Delimiters"),
            Some(Category::Delimiter)
        );
        assert_eq!(Section::Keywords.group_category("Functions"), None);
    }
}
