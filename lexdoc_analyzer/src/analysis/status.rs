use crate::dictionary::Category;
use serde::Serialize;
use std::fmt;

/// Short summary for a status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StatusLabel {
    Total { count: usize },
    AtCursor { text: String, category: Category },
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLabel::Total { count: 1 } => write!(f, "1 token"),
            StatusLabel::Total { count } => write!(f, "{} tokens", count),
            StatusLabel::AtCursor { text, category } => write!(f, "{}: {}", category, text),
        }
    }
}
