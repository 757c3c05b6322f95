use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const PYTHON_REFERENCE: &str = include_str!("../../dictionaries/python.md");
const C_REFERENCE: &str = include_str!("../../dictionaries/c.md");

/// Languages with an embedded reference dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    C,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Python, Language::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::C => "c",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::C => "C",
        }
    }

    /// Tag used on fenced code blocks
    pub fn fence_tag(&self) -> &'static str {
        self.as_str()
    }

    pub fn reference_title(&self) -> String {
        format!("{} Language Reference", self.display_name())
    }

    /// Embedded markdown reference
    pub fn reference_source(&self) -> &'static str {
        match self {
            Language::Python => PYTHON_REFERENCE,
            Language::C => C_REFERENCE,
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "py" | "pyi" | "pyw" => Some(Language::Python),
            "c" | "h" => Some(Language::C),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "c" => Ok(Language::C),
            other => Err(format!("Unsupported language: '{}'", other)),
        }
    }
}
