//! Markdown reference parser
//!
//! Reads the hand-authored reference format: section headings (`#`/`##`),
//! `### token` entries with a `**Description**:` paragraph and an optional
//! `**Example**:` fenced block. A `###` heading without a description is a
//! group heading that may refine the category of the entries after it.

use super::category::{Category, Section};
use super::entry::DictionaryEntry;
use crate::logging::codes;
use thiserror::Error;

const DESCRIPTION_MARKER: &str = "**Description**:";
const EXAMPLE_MARKER: &str = "**Example**:";
const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkdownError {
    #[error("Unterminated example block for '{token}' opened at line {line}")]
    UnterminatedExample { token: String, line: usize },
}

impl MarkdownError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            MarkdownError::UnterminatedExample { .. } => codes::dictionary::UNTERMINATED_EXAMPLE,
        }
    }
}

/// Parse a markdown reference into entries in document order.
///
/// Duplicates are kept; `merge_with_precedence` resolves them.
pub fn parse_markdown(source: &str) -> Result<Vec<DictionaryEntry>, MarkdownError> {
    MarkdownParser::new(source).parse()
}

/// Text of the first level-one heading, used as the document title
pub fn document_title(source: &str) -> Option<String> {
    source
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Description plus optional example
type EntryBody = (String, Option<String>);

struct MarkdownParser<'a> {
    lines: Vec<&'a str>,
    section: Option<Section>,
    group: Option<Category>,
}

impl<'a> MarkdownParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            section: None,
            group: None,
        }
    }

    fn parse(mut self) -> Result<Vec<DictionaryEntry>, MarkdownError> {
        let mut entries = Vec::new();
        let mut index = 0;

        while index < self.lines.len() {
            let line = self.lines[index];
            let Some(heading) = item_heading(line) else {
                self.detect_section(line);
                index += 1;
                continue;
            };

            let token = normalize_token(heading);
            let (body, next) = self.read_entry_body(&token, index + 1)?;
            index = next;

            let Some((description, example)) = body else {
                self.apply_group(heading);
                continue;
            };

            let Some(section) = self.section else {
                crate::log_debug!("Skipping entry outside any section", "token" => token);
                continue;
            };

            if token.is_empty() {
                continue;
            }

            let category = self.group.unwrap_or_else(|| section.default_category());
            let mut entry = DictionaryEntry::new(token, category, description);
            if let Some(example) = example {
                entry = entry.with_example(example);
            }
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Update the current section from a top-level heading
    fn detect_section(&mut self, line: &str) {
        let trimmed = line.trim();
        let level = trimmed.chars().take_while(|c| *c == '#').count();
        if level == 0 || level > 2 {
            return;
        }
        if let Some(section) = Section::from_heading(&trimmed[level..]) {
            if self.section != Some(section) {
                self.section = Some(section);
                self.group = None;
            }
        }
    }

    fn apply_group(&mut self, heading: &str) {
        if let Some(category) = self
            .section
            .and_then(|section| section.group_category(heading))
        {
            self.group = Some(category);
        }
    }

    /// Read description and example following an entry heading.
    ///
    /// Returns `None` as the body when no description exists before the next
    /// entry heading, along with the index to resume from.
    fn read_entry_body(
        &mut self,
        token: &str,
        start: usize,
    ) -> Result<(Option<EntryBody>, usize), MarkdownError> {
        let mut index = start;
        let mut description = None;

        while index < self.lines.len() {
            let line = self.lines[index];
            if item_heading(line).is_some() {
                break;
            }
            if let Some(rest) = line.trim_start().strip_prefix(DESCRIPTION_MARKER) {
                description = Some(rest.trim().to_string());
                index += 1;
                break;
            }
            self.detect_section(line);
            index += 1;
        }

        let Some(mut description) = description else {
            return Ok((None, index));
        };

        // Continuation lines
        while index < self.lines.len() {
            let line = self.lines[index];
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(EXAMPLE_MARKER) || is_heading(line) {
                break;
            }
            if description.is_empty() {
                description.push_str(trimmed);
            } else {
                description.push('\n');
                description.push_str(line.trim_end());
            }
            index += 1;
        }

        // Look for an example before the next heading
        while index < self.lines.len() {
            let line = self.lines[index];
            if line.trim_start().starts_with(EXAMPLE_MARKER) || is_heading(line) {
                break;
            }
            index += 1;
        }

        let mut example = None;
        if index < self.lines.len() && self.lines[index].trim_start().starts_with(EXAMPLE_MARKER) {
            index += 1;
            while index < self.lines.len() && self.lines[index].trim().is_empty() {
                index += 1;
            }
            if index < self.lines.len() && self.lines[index].trim_start().starts_with(FENCE) {
                let fence_line = index + 1;
                index += 1;
                let mut body = Vec::new();
                loop {
                    let Some(line) = self.lines.get(index) else {
                        return Err(MarkdownError::UnterminatedExample {
                            token: token.to_string(),
                            line: fence_line,
                        });
                    };
                    index += 1;
                    if line.trim_start().starts_with(FENCE) {
                        break;
                    }
                    body.push(*line);
                }
                example = Some(body.join("\n"));
            }
        }

        Ok((Some((description, example)), index))
    }
}

/// ATX heading: one to six `#` then whitespace or end of line.
/// `#include` and `#` alone as text do not count.
fn is_heading(line: &str) -> bool {
    let trimmed = line.trim_start();
    let level = trimmed.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&level) {
        return false;
    }
    let rest = &trimmed[level..];
    rest.is_empty() || rest.starts_with(char::is_whitespace)
}

/// Text of a `### ` heading, `None` for any other line
fn item_heading(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("###")?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Strip one pair of surrounding backticks
fn normalize_token(heading: &str) -> String {
    let trimmed = heading.trim();
    match trimmed
        .strip_prefix('`')
        .and_then(|inner| inner.strip_suffix('`'))
    {
        Some(inner) if !inner.is_empty() && !inner.contains('`') => inner.to_string(),
        _ => trimmed.to_string(),
    }
}
