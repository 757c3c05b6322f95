//! Text renderings of analysis results: hover markdown and plain listings

pub mod html;

pub use html::{escape_html, render_document_html};

use crate::analysis::{Analysis, CategoryGroup, Hover};
use crate::dictionary::Language;
use crate::utils::SourceMap;
use std::fmt::Write;

/// Markdown body for a hover tooltip
pub fn hover_markdown(hover: &Hover, language: Language, include_example: bool) -> String {
    let token = &hover.token;
    let mut out = String::new();
    out.push_str(&format!("**`{}`** *({})*\n\n", token.text, token.category));
    out.push_str(&token.description);

    if include_example {
        if let Some(example) = &token.example {
            out.push_str("\n\n```");
            out.push_str(language.fence_tag());
            out.push('\n');
            out.push_str(example);
            out.push_str("\n```");
        }
    }
    out
}

/// One line per match: `line:col-col  category  text`
pub fn render_listing(analysis: &Analysis, map: &SourceMap) -> String {
    let mut out = String::new();
    for m in analysis.matches() {
        let span = map.span(m.start_offset, m.end_offset);
        let _ = writeln!(out, "{:<12} {:<18} {}", span.to_string(), m.category, m.text);
    }
    out
}

/// Indented tree of category groups with occurrence counts
pub fn render_groups(groups: &[CategoryGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{} ({})", group.label, group.occurrences());
        for token in &group.tokens {
            let _ = writeln!(out, "  {} x{}", token.text, token.count);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{group_matches, TokenMatch};
    use crate::dictionary::Category;

    fn print_match() -> TokenMatch {
        TokenMatch {
            text: "print".to_string(),
            category: Category::BuiltinFunction,
            description: "Print objects".to_string(),
            example: Some("print(1)".to_string()),
            start_offset: 0,
            end_offset: 5,
        }
    }

    #[test]
    fn test_hover_markdown_with_example() {
        let hover = Hover { token: print_match() };
        let md = hover_markdown(&hover, Language::Python, true);
        assert_eq!(
            md,
            "**`print`** *(builtin-function)*\n\nPrint objects\n\n```python\nprint(1)\n```"
        );
    }

    #[test]
    fn test_hover_markdown_without_example() {
        let hover = Hover { token: print_match() };
        let md = hover_markdown(&hover, Language::C, false);
        assert!(!md.contains("```"));
        assert!(md.ends_with("Print objects"));
    }

    #[test]
    fn test_listing_and_groups() {
        let matches = vec![print_match()];
        let analysis = Analysis::new(matches.clone());
        let map = SourceMap::new("print");
        let listing = render_listing(&analysis, &map);
        assert!(listing.starts_with("1:1-6"));
        assert!(listing.contains("builtin-function"));

        let tree = render_groups(&group_matches(&matches, true));
        assert_eq!(tree, "Built-in Functions (1)\n  print x1\n");
    }
}
