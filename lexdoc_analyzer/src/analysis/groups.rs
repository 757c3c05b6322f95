//! Grouping of matches by category for tree-style views

use super::TokenMatch;
use crate::dictionary::Category;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedToken {
    pub text: String,
    pub description: String,
    pub count: usize,
    pub first_offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub label: &'static str,
    pub tokens: Vec<GroupedToken>,
}

impl CategoryGroup {
    /// Total occurrences across all tokens in the group
    pub fn occurrences(&self) -> usize {
        self.tokens.iter().map(|t| t.count).sum()
    }
}

/// Unique tokens per category, categories in declaration order and tokens
/// in order of first appearance
pub fn group_matches(matches: &[TokenMatch], include_identifiers: bool) -> Vec<CategoryGroup> {
    let mut buckets: BTreeMap<Category, (Vec<GroupedToken>, HashMap<&str, usize>)> =
        BTreeMap::new();

    for m in matches {
        if m.category.is_identifier() && !include_identifiers {
            continue;
        }
        let (tokens, seen) = buckets.entry(m.category).or_default();
        match seen.get(m.text.as_str()) {
            Some(&index) => tokens[index].count += 1,
            None => {
                seen.insert(m.text.as_str(), tokens.len());
                tokens.push(GroupedToken {
                    text: m.text.clone(),
                    description: m.description.clone(),
                    count: 1,
                    first_offset: m.start_offset,
                });
            }
        }
    }

    buckets
        .into_iter()
        .map(|(category, (tokens, _))| CategoryGroup {
            category,
            label: category.display_name(),
            tokens,
        })
        .collect()
}
