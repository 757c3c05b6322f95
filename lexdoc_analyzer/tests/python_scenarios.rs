use lexdoc_analyzer::analysis::Analyzer;
use lexdoc_analyzer::render::hover_markdown;
use lexdoc_analyzer::utils::SourceMap;
use lexdoc_analyzer::{Category, DictionaryStore, Language, UNKNOWN_TOKEN_DESCRIPTION};
use std::sync::Arc;

fn python_analyzer() -> Analyzer {
    let store = DictionaryStore::builtin(Language::Python).unwrap();
    Analyzer::new(Arc::new(store)).unwrap()
}

fn classified(analyzer: &Analyzer, text: &str) -> Vec<(String, Category)> {
    analyzer
        .analyze(text)
        .unwrap()
        .matches()
        .iter()
        .map(|m| (m.text.clone(), m.category))
        .collect()
}

#[test]
fn test_function_definition_line() {
    let analyzer = python_analyzer();
    let got = classified(&analyzer, "def f(x): return x+1");
    let expected = vec![
        ("def", Category::Keyword),
        ("f", Category::Identifier),
        ("(", Category::Delimiter),
        ("x", Category::Identifier),
        (")", Category::Delimiter),
        (":", Category::Delimiter),
        ("return", Category::Keyword),
        ("x", Category::Identifier),
        ("+", Category::Operator),
        ("1", Category::Identifier),
    ];
    let expected: Vec<(String, Category)> = expected
        .into_iter()
        .map(|(t, c)| (t.to_string(), c))
        .collect();
    assert_eq!(got, expected);
}

#[test]
fn test_double_star_is_two_operators() {
    let analyzer = python_analyzer();
    let analysis = analyzer.analyze("**").unwrap();
    let matches = analysis.matches();
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m.text == "*" && m.category == Category::Operator));
    assert_eq!((matches[0].start_offset, matches[0].end_offset), (0, 1));
    assert_eq!((matches[1].start_offset, matches[1].end_offset), (1, 2));
}

#[test]
fn test_whitespace_only_input() {
    let analyzer = python_analyzer();
    assert!(analyzer.analyze("  ").unwrap().is_empty());
    assert!(analyzer.hover("  ", 1).unwrap().is_none());
}

#[test]
fn test_keyword_prefix_is_not_split() {
    let analyzer = python_analyzer();
    let analysis = analyzer.analyze("classFoo").unwrap();
    assert_eq!(analysis.len(), 1);
    let only = &analysis.matches()[0];
    assert_eq!(only.text, "classFoo");
    assert_eq!(only.category, Category::Identifier);
    assert_eq!(only.description, UNKNOWN_TOKEN_DESCRIPTION);
}

#[test]
fn test_hover_inside_print() {
    let analyzer = python_analyzer();
    let text = "    print(total)\n";
    let map = SourceMap::new(text);
    let offset = map.offset_at(1, 8).unwrap();

    let hover = analyzer.hover(text, offset).unwrap().unwrap();
    let store = analyzer.store();
    let entry = store.lookup("print").unwrap();
    assert_eq!(hover.token.text, "print");
    assert_eq!(hover.token.category, Category::BuiltinFunction);
    assert_eq!(hover.token.description, entry.description);
    assert_eq!(hover.token.example, entry.example);
    assert!(hover.token.example.is_some());
    assert_eq!(hover.range(), (4, 9));

    let markdown = hover_markdown(&hover, Language::Python, true);
    assert!(markdown.contains("```python\n"));
}

#[test]
fn test_spans_rebuild_input() {
    let analyzer = python_analyzer();
    let text = "for i in range(10):\n\tprint(f\"{i}\")  # done\n";
    let analysis = analyzer.analyze(text).unwrap();
    let chars: Vec<char> = text.chars().collect();

    let mut cursor = 0;
    let mut rebuilt = String::new();
    for m in analysis.matches() {
        assert!(m.start_offset >= cursor, "matches overlap or go backwards");
        assert!(m.end_offset > m.start_offset);
        let gap: String = chars[cursor..m.start_offset].iter().collect();
        assert!(gap.chars().all(char::is_whitespace));
        rebuilt.push_str(&gap);
        let covered: String = chars[m.start_offset..m.end_offset].iter().collect();
        assert_eq!(covered, m.text);
        rebuilt.push_str(&m.text);
        cursor = m.end_offset;
    }
    let tail: String = chars[cursor..].iter().collect();
    assert!(tail.chars().all(char::is_whitespace));
    rebuilt.push_str(&tail);
    assert_eq!(rebuilt, text);
}

#[test]
fn test_classification_matches_dictionary() {
    let analyzer = python_analyzer();
    let analysis = analyzer
        .analyze("import os\nwith open(p) as f: raise ValueError(f.read())")
        .unwrap();
    for m in analysis.matches() {
        match analyzer.store().lookup(&m.text) {
            Some(entry) => {
                assert_eq!(m.category, entry.category);
                assert_eq!(m.description, entry.description);
            }
            None => {
                assert_eq!(m.category, Category::Identifier);
                assert_eq!(m.description, UNKNOWN_TOKEN_DESCRIPTION);
            }
        }
    }
}

#[test]
fn test_analysis_is_idempotent() {
    let analyzer = python_analyzer();
    let text = "while True:\n    x = [i ** 2 for i in data]\n";
    assert_eq!(analyzer.analyze(text).unwrap(), analyzer.analyze(text).unwrap());
}

#[test]
fn test_strings_and_comments_are_scanned_as_code() {
    let analyzer = python_analyzer();
    let got = classified(&analyzer, "'if' # return");
    assert_eq!(got[1], ("if".to_string(), Category::Keyword));
    assert_eq!(got[3], ("#".to_string(), Category::Delimiter));
    assert_eq!(got[4], ("return".to_string(), Category::Keyword));
}

#[test]
fn test_groups_for_sidebar() {
    let analyzer = python_analyzer();
    let analysis = analyzer.analyze("print(len(x)); print(x)").unwrap();
    let groups = analysis.groups(false);
    let builtins = groups
        .iter()
        .find(|g| g.category == Category::BuiltinFunction)
        .unwrap();
    let tokens: Vec<(&str, usize)> = builtins
        .tokens
        .iter()
        .map(|t| (t.text.as_str(), t.count))
        .collect();
    assert_eq!(tokens, vec![("print", 2), ("len", 1)]);
    assert!(groups.iter().all(|g| g.category != Category::Identifier));
}

#[test]
fn test_c_dictionary_analysis() {
    let store = DictionaryStore::builtin(Language::C).unwrap();
    let analyzer = Analyzer::new(Arc::new(store)).unwrap();
    let got = classified(&analyzer, "int main(void) { return 0; }");
    assert_eq!(got[0], ("int".to_string(), Category::Keyword));
    assert_eq!(got[1], ("main".to_string(), Category::Identifier));
    assert_eq!(got[3], ("void".to_string(), Category::Keyword));
    assert_eq!(got[8], (";".to_string(), Category::Delimiter));
}
