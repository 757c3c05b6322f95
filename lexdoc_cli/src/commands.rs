//! Subcommand implementations
//!
//! Each command returns the text it wants printed so the dispatch in
//! `main` stays the only place that writes to stdout.

use crate::cli::OutputFormat;
use crate::error::CliError;
use lexdoc_analyzer::analysis::CategoryGroup;
use lexdoc_analyzer::config::AnalyzerPreferences;
use lexdoc_analyzer::dictionary::{document_title, generate};
use lexdoc_analyzer::render::{hover_markdown, render_document_html, render_groups, render_listing};
use lexdoc_analyzer::{
    classify, log_info, Analyzer, Category, DictionaryStore, Language, SourceFile, TokenMatch,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

const FALLBACK_TITLE: &str = "Language Reference";

/// Shared state for every command
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub preferences: AnalyzerPreferences,
}

#[derive(Debug, Serialize)]
struct AnalyzeReport<'a> {
    file: String,
    language: Language,
    status: String,
    matches: &'a [TokenMatch],
    counts: BTreeMap<Category, usize>,
    groups: Vec<CategoryGroup>,
}

/// Embedded dictionary for `language`, or one loaded from `.json`/markdown
pub fn load_store(language: Language, dictionary: Option<&Path>) -> Result<DictionaryStore, CliError> {
    let Some(path) = dictionary else {
        return Ok(DictionaryStore::builtin(language)?);
    };

    let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let store = if is_json(path) {
        DictionaryStore::from_json(&content)?
    } else {
        DictionaryStore::from_markdown(&content)?
    };
    log_info!("Loaded user dictionary",
        "file" => path.display(),
        "entries" => store.len()
    );
    Ok(store)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

pub fn build_analyzer(language: Language, dictionary: Option<&Path>) -> Result<Analyzer, CliError> {
    let store = load_store(language, dictionary)?;
    Ok(Analyzer::new(Arc::new(store))?)
}

pub fn analyze(
    ctx: &Context,
    file: &Path,
    language: Option<Language>,
    dictionary: Option<&Path>,
    format: OutputFormat,
    groups: bool,
) -> Result<String, CliError> {
    let source = SourceFile::load(file)?;
    let language = source.resolve_language(language)?;
    let analyzer = build_analyzer(language, dictionary)?;
    let analysis = analyzer.analyze(source.text())?;
    let include_identifiers = ctx.preferences.group_identifiers;

    match format {
        OutputFormat::Json => {
            let report = AnalyzeReport {
                file: file.display().to_string(),
                language,
                status: analysis.status().to_string(),
                matches: analysis.matches(),
                counts: analysis.counts(),
                groups: analysis.groups(include_identifiers),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Text if groups => {
            let mut out = render_groups(&analysis.groups(include_identifiers));
            out.push_str(&analysis.status().to_string());
            Ok(out)
        }
        OutputFormat::Text => {
            let mut out = render_listing(&analysis, source.source_map());
            out.push_str(&analysis.status().to_string());
            Ok(out)
        }
    }
}

pub fn hover(
    ctx: &Context,
    file: &Path,
    line: u32,
    column: u32,
    language: Option<Language>,
    dictionary: Option<&Path>,
    format: OutputFormat,
) -> Result<String, CliError> {
    let source = SourceFile::load(file)?;
    let language = source.resolve_language(language)?;
    let offset = source
        .source_map()
        .offset_at(line, column)
        .ok_or_else(|| CliError::PositionOutOfRange {
            path: file.display().to_string(),
            line,
            column,
        })?;

    let analyzer = build_analyzer(language, dictionary)?;
    let hover = analyzer.hover(source.text(), offset)?;

    match (format, hover) {
        (OutputFormat::Json, hover) => Ok(serde_json::to_string_pretty(&hover)?),
        (OutputFormat::Text, Some(hover)) => Ok(hover_markdown(
            &hover,
            language,
            ctx.preferences.include_examples_in_hover,
        )),
        (OutputFormat::Text, None) => {
            let map = source.source_map();
            Ok(format!(
                "No token at {}:{}\n{}",
                line,
                column,
                map.excerpt(&map.span(offset, offset + 1))
            ))
        }
    }
}

pub fn lookup(
    ctx: &Context,
    token: &str,
    language: Language,
    dictionary: Option<&Path>,
) -> Result<String, CliError> {
    let store = load_store(language, dictionary)?;
    let found = classify(token, &store);

    let mut out = format!("{} ({})\n\n{}", token, found.category, found.description);
    if ctx.preferences.include_examples_in_hover {
        if let Some(example) = found.example {
            out.push_str("\n\n");
            out.push_str(example);
        }
    }
    Ok(out)
}

pub fn generate_files(
    source: &Path,
    out_dir: &Path,
    title: Option<&str>,
    definitions_out: &str,
    dictionary_out: &str,
) -> Result<String, CliError> {
    let content = fs::read_to_string(source).map_err(|e| CliError::io(source, e))?;
    let title = title
        .map(str::to_string)
        .or_else(|| document_title(&content))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    let generated = generate(&content, &title)?;
    let (definitions, document) = generated.write(out_dir, definitions_out, dictionary_out)?;

    Ok(format!(
        "Wrote {} definitions to {}\nWrote \"{}\" to {}",
        generated.definitions.len(),
        definitions.display(),
        title,
        document.display()
    ))
}

pub fn docs(
    language: Language,
    dictionary: Option<&Path>,
    output: Option<&Path>,
) -> Result<String, CliError> {
    let store = load_store(language, dictionary)?;
    let title = match dictionary {
        Some(path) if !is_json(path) => fs::read_to_string(path)
            .ok()
            .and_then(|content| document_title(&content))
            .unwrap_or_else(|| language.reference_title()),
        _ => language.reference_title(),
    };

    let html = render_document_html(&store.document(&title), language.fence_tag());
    match output {
        Some(path) => {
            fs::write(path, html).map_err(|e| CliError::io(path, e))?;
            Ok(format!("Wrote {} entries to {}", store.len(), path.display()))
        }
        None => Ok(html),
    }
}
