//! Static HTML reference page

use crate::dictionary::{DictionaryDocument, DocumentSection};
use std::fmt::Write;

const STYLE: &str = "body{font-family:sans-serif;max-width:60em;margin:auto;padding:1em}\
h2{border-bottom:1px solid #ccc}\
.entry{margin:1em 0}\
.category{color:#666;font-size:0.9em}\
pre{background:#f5f5f5;padding:0.5em;overflow-x:auto}";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a reference document as a standalone page.
///
/// `fence_tag` names the language class on example blocks.
pub fn render_document_html(document: &DictionaryDocument, fence_tag: &str) -> String {
    let title = escape_html(&document.title);
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{}</title>", title);
    let _ = writeln!(out, "<style>{}</style>", STYLE);
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<h1>{}</h1>", title);

    for section in &document.sections {
        render_section(&mut out, section, fence_tag);
    }

    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

fn render_section(out: &mut String, section: &DocumentSection, fence_tag: &str) {
    let _ = writeln!(out, "<section>");
    let _ = writeln!(
        out,
        "<h2>{} <small>({})</small></h2>",
        escape_html(&section.title),
        section.entries.len()
    );

    for entry in &section.entries {
        let _ = writeln!(out, "<div class=\"entry\">");
        let _ = writeln!(
            out,
            "<h3><code>{}</code> <span class=\"category\">{}</span></h3>",
            escape_html(&entry.token),
            entry.category
        );
        let _ = writeln!(out, "<p>{}</p>", escape_html(&entry.description));
        if let Some(example) = &entry.example {
            let _ = writeln!(
                out,
                "<pre><code class=\"language-{}\">{}</code></pre>",
                escape_html(fence_tag),
                escape_html(example)
            );
        }
        let _ = writeln!(out, "</div>");
    }

    let _ = writeln!(out, "</section>");
}
