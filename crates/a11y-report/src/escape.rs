//! Text helpers for embedding scan data in HTML and file names

use a11y_types::{ContextSpec, ElementRef};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref UNSAFE_FILE_CHARS: Regex = Regex::new(r#"[/\\?:*"<>|]"#).unwrap();
}

/// Escape `& < > ' "` to named entities
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replace characters that are not allowed in file names with `_`
pub fn sanitize_file_name(name: &str) -> String {
    UNSAFE_FILE_CHARS.replace_all(name, "_").into_owned()
}

/// Whether a failure-summary line is a "Fix ..." header
pub fn is_fix_header(line: &str) -> bool {
    line.starts_with("Fix")
}

/// Failure summary as HTML paragraphs: `Fix` lines emphasized, other
/// non-blank lines as bullets
pub fn failure_summary_html(summary: &str) -> String {
    summary
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            if is_fix_header(line) {
                format!("<p><strong>{}</strong></p>", escape_html(line))
            } else {
                format!("<p>• {}</p>", escape_html(line))
            }
        })
        .collect()
}

/// Failure summary as plain tooltip text
pub fn failure_summary_text(summary: &str) -> String {
    summary
        .split('\n')
        .map(|line| {
            if is_fix_header(line) {
                line.to_string()
            } else {
                format!("      • {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn element_html(element: &ElementRef) -> String {
    let open_tag = element.outer_html.split('>').next().unwrap_or_default();
    escape_html(&format!(
        "{}>...</{}>",
        open_tag,
        element.tag_name.to_lowercase()
    ))
}

/// Human-readable, HTML-safe description of the analysis scope
pub fn context_html(context: &ContextSpec) -> String {
    match context {
        ContextSpec::Document => "(Entire document)".to_string(),
        ContextSpec::Selector(selector) => escape_html(selector),
        ContextSpec::Element(element) => element_html(element),
        ContextSpec::ElementList(elements) => elements
            .iter()
            .map(element_html)
            .collect::<Vec<_>>()
            .join(", "),
        ContextSpec::IncludeExclude { .. } => {
            let json = serde_json::to_string(context).unwrap_or_default();
            escape_html(&single_quote_json(&json))
        }
    }
}

/// Rewrite JSON string delimiters as single quotes, keeping escaped double
/// quotes inside strings as plain `"`
pub fn single_quote_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut chars = json.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => out.push('"'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            '"' => out.push('\''),
            _ => out.push(c),
        }
    }
    out
}
