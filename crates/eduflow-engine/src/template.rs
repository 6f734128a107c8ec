//! `{placeholder}` rendering over a workflow context
//!
//! Placeholders resolve in this order: stage-local values (`grade`,
//! `language`, `response`, `count`), built-in context variables, then
//! metadata keys. `{excerpt:key}` renders a metadata entry truncated to
//! [`EXCERPT_CHARS`] characters per item. Anything unresolved renders as
//! the empty string. Substituted values are never re-scanned.

use crate::context::WorkflowContext;
use crate::prompts::educator_profile;
use eduflow_core::Metadata;
use serde_json::Value;

/// Variables computed from the context itself.
pub const BUILTINS: &[&str] = &[
    "agent_name",
    "prompt",
    "grades",
    "languages",
    "content_source",
    "content_source_upper",
    "grade_count",
    "language_count",
    "multi_grade",
    "educator_profile",
    "metadata",
];

/// Variables a stage supplies while rendering.
pub const LOCALS: &[&str] = &["grade", "language", "response", "count"];

pub const EXCERPT_CHARS: usize = 200;

const EXCERPT_PREFIX: &str = "excerpt:";

enum Segment<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

fn is_placeholder(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) if is_placeholder(&after[..end]) => {
                if start > 0 {
                    out.push(Segment::Text(&rest[..start]));
                }
                out.push(Segment::Placeholder(&after[..end]));
                rest = &after[end + 1..];
            }
            _ => {
                out.push(Segment::Text(&rest[..=start]));
                rest = after;
            }
        }
    }
    if !rest.is_empty() {
        out.push(Segment::Text(rest));
    }
    out
}

/// Render `template` against `ctx` plus stage-local values.
pub fn render(template: &str, ctx: &WorkflowContext, locals: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Text(t) => out.push_str(t),
            Segment::Placeholder(name) => out.push_str(&resolve(name, ctx, locals)),
        }
    }
    out
}

fn resolve(name: &str, ctx: &WorkflowContext, locals: &[(&str, &str)]) -> String {
    if let Some((_, value)) = locals.iter().find(|(k, _)| *k == name) {
        return value.to_string();
    }
    match name {
        "agent_name" => ctx.agent_name().to_string(),
        "prompt" => ctx.prompt.clone(),
        "grades" => ctx.grades_display(),
        "languages" => ctx.languages_display(),
        "content_source" => ctx.content_source.as_str().to_string(),
        "content_source_upper" => ctx.content_source.as_str().to_uppercase(),
        "grade_count" => ctx.grades.len().to_string(),
        "language_count" => ctx.languages.len().to_string(),
        "multi_grade" => (if ctx.is_multi_grade() { "Yes" } else { "No" }).to_string(),
        "educator_profile" => educator_profile(ctx.content_source).to_string(),
        "metadata" => render_map(ctx.metadata()),
        _ => match name.strip_prefix(EXCERPT_PREFIX) {
            Some(key) => ctx.get(key).map(excerpt).unwrap_or_default(),
            None => ctx.get(name).map(render_value).unwrap_or_default(),
        },
    }
}

/// Metadata keys a template depends on.
pub fn referenced_keys(template: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for segment in segments(template) {
        let Segment::Placeholder(name) = segment else {
            continue;
        };
        let key = name.strip_prefix(EXCERPT_PREFIX).unwrap_or(name);
        if BUILTINS.contains(&key) || LOCALS.contains(&key) {
            continue;
        }
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    keys
}

/// Textual form of a metadata value. Maps render as `key: value` lines.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Object(map) => render_map(map),
        other => render_inline(other),
    }
}

fn render_inline(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(render_inline)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

fn render_map(map: &Metadata) -> String {
    map.iter()
        .map(|(k, v)| format!("{}: {}", k, render_inline(v)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

fn excerpt(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, truncate(&render_inline(v))))
            .collect::<Vec<_>>()
            .join("\n"),
        other => truncate(&render_inline(other)),
    }
}
