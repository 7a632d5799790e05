//! Token-stream → styled HTML markup.
//!
//! The renderer tokenizes the SQL text and emits one escaped text node per
//! token, wrapping the styled kinds in `<span style="...">` elements from the
//! active theme's palette. Identifiers and the `Other` catch-all are emitted
//! unwrapped, so plain text dominates the output and the markup stays small.
//!
//! Parameters get live substitution: when the caller supplies a non-empty
//! test value for `:name`, the token renders as `:name → 'value'` in the
//! theme's `parameter_with_value` style, which is how the editing surfaces
//! preview what a bound query will look like.

use crate::highlight::theme::{Style, Theme};
use crate::sql::{TokenKind, tokenize};
use crate::{config, trace};
use std::collections::HashMap;

/// Render `sql` as styled markup, using the configured empty-input
/// placeholder. `values` maps parameter names to test values; entries with
/// empty values are treated as unset.
pub fn render(sql: &str, theme: Theme, values: Option<&HashMap<String, String>>) -> String {
    render_or(sql, theme, values, &config().empty_placeholder)
}

/// Like [`render`], with a caller-supplied placeholder returned verbatim for
/// empty input.
pub fn render_or(
    sql: &str,
    theme: Theme,
    values: Option<&HashMap<String, String>>,
    placeholder: &str,
) -> String {
    if sql.is_empty() {
        return placeholder.to_string();
    }
    trace!(len = sql.len(), %theme, "rendering highlight markup");

    let palette = theme.palette();
    let mut out = String::with_capacity(sql.len() * 2);
    for token in tokenize(sql) {
        match &token.kind {
            TokenKind::Keyword(_) => span(&mut out, &palette.keyword, &escape(&token.text)),
            TokenKind::SingleQuotedString => span(&mut out, &palette.string, &escape(&token.text)),
            TokenKind::DoubleQuotedIdentifier => {
                span(&mut out, &palette.quoted_ident, &escape(&token.text))
            }
            TokenKind::LineComment | TokenKind::BlockComment => {
                span(&mut out, &palette.comment, &escape(&token.text))
            }
            TokenKind::Number => span(&mut out, &palette.number, &escape(&token.text)),
            TokenKind::Parameter(name) => {
                let value = values.and_then(|m| m.get(name)).filter(|v| !v.is_empty());
                match value {
                    Some(value) => {
                        let mut body = escape(&token.text);
                        body.push_str(" → '");
                        body.push_str(&escape(value));
                        body.push('\'');
                        span(&mut out, &palette.parameter_with_value, &body);
                    }
                    None => span(&mut out, &palette.parameter, &escape(&token.text)),
                }
            }
            TokenKind::Ident | TokenKind::Other => out.push_str(&escape(&token.text)),
        }
    }
    out
}

/// Escape the three characters that matter inside an HTML text node.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Append `<span style="...">body</span>`. `body` must already be escaped.
fn span(out: &mut String, style: &Style, body: &str) {
    out.push_str("<span style=\"");
    out.push_str(&style.css());
    out.push_str("\">");
    out.push_str(body);
    out.push_str("</span>");
}
