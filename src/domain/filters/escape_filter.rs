//! HTML escape filter implementation.

use serde_json::Value;

use super::Filter;

/// Escapes markup characters in strings and arrays of strings.
#[derive(Debug, Default)]
pub struct EscapeHtmlFilter;

impl EscapeHtmlFilter {
    /// Create a new EscapeHtmlFilter.
    pub fn new() -> Self {
        Self
    }

    /// Escape `& < > ' "` for safe inclusion in HTML.
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '\'' => escaped.push_str("&#39;"),
                '"' => escaped.push_str("&quot;"),
                other => escaped.push(other),
            }
        }
        escaped
    }
}

fn escape_value(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(EscapeHtmlFilter::escape(text)),
        other => other.clone(),
    }
}

impl Filter for EscapeHtmlFilter {
    fn name(&self) -> &'static str {
        "noXml"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["escape-html"]
    }

    fn apply(&self, input: Option<&Value>, _args: &[Value]) -> Option<Value> {
        match input? {
            Value::Array(items) => Some(Value::Array(items.iter().map(escape_value).collect())),
            other => Some(escape_value(other)),
        }
    }
}
