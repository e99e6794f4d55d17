//! Auto-link filter implementation.

use regex::Regex;
use serde_json::Value;

use super::Filter;

/// URLs starting with http://, https:// or ftp://
const URL_PATTERN: &str =
    r"(?i)((?-u:\b)(https?|ftp)://[-A-Z0-9+&@#/%?=~_|!:,.;]*[-A-Z0-9+&@#/%=~_|])";

/// Hosts starting with "www." not preceded by '/' (those were linked above)
const WWW_PATTERN: &str = r"(?im)(^|[^/])(www\.\S+((?-u:\b)|$))";

/// Email addresses
const EMAIL_PATTERN: &str = r"(?i)([A-Za-z0-9_]+@[a-zA-Z_]+?\.[a-zA-Z]{2,6})";

/// One regex rewrite applied to the whole text.
struct RewriteStep {
    pattern: Regex,
    replacement: String,
}

impl RewriteStep {
    fn new(pattern: &str, replacement: String) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement,
        })
    }
}

/// Wraps URLs, www hosts and email addresses in anchor markup.
///
/// The steps run in order, each over the output of the previous one.
/// Text is not escaped first and overlapping matches are not merged.
pub struct AutoLinkFilter {
    steps: Vec<RewriteStep>,
}

impl AutoLinkFilter {
    /// Create a new AutoLinkFilter whose web links open in `link_target`.
    ///
    /// # Errors
    ///
    /// Returns error if a link pattern fails to compile.
    pub fn new(link_target: &str) -> Result<Self, regex::Error> {
        let steps = vec![
            RewriteStep::new(
                URL_PATTERN,
                format!(r#"<a href="${{1}}" target="{}">${{1}}</a>"#, link_target),
            )?,
            RewriteStep::new(
                WWW_PATTERN,
                format!(
                    r#"${{1}}<a href="http://${{2}}" target="{}">${{2}}</a>"#,
                    link_target
                ),
            )?,
            RewriteStep::new(EMAIL_PATTERN, r#"<a href="mailto:${1}">${1}</a>"#.to_string())?,
        ];
        Ok(Self { steps })
    }

    /// Run every rewrite step over `text`.
    pub fn link(&self, text: &str) -> String {
        self.steps.iter().fold(text.to_string(), |acc, step| {
            step.pattern
                .replace_all(&acc, step.replacement.as_str())
                .into_owned()
        })
    }

    fn link_value(&self, value: &Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.link(text)),
            other => other.clone(),
        }
    }
}

impl Filter for AutoLinkFilter {
    fn name(&self) -> &'static str {
        "urlLink"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["auto-link"]
    }

    fn apply(&self, input: Option<&Value>, _args: &[Value]) -> Option<Value> {
        match input? {
            Value::Array(items) => Some(Value::Array(
                items.iter().map(|item| self.link_value(item)).collect(),
            )),
            other => Some(self.link_value(other)),
        }
    }
}
