//! Gist id filter implementation.

use regex::Regex;
use serde_json::Value;

use super::Filter;

/// Numeric id, long alphanumeric id, or a gist.github.com URL.
const GIST_PATTERN: &str = r"(\d{5,})|([a-z0-9]{10,})|(gist.github.com(/*.*)/[a-z0-9]{5,}/*$)";

/// Everything up to the last slash.
const PATH_PREFIX_PATTERN: &str = r".*/";

/// Extracts a gist id from free text or a gist URL.
pub struct GistIdFilter {
    gist: Regex,
    path_prefix: Regex,
}

impl GistIdFilter {
    /// Create a new GistIdFilter.
    ///
    /// # Errors
    ///
    /// Returns error if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            gist: Regex::new(GIST_PATTERN)?,
            path_prefix: Regex::new(PATH_PREFIX_PATTERN)?,
        })
    }

    /// Find the gist id in `input`, if any.
    pub fn extract(&self, input: &str) -> Option<String> {
        let found = self.gist.find(input)?;
        Some(self.path_prefix.replace(found.as_str(), "").into_owned())
    }
}

impl Filter for GistIdFilter {
    fn name(&self) -> &'static str {
        "gistid"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["gist-id"]
    }

    fn apply(&self, input: Option<&Value>, _args: &[Value]) -> Option<Value> {
        match input? {
            Value::String(text) => self.extract(text).map(Value::String),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filter() -> GistIdFilter {
        GistIdFilter::new().unwrap()
    }

    #[test]
    fn test_gist_url() {
        assert_eq!(
            filter().apply(Some(&json!("https://gist.github.com/user/abcdef1234")), &[]),
            Some(json!("abcdef1234"))
        );
    }

    #[test]
    fn test_bare_ids() {
        assert_eq!(filter().extract("12345"), Some("12345".to_string()));
        assert_eq!(
            filter().extract("see gist 1234567 here"),
            Some("1234567".to_string())
        );
        assert_eq!(
            filter().extract("abcdef0123456789"),
            Some("abcdef0123456789".to_string())
        );
        // Digits win when the id starts with a numeric run
        assert_eq!(filter().extract("0123456789abcdef"), Some("0123456789".to_string()));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(filter().apply(Some(&json!("short")), &[]), None);
        assert_eq!(filter().extract("1234"), None);
    }

    #[test]
    fn test_undefined_and_non_strings() {
        assert_eq!(filter().apply(None, &[]), None);
        assert_eq!(filter().apply(Some(&json!(1234567)), &[]), None);
    }
}
