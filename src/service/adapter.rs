//! Conversion between CLI text and filter values.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::cli::OutputFormat;

/// Adapter for reading filter input and writing filter output.
pub struct OutputAdapter {
    format: OutputFormat,
}

impl OutputAdapter {
    /// Create a new adapter for the specified output format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Parse stdin text into a filter input. Blank input is undefined.
    pub fn parse_input(&self, input: &str) -> Result<Option<Value>> {
        if input.trim().is_empty() {
            debug!("Empty input, treating value as undefined");
            return Ok(None);
        }
        let value = serde_json::from_str(input).context("Failed to parse input as JSON")?;
        Ok(Some(value))
    }

    /// Parse a command-line argument as JSON, falling back to a string.
    pub fn parse_arg(&self, arg: &str) -> Value {
        serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
    }

    /// Render a filter result. `None` means nothing should be printed.
    pub fn format_output(&self, result: Option<&Value>) -> Result<Option<String>> {
        let Some(value) = result else {
            return Ok(None);
        };
        let text = match (self.format, value) {
            (OutputFormat::Text, Value::String(s)) => s.clone(),
            _ => serde_json::to_string(value)?,
        };
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_input() {
        let adapter = OutputAdapter::new(OutputFormat::Json);
        assert_eq!(adapter.parse_input("").unwrap(), None);
        assert_eq!(adapter.parse_input("  \n").unwrap(), None);
        assert_eq!(adapter.parse_input("[1,2]").unwrap(), Some(json!([1, 2])));
        assert!(adapter.parse_input("{oops").is_err());
    }

    #[test]
    fn test_parse_arg_falls_back_to_string() {
        let adapter = OutputAdapter::new(OutputFormat::Json);
        assert_eq!(adapter.parse_arg("3"), json!(3));
        assert_eq!(adapter.parse_arg("true"), json!(true));
        assert_eq!(adapter.parse_arg("\"ago\""), json!("ago"));
        assert_eq!(adapter.parse_arg("ago"), json!("ago"));
    }

    #[test]
    fn test_format_output() {
        let json_adapter = OutputAdapter::new(OutputFormat::Json);
        let text_adapter = OutputAdapter::new(OutputFormat::Text);
        let value = json!("<b>");

        assert_eq!(
            json_adapter.format_output(Some(&value)).unwrap(),
            Some("\"<b>\"".to_string())
        );
        assert_eq!(
            text_adapter.format_output(Some(&value)).unwrap(),
            Some("<b>".to_string())
        );
        assert_eq!(
            text_adapter.format_output(Some(&json!([1]))).unwrap(),
            Some("[1]".to_string())
        );
        assert_eq!(json_adapter.format_output(None).unwrap(), None);
    }
}
