//! Stringify filter implementation.

use serde_json::{Map, Value};

use super::Filter;
use crate::domain::value::to_display_string;

/// Renders objects as JSON text and everything else as display text.
#[derive(Debug, Default)]
pub struct StringifyFilter;

impl StringifyFilter {
    /// Create a new StringifyFilter.
    pub fn new() -> Self {
        Self
    }

    /// Compact JSON for an object, without `$$`-prefixed bookkeeping keys.
    pub fn to_json(object: &Map<String, Value>) -> String {
        Value::Object(strip_internal_keys(object)).to_string()
    }
}

fn strip_internal_keys(object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .filter(|(key, _)| !key.starts_with("$$"))
        .map(|(key, value)| (key.clone(), strip_value(value)))
        .collect()
}

fn strip_value(value: &Value) -> Value {
    match value {
        Value::Object(object) => Value::Object(strip_internal_keys(object)),
        Value::Array(items) => Value::Array(items.iter().map(strip_value).collect()),
        other => other.clone(),
    }
}

impl Filter for StringifyFilter {
    fn name(&self) -> &'static str {
        "stringify"
    }

    fn apply(&self, input: Option<&Value>, _args: &[Value]) -> Option<Value> {
        match input? {
            Value::Object(object) => Some(Value::String(Self::to_json(object))),
            Value::Null => Some(Value::Null),
            other => Some(Value::String(to_display_string(Some(other)))),
        }
    }
}
