//! Editable filter implementation.

use serde_json::Value;

use super::Filter;

/// Keeps the items whose `editable` field is not explicitly `false`.
#[derive(Debug, Default)]
pub struct EditableFilter;

impl EditableFilter {
    /// Create a new EditableFilter.
    pub fn new() -> Self {
        Self
    }

    /// Whether an item may be edited. Missing field means editable.
    pub fn is_editable(item: &Value) -> bool {
        !matches!(item.get("editable"), Some(Value::Bool(false)))
    }
}

impl Filter for EditableFilter {
    fn name(&self) -> &'static str {
        "editable"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["editable-filter"]
    }

    fn apply(&self, input: Option<&Value>, _args: &[Value]) -> Option<Value> {
        let kept: Vec<Value> = match input {
            Some(Value::Array(items)) => items
                .iter()
                .filter(|item| Self::is_editable(item))
                .cloned()
                .collect(),
            Some(Value::Object(map)) => map
                .values()
                .filter(|item| Self::is_editable(item))
                .cloned()
                .collect(),
            _ => Vec::new(),
        };
        Some(Value::Array(kept))
    }
}
