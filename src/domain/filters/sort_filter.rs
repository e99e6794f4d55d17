//! String sort filter implementation.

use serde_json::Value;

use super::Filter;
use crate::domain::value::{cmp_utf16, to_display_string};

/// Sorts an array ascending by the text of each element.
#[derive(Debug, Default)]
pub struct SortFilter;

impl SortFilter {
    /// Create a new SortFilter.
    pub fn new() -> Self {
        Self
    }

    /// Sort items by their display text, keeping equal items in order.
    pub fn sort(items: &[Value]) -> Vec<Value> {
        let mut keyed: Vec<(String, &Value)> = items
            .iter()
            .map(|item| (to_display_string(Some(item)), item))
            .collect();
        keyed.sort_by(|a, b| cmp_utf16(&a.0, &b.0));
        keyed.into_iter().map(|(_, item)| item.clone()).collect()
    }
}

impl Filter for SortFilter {
    fn name(&self) -> &'static str {
        "stringSort"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["sort"]
    }

    fn apply(&self, input: Option<&Value>, _args: &[Value]) -> Option<Value> {
        match input? {
            Value::Array(items) => Some(Value::Array(Self::sort(items))),
            other => Some(other.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_strings() {
        let filter = SortFilter::new();
        let out = filter.apply(Some(&json!(["pear", "apple", "fig"])), &[]);
        assert_eq!(out, Some(json!(["apple", "fig", "pear"])));
    }

    #[test]
    fn test_sort_numbers_compare_as_text() {
        let filter = SortFilter::new();
        let out = filter.apply(Some(&json!([10, 9, 1, 100])), &[]);
        assert_eq!(out, Some(json!([1, 10, 100, 9])));
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let filter = SortFilter::new();
        let input = json!(["b", 1, "1", "a", null, "B"]);
        let once = filter.apply(Some(&input), &[]).unwrap();
        let twice = filter.apply(Some(&once), &[]).unwrap();
        assert_eq!(once, json!([1, "1", "B", "a", "b", null]));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_passes_through_non_arrays() {
        let filter = SortFilter::new();
        assert_eq!(filter.apply(Some(&json!("zyx")), &[]), Some(json!("zyx")));
        assert_eq!(filter.apply(None, &[]), None);
    }
}
