//! Query sets consulted by the pinned-query filter.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::FilterError;

/// Source of dashboard queries, keyed by id.
pub trait QuerySource: Send + Sync {
    /// All query ids in display order.
    fn ids(&self) -> Vec<String>;

    /// Look up the record for a query id.
    fn get(&self, id: &str) -> Option<&Value>;
}

/// In-memory query set.
#[derive(Debug, Clone, Default)]
pub struct QueryStore {
    ids: Vec<String>,
    list: HashMap<String, Value>,
}

/// On-disk layout: `{"ids": [...], "list": {"<id>": {...}}}`.
#[derive(Debug, Deserialize)]
struct QueryFile {
    #[serde(default)]
    ids: Option<Vec<Value>>,
    #[serde(default)]
    list: Map<String, Value>,
}

impl QueryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query record; the id is appended to the display order if new.
    pub fn insert(&mut self, id: impl Into<String>, record: Value) {
        let id = id.into();
        if !self.list.contains_key(&id) {
            self.ids.push(id.clone());
        }
        self.list.insert(id, record);
    }

    /// Parse a query set from JSON text.
    ///
    /// When `ids` is absent, the order of keys in `list` is used. Numeric ids
    /// are accepted and stored as their decimal text.
    pub fn from_json(content: &str) -> Result<Self, FilterError> {
        let file: QueryFile = serde_json::from_str(content)?;

        let ids = match file.ids {
            Some(ids) => ids
                .into_iter()
                .map(|id| match id {
                    Value::String(s) => Ok(s),
                    Value::Number(n) => Ok(n.to_string()),
                    other => Err(FilterError::Config(format!(
                        "query id must be a string or number, got {}",
                        other
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => file.list.keys().cloned().collect(),
        };

        Ok(Self {
            ids,
            list: file.list.into_iter().collect(),
        })
    }

    /// Load a query set from a JSON file.
    pub fn load(path: &Path) -> Result<Self, FilterError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl QuerySource for QueryStore {
    fn ids(&self) -> Vec<String> {
        self.ids.clone()
    }

    fn get(&self, id: &str) -> Option<&Value> {
        self.list.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_keeps_order() {
        let mut store = QueryStore::new();
        store.insert("2", json!({"query": "b"}));
        store.insert("1", json!({"query": "a"}));
        store.insert("2", json!({"query": "c"}));

        assert_eq!(store.ids(), vec!["2", "1"]);
        assert_eq!(store.get("2"), Some(&json!({"query": "c"})));
    }

    #[test]
    fn test_from_json_with_ids() {
        let store = QueryStore::from_json(
            r#"{"ids": [1, "0"], "list": {"0": {"pin": true}, "1": {"pin": false}}}"#,
        )
        .unwrap();
        assert_eq!(store.ids(), vec!["1", "0"]);
        assert_eq!(store.get("0"), Some(&json!({"pin": true})));
    }

    #[test]
    fn test_from_json_defaults_ids_to_list_order() {
        let store =
            QueryStore::from_json(r#"{"list": {"b": {}, "a": {"pin": true}}}"#).unwrap();
        assert_eq!(store.ids(), vec!["b", "a"]);
    }

    #[test]
    fn test_from_json_rejects_bad_ids() {
        let err = QueryStore::from_json(r#"{"ids": [{"x": 1}], "list": {}}"#).unwrap_err();
        assert!(matches!(err, FilterError::Config(_)));
    }
}
