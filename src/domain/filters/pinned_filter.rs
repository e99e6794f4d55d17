//! Pinned query filter implementation.

use std::sync::Arc;

use serde_json::Value;

use super::Filter;
use crate::domain::QuerySource;

/// Lists the ids of queries whose pin state matches the requested one.
///
/// The input value is ignored; queries come from the configured source.
pub struct PinnedQueryFilter {
    queries: Arc<dyn QuerySource>,
}

impl PinnedQueryFilter {
    /// Create a new PinnedQueryFilter over a query source.
    pub fn new(queries: Arc<dyn QuerySource>) -> Self {
        Self { queries }
    }

    /// Ids whose record is pinned (`pinned == true`) or unpinned.
    ///
    /// A record without `pin` counts as unpinned. Any `pin` value other than
    /// a boolean matches neither side.
    pub fn matching_ids(&self, pinned: bool) -> Vec<String> {
        self.queries
            .ids()
            .into_iter()
            .filter(|id| {
                let Some(record) = self.queries.get(id) else {
                    return false;
                };
                match record.get("pin") {
                    Some(Value::Bool(true)) => pinned,
                    None | Some(Value::Bool(false)) => !pinned,
                    Some(_) => false,
                }
            })
            .collect()
    }
}

impl Filter for PinnedQueryFilter {
    fn name(&self) -> &'static str {
        "pinnedQuery"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["pinned"]
    }

    // Without a boolean flag no record can match either side.
    fn apply(&self, _input: Option<&Value>, args: &[Value]) -> Option<Value> {
        let ids = match args.first() {
            Some(Value::Bool(pinned)) => self
                .matching_ids(*pinned)
                .into_iter()
                .map(Value::String)
                .collect(),
            _ => Vec::new(),
        };
        Some(Value::Array(ids))
    }
}
