//! Filter trait definition.

use serde_json::Value;

/// Trait for display filters.
///
/// `input` is `None` when the template value is undefined; a `None` result
/// means the filter produced no defined value.
pub trait Filter: Send + Sync {
    /// Name the filter is registered under.
    fn name(&self) -> &'static str;

    /// Alternative names that resolve to this filter.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Apply the filter to a value and its arguments.
    fn apply(&self, input: Option<&Value>, args: &[Value]) -> Option<Value>;
}
