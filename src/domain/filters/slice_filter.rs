//! Slice filter implementation.

use serde_json::Value;

use super::Filter;
use crate::domain::value::to_integer;

/// Takes the `[start, end)` sub-range of an array or string.
#[derive(Debug, Default)]
pub struct SliceFilter;

impl SliceFilter {
    /// Create a new SliceFilter.
    pub fn new() -> Self {
        Self
    }

    /// Resolve slice bounds against a length.
    ///
    /// Negative bounds count from the end; missing start is 0 and missing
    /// end is `len`. The result is clamped and never inverted.
    pub fn bounds(len: usize, start: Option<i64>, end: Option<i64>) -> (usize, usize) {
        let len_i = i64::try_from(len).unwrap_or(i64::MAX);
        let resolve = |index: i64| -> usize {
            let absolute = if index < 0 {
                (len_i + index).max(0)
            } else {
                index.min(len_i)
            };
            usize::try_from(absolute).unwrap_or(0)
        };

        let from = resolve(start.unwrap_or(0));
        let to = resolve(end.unwrap_or(len_i));
        (from, to.max(from))
    }
}

impl Filter for SliceFilter {
    fn name(&self) -> &'static str {
        "slice"
    }

    fn apply(&self, input: Option<&Value>, args: &[Value]) -> Option<Value> {
        let start = to_integer(args.first());
        // An explicit but non-numeric end behaves like 0
        let end = match args.get(1) {
            None => None,
            Some(arg) => Some(to_integer(Some(arg)).unwrap_or(0)),
        };

        match input? {
            Value::Array(items) => {
                let (from, to) = Self::bounds(items.len(), start, end);
                Some(Value::Array(items[from..to].to_vec()))
            }
            Value::String(text) => {
                let units: Vec<u16> = text.encode_utf16().collect();
                let (from, to) = Self::bounds(units.len(), start, end);
                Some(Value::String(String::from_utf16_lossy(&units[from..to])))
            }
            other => Some(other.clone()),
        }
    }
}
