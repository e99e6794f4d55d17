//! Filter registry implementation.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::domain::{FilterError, QuerySource};

use super::{
    AutoLinkFilter, EditableFilter, EscapeHtmlFilter, Filter, GistIdFilter, PinnedQueryFilter,
    RelativeTimeFilter, SliceFilter, SortFilter, StackTraceFilter, StringifyFilter,
};

/// Named set of display filters, looked up by name or alias.
pub struct FilterRegistry {
    filters: Vec<Box<dyn Filter>>,
    index: HashMap<&'static str, usize>,
}

impl FilterRegistry {
    /// Create a new FilterRegistry from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if a built-in pattern fails to compile.
    pub fn new(config: &Config, queries: Arc<dyn QuerySource>) -> Result<Self, FilterError> {
        let filters: Vec<Box<dyn Filter>> = vec![
            Box::new(SortFilter::new()),
            Box::new(PinnedQueryFilter::new(queries)),
            Box::new(SliceFilter::new()),
            Box::new(StringifyFilter::new()),
            Box::new(RelativeTimeFilter::new()),
            Box::new(EscapeHtmlFilter::new()),
            Box::new(AutoLinkFilter::new(&config.link_target)?),
            Box::new(StackTraceFilter::new(
                &config.source_route,
                &config.stack_trace_class,
            )?),
            Box::new(EditableFilter::new()),
            Box::new(GistIdFilter::new()?),
        ];

        let mut index = HashMap::new();
        for (i, filter) in filters.iter().enumerate() {
            index.insert(filter.name(), i);
            for alias in filter.aliases() {
                index.insert(*alias, i);
            }
        }

        Ok(Self { filters, index })
    }

    /// Look up a filter by name or alias.
    pub fn get(&self, name: &str) -> Option<&dyn Filter> {
        self.index.get(name).map(|&i| self.filters[i].as_ref())
    }

    /// Apply the named filter to `input`.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::UnknownFilter` if no filter has that name.
    pub fn apply(
        &self,
        name: &str,
        input: Option<&Value>,
        args: &[Value],
    ) -> Result<Option<Value>, FilterError> {
        let filter = self
            .get(name)
            .ok_or_else(|| FilterError::UnknownFilter(name.to_string()))?;
        debug!(filter = filter.name(), args = args.len(), "Applying filter");
        Ok(filter.apply(input, args))
    }

    /// Registered filter names (without aliases), sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.filters.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names
    }
}
