//! Display filters and the registry that names them.

mod auto_link_filter;
mod editable_filter;
mod escape_filter;
mod filter_trait;
mod gist_filter;
mod pinned_filter;
mod registry;
mod relative_time_filter;
mod slice_filter;
mod sort_filter;
mod stack_trace_filter;
mod stringify_filter;

pub use auto_link_filter::AutoLinkFilter;
pub use editable_filter::EditableFilter;
pub use escape_filter::EscapeHtmlFilter;
pub use filter_trait::Filter;
pub use gist_filter::GistIdFilter;
pub use pinned_filter::PinnedQueryFilter;
pub use registry::FilterRegistry;
pub use relative_time_filter::{parse_date, RelativeTimeFilter, INVALID_DATE};
pub use slice_filter::SliceFilter;
pub use sort_filter::SortFilter;
pub use stack_trace_filter::{StackFrame, StackTraceFilter};
pub use stringify_filter::StringifyFilter;
