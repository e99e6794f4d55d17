//! Domain layer containing the display filters.
//!
//! This module contains:
//! - Filter trait, built-in filters and the registry
//! - Query sets used by the pinned-query filter
//! - Loose value coercions shared by the filters
//! - Logger with rotation

mod error;
pub mod filters;
pub mod logger;
mod query;
pub mod value;

pub use error::FilterError;
pub use filters::{Filter, FilterRegistry};
pub use query::{QuerySource, QueryStore};
