//! dashfilters: display filters for dashboards
//!
//! Pure transforms that turn template values into display text: sorting,
//! slicing, JSON rendering, relative time, HTML escaping, auto-linking,
//! stack trace formatting, editable-item filtering and gist id extraction.
//! Filters are looked up by name in an explicit [`FilterRegistry`].

pub mod cli;
pub mod config;
pub mod domain;
pub mod service;

pub use domain::{Filter, FilterError, FilterRegistry, QuerySource, QueryStore};
