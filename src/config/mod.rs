//! Configuration management module.
//!
//! Handles TOML configuration file loading, validation, and default generation.

mod service;
mod types;
mod validation;

pub use service::ConfigService;
pub use types::{Config, DEFAULT_LINK_TARGET, DEFAULT_SOURCE_ROUTE, DEFAULT_STACK_TRACE_CLASS};
pub use validation::validate;
