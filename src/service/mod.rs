//! Service layer wiring the CLI to the filter registry.

mod adapter;
mod filter_service;

pub use adapter::OutputAdapter;
pub use filter_service::{FilterService, ERROR_EXIT_CODE};
