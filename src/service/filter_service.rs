//! Filter application service.

use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::domain::{FilterRegistry, QuerySource, QueryStore};
use crate::service::adapter::OutputAdapter;

/// Exit code when the filter cannot run (unknown filter, bad input).
pub const ERROR_EXIT_CODE: i32 = 2;

/// Service for applying filters to stdin values.
pub struct FilterService {
    registry: FilterRegistry,
    adapter: OutputAdapter,
}

impl FilterService {
    /// Create a new FilterService with the specified output format.
    ///
    /// Loads the configured query set, if any.
    pub fn new(config: &Config, format: OutputFormat) -> Result<Self> {
        let queries: Arc<dyn QuerySource> = match &config.queries_file {
            Some(path) => Arc::new(load_queries(path)?),
            None => Arc::new(QueryStore::new()),
        };
        let registry = FilterRegistry::new(config, queries)?;
        Ok(Self {
            registry,
            adapter: OutputAdapter::new(format),
        })
    }

    /// Access the filter registry.
    pub fn registry(&self) -> &FilterRegistry {
        &self.registry
    }

    /// Read a JSON value from stdin, apply `filter` and write the result to
    /// stdout. Returns the process exit code.
    pub fn run(&self, filter: &str, args: &[String]) -> Result<i32> {
        let mut input = String::new();
        io::stdin().lock().read_to_string(&mut input)?;
        debug!("Received input: {}", input);

        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        match self.process(filter, &input, args) {
            Ok(Some(output)) => {
                info!("Output: {}", output);
                writeln!(stdout, "{}", output)?;
                Ok(0)
            }
            Ok(None) => {
                info!("Filter produced no value");
                Ok(0)
            }
            Err(e) => {
                error!("{:#}", e);
                eprintln!("Error: {:#}", e);
                Ok(ERROR_EXIT_CODE)
            }
        }
    }

    /// Apply `filter` to raw input text and return the rendered output.
    pub fn process(&self, filter: &str, input: &str, args: &[String]) -> Result<Option<String>> {
        let value = self.adapter.parse_input(input)?;
        let args: Vec<Value> = args.iter().map(|a| self.adapter.parse_arg(a)).collect();

        let result = self.registry.apply(filter, value.as_ref(), &args)?;
        self.adapter.format_output(result.as_ref())
    }

    /// Human-readable listing of filters and aliases, one per line.
    pub fn describe_filters(&self) -> Vec<String> {
        self.registry
            .names()
            .into_iter()
            .filter_map(|name| self.registry.get(name))
            .map(|filter| {
                if filter.aliases().is_empty() {
                    filter.name().to_string()
                } else {
                    format!("{} ({})", filter.name(), filter.aliases().join(", "))
                }
            })
            .collect()
    }
}

fn load_queries(path: &Path) -> Result<QueryStore> {
    QueryStore::load(path)
        .with_context(|| format!("Failed to load queries file: {}", path.display()))
}
