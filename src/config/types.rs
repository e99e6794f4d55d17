//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::validation;

/// Default `target` attribute for auto-linked URLs.
pub const DEFAULT_LINK_TARGET: &str = "_blank";

/// Default route prefix for stack frame source links.
pub const DEFAULT_SOURCE_ROUTE: &str = "#/source/view";

/// Default class of the stack trace list.
pub const DEFAULT_STACK_TRACE_CLASS: &str = "stack-trace";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,

    /// `target` attribute of links produced by the auto-link filter
    pub link_target: String,

    /// Route prefix of links produced by the stack trace filter
    pub source_route: String,

    /// Class of the `<ul>` wrapping stack frames
    pub stack_trace_class: String,

    /// JSON query set used by the pinned-query filter
    pub queries_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            log_path: default_log_path(),
            link_target: DEFAULT_LINK_TARGET.to_string(),
            source_route: DEFAULT_SOURCE_ROUTE.to_string(),
            stack_trace_class: DEFAULT_STACK_TRACE_CLASS.to_string(),
            queries_file: None,
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

/// Get default log path (relative to config directory).
/// The actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("dashfilters")
        })
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.debug);
        assert_eq!(config.link_target, "_blank");
        assert_eq!(config.source_route, "#/source/view");
        assert_eq!(config.stack_trace_class, "stack-trace");
        assert!(config.queries_file.is_none());
        assert!(config.log_path.ends_with("logs"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
link_target = "_self"
queries_file = "/tmp/queries.json"
"#,
        )
        .unwrap();
        assert_eq!(config.link_target, "_self");
        assert_eq!(config.source_route, DEFAULT_SOURCE_ROUTE);
        assert_eq!(
            config.queries_file.as_deref(),
            Some(Path::new("/tmp/queries.json"))
        );
    }

    #[test]
    fn test_log_path_for_config_dir() {
        let path = default_log_path_for_config_dir(Some(Path::new("/etc/dashfilters")));
        assert_eq!(path, PathBuf::from("/etc/dashfilters/logs"));
    }
}
