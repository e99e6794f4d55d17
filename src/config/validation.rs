//! Configuration validation.

use anyhow::{bail, Result};

use super::Config;

/// Characters that would break out of an HTML attribute value.
const ATTRIBUTE_BREAKERS: &[char] = &['"', '\'', '<', '>'];

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.log_path.to_string_lossy().contains('\0') {
        bail!("Invalid log_path: contains null character");
    }

    if config.link_target.is_empty() {
        bail!("link_target cannot be empty");
    }
    if config.link_target.contains(ATTRIBUTE_BREAKERS) {
        bail!(
            "link_target '{}' must not contain quotes or angle brackets",
            config.link_target
        );
    }

    if config.source_route.is_empty() {
        bail!("source_route cannot be empty");
    }
    // Links are emitted inside single-quoted href attributes
    if config.source_route.contains(ATTRIBUTE_BREAKERS) {
        bail!(
            "source_route '{}' must not contain quotes or angle brackets",
            config.source_route
        );
    }

    if config.stack_trace_class.is_empty() {
        bail!("stack_trace_class cannot be empty");
    }
    if config.stack_trace_class.contains(ATTRIBUTE_BREAKERS) {
        bail!(
            "stack_trace_class '{}' must not contain quotes or angle brackets",
            config.stack_trace_class
        );
    }

    if let Some(path) = &config.queries_file {
        if path.as_os_str().is_empty() {
            bail!("queries_file cannot be empty");
        }
    }

    Ok(())
}
