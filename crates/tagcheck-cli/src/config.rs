//! Configuration file loading.

use std::path::Path;

use anyhow::{Context, Result};
use tagcheck_kernel::CheckConfig;

/// Load a configuration file, or the defaults when no path is given.
///
/// `.toml` files are parsed as TOML; anything else as JSON.
pub fn load(path: Option<&Path>) -> Result<CheckConfig> {
    let Some(path) = path else {
        tracing::debug!("no configuration file, using defaults");
        return Ok(CheckConfig::default());
    };

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration {}", path.display()))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let config = if is_toml {
        CheckConfig::from_toml_str(&source)
    } else {
        CheckConfig::from_json_str(&source)
    };

    config.with_context(|| format!("Failed to parse configuration {}", path.display()))
}
