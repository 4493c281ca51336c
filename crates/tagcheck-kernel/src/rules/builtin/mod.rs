//! Built-in rules for tagcheck.

mod incorrect_tag;

pub use incorrect_tag::{IncorrectTagRule, INCORRECT_TAG_CHECK};

use super::RuleRegistry;
use crate::config::CheckConfig;
use crate::error::ConfigError;

/// Register every built-in rule that `config` leaves enabled.
pub fn register_builtins(
    registry: &mut RuleRegistry,
    config: &CheckConfig,
) -> Result<(), ConfigError> {
    if config.incorrect_tag.enabled {
        registry.register(IncorrectTagRule::from_config(&config.incorrect_tag)?);
    } else {
        tracing::info!(rule = INCORRECT_TAG_CHECK, "rule disabled by configuration");
    }
    Ok(())
}
