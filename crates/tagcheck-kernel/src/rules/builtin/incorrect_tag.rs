//! IncorrectTagCheck — flag tag values that break the canonical format.
//!
//! Values of the checked keys must be lowercase alphanumeric runs, optionally
//! `;`-separated (see [`crate::pattern`]). Values listed as exceptions for
//! their key are accepted anyway.
//!
//! A way often arrives as several linear segments sharing one logical id.
//! Only the first segment evaluated is checked; the rest are suppressed.
//! Points, areas and relations are never recorded, so every instance is
//! checked.

use tagcheck_types::{Feature, Flag, Tags};

use crate::config::{IncorrectTagConfig, OffendingCount, ResolvedConfig};
use crate::error::ConfigError;
use crate::pattern::is_valid_value;
use crate::rules::Rule;
use crate::seen::SeenSet;

/// Rule name, also its configuration section.
pub const INCORRECT_TAG_CHECK: &str = "IncorrectTagCheck";

/// The incorrect-tag rule. One instance per run; it owns its seen-set.
#[derive(Debug, Default)]
pub struct IncorrectTagRule {
    config: ResolvedConfig,
    seen: SeenSet,
}

impl IncorrectTagRule {
    /// Create the rule with built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the rule from an already-resolved configuration.
    pub fn with_config(config: ResolvedConfig) -> Self {
        Self {
            config,
            seen: SeenSet::new(),
        }
    }

    /// Create the rule from its configuration section.
    pub fn from_config(config: &IncorrectTagConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_config(config.resolve()?))
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Logical ids already evaluated.
    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    /// The offending pairs of `tags`, formatted `'key=value'`, in tag order.
    pub fn offending_tags(&self, tags: &Tags) -> Vec<String> {
        tags.iter()
            .filter(|(key, _)| self.config.checks_key(key))
            .filter(|(_, value)| !is_valid_value(value))
            .filter(|(key, value)| !self.config.is_exception(key, value))
            .map(|(key, value)| format!("'{key}={value}'"))
            .collect()
    }

    /// Build the instruction text for a list of offending pairs.
    ///
    /// Returns `None` when the list is empty.
    pub fn instruction(&self, offending: &[String]) -> Option<String> {
        let count = OffendingCount::from_len(offending.len())?;
        let lead_in = self.config.instructions.lead_in(count);
        Some(format!("{lead_in}{}", offending.join(", ")))
    }
}

impl Rule for IncorrectTagRule {
    fn name(&self) -> &str {
        INCORRECT_TAG_CHECK
    }

    fn description(&self) -> &str {
        "Tag values that are not lowercase alphanumeric with no spaces"
    }

    fn is_eligible(&self, feature: &Feature) -> bool {
        !self.seen.contains(feature.logical_id)
    }

    fn evaluate(&self, feature: &Feature) -> Option<Flag> {
        if feature.kind.is_linear_segment() && !self.seen.insert(feature.logical_id) {
            tracing::debug!(
                id = feature.id,
                logical_id = feature.logical_id,
                "segment of an already evaluated way, skipping"
            );
            return None;
        }

        if feature.tags.is_empty() {
            return None;
        }

        let offending = self.offending_tags(&feature.tags);
        for pair in &offending {
            tracing::trace!(id = feature.id, tag = %pair, "malformed tag value");
        }

        let instruction = self.instruction(&offending)?;
        tracing::debug!(
            id = feature.id,
            logical_id = feature.logical_id,
            count = offending.len(),
            "flagging feature"
        );
        Some(Flag::new(INCORRECT_TAG_CHECK, feature, instruction))
    }
}
