//! Rule configuration.
//!
//! A configuration document is a table keyed by rule name. Every option is
//! optional; anything missing falls back to the built-in defaults and
//! unrecognized keys are ignored.
//!
//! ```toml
//! [IncorrectTagCheck]
//! tagsToCheck = ["highway", "surface"]
//! fallbackInstructions = ["Concerns tag ", "Concerns tags "]
//!
//! [IncorrectTagCheck.exceptions]
//! surface = ["concrete:plates"]
//! ```

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::defaults::{self, INSTRUCTION_PLURAL, INSTRUCTION_SINGULAR};
use crate::error::ConfigError;
use crate::rules::INCORRECT_TAG_CHECK;

/// Top-level configuration document, one section per rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckConfig {
    #[serde(rename = "IncorrectTagCheck", default)]
    pub incorrect_tag: IncorrectTagConfig,
}

impl CheckConfig {
    /// Parse a TOML configuration document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a JSON configuration document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Options for the incorrect-tag rule, as written in a configuration document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncorrectTagConfig {
    /// Whether the host should run this rule at all.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Replaces the built-in set of checked keys.
    #[serde(default)]
    pub tags_to_check: Option<Vec<String>>,
    /// Replaces the built-in exception table.
    #[serde(default)]
    pub exceptions: Option<HashMap<String, Vec<String>>>,
    /// `[singular, plural]` instruction lead-ins.
    #[serde(default)]
    pub fallback_instructions: Option<Vec<String>>,
}

fn enabled_by_default() -> bool {
    true
}

impl Default for IncorrectTagConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tags_to_check: None,
            exceptions: None,
            fallback_instructions: None,
        }
    }
}

impl IncorrectTagConfig {
    /// Validate the options and fill in defaults.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let instructions = match &self.fallback_instructions {
            None => Instructions::default(),
            Some(phrases) => match phrases.as_slice() {
                [singular, plural] => Instructions::new(singular.clone(), plural.clone()),
                other => {
                    return Err(ConfigError::InstructionCount {
                        rule: INCORRECT_TAG_CHECK,
                        found: other.len(),
                    });
                }
            },
        };

        let tags_to_check = match &self.tags_to_check {
            Some(keys) => keys.iter().cloned().collect(),
            None => defaults::default_tags_to_check(),
        };

        let exceptions = match &self.exceptions {
            Some(table) => table
                .iter()
                .map(|(key, values)| (key.clone(), values.iter().cloned().collect()))
                .collect(),
            None => defaults::default_exceptions(),
        };

        Ok(ResolvedConfig {
            tags_to_check,
            exceptions,
            instructions,
        })
    }
}

/// How many offending tags an instruction names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffendingCount {
    One,
    Many,
}

impl OffendingCount {
    /// Categorize a count. Zero offending tags has no instruction.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            0 => None,
            1 => Some(Self::One),
            _ => Some(Self::Many),
        }
    }
}

/// Instruction lead-in phrases, selected by [`OffendingCount`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions {
    singular: String,
    plural: String,
}

impl Default for Instructions {
    fn default() -> Self {
        Self::new(INSTRUCTION_SINGULAR, INSTRUCTION_PLURAL)
    }
}

impl Instructions {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    pub fn lead_in(&self, count: OffendingCount) -> &str {
        match count {
            OffendingCount::One => &self.singular,
            OffendingCount::Many => &self.plural,
        }
    }
}

/// Runtime configuration of the incorrect-tag rule. Read-only once built.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub tags_to_check: HashSet<String>,
    pub exceptions: HashMap<String, HashSet<String>>,
    pub instructions: Instructions,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            tags_to_check: defaults::default_tags_to_check(),
            exceptions: defaults::default_exceptions(),
            instructions: Instructions::default(),
        }
    }
}

impl ResolvedConfig {
    /// True if `value` is an accepted exception for `key`.
    pub fn is_exception(&self, key: &str, value: &str) -> bool {
        self.exceptions
            .get(key)
            .is_some_and(|values| values.contains(value))
    }

    /// True if values of `key` are checked at all.
    pub fn checks_key(&self, key: &str) -> bool {
        self.tags_to_check.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CheckConfig::from_toml_str("").unwrap();
        assert!(config.incorrect_tag.enabled);
        let resolved = config.incorrect_tag.resolve().unwrap();
        assert!(resolved.checks_key("highway"));
        assert!(resolved.is_exception("surface", "concrete:plates"));
        assert_eq!(resolved.instructions, Instructions::default());
    }

    #[test]
    fn toml_overrides_each_option() {
        let config = CheckConfig::from_toml_str(
            r#"
            [IncorrectTagCheck]
            tagsToCheck = ["name"]
            fallbackInstructions = ["Tag: ", "Tags: "]

            [IncorrectTagCheck.exceptions]
            name = ["Main Street"]
            "#,
        )
        .unwrap();
        let resolved = config.incorrect_tag.resolve().unwrap();

        assert!(resolved.checks_key("name"));
        assert!(!resolved.checks_key("highway"));
        assert!(resolved.is_exception("name", "Main Street"));
        assert!(!resolved.is_exception("surface", "concrete:plates"));
        assert_eq!(resolved.instructions.lead_in(OffendingCount::One), "Tag: ");
        assert_eq!(resolved.instructions.lead_in(OffendingCount::Many), "Tags: ");
    }

    #[test]
    fn json_document_parses() {
        let config = CheckConfig::from_json_str(
            r#"{"IncorrectTagCheck": {"enabled": false, "tagsToCheck": ["shop"]}}"#,
        )
        .unwrap();
        assert!(!config.incorrect_tag.enabled);
        let resolved = config.incorrect_tag.resolve().unwrap();
        assert_eq!(resolved.tags_to_check.len(), 1);
    }

    #[test]
    fn unknown_options_are_ignored() {
        let config = CheckConfig::from_json_str(
            r#"{"IncorrectTagCheck": {"challenge": "x", "priority": 3}, "OtherCheck": {"a": 1}}"#,
        )
        .unwrap();
        assert!(config.incorrect_tag.enabled);
        assert!(config.incorrect_tag.tags_to_check.is_none());
    }

    #[test]
    fn wrong_instruction_count_is_rejected() {
        let config = CheckConfig::from_json_str(
            r#"{"IncorrectTagCheck": {"fallbackInstructions": ["only one"]}}"#,
        )
        .unwrap();
        let err = config.incorrect_tag.resolve().unwrap_err();
        assert!(matches!(err, ConfigError::InstructionCount { found: 1, .. }));
        assert!(err.to_string().contains("exactly 2"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = CheckConfig::from_toml_str("[IncorrectTagCheck\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn offending_count_categories() {
        assert_eq!(OffendingCount::from_len(0), None);
        assert_eq!(OffendingCount::from_len(1), Some(OffendingCount::One));
        assert_eq!(OffendingCount::from_len(2), Some(OffendingCount::Many));
        assert_eq!(OffendingCount::from_len(40), Some(OffendingCount::Many));
    }
}
