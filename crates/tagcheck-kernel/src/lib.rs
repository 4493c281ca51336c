//! tagcheck-kernel: the core of tagcheck.
//!
//! This crate provides:
//!
//! - **Rules**: the [`Rule`] capability and a [`RuleRegistry`] that dispatches
//!   features to every registered rule
//! - **IncorrectTagCheck**: flags tag values that are not lowercase
//!   alphanumeric runs, optionally `;`-separated
//! - **Config**: per-rule options parsed from TOML or JSON
//! - **Checker**: runs a registry over batches, sequentially or on the
//!   blocking pool
//!
//! The kernel does no I/O. Hosts read features and configuration, and decide
//! what to do with the flags.

pub mod checker;
pub mod config;
pub mod defaults;
pub mod error;
pub mod pattern;
pub mod rules;
pub mod seen;

pub use checker::Checker;
pub use config::{CheckConfig, IncorrectTagConfig, Instructions, OffendingCount, ResolvedConfig};
pub use error::{CheckError, ConfigError};
pub use pattern::is_valid_value;
pub use rules::{IncorrectTagRule, Rule, RuleRegistry, INCORRECT_TAG_CHECK};
pub use seen::SeenSet;
pub use tagcheck_types::{Feature, FeatureKind, FeatureRef, Flag, Tags};
