//! Error types for configuration and batch checking.
//!
//! Rule evaluation itself cannot fail: a feature either passes or raises a
//! flag. Only loading configuration and driving batches have error paths.

use thiserror::Error;

/// Errors from parsing or resolving rule configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration document is not valid TOML.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration document is not valid JSON.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// `fallbackInstructions` must hold exactly a singular and a plural phrase.
    #[error("{rule}: fallbackInstructions needs exactly 2 phrases (singular, plural), got {found}")]
    InstructionCount { rule: &'static str, found: usize },
}

/// Errors from checking a batch of features.
#[derive(Error, Debug)]
pub enum CheckError {
    /// A worker evaluating a feature panicked or was cancelled.
    #[error("feature check task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
