//! Rules: the unit of validation a host runs against each feature.

mod builtin;
mod registry;
mod traits;

pub use builtin::{register_builtins, IncorrectTagRule, INCORRECT_TAG_CHECK};
pub use registry::RuleRegistry;
pub use traits::Rule;
