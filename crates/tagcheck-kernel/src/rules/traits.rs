//! The capability every rule implements.

use tagcheck_types::{Feature, Flag};

/// A validation rule.
///
/// The host asks [`Rule::is_eligible`] first and only then calls
/// [`Rule::evaluate`]. Eligibility is a shortcut, not a guarantee:
/// `evaluate` must stay correct when called on a feature the gate would
/// have skipped.
///
/// Rules are shared across worker threads, so any state they keep between
/// features has to live behind `&self`.
pub trait Rule: Send + Sync {
    /// Unique rule name, also the rule's section name in configuration.
    fn name(&self) -> &str;

    /// One-line description of what the rule looks for.
    fn description(&self) -> &str;

    /// Cheap pre-check. Must not mutate rule state.
    fn is_eligible(&self, _feature: &Feature) -> bool {
        true
    }

    /// Check one feature, returning a flag if it violates the rule.
    fn evaluate(&self, feature: &Feature) -> Option<Flag>;
}
