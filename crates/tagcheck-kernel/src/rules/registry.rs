//! Rule registry for looking up and dispatching rules.

use std::collections::BTreeMap;
use std::sync::Arc;

use tagcheck_types::{Feature, Flag};

use super::traits::Rule;

/// Registry of rules a host runs against each feature.
///
/// Iteration is by rule name, so flags for one feature come out in a stable
/// order.
#[derive(Default)]
pub struct RuleRegistry {
    rules: BTreeMap<String, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule. A rule with the same name is replaced.
    pub fn register(&mut self, rule: impl Rule + 'static) {
        self.register_arc(Arc::new(rule));
    }

    /// Register a rule that's already in an Arc.
    pub fn register_arc(&mut self, rule: Arc<dyn Rule>) {
        let name = rule.name().to_string();
        tracing::debug!(rule = %name, "registered rule");
        self.rules.insert(name, rule);
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Rule>> {
        self.rules.get(name).cloned()
    }

    /// Check if a rule exists.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// List all rule names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.rules.keys().map(|s| s.as_str()).collect()
    }

    /// Run every rule against `feature`.
    ///
    /// Each rule's eligibility gate is consulted before it evaluates.
    pub fn check(&self, feature: &Feature) -> Vec<Flag> {
        self.rules
            .values()
            .filter(|rule| rule.is_eligible(feature))
            .filter_map(|rule| rule.evaluate(feature))
            .collect()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
