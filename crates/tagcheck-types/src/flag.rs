//! Flag — the record a rule raises against a feature.

use serde::{Deserialize, Serialize};

use crate::feature::{Feature, FeatureKind};

/// Identifies the feature a flag concerns without carrying its tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureRef {
    pub id: i64,
    pub logical_id: i64,
    pub kind: FeatureKind,
}

impl From<&Feature> for FeatureRef {
    fn from(feature: &Feature) -> Self {
        Self {
            id: feature.id,
            logical_id: feature.logical_id,
            kind: feature.kind,
        }
    }
}

/// A validation finding.
///
/// Absence of a flag means the feature passed; a flag always carries a
/// human-readable instruction describing what is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// Name of the rule that raised this flag.
    pub rule: String,
    /// The offending feature.
    pub feature: FeatureRef,
    /// Instruction text shown to whoever fixes the data.
    pub instruction: String,
}

impl Flag {
    pub fn new(rule: impl Into<String>, feature: &Feature, instruction: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            feature: FeatureRef::from(feature),
            instruction: instruction.into(),
        }
    }
}
