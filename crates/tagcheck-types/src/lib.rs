//! tagcheck-types: pure data types shared by the rule kernel and its hosts.
//!
//! No I/O, no rule logic. A host builds [`Feature`]s, hands them to rules,
//! and collects the [`Flag`]s they raise.

mod feature;
mod flag;

pub use feature::{Feature, FeatureKind, Tags};
pub use flag::{FeatureRef, Flag};
