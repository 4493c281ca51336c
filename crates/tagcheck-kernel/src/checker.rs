//! The Checker — runs a rule set over features.
//!
//! A host builds one `Checker` per run with [`Checker::new`]. It owns the
//! rule registry (and with it each rule's seen-set), so two runs never share
//! suppression state. `Checker` is not `Clone`: a clone would share the
//! seen-sets with the original.
//!
//! ```text
//!  features ──▶ Checker ──▶ RuleRegistry ──▶ Rule::is_eligible
//!                                         └─▶ Rule::evaluate ──▶ flags
//! ```

use std::num::NonZeroUsize;
use std::sync::Arc;

use tagcheck_types::{Feature, Flag};
use tokio::task::JoinSet;

use crate::config::CheckConfig;
use crate::error::{CheckError, ConfigError};
use crate::rules::{register_builtins, RuleRegistry};

/// Runs registered rules against features, one at a time or in parallel.
#[derive(Debug)]
pub struct Checker {
    rules: Arc<RuleRegistry>,
}

impl Checker {
    /// Create a checker with every built-in rule `config` enables.
    pub fn new(config: &CheckConfig) -> Result<Self, ConfigError> {
        let mut registry = RuleRegistry::new();
        register_builtins(&mut registry, config)?;
        Ok(Self::with_registry(registry))
    }

    /// Create a checker with the default configuration.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(&CheckConfig::default())
    }

    /// Create a checker over a hand-built registry.
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            rules: Arc::new(registry),
        }
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// Check one feature against every rule.
    pub fn check(&self, feature: &Feature) -> Vec<Flag> {
        self.rules.check(feature)
    }

    /// Check features in order on the current thread.
    pub fn check_all<'a>(&self, features: impl IntoIterator<Item = &'a Feature>) -> Vec<Flag> {
        let mut checked = 0usize;
        let mut flags = Vec::new();
        for feature in features {
            checked += 1;
            flags.extend(self.check(feature));
        }
        tracing::debug!(features = checked, flags = flags.len(), "batch checked");
        flags
    }

    /// Check features on the blocking pool.
    ///
    /// The input is split into one contiguous chunk per available core, each
    /// checked sequentially by its own task. Flags are returned in input
    /// order. Which segment of a multi-segment way carries its flag depends
    /// on scheduling; that only one does, does not.
    pub async fn check_all_parallel(
        &self,
        features: Vec<Feature>,
    ) -> Result<Vec<Flag>, CheckError> {
        let workers = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
        self.check_all_chunked(features, workers).await
    }

    /// [`Checker::check_all_parallel`] with an explicit task count.
    pub async fn check_all_chunked(
        &self,
        features: Vec<Feature>,
        workers: usize,
    ) -> Result<Vec<Flag>, CheckError> {
        let total = features.len();
        let chunks = split_chunks(features, chunk_len(total, workers));
        let chunk_count = chunks.len();

        let mut tasks = JoinSet::new();
        for (index, chunk) in chunks.into_iter().enumerate() {
            let rules = Arc::clone(&self.rules);
            tasks.spawn_blocking(move || {
                let flags: Vec<Flag> = chunk.iter().flat_map(|f| rules.check(f)).collect();
                (index, flags)
            });
        }

        let mut by_chunk: Vec<Vec<Flag>> = vec![Vec::new(); chunk_count];
        while let Some(joined) = tasks.join_next().await {
            let (index, flags) = joined?;
            by_chunk[index] = flags;
        }

        let flags: Vec<Flag> = by_chunk.into_iter().flatten().collect();
        tracing::debug!(
            features = total,
            tasks = chunk_count,
            flags = flags.len(),
            "parallel batch checked"
        );
        Ok(flags)
    }
}

/// Features per task so that `workers` tasks cover `total` features.
fn chunk_len(total: usize, workers: usize) -> usize {
    total.div_ceil(workers.max(1)).max(1)
}

fn split_chunks(features: Vec<Feature>, len: usize) -> Vec<Vec<Feature>> {
    let mut chunks = Vec::new();
    let mut iter = features.into_iter().peekable();
    while iter.peek().is_some() {
        chunks.push(iter.by_ref().take(len).collect());
    }
    chunks
}
