//! Feature input: newline-delimited JSON, one feature per line.

use std::io::BufRead;

use anyhow::{Context, Result};
use tagcheck_kernel::Feature;

/// Read every feature from `reader`. Blank lines are skipped.
pub fn read_features(reader: impl BufRead) -> Result<Vec<Feature>> {
    let mut features = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let feature: Feature = serde_json::from_str(&line)
            .with_context(|| format!("Invalid feature on line {line_no}"))?;
        features.push(feature);
    }
    Ok(features)
}
