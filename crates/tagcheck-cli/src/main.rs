//! tagcheck: run tag rules over a stream of features.
//!
//! Features come in as newline-delimited JSON; flags go out the same way on
//! stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! tagcheck --config checks.toml features.ndjson > flags.ndjson
//! cat features.ndjson | tagcheck --parallel -
//! ```

mod config;
mod input;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tagcheck_kernel::{Checker, Feature};

/// Flag map features whose tag values break the expected format.
#[derive(Debug, Parser)]
#[command(name = "tagcheck", version, about)]
struct Args {
    /// Configuration file (.toml, otherwise JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Evaluate features on a worker pool.
    #[arg(short, long)]
    parallel: bool,

    /// Newline-delimited JSON features, or `-` for stdin.
    features: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("tagcheck_cli=info".parse()?))
        .init();

    let args = Args::parse();

    let config = config::load(args.config.as_deref())?;
    let checker = Checker::new(&config).context("Failed to configure rules")?;
    tracing::info!("Rules: {}", checker.rules().names().join(", "));

    let features = read_input(&args.features)?;
    let total = features.len();

    let flags = if args.parallel {
        checker
            .check_all_parallel(features)
            .await
            .context("Parallel check failed")?
    } else {
        checker.check_all(&features)
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for flag in &flags {
        serde_json::to_writer(&mut out, flag).context("Failed to write flag")?;
        out.write_all(b"\n").context("Failed to write flag")?;
    }
    out.flush().context("Failed to flush output")?;

    tracing::info!(features = total, flags = flags.len(), "check complete");
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<Feature>> {
    if path.as_os_str() == "-" {
        return input::read_features(io::stdin().lock());
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open features {}", path.display()))?;
    input::read_features(BufReader::new(file))
        .with_context(|| format!("Failed to read features {}", path.display()))
}
