//! CLI entry-point for one-shot athlete screening.

use anyhow::{anyhow, Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{analysis, config::Settings, dataset::Dataset};

/// Screen one athlete against the configured dataset.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Athlete name, matched case-insensitively.
    pub athlete: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let dataset = Dataset::load(&settings.data_path).with_context(|| {
        format!(
            "loading athlete dataset from {}",
            settings.data_path.display()
        )
    })?;
    let record = dataset
        .find(&args.athlete)
        .ok_or_else(|| anyhow!("athlete {:?} not found in dataset", args.athlete))?;

    let report = analysis::screen(record);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
