//! Entry point wiring CLI dispatch to the screening service.

use anyhow::Result;
use doping_screen::cli::Cli;
use doping_screen::config::Settings;
use doping_screen::logging;
use tracing::{info, instrument};

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
