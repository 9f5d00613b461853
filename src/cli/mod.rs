//! Command-line interface wiring for doping-screen.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod screen;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Athlete doping screening service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Screen(args) => screen::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the lookup form and screening pages over HTTP.
    Serve(serve::Args),
    /// Screen a single athlete and print the JSON report.
    Screen(screen::Args),
}
