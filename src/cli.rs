use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Blended, masked global-mean temperature diagnostics.
#[derive(Parser)]
#[command(
    name = "blendmask",
    version,
    about = "Blended, masked GMST diagnostics from climate model output"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Blend, mask and reduce one model run to a diagnostic.
    Run(RunArgs),
    /// List the eight blend modes.
    Modes,
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "blendmask.toml")]
    pub config: PathBuf,

    /// Override the blend mode from config (e.g. `maf`).
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Override the diagnostic from config (e.g. `ann_mean_gmst`).
    #[arg(short, long)]
    pub diagnostic: Option<String>,

    /// Override output JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
