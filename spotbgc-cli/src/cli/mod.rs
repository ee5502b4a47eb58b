pub mod commands;

use clap::{Parser, Subcommand};
use spotbgc_core::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spotbgc",
    version,
    about = "Helper steps for the SPOT-BGC metagenomics workflow",
    long_about = "spotbgc provides the data-preparation steps of the SPOT-BGC Snakemake \
                  workflow: removing contigs with long host alignments, hard-masking \
                  reference genomes, and building the target databases the workflow \
                  rules glob their wildcards from."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the summary printed after each command
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (defaults to $SPOTBGC_HOME/config.toml)
    #[arg(short, long, global = true, env = "SPOTBGC_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Drop contigs that have a long alignment in a BLAST table
    FilterBlast(commands::filter_blast::FilterBlastArgs),

    /// Replace soft-masked (lowercase) bases with a mask character
    HardMask(commands::hard_mask::HardMaskArgs),

    /// Build a target database from a list of pipeline output paths
    TargetDb(commands::target_db::TargetDbArgs),

    /// Build the per-sample and per-cohort target databases from a raw-data listing
    InputTargetDb(commands::input_target_db::InputTargetDbArgs),
}

/// Settings shared by every command
pub struct RunContext {
    pub config: Config,
    pub quiet: bool,
}
