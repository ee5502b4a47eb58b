use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands, RunContext};
use spotbgc_core::{resolve_config, SpotError};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(exit_code(&e));
    }
}

/// RUST_LOG wins; otherwise SPOTBGC_LOG (default `warn`) unless raised by `-v`
fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => std::env::var("SPOTBGC_LOG").unwrap_or_else(|_| "warn".to_string()),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();
}

fn exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<SpotError>() {
        Some(SpotError::Configuration(_)) => 2,
        Some(SpotError::MissingInput { .. }) | Some(SpotError::Io(_)) => 3,
        Some(SpotError::MalformedRecord { .. }) => 4,
        _ => 1,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = RunContext {
        config: resolve_config(cli.config.as_deref())?,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::FilterBlast(args) => crate::cli::commands::filter_blast::run(args, &ctx),
        Commands::HardMask(args) => crate::cli::commands::hard_mask::run(args, &ctx),
        Commands::TargetDb(args) => crate::cli::commands::target_db::run(args, &ctx),
        Commands::InputTargetDb(args) => crate::cli::commands::input_target_db::run(args, &ctx),
    }
}
