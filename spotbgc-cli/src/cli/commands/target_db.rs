use crate::cli::RunContext;
use anyhow::Result;
use clap::Args;
use spotbgc_utils::{report, Status, Summary, TargetDbOptions};
use std::path::PathBuf;

#[derive(Args)]
pub struct TargetDbArgs {
    /// Target database to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// File listing one pipeline output path per line
    #[arg(value_name = "INPUT_LIST")]
    pub input: PathBuf,

    /// Comma-separated terms; paths containing any of them are skipped
    #[arg(value_name = "EXCLUSIONS", default_value = "")]
    pub exclusions: String,
}

pub fn run(args: TargetDbArgs, ctx: &RunContext) -> Result<()> {
    let options = TargetDbOptions::from_config(&ctx.config.targets, &args.exclusions)?;
    let summary = spotbgc_utils::write_target_db(&args.output, &args.input, &options)?;

    if ctx.quiet {
        return Ok(());
    }

    report(Status::Success, &format!("Wrote {}", summary.output.display()));
    Summary::new("Target database")
        .count("Paths listed", summary.paths_read)
        .count("Paths excluded", summary.paths_excluded)
        .count("Rows written", summary.rows_written)
        .print();

    Ok(())
}
