use crate::cli::RunContext;
use anyhow::Result;
use clap::Args;
use spotbgc_utils::{report, InputTargetDbOptions, Status, Summary};
use std::path::PathBuf;

#[derive(Args)]
pub struct InputTargetDbArgs {
    /// Raw-data listing (`ls */*/*` run inside resources/RawData)
    #[arg(value_name = "LISTING")]
    pub listing: PathBuf,

    /// Directory for both databases (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also copy both databases into this directory (e.g. the workflow's config/)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

pub fn run(args: InputTargetDbArgs, ctx: &RunContext) -> Result<()> {
    let mut options = InputTargetDbOptions::from(&ctx.config.targets);
    if args.config_dir.is_some() {
        options.config_dir = args.config_dir;
    }

    let summary =
        spotbgc_utils::write_input_target_db(&args.listing, args.output_dir.as_deref(), &options)?;

    if ctx.quiet {
        return Ok(());
    }

    report(
        Status::Success,
        &format!(
            "Wrote {} and {}",
            summary.sample_output.display(),
            summary.cohort_output.display()
        ),
    );
    for copy in &summary.copies {
        report(Status::Info, &format!("Copied to {}", copy.display()));
    }
    Summary::new("Input target databases")
        .count("Sample rows", summary.rows_written)
        .count("Cohorts", summary.cohorts)
        .print();

    Ok(())
}
