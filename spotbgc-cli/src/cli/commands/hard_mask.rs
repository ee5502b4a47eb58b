use crate::cli::RunContext;
use anyhow::Result;
use clap::Args;
use spotbgc_bio::{hard_mask_file, MaskOptions};
use spotbgc_utils::{report, Status, Summary};
use std::path::PathBuf;

#[derive(Args)]
pub struct HardMaskArgs {
    /// Soft-masked genome (FASTA, optionally gzipped)
    #[arg(value_name = "FASTA")]
    pub input: PathBuf,

    /// Directory for the masked FASTA (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suffix appended to the input file stem
    #[arg(short, long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Character written in place of each lowercase base
    #[arg(short, long, value_name = "CHAR")]
    pub mask_char: Option<char>,
}

pub fn run(args: HardMaskArgs, ctx: &RunContext) -> Result<()> {
    let config = &ctx.config.mask;
    let options = MaskOptions::new(
        args.mask_char.unwrap_or(config.mask_char),
        args.suffix.unwrap_or_else(|| config.output_suffix.clone()),
    )?;

    let summary = hard_mask_file(&args.input, args.output_dir.as_deref(), &options)?;

    if ctx.quiet {
        return Ok(());
    }

    if let Some(output) = &summary.output {
        report(Status::Success, &format!("Wrote {}", output.display()));
    }
    Summary::new("Hard mask")
        .count("Header lines", summary.header_lines)
        .count("Sequence lines", summary.sequence_lines)
        .count(
            format!("Bases masked to '{}'", options.mask_char()),
            summary.bases_masked,
        )
        .print();

    Ok(())
}
