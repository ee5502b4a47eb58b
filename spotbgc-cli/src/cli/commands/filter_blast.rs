use crate::cli::RunContext;
use anyhow::Result;
use clap::Args;
use spotbgc_bio::{filter_contigs, FilterOptions};
use spotbgc_utils::{report, Status, Summary};
use std::path::PathBuf;

#[derive(Args)]
pub struct FilterBlastArgs {
    /// Tabular BLAST results (-outfmt 6 or 7, optionally gzipped)
    #[arg(value_name = "BLAST_TSV")]
    pub blast: PathBuf,

    /// Contigs to filter (FASTA, optionally gzipped)
    #[arg(value_name = "CONTIGS_FASTA")]
    pub contigs: PathBuf,

    /// Alignment length at or above which a query is removed
    #[arg(short = 'l', long, value_name = "N")]
    pub min_length: Option<u64>,

    /// Suffix appended to the contigs file stem
    #[arg(short, long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Directory for the filtered FASTA (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: FilterBlastArgs, ctx: &RunContext) -> Result<()> {
    let mut options = FilterOptions::from(&ctx.config.filter);
    if let Some(min_length) = args.min_length {
        options.min_alignment_length = min_length;
    }
    if let Some(suffix) = args.suffix {
        options.output_suffix = suffix;
    }

    let summary = filter_contigs(
        &args.blast,
        &args.contigs,
        args.output_dir.as_deref(),
        &options,
    )?;

    if ctx.quiet {
        return Ok(());
    }

    if summary.records_retained == 0 && summary.records_read > 0 {
        report(Status::Warning, "Every contig matched an excluded query; output is empty");
    }
    report(Status::Success, &format!("Wrote {}", summary.output.display()));

    Summary::new("Contig filter")
        .count("Alignment rows", summary.alignment_rows)
        .count(
            format!("Queries with length >= {}", options.min_alignment_length),
            summary.excluded_ids,
        )
        .count("Contigs read", summary.records_read)
        .count("Contigs retained", summary.records_retained)
        .count("Contigs removed", summary.records_dropped())
        .print();

    Ok(())
}
