//! Removal of contigs that align to an unwanted reference.
//!
//! A contig is dropped when its FASTA header contains, as a substring, the
//! query id of any BLAST hit whose alignment length reaches the threshold.
//! Matching is by substring rather than exact id, so an id such as `k141_1`
//! also removes `k141_10`.

use crate::formats::blast::{read_blast_tabular, BlastRecord};
use crate::formats::{create_output, ensure_distinct_output};
use crate::formats::fasta::{read_collection, SequenceCollection, SequenceRecord};
use spotbgc_core::config::FilterConfig;
use spotbgc_core::{derive_output_path, SpotResult};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Options for [`filter_contigs`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Minimum alignment length (inclusive) that puts a query id in the exclusion set
    pub min_alignment_length: u64,
    /// Appended to the contig file stem to name the output
    pub output_suffix: String,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::from(&FilterConfig::default())
    }
}

impl From<&FilterConfig> for FilterOptions {
    fn from(config: &FilterConfig) -> Self {
        Self {
            min_alignment_length: config.min_alignment_length,
            output_suffix: config.output_suffix.clone(),
        }
    }
}

/// Query ids whose hits are long enough to exclude a contig
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    ids: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn from_records(records: &[BlastRecord], min_alignment_length: u64) -> Self {
        let ids = records
            .iter()
            .filter(|hit| hit.alignment_length >= min_alignment_length)
            .map(|hit| hit.query_id.clone())
            .collect();
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// True when any excluded id occurs somewhere in `header`
    pub fn matches(&self, header: &str) -> bool {
        self.ids.iter().any(|id| header.contains(id.as_str()))
    }
}

/// Records of `collection` that survive `exclusions`, in collection order
pub fn retained<'a>(
    collection: &'a SequenceCollection,
    exclusions: &'a ExclusionSet,
) -> impl Iterator<Item = SequenceRecord<'a>> + 'a {
    collection
        .iter()
        .filter(move |record| !exclusions.matches(record.header))
}

/// Outcome of a [`filter_contigs`] run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub alignment_rows: usize,
    pub excluded_ids: usize,
    pub records_read: usize,
    pub records_retained: usize,
    pub output: PathBuf,
}

impl FilterSummary {
    pub fn records_dropped(&self) -> usize {
        self.records_read - self.records_retained
    }
}

/// Write the contigs of `fasta` that have no long hit in `blast`.
///
/// The output is named after `fasta` (stem plus `options.output_suffix`) and
/// placed in `output_dir`, or the current directory when `None`. Both inputs
/// are fully parsed before the output is created, so a malformed input never
/// leaves a partial output behind.
pub fn filter_contigs(
    blast: &Path,
    fasta: &Path,
    output_dir: Option<&Path>,
    options: &FilterOptions,
) -> SpotResult<FilterSummary> {
    let hits = read_blast_tabular(blast)?;
    let exclusions = ExclusionSet::from_records(&hits, options.min_alignment_length);

    if hits.is_empty() {
        warn!(
            "{} contains no alignments; every contig is kept",
            blast.display()
        );
    }
    debug!(
        "{} of {} hits reach {} bp, {} distinct query ids excluded",
        hits.iter()
            .filter(|h| h.alignment_length >= options.min_alignment_length)
            .count(),
        hits.len(),
        options.min_alignment_length,
        exclusions.len()
    );

    let collection = read_collection(fasta)?;
    let output = derive_output_path(fasta, &options.output_suffix, output_dir)?;
    ensure_distinct_output(&output, &[fasta, blast])?;

    let mut writer = create_output(&output)?;
    let mut records_retained = 0;
    for record in retained(&collection, &exclusions) {
        record.write_to(&mut writer)?;
        records_retained += 1;
    }
    writer.flush()?;

    let summary = FilterSummary {
        alignment_rows: hits.len(),
        excluded_ids: exclusions.len(),
        records_read: collection.len(),
        records_retained,
        output,
    };

    info!(
        "Kept {} of {} contigs from {} ({} removed) -> {}",
        summary.records_retained,
        summary.records_read,
        fasta.display(),
        summary.records_dropped(),
        summary.output.display()
    );

    Ok(summary)
}
