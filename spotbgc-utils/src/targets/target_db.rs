//! Target database built from pipeline output paths
//!
//! Each input line is a path such as
//! `results/DataNonHuman/BBNorm_Reads/<Cohort>/<Sample>_norm.1.fq`; the
//! cohort is the parent directory and the sample is the leading piece of
//! the file name.

use super::{read_listing, tsv_writer, write_error, ListingLine, ReadNum};
use regex::Regex;
use serde::Serialize;
use spotbgc_core::config::TargetsConfig;
use spotbgc_core::{SpotError, SpotResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Header row of a target database
pub const TARGET_DB_COLUMNS: [&str; 7] = [
    "Cohort",
    "Sample",
    "Location",
    "CohortSample",
    "FileBase",
    "CohortBase",
    "ReadNum",
];

#[derive(Debug, Clone)]
pub struct TargetDbOptions {
    sample_delimiters: Regex,
    exclusions: Vec<String>,
}

impl TargetDbOptions {
    /// `exclusions` is a comma-separated list; empty terms are dropped
    pub fn new(sample_delimiters: &str, exclusions: &str) -> SpotResult<Self> {
        let sample_delimiters = Regex::new(sample_delimiters).map_err(|e| {
            SpotError::Configuration(format!(
                "invalid sample delimiter pattern {:?}: {}",
                sample_delimiters, e
            ))
        })?;

        Ok(Self {
            sample_delimiters,
            exclusions: parse_exclusions(exclusions),
        })
    }

    pub fn from_config(config: &TargetsConfig, exclusions: &str) -> SpotResult<Self> {
        Self::new(&config.sample_delimiters, exclusions)
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    /// True if `path` contains any exclusion term
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclusions.iter().any(|term| path.contains(term.as_str()))
    }
}

fn parse_exclusions(terms: &str) -> Vec<String> {
    terms
        .split(',')
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// One row of a target database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetRecord {
    pub cohort: String,
    pub sample: String,
    pub location: String,
    pub cohort_sample: String,
    pub file_base: String,
    pub cohort_base: String,
    pub read_num: ReadNum,
}

impl TargetRecord {
    /// Derive a row from `path`; `None` if it has no parent directory component
    pub fn from_path(path: &str, sample_delimiters: &Regex) -> Option<Self> {
        let mut components = path.rsplit('/');
        let file_name = components.next()?;
        let cohort = components.next()?;

        let sample = sample_delimiters.split(file_name).next().unwrap_or_default();
        let file_base = file_name
            .rsplit_once('.')
            .map_or("", |(base, _)| base);

        Some(Self {
            cohort: cohort.to_string(),
            sample: sample.to_string(),
            location: path.to_string(),
            cohort_sample: format!("{}/{}", cohort, sample),
            file_base: file_base.to_string(),
            cohort_base: format!("{}/{}", cohort, file_base),
            read_num: ReadNum::detect(file_name, ".1", ".2"),
        })
    }
}

/// Outcome of a [`write_target_db`] run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDbSummary {
    pub paths_read: usize,
    pub paths_excluded: usize,
    pub rows_written: usize,
    pub output: PathBuf,
}

/// Derive the rows for every non-excluded path of a listing
pub fn build_target_records(
    listing: &[ListingLine],
    source: &Path,
    options: &TargetDbOptions,
) -> SpotResult<Vec<TargetRecord>> {
    let mut records = Vec::with_capacity(listing.len());

    for entry in listing {
        if options.is_excluded(&entry.text) {
            debug!("Excluding {}", entry.text);
            continue;
        }
        let record = TargetRecord::from_path(&entry.text, &options.sample_delimiters)
            .ok_or_else(|| {
                SpotError::malformed(
                    source,
                    entry.line,
                    format!("path {:?} has no cohort directory", entry.text),
                )
            })?;
        records.push(record);
    }

    Ok(records)
}

/// Build the target database for the paths listed in `input` and write it to `output`
pub fn write_target_db(
    output: &Path,
    input: &Path,
    options: &TargetDbOptions,
) -> SpotResult<TargetDbSummary> {
    let listing = read_listing(input)?;
    let records = build_target_records(&listing, input, options)?;

    let mut writer = tsv_writer(output, &TARGET_DB_COLUMNS)?;
    for record in &records {
        writer.serialize(record).map_err(write_error)?;
    }
    writer.flush()?;

    info!(
        "Wrote {} target rows from {} to {}",
        records.len(),
        input.display(),
        output.display()
    );

    Ok(TargetDbSummary {
        paths_read: listing.len(),
        paths_excluded: listing.len() - records.len(),
        rows_written: records.len(),
        output: output.to_path_buf(),
    })
}
