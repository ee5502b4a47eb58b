//! Target databases for the SPOT-BGC Snakemake rules
//!
//! Both builders read a plain-text path listing and write tab-separated
//! tables whose rows the workflow globs into wildcards.

pub mod input_target_db;
pub mod target_db;

use serde::Serialize;
use spotbgc_core::{SpotError, SpotResult};
use std::fmt;
use std::fs::File;
use std::path::Path;

/// Read direction of a sequencing file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadNum {
    #[serde(rename = "1")]
    Forward,
    #[serde(rename = "2")]
    Reverse,
    #[serde(rename = "SE")]
    Single,
}

impl ReadNum {
    /// Classify `file_name` by the first marker it contains
    pub fn detect(file_name: &str, forward: &str, reverse: &str) -> Self {
        if file_name.contains(forward) {
            ReadNum::Forward
        } else if file_name.contains(reverse) {
            ReadNum::Reverse
        } else {
            ReadNum::Single
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadNum::Forward => "1",
            ReadNum::Reverse => "2",
            ReadNum::Single => "SE",
        }
    }
}

impl fmt::Display for ReadNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One non-blank line of a listing with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLine {
    pub line: usize,
    pub text: String,
}

/// Read a path listing, trimming each line and skipping blank ones
pub fn read_listing(path: &Path) -> SpotResult<Vec<ListingLine>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| SpotError::missing_input(path, e))?;

    Ok(parse_listing(&content))
}

pub fn parse_listing(content: &str) -> Vec<ListingLine> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let text = raw.trim();
            (!text.is_empty()).then(|| ListingLine {
                line: i + 1,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Tab-separated writer that emits `columns` as its header row up front
pub(crate) fn tsv_writer(path: &Path, columns: &[&str]) -> SpotResult<csv::Writer<File>> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(file);

    writer.write_record(columns).map_err(write_error)?;
    Ok(writer)
}

pub(crate) fn write_error(err: csv::Error) -> SpotError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => SpotError::Io(io),
        _ => SpotError::InvalidInput(message),
    }
}
