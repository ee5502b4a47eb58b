//! BLAST tabular output reader (`-outfmt 6`, and `-outfmt 7` comment lines).
//!
//! Each row carries the standard 12 columns:
//! `qseqid sseqid pident length mismatch gapopen qstart qend sstart send evalue bitscore`

use super::open_input;
use serde::Deserialize;
use spotbgc_core::{SpotError, SpotResult};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Number of columns in a tabular BLAST row
pub const BLAST_COLUMNS: usize = 12;

/// A single BLAST hit
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlastRecord {
    pub query_id: String,
    pub subject_id: String,
    pub pct_identity: f64,
    pub alignment_length: u64,
    pub mismatches: u64,
    pub gap_opens: u64,
    pub query_start: u64,
    pub query_end: u64,
    pub subject_start: u64,
    pub subject_end: u64,
    pub evalue: f64,
    pub bit_score: f64,
}

/// Read every hit of a tabular BLAST file (supports .gz compression).
///
/// Blank lines and `#` comment lines are skipped. Any other row that does
/// not have exactly 12 columns, has a non-numeric numeric field, or an empty
/// query id aborts the read with [`SpotError::MalformedRecord`].
pub fn read_blast_tabular<P: AsRef<Path>>(path: P) -> SpotResult<Vec<BlastRecord>> {
    let path = path.as_ref();
    let records = parse_blast_from_reader(open_input(path)?, path)?;
    debug!("Read {} BLAST hits from {}", records.len(), path.display());
    Ok(records)
}

/// Parse tabular BLAST rows from any reader; `source` names the input in errors
pub fn parse_blast_from_reader<R: Read>(input: R, source: &Path) -> SpotResult<Vec<BlastRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .from_reader(input);

    let mut records = Vec::new();

    for row in reader.records() {
        let row = row.map_err(|e| csv_error(source, e))?;
        let line = row.position().map_or(0, |p| p.line() as usize);

        if row.len() != BLAST_COLUMNS {
            return Err(SpotError::malformed(
                source,
                line,
                format!(
                    "expected {} tab-separated columns, found {}",
                    BLAST_COLUMNS,
                    row.len()
                ),
            ));
        }

        let record: BlastRecord = row
            .deserialize(None)
            .map_err(|e| SpotError::malformed(source, line, e.to_string()))?;

        if record.query_id.is_empty() {
            return Err(SpotError::malformed(source, line, "empty query id"));
        }

        records.push(record);
    }

    Ok(records)
}

fn csv_error(source: &Path, err: csv::Error) -> SpotError {
    let line = err.position().map_or(0, |p| p.line() as usize);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => SpotError::Io(io),
        _ => SpotError::malformed(source, line, message),
    }
}
