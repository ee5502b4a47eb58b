//! Ordered FASTA collections.
//!
//! A collection maps each header line to its sequence body. Multi-line
//! sequences are joined onto a single line, so writing a collection back
//! out produces one header line followed by one sequence line per record.

use super::open_input;
use indexmap::IndexMap;
use spotbgc_core::{SpotError, SpotResult};
use std::io::{BufRead, ErrorKind, Write};
use std::path::Path;
use tracing::debug;

/// One header/body pair borrowed from a [`SequenceCollection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceRecord<'a> {
    /// Full header line, including the leading `>`, without the line terminator
    pub header: &'a str,
    /// Concatenated sequence lines followed by a single `\n`
    pub body: &'a str,
}

impl SequenceRecord<'_> {
    /// Write the header line followed by the body
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.header)?;
        writer.write_all(self.body.as_bytes())
    }
}

/// Header-to-body mapping that preserves first-seen header order.
///
/// Inserting a header that is already present replaces its body but keeps
/// its original position (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceCollection {
    records: IndexMap<String, String>,
}

impl SequenceCollection {
    /// Empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the replaced body for a duplicate header
    pub fn insert(&mut self, header: String, body: String) -> Option<String> {
        self.records.insert(header, body)
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.records.get(header).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SequenceRecord<'_>> {
        self.records.iter().map(|(header, body)| SequenceRecord {
            header: header.as_str(),
            body: body.as_str(),
        })
    }

    /// Build a collection from `>`-delimited text.
    ///
    /// Blank lines before the first header are ignored; any other text there
    /// is a [`SpotError::MalformedRecord`]. A header without sequence lines
    /// gets the body `"\n"`.
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> SpotResult<Self> {
        let mut collection = Self::new();
        let mut current: Option<(String, String)> = None;
        let mut duplicates = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => SpotError::malformed(source, index + 1, "invalid UTF-8"),
                _ => SpotError::Io(e),
            })?;

            if line.starts_with('>') {
                if let Some((header, body)) = current.take() {
                    duplicates += collection.push_finished(header, body);
                }
                current = Some((line, String::new()));
                continue;
            }

            match current.as_mut() {
                Some((_, body)) => body.push_str(line.trim()),
                None if line.trim().is_empty() => {}
                None => {
                    return Err(SpotError::malformed(
                        source,
                        index + 1,
                        "sequence data before the first '>' header",
                    ))
                }
            }
        }

        if let Some((header, body)) = current {
            duplicates += collection.push_finished(header, body);
        }

        if duplicates > 0 {
            debug!(
                "{}: {} duplicate header(s) replaced earlier records",
                source.display(),
                duplicates
            );
        }

        Ok(collection)
    }

    fn push_finished(&mut self, header: String, mut body: String) -> usize {
        body.push('\n');
        usize::from(self.insert(header, body).is_some())
    }

    /// Write every record as a header line followed by its body
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for record in self.iter() {
            record.write_to(writer)?;
        }
        Ok(())
    }
}

/// Read a FASTA file into an ordered collection (supports .gz compression)
pub fn read_collection<P: AsRef<Path>>(path: P) -> SpotResult<SequenceCollection> {
    let path = path.as_ref();
    let collection = SequenceCollection::from_reader(open_input(path)?, path)?;
    debug!("Read {} records from {}", collection.len(), path.display());
    Ok(collection)
}
