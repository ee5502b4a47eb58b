pub mod blast;
pub mod fasta;

use flate2::read::MultiGzDecoder;
use spotbgc_core::{SpotError, SpotResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

fn is_gzipped(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

/// Open an input file for buffered reading (supports .gz compression).
///
/// A path that cannot be opened is reported as [`SpotError::MissingInput`].
pub fn open_input(path: &Path) -> SpotResult<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| SpotError::missing_input(path, e))?;

    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Fail with [`SpotError::InvalidInput`] if `output` names one of `inputs`.
///
/// Must run before [`create_output`], which truncates the file.
pub fn ensure_distinct_output(output: &Path, inputs: &[&Path]) -> SpotResult<()> {
    let Ok(target) = std::fs::canonicalize(output) else {
        return Ok(());
    };

    for input in inputs {
        if std::fs::canonicalize(input).is_ok_and(|source| source == target) {
            return Err(SpotError::InvalidInput(format!(
                "output {} would overwrite input {}",
                output.display(),
                input.display()
            )));
        }
    }
    Ok(())
}

/// Create (or truncate) an output file behind a buffered writer
pub fn create_output(path: &Path) -> SpotResult<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
