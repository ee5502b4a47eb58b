use crate::error::{SpotError, SpotResult};
use std::path::{Path, PathBuf};

/// Get the spotbgc home directory
/// Checks SPOTBGC_HOME environment variable, falls back to ${HOME}/.spotbgc
pub fn spotbgc_home() -> PathBuf {
    if let Ok(path) = std::env::var("SPOTBGC_HOME") {
        PathBuf::from(path)
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| {
            std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
        });
        PathBuf::from(home).join(".spotbgc")
    }
}

/// Get the user configuration file path
/// Returns: SPOTBGC_HOME/config.toml
pub fn default_config_path() -> PathBuf {
    spotbgc_home().join("config.toml")
}

/// Derive an output file name from an input path.
///
/// Strips the directory and the last extension (plus a trailing `.gz`) and
/// appends `suffix`: `data/S1_contigs.fasta` with `_nonHuman.fasta` gives
/// `S1_contigs_nonHuman.fasta`.
pub fn derive_output_name(input: &Path, suffix: &str) -> SpotResult<String> {
    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            SpotError::InvalidInput(format!("{} has no usable file name", input.display()))
        })?;

    let file_name = file_name.strip_suffix(".gz").unwrap_or(file_name);
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    Ok(format!("{}{}", stem, suffix))
}

/// Derive the output path inside `output_dir` (the current directory when `None`)
pub fn derive_output_path(
    input: &Path,
    suffix: &str,
    output_dir: Option<&Path>,
) -> SpotResult<PathBuf> {
    let name = derive_output_name(input, suffix)?;
    Ok(match output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    })
}
