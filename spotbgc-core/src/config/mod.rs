//! Configuration types for spotbgc

use crate::system::paths::default_config_path;
use crate::SpotError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub mask: MaskConfig,
    #[serde(default)]
    pub targets: TargetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum BLAST alignment length (inclusive) that marks a query for removal
    #[serde(default = "default_min_alignment_length")]
    pub min_alignment_length: u64,
    #[serde(default = "default_filter_suffix")]
    pub output_suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskConfig {
    #[serde(default = "default_mask_suffix")]
    pub output_suffix: String,
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    /// Regex splitting a file name into the sample id and the rest
    #[serde(default = "default_sample_delimiters")]
    pub sample_delimiters: String,
    #[serde(default = "default_sample_output")]
    pub sample_output: String,
    #[serde(default = "default_cohort_output")]
    pub cohort_output: String,
    /// Directory receiving copies of the input target databases
    #[serde(default)]
    pub config_dir: Option<String>,
}

// Default value functions
fn default_min_alignment_length() -> u64 { 100 }
fn default_filter_suffix() -> String { "_nonHuman.fasta".to_string() }
fn default_mask_suffix() -> String { "_hardMask.fasta".to_string() }
fn default_mask_char() -> char { 'N' }
fn default_sample_delimiters() -> String { ". |- |_".to_string() }
fn default_sample_output() -> String { "SPOT-BGC__sample-target_info.txt".to_string() }
fn default_cohort_output() -> String { "SPOT-BGC__cohort-target_info.txt".to_string() }

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_alignment_length: default_min_alignment_length(),
            output_suffix: default_filter_suffix(),
        }
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            output_suffix: default_mask_suffix(),
            mask_char: default_mask_char(),
        }
    }
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            sample_delimiters: default_sample_delimiters(),
            sample_output: default_sample_output(),
            cohort_output: default_cohort_output(),
            config_dir: None,
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SpotError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| SpotError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), SpotError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| SpotError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Find and load the active configuration.
///
/// Lookup order: `explicit`, then `SPOTBGC_CONFIG`, then
/// `SPOTBGC_HOME/config.toml` if it exists, then built-in defaults.
/// An explicitly named file that cannot be read is an error.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config, SpotError> {
    let named: Option<PathBuf> = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("SPOTBGC_CONFIG").map(PathBuf::from));

    if let Some(path) = named {
        debug!("Loading configuration from {}", path.display());
        return load_config(&path).map_err(|e| match e {
            SpotError::Io(io) => SpotError::Configuration(format!(
                "Cannot read config {}: {}",
                path.display(),
                io
            )),
            other => other,
        });
    }

    let fallback = default_config_path();
    if fallback.is_file() {
        debug!("Loading configuration from {}", fallback.display());
        return load_config(&fallback);
    }

    Ok(default_config())
}
