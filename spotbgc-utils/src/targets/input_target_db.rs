//! Per-sample and per-cohort target databases built from a raw-data listing
//!
//! The listing holds `<Cohort>/<SampleDir>/<ReadFile>` paths relative to
//! `resources/RawData/`. Every line yields one per-sample row naming the
//! intermediate and final files the workflow produces for that read file,
//! and one per-cohort row naming the cohort-level assembly outputs.

use super::{read_listing, tsv_writer, write_error, ListingLine, ReadNum};
use serde::Serialize;
use spotbgc_core::config::TargetsConfig;
use spotbgc_core::{SpotError, SpotResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const RAW_DATA_DIR: &str = "resources/RawData";

/// Header row of the per-sample database
pub const SAMPLE_COLUMNS: [&str; 35] = [
    "Cohort",
    "Sample",
    "CohortSample",
    "CohortSampleSample",
    "Location_Raw",
    "FileBase_Raw",
    "CohortBase_Raw",
    "Location_Trim",
    "FileBase_Trim",
    "CohortBase_Trim",
    "Location_NonHuman",
    "FileBase_NonHuman",
    "CohortBase_NonHuman",
    "Location_Norm",
    "FileBase_Norm",
    "CohortBase_Norm",
    "Location_100k",
    "FileBase_100k",
    "CohortBase_100k",
    "AssemblySample_Location",
    "AssemblySample_FileBase",
    "AssemblySample_CohortBase",
    "FiltAssemblySample_Location",
    "FiltAssemblySample_FileBase",
    "FiltAssemblySample_CohortBase",
    "TaxaSample_Location",
    "TaxaSample_FileBase",
    "TaxaSample_CohortBase",
    "GECCOSample_Location",
    "GECCOSample_FileBase",
    "GECCO_CohortBase",
    "AntiSMASH_Location",
    "AntiSMASH_Base",
    "AntiSMASH_CohortBase",
    "ReadNum",
];

/// Header row of the per-cohort database
pub const COHORT_COLUMNS: [&str; 11] = [
    "Cohort",
    "AssemblyCohort_Name",
    "AssemblyCohort_Location",
    "FiltAssemblyCohort_Name",
    "FiltAssemblyCohort_Location",
    "TaxaCohort_Name",
    "TaxaCohort_Location",
    "GECCOCohort_Name",
    "GECCOCohort_Location",
    "AntiSMASHCohort_Name",
    "AntiSMASHCohort_Location",
];

/// Location, file base and cohort base of one workflow file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetFile {
    pub location: String,
    pub file_base: String,
    pub cohort_base: String,
}

impl TargetFile {
    /// A read-level file stored as `<dir>/<cohort>/<base><ext>`
    fn per_cohort(dir: &str, cohort: &str, base: String, ext: &str) -> Self {
        Self {
            location: format!("{}/{}/{}{}", dir, cohort, base, ext),
            cohort_base: format!("{}/{}", cohort, base),
            file_base: base,
        }
    }

    /// A sample-level file stored as `<dir>/<cohort>/<sample>/<base><ext>`
    fn per_sample(dir: &str, cohort: &str, sample: &str, base: String, ext: &str) -> Self {
        Self {
            location: format!("{}/{}/{}/{}{}", dir, cohort, sample, base, ext),
            cohort_base: format!("{}/{}/{}", cohort, sample, base),
            file_base: base,
        }
    }
}

/// One row of the per-sample database; columns follow [`SAMPLE_COLUMNS`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleTargetRecord {
    pub cohort: String,
    pub sample: String,
    pub cohort_sample: String,
    pub cohort_sample_sample: String,
    pub raw: TargetFile,
    pub trimmed: TargetFile,
    pub non_human: TargetFile,
    pub normalized: TargetFile,
    pub size_filtered: TargetFile,
    pub assembly: TargetFile,
    pub filtered_assembly: TargetFile,
    pub taxonomy: TargetFile,
    pub gecco: TargetFile,
    pub antismash: TargetFile,
    pub read_num: ReadNum,
}

/// Name and location of one cohort-level output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CohortFile {
    pub name: String,
    pub location: String,
}

impl CohortFile {
    fn new(dir: &str, cohort: &str, suffix: &str, ext: &str) -> Self {
        let name = format!("{}{}", cohort, suffix);
        Self {
            location: format!("{}/{}/{}{}", dir, cohort, name, ext),
            name,
        }
    }
}

/// One row of the per-cohort database; columns follow [`COHORT_COLUMNS`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CohortTargetRecord {
    pub cohort: String,
    pub assembly: CohortFile,
    pub filtered_assembly: CohortFile,
    pub taxonomy: CohortFile,
    pub gecco: CohortFile,
    pub antismash: CohortFile,
}

impl CohortTargetRecord {
    pub fn new(cohort: &str) -> Self {
        Self {
            cohort: cohort.to_string(),
            assembly: CohortFile::new(
                "results/Assembly/PerCohort",
                cohort,
                "_final.contigs",
                ".fa",
            ),
            filtered_assembly: CohortFile::new(
                "results/AssemblyNonHuman/PerCohort",
                cohort,
                "_assemblyCohort_NON-human_map",
                ".fasta",
            ),
            taxonomy: CohortFile::new("results/Taxonomy/PerCohort", cohort, "__CohortTaxa", ".txt"),
            gecco: CohortFile::new(
                "results/BGC_Prediction/GECCO_Results/PerCohort",
                cohort,
                "_contigs.clusters",
                ".gff",
            ),
            antismash: CohortFile::new(
                "results/BGC_Prediction/AntiSMASH_Results/PerCohort",
                cohort,
                "_percohort_AntiSMASH",
                ".json",
            ),
        }
    }
}

impl SampleTargetRecord {
    /// Derive the row for a `<Cohort>/<SampleDir>/<ReadFile>` listing entry;
    /// `None` if the entry has fewer than three components
    pub fn from_listing_entry(entry: &str) -> Option<Self> {
        let components: Vec<&str> = entry.split('/').collect();
        if components.len() < 3 {
            return None;
        }
        let cohort = components[0];
        let file_name = components[2];

        let sample_name = file_name.replace('_', ".");
        let sample = sample_name.split('.').next().unwrap_or_default();
        let file_base = file_name.split('.').next().unwrap_or_default();
        let read_num = ReadNum::detect(file_name, "_1", "_2");
        let read = read_num.as_str();

        let raw = TargetFile {
            location: format!("{}/{}", RAW_DATA_DIR, entry),
            file_base: file_base.to_string(),
            cohort_base: format!("{}/{}", cohort, file_base),
        };

        Some(Self {
            cohort: cohort.to_string(),
            sample: sample.to_string(),
            cohort_sample: format!("{}/{}", cohort, sample),
            cohort_sample_sample: format!("{}/{}/{}", cohort, sample, sample),
            raw,
            trimmed: TargetFile::per_cohort(
                "results/Trimmomatic",
                cohort,
                format!("{}.{}", sample, read),
                ".fastq",
            ),
            non_human: TargetFile::per_cohort(
                "results/DataNonHuman/NonHumanOG",
                cohort,
                format!("{}_NON-human_map.{}", sample, read),
                ".fq",
            ),
            normalized: TargetFile::per_cohort(
                "results/DataNonHuman/BBNorm_Reads",
                cohort,
                format!("{}_norm.{}", sample, read),
                ".fq",
            ),
            size_filtered: TargetFile::per_cohort(
                "results/DataNonHuman/100k_Filt",
                cohort,
                format!("{}_norm.{}", sample, read),
                ".fq",
            ),
            assembly: TargetFile::per_sample(
                "results/Assembly/PerSample",
                cohort,
                sample,
                format!("{}_scaffolds", sample),
                ".fasta",
            ),
            filtered_assembly: TargetFile::per_sample(
                "results/AssemblyNonHuman/PerSample",
                cohort,
                sample,
                format!("{}_assemblySample_NON-human_map", sample),
                ".fasta",
            ),
            taxonomy: TargetFile::per_sample(
                "results/Taxonomy/PerSample",
                cohort,
                sample,
                format!("{}__SampleTaxa", sample),
                ".txt",
            ),
            gecco: TargetFile::per_sample(
                "results/BGC_Prediction/GECCO_Results/PerSample",
                cohort,
                sample,
                format!("{}_contigs.clusters", sample),
                ".gff",
            ),
            antismash: TargetFile::per_sample(
                "results/BGC_Prediction/AntiSMASH_Results/PerSample",
                cohort,
                sample,
                format!("{}_persample_AntiSMASH", sample),
                ".json",
            ),
            read_num,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTargetDbOptions {
    pub sample_output: String,
    pub cohort_output: String,
    /// Directory the finished databases are also copied into
    pub config_dir: Option<PathBuf>,
}

impl From<&TargetsConfig> for InputTargetDbOptions {
    fn from(config: &TargetsConfig) -> Self {
        Self {
            sample_output: config.sample_output.clone(),
            cohort_output: config.cohort_output.clone(),
            config_dir: config.config_dir.as_ref().map(PathBuf::from),
        }
    }
}

impl Default for InputTargetDbOptions {
    fn default() -> Self {
        Self::from(&TargetsConfig::default())
    }
}

/// Outcome of a [`write_input_target_db`] run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTargetDbSummary {
    pub rows_written: usize,
    pub cohorts: usize,
    pub sample_output: PathBuf,
    pub cohort_output: PathBuf,
    pub copies: Vec<PathBuf>,
}

/// Derive both row sets for every entry of a listing, in listing order
pub fn build_input_target_records(
    listing: &[ListingLine],
    source: &Path,
) -> SpotResult<Vec<(SampleTargetRecord, CohortTargetRecord)>> {
    listing
        .iter()
        .map(|entry| {
            let sample = SampleTargetRecord::from_listing_entry(&entry.text).ok_or_else(|| {
                SpotError::malformed(
                    source,
                    entry.line,
                    format!(
                        "expected <cohort>/<sample>/<file>, found {:?}",
                        entry.text
                    ),
                )
            })?;
            let cohort = CohortTargetRecord::new(&sample.cohort);
            Ok((sample, cohort))
        })
        .collect()
}

/// Write the per-sample and per-cohort databases for `listing` into
/// `output_dir` (default: current directory), then copy them into the
/// configured config directory if one is set
pub fn write_input_target_db(
    listing: &Path,
    output_dir: Option<&Path>,
    options: &InputTargetDbOptions,
) -> SpotResult<InputTargetDbSummary> {
    let entries = read_listing(listing)?;
    let rows = build_input_target_records(&entries, listing)?;

    let dir = output_dir.unwrap_or_else(|| Path::new(""));
    let sample_output = dir.join(&options.sample_output);
    let cohort_output = dir.join(&options.cohort_output);

    let mut samples = tsv_writer(&sample_output, &SAMPLE_COLUMNS)?;
    let mut cohorts = tsv_writer(&cohort_output, &COHORT_COLUMNS)?;
    for (sample, cohort) in &rows {
        samples.serialize(sample).map_err(write_error)?;
        cohorts.serialize(cohort).map_err(write_error)?;
    }
    samples.flush()?;
    cohorts.flush()?;

    let mut distinct: Vec<&str> = rows.iter().map(|(_, c)| c.cohort.as_str()).collect();
    distinct.sort_unstable();
    distinct.dedup();

    info!(
        "Wrote {} sample rows across {} cohorts to {} and {}",
        rows.len(),
        distinct.len(),
        sample_output.display(),
        cohort_output.display()
    );

    let mut copies = Vec::new();
    if let Some(config_dir) = &options.config_dir {
        std::fs::create_dir_all(config_dir)?;
        for (source, name) in [
            (&sample_output, &options.sample_output),
            (&cohort_output, &options.cohort_output),
        ] {
            let target = config_dir.join(name);
            std::fs::copy(source, &target)?;
            debug!("Copied {} to {}", source.display(), target.display());
            copies.push(target);
        }
    }

    Ok(InputTargetDbSummary {
        rows_written: rows.len(),
        cohorts: distinct.len(),
        sample_output,
        cohort_output,
        copies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::parse_listing;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paired_end_entry() {
        let record = SampleTargetRecord::from_listing_entry("C1/S1/S1_1.fastq.gz").unwrap();

        assert_eq!(record.cohort, "C1");
        assert_eq!(record.sample, "S1");
        assert_eq!(record.cohort_sample, "C1/S1");
        assert_eq!(record.cohort_sample_sample, "C1/S1/S1");
        assert_eq!(record.read_num, ReadNum::Forward);
        assert_eq!(
            record.raw,
            TargetFile {
                location: "resources/RawData/C1/S1/S1_1.fastq.gz".to_string(),
                file_base: "S1_1".to_string(),
                cohort_base: "C1/S1_1".to_string(),
            }
        );
        assert_eq!(
            record.trimmed,
            TargetFile {
                location: "results/Trimmomatic/C1/S1.1.fastq".to_string(),
                file_base: "S1.1".to_string(),
                cohort_base: "C1/S1.1".to_string(),
            }
        );
        assert_eq!(
            record.non_human.location,
            "results/DataNonHuman/NonHumanOG/C1/S1_NON-human_map.1.fq"
        );
        assert_eq!(record.normalized.cohort_base, "C1/S1_norm.1");
        assert_eq!(
            record.size_filtered.location,
            "results/DataNonHuman/100k_Filt/C1/S1_norm.1.fq"
        );
    }

    #[test]
    fn test_sample_level_outputs() {
        let record = SampleTargetRecord::from_listing_entry("C1/S1/S1_2.fastq.gz").unwrap();

        assert_eq!(record.read_num, ReadNum::Reverse);
        assert_eq!(
            record.assembly,
            TargetFile {
                location: "results/Assembly/PerSample/C1/S1/S1_scaffolds.fasta".to_string(),
                file_base: "S1_scaffolds".to_string(),
                cohort_base: "C1/S1/S1_scaffolds".to_string(),
            }
        );
        assert_eq!(
            record.gecco.location,
            "results/BGC_Prediction/GECCO_Results/PerSample/C1/S1/S1_contigs.clusters.gff"
        );
        assert_eq!(record.antismash.file_base, "S1_persample_AntiSMASH");
        assert_eq!(record.taxonomy.cohort_base, "C1/S1/S1__SampleTaxa");
    }

    #[test]
    fn test_single_end_entry() {
        let record = SampleTargetRecord::from_listing_entry("C2/S7/S7.fastq.gz").unwrap();
        assert_eq!(record.sample, "S7");
        assert_eq!(record.read_num, ReadNum::Single);
        assert_eq!(record.trimmed.location, "results/Trimmomatic/C2/S7.SE.fastq");
    }

    #[test]
    fn test_short_entry_rejected() {
        assert!(SampleTargetRecord::from_listing_entry("C1/S1_1.fastq.gz").is_none());

        let listing = parse_listing("C1/S1/S1_1.fastq.gz\nC1/S1_2.fastq.gz\n");
        let err = build_input_target_records(&listing, Path::new("FullFileNames.txt")).unwrap_err();
        assert!(matches!(err, SpotError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_cohort_record() {
        let record = CohortTargetRecord::new("C1");
        assert_eq!(
            record.assembly,
            CohortFile {
                name: "C1_final.contigs".to_string(),
                location: "results/Assembly/PerCohort/C1/C1_final.contigs.fa".to_string(),
            }
        );
        assert_eq!(
            record.filtered_assembly.location,
            "results/AssemblyNonHuman/PerCohort/C1/C1_assemblyCohort_NON-human_map.fasta"
        );
        assert_eq!(record.taxonomy.name, "C1__CohortTaxa");
        assert_eq!(
            record.antismash.location,
            "results/BGC_Prediction/AntiSMASH_Results/PerCohort/C1/C1_percohort_AntiSMASH.json"
        );
    }

    #[test]
    fn test_write_databases_with_copy() {
        let dir = tempfile::tempdir().unwrap();
        let listing = dir.path().join("FullFileNames.txt");
        std::fs::write(&listing, "C1/S1/S1_1.fastq.gz\nC1/S1/S1_2.fastq.gz\n").unwrap();

        let options = InputTargetDbOptions {
            config_dir: Some(dir.path().join("config")),
            ..InputTargetDbOptions::default()
        };
        let summary = write_input_target_db(&listing, Some(dir.path()), &options).unwrap();

        assert_eq!(summary.rows_written, 2);
        assert_eq!(summary.cohorts, 1);
        assert_eq!(summary.copies.len(), 2);

        let samples = std::fs::read_to_string(&summary.sample_output).unwrap();
        let lines: Vec<&str> = samples.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], SAMPLE_COLUMNS.join("\t"));
        assert!(lines[1].starts_with("C1\tS1\tC1/S1\tC1/S1/S1\tresources/RawData/C1/S1/S1_1.fastq.gz\t"));
        assert!(lines[1].ends_with("\t1"));
        assert!(lines[2].ends_with("\t2"));
        assert!(lines.iter().all(|l| l.split('\t').count() == 35));

        let copied = std::fs::read_to_string(dir.path().join("config").join(&options.sample_output))
            .unwrap();
        assert_eq!(copied, samples);
    }
}
