/// Integration tests for the Snakemake target databases
use pretty_assertions::assert_eq;
use spotbgc_core::SpotError;
use spotbgc_test::assertions::assert_tsv_shape;
use spotbgc_test::fixtures::{pipeline_output_paths, raw_data_listing};
use spotbgc_test::TestEnvironment;
use spotbgc_utils::{
    write_input_target_db, write_target_db, InputTargetDbOptions, TargetDbOptions,
};

#[test]
fn test_target_db_from_pipeline_outputs() {
    let env = TestEnvironment::new().unwrap();
    let input = env
        .create_input_file("norm_targets.txt", &pipeline_output_paths())
        .unwrap();
    let output = env.output_path("BBNorm_targets.txt");

    let options = TargetDbOptions::new(". |- |_", ".log").unwrap();
    let summary = write_target_db(&output, &input, &options).unwrap();

    assert_eq!(summary.paths_read, 4);
    assert_eq!(summary.paths_excluded, 1);
    assert_eq!(summary.rows_written, 3);

    let content = env.read_output("BBNorm_targets.txt").unwrap();
    assert_tsv_shape(&content, 7);

    let read_nums: Vec<&str> = content
        .lines()
        .skip(1)
        .map(|l| l.rsplit('\t').next().unwrap())
        .collect();
    assert_eq!(read_nums, vec!["1", "2", "SE"]);
    assert!(content.contains("\nCohort2\tS07\t"));
}

#[test]
fn test_target_db_empty_exclusion_argument_keeps_everything() {
    let env = TestEnvironment::new().unwrap();
    let input = env
        .create_input_file("targets.txt", &pipeline_output_paths())
        .unwrap();
    let output = env.output_path("db.txt");

    let summary = write_target_db(&output, &input, &TargetDbOptions::new("_", "").unwrap())
        .unwrap();

    assert_eq!(summary.rows_written, 4);
}

#[test]
fn test_target_db_empty_listing_writes_header_only() {
    let env = TestEnvironment::new().unwrap();
    let input = env.create_input_file("empty.txt", "\n").unwrap();
    let output = env.output_path("db.txt");

    write_target_db(&output, &input, &TargetDbOptions::new("_", "").unwrap()).unwrap();

    assert_eq!(
        env.read_output("db.txt").unwrap(),
        "Cohort\tSample\tLocation\tCohortSample\tFileBase\tCohortBase\tReadNum\n"
    );
}

#[test]
fn test_target_db_missing_listing() {
    let env = TestEnvironment::new().unwrap();
    let err = write_target_db(
        &env.output_path("db.txt"),
        &env.input_dir.join("absent.txt"),
        &TargetDbOptions::new("_", "").unwrap(),
    )
    .unwrap_err();

    assert!(matches!(err, SpotError::MissingInput { .. }));
}

#[test]
fn test_input_target_db_from_raw_listing() {
    let env = TestEnvironment::new().unwrap();
    let listing = env
        .create_input_file("RawData/FullFileNames.txt", &raw_data_listing())
        .unwrap();

    let summary =
        write_input_target_db(&listing, Some(&env.output_dir), &InputTargetDbOptions::default())
            .unwrap();

    assert_eq!(summary.rows_written, 3);
    assert_eq!(summary.cohorts, 2);
    assert!(summary.copies.is_empty());

    let samples = env.read_output("SPOT-BGC__sample-target_info.txt").unwrap();
    assert_tsv_shape(&samples, 35);
    assert!(samples.starts_with("Cohort\tSample\tCohortSample\tCohortSampleSample\t"));
    assert!(samples.contains("\tGECCO_CohortBase\tAntiSMASH_Location\t"));
    assert!(samples.contains("\tresults/Trimmomatic/Cohort2/S07.SE.fastq\t"));

    let cohorts = env.read_output("SPOT-BGC__cohort-target_info.txt").unwrap();
    assert_tsv_shape(&cohorts, 11);
    let cohort_ids: Vec<&str> = cohorts
        .lines()
        .skip(1)
        .map(|l| l.split('\t').next().unwrap())
        .collect();
    assert_eq!(cohort_ids, vec!["Cohort1", "Cohort1", "Cohort2"]);
}

#[test]
fn test_input_target_db_malformed_listing_writes_nothing() {
    let env = TestEnvironment::new().unwrap();
    let listing = env
        .create_input_file("FullFileNames.txt", "Cohort1/S01/S01_1.fastq.gz\nS02_1.fastq.gz\n")
        .unwrap();

    let err =
        write_input_target_db(&listing, Some(&env.output_dir), &InputTargetDbOptions::default())
            .unwrap_err();

    assert!(matches!(err, SpotError::MalformedRecord { line: 2, .. }));
    assert!(!env.output_path("SPOT-BGC__sample-target_info.txt").exists());
}
