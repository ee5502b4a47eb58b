/// Integration tests for hard masking
use pretty_assertions::assert_eq;
use spotbgc_bio::{hard_mask_file, MaskOptions};
use spotbgc_core::SpotError;
use spotbgc_test::fixtures::soft_masked_genome;
use spotbgc_test::TestEnvironment;

fn default_options() -> MaskOptions {
    MaskOptions::new('N', "_hardMask.fasta").unwrap()
}

#[test]
fn test_mask_genome_file() {
    let env = TestEnvironment::new().unwrap();
    let genome = env
        .create_input_file("GRCh38.fa", &soft_masked_genome())
        .unwrap();

    let summary = hard_mask_file(&genome, Some(&env.output_dir), &default_options()).unwrap();

    assert_eq!(summary.output, Some(env.output_path("GRCh38_hardMask.fasta")));
    assert_eq!(summary.header_lines, 2);
    assert_eq!(summary.sequence_lines, 3);
    assert_eq!(summary.bases_masked, 16);
    assert_eq!(
        env.read_output("GRCh38_hardMask.fasta").unwrap(),
        ">chr21 soft-masked\nACGTNNNNNNNN\nNNNNGGGGNNNN\n>chrM\nGATCACAGNNNN\n"
    );
}

#[test]
fn test_mask_preserves_size_and_uppercase_input() {
    let env = TestEnvironment::new().unwrap();
    let text = ">a\nACGTN\nGGCC";
    let input = env.create_input_file("upper.fasta", text).unwrap();

    let summary = hard_mask_file(&input, Some(&env.output_dir), &default_options()).unwrap();

    assert_eq!(summary.bases_masked, 0);
    assert_eq!(env.read_output("upper_hardMask.fasta").unwrap(), text);
}

#[test]
fn test_mask_gzipped_genome() {
    let env = TestEnvironment::new().unwrap();
    let input = env
        .create_gzip_input_file("hg.fa.gz", ">h\nacgt\n")
        .unwrap();

    let options = MaskOptions::new('X', ".masked.fa").unwrap();
    hard_mask_file(&input, Some(&env.output_dir), &options).unwrap();

    assert_eq!(env.read_output("hg.masked.fa").unwrap(), ">h\nXXXX\n");
}

#[test]
fn test_mask_missing_input() {
    let env = TestEnvironment::new().unwrap();
    let err = hard_mask_file(
        &env.input_dir.join("absent.fa"),
        Some(&env.output_dir),
        &default_options(),
    )
    .unwrap_err();

    assert!(matches!(err, SpotError::MissingInput { .. }));
    assert!(!env.output_path("absent_hardMask.fasta").exists());
}

#[test]
fn test_mask_refuses_to_overwrite_input() {
    let env = TestEnvironment::new().unwrap();
    let genome = env.output_path("g.fasta");
    std::fs::write(&genome, ">h\nacGT\n").unwrap();

    let options = MaskOptions::new('N', ".fasta").unwrap();
    let err = hard_mask_file(&genome, Some(&env.output_dir), &options).unwrap_err();

    assert!(matches!(err, SpotError::InvalidInput(_)));
    assert_eq!(std::fs::read_to_string(&genome).unwrap(), ">h\nacGT\n");
}
