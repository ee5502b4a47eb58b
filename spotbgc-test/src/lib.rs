//! Test utilities for the spotbgc workspace
//!
//! Provides isolated file-system environments, generators for BLAST tables,
//! FASTA files and pipeline path listings, and assertions over FASTA output.

pub mod assertions;
pub mod environment;
pub mod fixtures;

// Re-export commonly used items
pub use environment::TestEnvironment;
pub use fixtures::{blast_row, blast_table, create_test_fasta, generate_contigs, TestSequence};

/// Initialize test logging (safe to call from every test)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}
