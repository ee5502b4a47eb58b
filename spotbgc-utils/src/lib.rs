//! Shared utilities for spotbgc
//!
//! Builds the tab-separated target databases consumed by the SPOT-BGC
//! Snakemake rules and provides the terminal output helpers used by the CLI.

pub mod display;
pub mod targets;

// Re-export commonly used types
pub use display::{format_number, format_status, report, Status, Summary};
pub use targets::input_target_db::{
    write_input_target_db, CohortTargetRecord, InputTargetDbOptions, InputTargetDbSummary,
    SampleTargetRecord,
};
pub use targets::target_db::{
    write_target_db, TargetDbOptions, TargetDbSummary, TargetRecord,
};
pub use targets::ReadNum;
