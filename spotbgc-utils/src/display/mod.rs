//! Display and formatting utilities

pub mod output;

pub use output::{format_number, format_status, report, Status, Summary};
