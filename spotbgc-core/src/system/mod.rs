pub mod paths;

// Re-export commonly used functions
pub use paths::{default_config_path, derive_output_name, derive_output_path, spotbgc_home};
