//! Core utilities and types shared across all spotbgc crates

pub mod config;
pub mod error;
pub mod system;

// Re-export commonly used types
pub use config::{load_config, resolve_config, save_config, Config};
pub use error::{SpotError, SpotResult};

// Re-export system utilities
pub use system::{default_config_path, derive_output_name, derive_output_path, spotbgc_home};
