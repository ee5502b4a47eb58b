//! Test environment management
//!
//! Each environment owns a temporary directory with `input/` and `output/`
//! subdirectories that is removed when the environment is dropped.

use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with automatic cleanup
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::with_prefix("spotbgc-test")
            .context("Failed to create temporary directory")?;
        let input_dir = temp_dir.path().join("input");
        let output_dir = temp_dir.path().join("output");

        std::fs::create_dir_all(&input_dir)?;
        std::fs::create_dir_all(&output_dir)?;

        Ok(Self {
            temp_dir,
            input_dir,
            output_dir,
        })
    }

    /// Get the root path of the test environment
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `input/<name>`, creating intermediate directories
    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.input_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write `content` gzip-compressed to `input/<name>`
    pub fn create_gzip_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.input_dir.join(name);
        let file = std::fs::File::create(&path)?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(content.as_bytes())?;
        encoder.finish()?;
        Ok(path)
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    pub fn read_output(&self, name: &str) -> Result<String> {
        let path = self.output_path(name);
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_creation() {
        let env = TestEnvironment::new().unwrap();
        assert!(env.root().exists());
        assert!(env.input_dir.is_dir());
        assert!(env.output_dir.is_dir());
    }

    #[test]
    fn test_environment_isolation() {
        let env1 = TestEnvironment::new().unwrap();
        let env2 = TestEnvironment::new().unwrap();

        assert_ne!(env1.root(), env2.root());

        env1.create_input_file("test.txt", "env1").unwrap();
        assert!(!env2.input_dir.join("test.txt").exists());
    }

    #[test]
    fn test_environment_cleanup() {
        let path = {
            let env = TestEnvironment::new().unwrap();
            env.root().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_nested_input_file() {
        let env = TestEnvironment::new().unwrap();
        let path = env.create_input_file("C1/S1/S1_1.fastq", "").unwrap();
        assert!(path.exists());
    }
}
