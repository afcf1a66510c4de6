//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders that start from a clean process environment
//! - Registry file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that influence testrig and must not leak in from the host.
const TESTRIG_VARS: &[&str] = &[
    "TEST_ENV",
    "CI",
    "TESTRIG_CONFIG_FILE",
    "TESTRIG_LOG_MODE",
    "TESTRIG_DEBUG",
    "TESTRIG_UTILIZATION_FRACTION",
    "TESTRIG_MEMORY_PER_WORKER_GIB",
    "TESTRIG_MIN_WORKERS",
    "TESTRIG_MAX_WORKERS",
    "TESTRIG_SHARD_RATIO",
    "DEV_WEB_URL",
    "DEV_API_URL",
    "DEV_DB_CONNECTION",
    "PREPROD_WEB_URL",
    "PREPROD_API_URL",
    "PREPROD_DB_CONNECTION",
    "PROD_WEB_URL",
    "PROD_API_URL",
    "PROD_DB_CONNECTION",
];

/// A registry file with a valid development record and a broken prod record.
pub const MIXED_REGISTRY: &str = r"
development:
  web: { base_url: 'http://localhost:3000', timeout_ms: 30000, retries: 0 }
  api: { base_url: 'http://localhost:4000', timeout_ms: 10000, retries: 1 }
  database: { connection_string: 'postgresql://localhost/shop', timeout_ms: 5000 }
  features: { debug_logging: true }
  performance: { workers: 2, max_concurrency: 4 }
prod:
  web: { base_url: 'www.example.com', timeout_ms: 0, retries: 2 }
  api: { base_url: 'https://api.example.com', timeout_ms: 20000, retries: -1 }
  database: { connection_string: 'postgresql://prod/shop', timeout_ms: 5000 }
  features: {}
  performance: { workers: 6, max_concurrency: 12 }
";

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with every testrig variable removed.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("testrig").expect("Failed to find testrig binary");
        for var in TESTRIG_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run testrig");

        assert!(
            output.status.success(),
            "testrig {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
