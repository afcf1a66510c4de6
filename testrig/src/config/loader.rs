//! Registry loading from YAML files.
//!
//! A registry file is a mapping from environment name to a complete
//! [`EnvironmentConfig`](crate::config::EnvironmentConfig) record:
//!
//! ```yaml
//! development:
//!   web: { base_url: "http://localhost:3000", timeout_ms: 30000, retries: 0 }
//!   api: { base_url: "http://localhost:4000", timeout_ms: 10000, retries: 1 }
//!   database: { connection_string: "postgresql://localhost/shop", timeout_ms: 5000 }
//!   features: { debug_logging: true }
//!   performance: { workers: 2, max_concurrency: 4 }
//! ```

use crate::config::registry::ConfigRegistry;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Loads registries from disk.
///
/// # Examples
///
/// ```no_run
/// use testrig::config::ConfigLoader;
/// use std::path::Path;
///
/// let registry = ConfigLoader::load_file(Path::new("environments.yaml")).unwrap();
/// println!("Loaded {} environments", registry.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML registry file.
    ///
    /// Records are not validated here; validation happens when a record is
    /// resolved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read, and
    /// [`Error::Configuration`] if the YAML is malformed, names an unknown
    /// environment or contains unknown fields.
    pub fn load_file(path: &Path) -> Result<ConfigRegistry> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        Self::load_str(&contents)
    }

    /// Parse a YAML registry from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML does not describe a registry.
    pub fn load_str(contents: &str) -> Result<ConfigRegistry> {
        let registry: ConfigRegistry = serde_yaml::from_str(contents)?;
        log::debug!("loaded registry with {} environment(s)", registry.len());
        Ok(registry)
    }
}
