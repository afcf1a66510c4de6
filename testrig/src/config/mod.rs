//! Environment configuration for test runs.
//!
//! This module provides:
//! - The closed set of environments ([`EnvironmentName`]) and `TEST_ENV` detection
//! - Per-environment records ([`EnvironmentConfig`]) held in a [`ConfigRegistry`]
//! - `{PREFIX}_WEB_URL` / `{PREFIX}_API_URL` / `{PREFIX}_DB_CONNECTION` overrides
//! - YAML registry files ([`ConfigLoader`])
//! - Validation ([`ConfigValidator`]) and strict lookup ([`ConfigResolver`])
//!
//! # Selection vs. lookup
//!
//! An unknown or missing `TEST_ENV` silently selects `development`. A lookup
//! for a name the registry does not hold, or a record that fails validation,
//! is an error that should stop the run before any test executes.
//!
//! # Examples
//!
//! ```
//! use testrig::config::{ConfigRegistry, ConfigResolver};
//! use testrig::EnvironmentName;
//!
//! let registry = ConfigRegistry::builtin().with_overrides(|key| {
//!     (key == "DEV_WEB_URL").then(|| "http://localhost:8080".to_string())
//! });
//! let resolver = ConfigResolver::new(registry);
//!
//! let dev = resolver.config_for(EnvironmentName::Development).unwrap();
//! assert_eq!(dev.web.base_url, "http://localhost:8080");
//! ```

pub mod environment;
pub mod loader;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use environment::{EnvironmentName, EnvironmentOverrides, UnknownEnvironment, TEST_ENV_VAR};
pub use loader::ConfigLoader;
pub use registry::ConfigRegistry;
pub use resolver::ConfigResolver;
pub use schema::{
    ApiConfig, DatabaseConfig, EnvironmentConfig, FeatureFlags, PerformanceConfig, WebConfig,
};
pub use validator::{ConfigValidator, ValidationReport, Violation};
