//! Configuration schema definitions.
//!
//! This module defines the per-environment configuration record consumed by
//! test fixtures: web and API endpoints, the database passthrough, feature
//! flags and the static CI performance settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete configuration for one environment.
///
/// Records are built once at startup and never mutated after they are handed
/// to a resolver.
///
/// # Examples
///
/// ```
/// use testrig::config::ConfigRegistry;
/// use testrig::EnvironmentName;
///
/// let registry = ConfigRegistry::builtin();
/// let dev = registry.get(EnvironmentName::Development).unwrap();
/// assert!(dev.web.timeout_ms > 0);
/// assert!(dev.features.debug_logging);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// UI target settings.
    pub web: WebConfig,

    /// REST API target settings.
    pub api: ApiConfig,

    /// Database connection passthrough.
    pub database: DatabaseConfig,

    /// Feature toggles.
    pub features: FeatureFlags,

    /// Static worker settings for fixed (CI) execution.
    pub performance: PerformanceConfig,
}

/// Web UI endpoint settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WebConfig {
    /// Absolute base URL of the site under test.
    pub base_url: String,

    /// Navigation/action timeout in milliseconds.
    pub timeout_ms: i64,

    /// Number of retries for a failing test.
    pub retries: i32,
}

/// REST API endpoint settings.
///
/// # Examples
///
/// ```
/// use testrig::config::ApiConfig;
/// use std::collections::BTreeMap;
///
/// let api = ApiConfig {
///     base_url: "https://jsonplaceholder.typicode.com".to_string(),
///     timeout_ms: 10_000,
///     retries: 1,
///     headers: BTreeMap::from([("Accept".to_string(), "application/json".to_string())]),
/// };
/// assert_eq!(api.headers.len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Absolute base URL of the API.
    pub base_url: String,

    /// Request timeout in milliseconds.
    pub timeout_ms: i64,

    /// Number of retries for a failing request.
    pub retries: i32,

    /// Default headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// Database connection settings. Not validated.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Driver-specific connection string.
    pub connection_string: String,

    /// Connection timeout in milliseconds.
    pub timeout_ms: i64,
}

/// Named boolean feature flags.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FeatureFlags {
    /// Verbose logging in fixtures.
    #[serde(default)]
    pub debug_logging: bool,

    /// Serve mocked API responses instead of hitting the real API.
    #[serde(default)]
    pub mocking_enabled: bool,

    /// Bypass the login flow.
    #[serde(default)]
    pub skip_auth: bool,

    /// Record video for each test.
    #[serde(default)]
    pub record_video: bool,
}

/// Static worker settings used when the run is not sized from host resources.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Fixed number of parallel workers.
    pub workers: u32,

    /// Upper bound on concurrently running tests.
    pub max_concurrency: u32,
}
