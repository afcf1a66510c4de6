//! Environment names and per-environment variable overrides.
//!
//! The set of environments is closed: adding one means adding a variant
//! here and a built-in record in the registry.

use crate::config::registry::ConfigRegistry;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable that selects the active environment.
pub const TEST_ENV_VAR: &str = "TEST_ENV";

/// One of the fixed deployment targets a test run can point at.
///
/// # Examples
///
/// ```
/// use testrig::EnvironmentName;
///
/// let name: EnvironmentName = "pre-prod".parse().unwrap();
/// assert_eq!(name, EnvironmentName::PreProd);
/// assert_eq!(name.to_string(), "pre-prod");
/// assert!("staging".parse::<EnvironmentName>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnvironmentName {
    /// Local or shared development stack.
    #[serde(rename = "development")]
    Development,
    /// Pre-production staging stack.
    #[serde(rename = "pre-prod")]
    PreProd,
    /// Production.
    #[serde(rename = "prod")]
    Prod,
}

impl EnvironmentName {
    /// Every environment, in declaration order.
    pub const ALL: [Self; 3] = [Self::Development, Self::PreProd, Self::Prod];

    /// Environment used when `TEST_ENV` is unset or unrecognized.
    pub const DEFAULT: Self = Self::Development;

    /// The canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::PreProd => "pre-prod",
            Self::Prod => "prod",
        }
    }

    /// Prefix for this environment's override variables (`{PREFIX}_WEB_URL`).
    #[must_use]
    pub const fn override_prefix(self) -> &'static str {
        match self {
            Self::Development => "DEV",
            Self::PreProd => "PREPROD",
            Self::Prod => "PROD",
        }
    }

    /// Select an environment from an optional selector string.
    ///
    /// Exact matches return the named environment. Anything else, including
    /// a missing or empty selector, yields [`EnvironmentName::DEFAULT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use testrig::EnvironmentName;
    ///
    /// assert_eq!(EnvironmentName::from_selector(Some("prod")), EnvironmentName::Prod);
    /// assert_eq!(EnvironmentName::from_selector(Some("staging-typo")), EnvironmentName::Development);
    /// assert_eq!(EnvironmentName::from_selector(None), EnvironmentName::Development);
    /// ```
    #[must_use]
    pub fn from_selector(selector: Option<&str>) -> Self {
        selector
            .and_then(|s| s.parse().ok())
            .unwrap_or(Self::DEFAULT)
    }

    /// Select an environment from the `TEST_ENV` process variable.
    #[must_use]
    pub fn from_process_env() -> Self {
        Self::from_selector(env::var(TEST_ENV_VAR).ok().as_deref())
    }
}

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known environment names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEnvironment(pub String);

impl fmt::Display for UnknownEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown environment: {}", self.0)
    }
}

impl std::error::Error for UnknownEnvironment {}

impl FromStr for EnvironmentName {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownEnvironment(s.to_string()))
    }
}

/// Applies `{PREFIX}_WEB_URL`, `{PREFIX}_API_URL` and `{PREFIX}_DB_CONNECTION`
/// overrides to registry records.
///
/// Values are taken verbatim. Whether they form valid URLs is checked later
/// when a record is resolved.
pub struct EnvironmentOverrides;

impl EnvironmentOverrides {
    /// Apply overrides read from the process environment.
    pub fn apply(registry: &mut ConfigRegistry) {
        Self::apply_with(registry, |key| env::var(key).ok());
    }

    /// Apply overrides read through an arbitrary lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use testrig::config::{ConfigRegistry, EnvironmentOverrides};
    /// use testrig::EnvironmentName;
    ///
    /// let mut registry = ConfigRegistry::builtin();
    /// EnvironmentOverrides::apply_with(&mut registry, |key| {
    ///     (key == "PROD_API_URL").then(|| "https://api.example.com".to_string())
    /// });
    /// let prod = registry.get(EnvironmentName::Prod).unwrap();
    /// assert_eq!(prod.api.base_url, "https://api.example.com");
    /// ```
    pub fn apply_with<F>(registry: &mut ConfigRegistry, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for (name, config) in registry.entries_mut() {
            let prefix = name.override_prefix();

            if let Some(url) = lookup(&format!("{prefix}_WEB_URL")) {
                config.web.base_url = url;
            }
            if let Some(url) = lookup(&format!("{prefix}_API_URL")) {
                config.api.base_url = url;
            }
            if let Some(conn) = lookup(&format!("{prefix}_DB_CONNECTION")) {
                config.database.connection_string = conn;
            }
        }
    }
}
