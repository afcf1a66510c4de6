//! The environment configuration registry.
//!
//! A [`ConfigRegistry`] maps each [`EnvironmentName`] to its
//! [`EnvironmentConfig`]. It is built once by whoever bootstraps the run and
//! then handed to a [`ConfigResolver`](crate::config::ConfigResolver); there
//! is no process-wide instance.

use crate::config::environment::{EnvironmentName, EnvironmentOverrides};
use crate::config::schema::{
    ApiConfig, DatabaseConfig, EnvironmentConfig, FeatureFlags, PerformanceConfig, WebConfig,
};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Immutable mapping from environment name to configuration record.
///
/// # Examples
///
/// ```
/// use testrig::config::ConfigRegistry;
/// use testrig::EnvironmentName;
///
/// let registry = ConfigRegistry::builtin();
/// assert_eq!(registry.len(), 3);
/// assert!(registry.get(EnvironmentName::Prod).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigRegistry {
    entries: BTreeMap<EnvironmentName, EnvironmentConfig>,
}

impl ConfigRegistry {
    /// Build a registry from explicit entries.
    ///
    /// Later entries for the same name replace earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (EnvironmentName, EnvironmentConfig)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The built-in defaults for every known environment.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(
            EnvironmentName::ALL
                .into_iter()
                .map(|name| (name, builtin_config(name))),
        )
    }

    /// Built-in defaults with `{PREFIX}_*` overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let mut registry = Self::builtin();
        EnvironmentOverrides::apply(&mut registry);
        registry
    }

    /// Apply overrides through `lookup` and return the updated registry.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        EnvironmentOverrides::apply_with(&mut self, lookup);
        self
    }

    /// Look up the record for `name`.
    #[must_use]
    pub fn get(&self, name: EnvironmentName) -> Option<&EnvironmentConfig> {
        self.entries.get(&name)
    }

    /// Names with a registered record, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = EnvironmentName> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over all records.
    pub fn iter(&self) -> btree_map::Iter<'_, EnvironmentName, EnvironmentConfig> {
        self.entries.iter()
    }

    /// Number of registered environments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries_mut(
        &mut self,
    ) -> btree_map::IterMut<'_, EnvironmentName, EnvironmentConfig> {
        self.entries.iter_mut()
    }
}

impl<'a> IntoIterator for &'a ConfigRegistry {
    type Item = (&'a EnvironmentName, &'a EnvironmentConfig);
    type IntoIter = btree_map::Iter<'a, EnvironmentName, EnvironmentConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn default_api_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Accept".to_string(), "application/json".to_string()),
        (
            "Content-Type".to_string(),
            "application/json; charset=UTF-8".to_string(),
        ),
    ])
}

fn builtin_config(name: EnvironmentName) -> EnvironmentConfig {
    match name {
        EnvironmentName::Development => EnvironmentConfig {
            web: WebConfig {
                base_url: "https://www.saucedemo.com".to_string(),
                timeout_ms: 30_000,
                retries: 0,
            },
            api: ApiConfig {
                base_url: "https://jsonplaceholder.typicode.com".to_string(),
                timeout_ms: 10_000,
                retries: 1,
                headers: default_api_headers(),
            },
            database: DatabaseConfig {
                connection_string: "postgresql://localhost:5432/shop_dev".to_string(),
                timeout_ms: 5_000,
            },
            features: FeatureFlags {
                debug_logging: true,
                mocking_enabled: true,
                skip_auth: true,
                record_video: false,
            },
            performance: PerformanceConfig {
                workers: 2,
                max_concurrency: 4,
            },
        },
        EnvironmentName::PreProd => EnvironmentConfig {
            web: WebConfig {
                base_url: "https://preprod.saucedemo.com".to_string(),
                timeout_ms: 45_000,
                retries: 1,
            },
            api: ApiConfig {
                base_url: "https://jsonplaceholder.typicode.com".to_string(),
                timeout_ms: 15_000,
                retries: 2,
                headers: default_api_headers(),
            },
            database: DatabaseConfig {
                connection_string: "postgresql://preprod-db.internal:5432/shop".to_string(),
                timeout_ms: 10_000,
            },
            features: FeatureFlags {
                debug_logging: false,
                mocking_enabled: false,
                skip_auth: false,
                record_video: true,
            },
            performance: PerformanceConfig {
                workers: 4,
                max_concurrency: 8,
            },
        },
        EnvironmentName::Prod => EnvironmentConfig {
            web: WebConfig {
                base_url: "https://www.saucedemo.com".to_string(),
                timeout_ms: 60_000,
                retries: 2,
            },
            api: ApiConfig {
                base_url: "https://jsonplaceholder.typicode.com".to_string(),
                timeout_ms: 20_000,
                retries: 3,
                headers: default_api_headers(),
            },
            database: DatabaseConfig {
                connection_string: "postgresql://prod-db.internal:5432/shop".to_string(),
                timeout_ms: 15_000,
            },
            features: FeatureFlags {
                debug_logging: false,
                mocking_enabled: false,
                skip_auth: false,
                record_video: true,
            },
            performance: PerformanceConfig {
                workers: 6,
                max_concurrency: 12,
            },
        },
    }
}
