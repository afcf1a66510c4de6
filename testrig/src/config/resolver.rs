//! Environment selection and validated configuration lookup.
//!
//! Selecting the environment is permissive: an unset or unknown `TEST_ENV`
//! quietly means `development`. Looking up a configuration is strict: an
//! unknown name or a malformed record is a hard error. The fallback is
//! intentional and must not become an error.

use crate::config::environment::EnvironmentName;
use crate::config::registry::ConfigRegistry;
use crate::config::schema::EnvironmentConfig;
use crate::config::validator::{ConfigValidator, ValidationReport};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Resolves environment names to validated configuration records.
///
/// # Examples
///
/// ```
/// use testrig::config::{ConfigRegistry, ConfigResolver};
///
/// let resolver = ConfigResolver::new(ConfigRegistry::builtin());
/// let prod = resolver.get_config("prod").unwrap();
/// assert!(prod.web.base_url.starts_with("https://"));
///
/// let err = resolver.get_config("qa").unwrap_err();
/// assert!(err.is_not_found());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    registry: Arc<ConfigRegistry>,
}

impl ConfigResolver {
    /// Create a resolver owning `registry`.
    #[must_use]
    pub fn new(registry: ConfigRegistry) -> Self {
        Self::shared(Arc::new(registry))
    }

    /// Create a resolver over a registry shared with other components.
    #[must_use]
    pub fn shared(registry: Arc<ConfigRegistry>) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    /// The environment selected by `TEST_ENV`, or `development`.
    ///
    /// Never fails and never logs.
    #[must_use]
    pub fn resolve_current_environment(&self) -> EnvironmentName {
        EnvironmentName::from_process_env()
    }

    /// Look up and validate the configuration for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if `name` is not a known environment
    /// or has no record, and [`Error::ConfigValidation`] if the record
    /// violates an invariant.
    pub fn get_config(&self, name: &str) -> Result<&EnvironmentConfig> {
        let env_name: EnvironmentName = name.parse().map_err(|_| Error::ConfigNotFound {
            name: name.to_string(),
        })?;
        self.config_for(env_name)
    }

    /// Typed form of [`ConfigResolver::get_config`].
    ///
    /// # Errors
    ///
    /// See [`ConfigResolver::get_config`].
    pub fn config_for(&self, name: EnvironmentName) -> Result<&EnvironmentConfig> {
        let config = self.registry.get(name).ok_or_else(|| Error::ConfigNotFound {
            name: name.to_string(),
        })?;

        ConfigValidator::validate(config)?;
        log::debug!("resolved configuration for {name}");
        Ok(config)
    }

    /// Configuration for the environment selected by `TEST_ENV`.
    ///
    /// # Errors
    ///
    /// See [`ConfigResolver::get_config`].
    pub fn current_config(&self) -> Result<&EnvironmentConfig> {
        self.config_for(self.resolve_current_environment())
    }

    /// Validation reports for every registered record.
    #[must_use]
    pub fn validate_all(&self) -> Vec<(EnvironmentName, ValidationReport)> {
        self.registry
            .iter()
            .map(|(name, config)| (*name, ConfigValidator::report(config)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::TEST_ENV_VAR;
    use serial_test::serial;
    use std::env;

    struct EnvGuard {
        key: &'static str,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self { key, old_value }
        }

        fn remove(key: &'static str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self { key, old_value }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }

    fn corrupted_registry() -> ConfigRegistry {
        let mut prod = ConfigRegistry::builtin()
            .get(EnvironmentName::Prod)
            .unwrap()
            .clone();
        prod.web.timeout_ms = -5;
        ConfigRegistry::from_entries([(EnvironmentName::Prod, prod)])
    }

    #[test]
    fn test_get_config_every_environment() {
        let resolver = ConfigResolver::new(ConfigRegistry::builtin());
        for name in EnvironmentName::ALL {
            assert!(resolver.get_config(name.as_str()).is_ok(), "{name}");
            assert!(resolver.config_for(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_get_config_prod() {
        let resolver = ConfigResolver::new(ConfigRegistry::builtin());
        let prod = resolver.get_config("prod").unwrap();
        assert!(url::Url::parse(&prod.web.base_url).is_ok());
        assert!(prod.api.retries >= 0);
    }

    #[test]
    fn test_get_config_unknown_name() {
        let resolver = ConfigResolver::new(ConfigRegistry::builtin());
        for name in ["qa", "nonexistent", "", "PROD"] {
            match resolver.get_config(name) {
                Err(Error::ConfigNotFound { name: n }) => assert_eq!(n, name),
                other => panic!("expected ConfigNotFound for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_get_config_missing_entry() {
        let resolver = ConfigResolver::new(corrupted_registry());
        let err = resolver.config_for(EnvironmentName::Development).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("development"));
    }

    #[test]
    fn test_get_config_corrupted_record() {
        let resolver = ConfigResolver::new(corrupted_registry());
        match resolver.get_config("prod") {
            Err(Error::ConfigValidation { field, message }) => {
                assert_eq!(field, "web.timeout_ms");
                assert!(message.contains("Invalid timeout value"));
            }
            other => panic!("expected ConfigValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_all() {
        let resolver = ConfigResolver::new(corrupted_registry());
        let reports = resolver.validate_all();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, EnvironmentName::Prod);
        assert!(!reports[0].1.is_valid());

        let resolver = ConfigResolver::new(ConfigRegistry::builtin());
        assert!(resolver.validate_all().iter().all(|(_, r)| r.is_valid()));
    }

    #[test]
    fn test_shared_registry() {
        let registry = Arc::new(ConfigRegistry::builtin());
        let a = ConfigResolver::shared(Arc::clone(&registry));
        let b = ConfigResolver::shared(Arc::clone(&registry));
        assert!(std::ptr::eq(a.registry(), b.registry()));
    }

    #[test]
    #[serial]
    fn test_resolve_current_environment_unset() {
        let _guard = EnvGuard::remove(TEST_ENV_VAR);
        let resolver = ConfigResolver::new(ConfigRegistry::builtin());
        assert_eq!(
            resolver.resolve_current_environment(),
            EnvironmentName::Development
        );
    }

    #[test]
    #[serial]
    fn test_resolve_current_environment_empty() {
        let _guard = EnvGuard::set(TEST_ENV_VAR, "");
        let resolver = ConfigResolver::new(ConfigRegistry::builtin());
        assert_eq!(
            resolver.resolve_current_environment(),
            EnvironmentName::Development
        );
    }

    #[test]
    #[serial]
    fn test_resolve_current_environment_typo() {
        let _guard = EnvGuard::set(TEST_ENV_VAR, "staging-typo");
        let resolver = ConfigResolver::new(ConfigRegistry::builtin());
        assert_eq!(
            resolver.resolve_current_environment(),
            EnvironmentName::Development
        );
    }

    #[test]
    #[serial]
    fn test_resolve_current_environment_prod() {
        let _guard = EnvGuard::set(TEST_ENV_VAR, "prod");
        let resolver = ConfigResolver::new(ConfigRegistry::builtin());
        assert_eq!(resolver.resolve_current_environment(), EnvironmentName::Prod);
        assert_eq!(
            resolver.current_config().unwrap(),
            ConfigRegistry::builtin().get(EnvironmentName::Prod).unwrap()
        );
    }
}
