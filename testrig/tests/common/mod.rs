//! Common test utilities for integration tests.
//!
//! This module provides helpers for isolating environment variables and
//! building registries with deliberately broken records.

use std::env;

use testrig::{ConfigRegistry, EnvironmentConfig, EnvironmentName};

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this must be marked `#[serial]`: the process environment is
/// shared by every test thread.
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear every variable the library reads, restoring them afterwards.
#[allow(dead_code)]
pub fn clear_testrig_env_vars() -> Vec<EnvGuard> {
    let mut keys = vec![
        "TEST_ENV".to_string(),
        "CI".to_string(),
        "TESTRIG_UTILIZATION_FRACTION".to_string(),
        "TESTRIG_MEMORY_PER_WORKER_GIB".to_string(),
        "TESTRIG_MIN_WORKERS".to_string(),
        "TESTRIG_MAX_WORKERS".to_string(),
        "TESTRIG_SHARD_RATIO".to_string(),
    ];
    for name in EnvironmentName::ALL {
        let prefix = name.override_prefix();
        keys.push(format!("{prefix}_WEB_URL"));
        keys.push(format!("{prefix}_API_URL"));
        keys.push(format!("{prefix}_DB_CONNECTION"));
    }

    keys.iter().map(|k| EnvGuard::remove(k)).collect()
}

/// Built-in record for `name`, cloned for modification.
#[allow(dead_code)]
pub fn builtin_record(name: EnvironmentName) -> EnvironmentConfig {
    ConfigRegistry::builtin()
        .get(name)
        .expect("built-in registry covers every environment")
        .clone()
}

/// Built-in registry with the record for `name` replaced by `corrupt(record)`.
#[allow(dead_code)]
pub fn registry_with<F>(name: EnvironmentName, corrupt: F) -> ConfigRegistry
where
    F: FnOnce(&mut EnvironmentConfig),
{
    let mut record = builtin_record(name);
    corrupt(&mut record);
    ConfigRegistry::from_entries(
        EnvironmentName::ALL
            .into_iter()
            .filter(|n| *n != name)
            .map(|n| (n, builtin_record(n)))
            .chain(std::iter::once((name, record))),
    )
}
