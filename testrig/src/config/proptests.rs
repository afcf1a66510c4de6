//! Property-based tests for the configuration system.

use super::environment::EnvironmentName;
use super::registry::ConfigRegistry;
use super::resolver::ConfigResolver;
use super::schema::EnvironmentConfig;
use super::validator::ConfigValidator;
use crate::error::Error;
use proptest::prelude::*;

fn base_config() -> EnvironmentConfig {
    ConfigRegistry::builtin()
        .get(EnvironmentName::Development)
        .unwrap()
        .clone()
}

// Strategy for selector strings that are never environment names
fn unknown_selector_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ -]{0,24}"
        .prop_filter("must not be a known environment", |s| {
            s.parse::<EnvironmentName>().is_err()
        })
}

// Strategy for known environment names
fn known_name_strategy() -> impl Strategy<Value = EnvironmentName> {
    prop::sample::select(EnvironmentName::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Anything outside the closed set falls back to development
    #[test]
    fn unknown_selector_falls_back(selector in unknown_selector_strategy()) {
        prop_assert_eq!(
            EnvironmentName::from_selector(Some(&selector)),
            EnvironmentName::Development
        );
    }

    // Known names always select themselves
    #[test]
    fn known_selector_is_exact(name in known_name_strategy()) {
        prop_assert_eq!(EnvironmentName::from_selector(Some(name.as_str())), name);
    }

    // Lookup of any unknown name is ConfigNotFound carrying that name
    #[test]
    fn unknown_name_not_found(selector in unknown_selector_strategy()) {
        let resolver = ConfigResolver::new(ConfigRegistry::builtin());
        match resolver.get_config(&selector) {
            Err(Error::ConfigNotFound { name }) => prop_assert_eq!(name, selector),
            other => prop_assert!(false, "unexpected result: {:?}", other),
        }
    }

    // Non-positive timeouts are always rejected
    #[test]
    fn non_positive_timeout_rejected(timeout in i64::MIN..=0, on_api in any::<bool>()) {
        let mut config = base_config();
        if on_api {
            config.api.timeout_ms = timeout;
        } else {
            config.web.timeout_ms = timeout;
        }
        prop_assert!(!ConfigValidator::is_valid(&config));
    }

    // Positive timeouts and non-negative retries are always accepted
    #[test]
    fn in_range_values_accepted(
        web_timeout in 1i64..=i64::MAX,
        api_timeout in 1i64..=i64::MAX,
        web_retries in 0i32..=i32::MAX,
        api_retries in 0i32..=i32::MAX
    ) {
        let mut config = base_config();
        config.web.timeout_ms = web_timeout;
        config.api.timeout_ms = api_timeout;
        config.web.retries = web_retries;
        config.api.retries = api_retries;
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // Negative retries are always rejected
    #[test]
    fn negative_retries_rejected(retries in i32::MIN..0, on_api in any::<bool>()) {
        let mut config = base_config();
        if on_api {
            config.api.retries = retries;
        } else {
            config.web.retries = retries;
        }
        prop_assert!(!ConfigValidator::is_valid(&config));
    }

    // Fail-fast validation agrees with the first entry of the full report
    #[test]
    fn validate_matches_report_head(
        timeout in -10i64..10,
        retries in -3i32..3,
        blank_web in any::<bool>()
    ) {
        let mut config = base_config();
        config.web.timeout_ms = timeout;
        config.api.retries = retries;
        if blank_web {
            config.web.base_url.clear();
        }

        let report = ConfigValidator::report(&config);
        match (ConfigValidator::validate(&config), report.violations().first()) {
            (Ok(()), None) => {}
            (Err(Error::ConfigValidation { field, .. }), Some(first)) => {
                prop_assert_eq!(field, first.field.clone());
            }
            (result, first) => prop_assert!(false, "mismatch: {:?} vs {:?}", result, first),
        }
    }
}
