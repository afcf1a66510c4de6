//! Configuration validation.
//!
//! A record must never reach a caller with a broken base URL, a non-positive
//! timeout or negative retries. Validation runs the checks in a fixed order
//! and either reports the first violation ([`ConfigValidator::validate`]) or
//! all of them ([`ConfigValidator::report`]).

use crate::config::schema::EnvironmentConfig;
use crate::error::{Error, Result};
use std::fmt;
use url::Url;

/// One violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The offending field, e.g. `api.retries`.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl Violation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Self::ConfigValidation {
            field: v.field,
            message: v.message,
        }
    }
}

/// All violations found in a record, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Whether no invariant was violated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations, in check order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Convert to a result carrying the first violation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] for the first violation, if any.
    pub fn into_result(self) -> Result<()> {
        match self.violations.into_iter().next() {
            Some(first) => Err(first.into()),
            None => Ok(()),
        }
    }
}

/// Validates [`EnvironmentConfig`] records.
///
/// # Examples
///
/// ```
/// use testrig::config::{ConfigRegistry, ConfigValidator};
/// use testrig::EnvironmentName;
///
/// let registry = ConfigRegistry::builtin();
/// let mut config = registry.get(EnvironmentName::Development).unwrap().clone();
/// assert!(ConfigValidator::validate(&config).is_ok());
///
/// config.web.timeout_ms = 0;
/// assert!(ConfigValidator::validate(&config).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a record, reporting the first violated check.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] naming the violated invariant.
    pub fn validate(config: &EnvironmentConfig) -> Result<()> {
        Self::report(config).into_result()
    }

    /// Run every check and collect all violations.
    #[must_use]
    pub fn report(config: &EnvironmentConfig) -> ValidationReport {
        let web = &config.web;
        let api = &config.api;
        let mut violations = Vec::new();

        let web_present = !web.base_url.trim().is_empty();
        let api_present = !api.base_url.trim().is_empty();
        if !web_present {
            violations.push(Violation::new("web.base_url", "Base URL is required"));
        }
        if !api_present {
            violations.push(Violation::new("api.base_url", "Base URL is required"));
        }

        // A missing URL is not reported a second time as unparseable.
        if web_present {
            violations.extend(Self::check_absolute_url("web.base_url", &web.base_url));
        }
        if api_present {
            violations.extend(Self::check_absolute_url("api.base_url", &api.base_url));
        }

        violations.extend(
            Self::check_timeout("web.timeout_ms", web.timeout_ms)
                .or_else(|| Self::check_timeout("api.timeout_ms", api.timeout_ms)),
        );
        violations.extend(
            Self::check_retries("web.retries", web.retries)
                .or_else(|| Self::check_retries("api.retries", api.retries)),
        );

        ValidationReport { violations }
    }

    /// Boolean form of [`ConfigValidator::validate`].
    #[must_use]
    pub fn is_valid(config: &EnvironmentConfig) -> bool {
        Self::report(config).is_valid()
    }

    fn check_absolute_url(field: &str, value: &str) -> Option<Violation> {
        // Url::parse strips surrounding whitespace, so padded values are checked first.
        if value.trim() != value {
            return Some(Violation::new(
                field,
                format!("Invalid URL '{value}': leading or trailing whitespace"),
            ));
        }
        // Url::parse rejects relative references, so success means absolute.
        match Url::parse(value) {
            Ok(url) if url.cannot_be_a_base() => Some(Violation::new(
                field,
                format!("Invalid URL '{value}': cannot be used as a base URL"),
            )),
            Ok(_) => None,
            Err(e) => Some(Violation::new(field, format!("Invalid URL '{value}': {e}"))),
        }
    }

    fn check_timeout(field: &str, timeout_ms: i64) -> Option<Violation> {
        (timeout_ms <= 0).then(|| {
            Violation::new(
                field,
                format!("Invalid timeout value: {timeout_ms} (must be > 0)"),
            )
        })
    }

    fn check_retries(field: &str, retries: i32) -> Option<Violation> {
        (retries < 0).then(|| {
            Violation::new(
                field,
                format!("Invalid retries value: {retries} (must be >= 0)"),
            )
        })
    }
}
