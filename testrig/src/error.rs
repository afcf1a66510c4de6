//! Error types for the testrig library.
//!
//! This module provides the error hierarchy for configuration resolution
//! and resource sizing, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a testrig error.
///
/// # Examples
///
/// ```
/// use testrig::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the testrig library.
///
/// `ConfigNotFound` and `ConfigValidation` are startup-fatal: they describe
/// a defect in the requested name or in the static configuration data and
/// retrying can never make them succeed.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested environment has no configuration in the registry.
    #[error("configuration not found for environment '{name}'")]
    ConfigNotFound {
        /// The environment name that was requested.
        name: String,
    },

    /// A registered configuration violates one of its invariants.
    #[error("invalid configuration: {field}: {message}")]
    ConfigValidation {
        /// The field that violated the invariant (e.g. `web.timeout_ms`).
        field: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// An override or policy value could not be parsed or is out of range.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field or environment variable that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a missing environment configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use testrig::Error;
    ///
    /// let err = Error::ConfigNotFound { name: "qa".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. })
    }

    /// Check if error is an invariant violation in a configuration record.
    ///
    /// # Examples
    ///
    /// ```
    /// use testrig::Error;
    ///
    /// let err = Error::ConfigValidation {
    ///     field: "web.timeout_ms".into(),
    ///     message: "Invalid timeout value".into(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ConfigValidation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_error() {
        let err = Error::ConfigNotFound {
            name: "qa".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("configuration not found"));
        assert!(display.contains("'qa'"));
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_config_validation_error() {
        let err = Error::ConfigValidation {
            field: "web.timeout_ms".to_string(),
            message: "Invalid timeout value".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("web.timeout_ms"));
        assert!(display.contains("Invalid timeout value"));
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "TESTRIG_MIN_WORKERS".to_string(),
            message: "Must be a positive integer".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("TESTRIG_MIN_WORKERS"));
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/missing/environments.yaml"),
            reason: "does not exist".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/missing/environments.yaml"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(format!("{err}").contains("configuration error"));
    }
}
