//! Sizing policy knobs.

use crate::error::{Error, Result};
use serde::Serialize;
use std::env;

/// Bounds and ratios used to turn host resources into worker counts.
///
/// The defaults are tuning values, not derived constants; override them per
/// host or CI runner via `TESTRIG_*` variables (see [`SizingPolicy::from_env`]).
///
/// # Examples
///
/// ```
/// use testrig::resources::SizingPolicy;
///
/// let policy = SizingPolicy::default();
/// assert_eq!(policy.min_workers, 2);
/// assert_eq!(policy.max_workers, 16);
/// policy.validate().unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizingPolicy {
    /// Fraction of logical CPUs given to workers.
    pub utilization_fraction: f64,
    /// Memory headroom each worker needs, in GiB.
    pub memory_per_worker_gib: f64,
    /// Lower bound on workers. Always wins over the memory signal.
    pub min_workers: u32,
    /// Upper bound on workers.
    pub max_workers: u32,
    /// Shards per worker.
    pub shard_ratio: f64,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            utilization_fraction: 0.75,
            memory_per_worker_gib: 2.0,
            min_workers: 2,
            max_workers: 16,
            shard_ratio: 0.5,
        }
    }
}

impl SizingPolicy {
    /// Default policy with overrides from the process environment.
    ///
    /// Reads `TESTRIG_UTILIZATION_FRACTION`, `TESTRIG_MEMORY_PER_WORKER_GIB`,
    /// `TESTRIG_MIN_WORKERS`, `TESTRIG_MAX_WORKERS` and `TESTRIG_SHARD_RATIO`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable does not parse or the
    /// resulting policy is invalid.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, then validate.
    ///
    /// # Errors
    ///
    /// See [`SizingPolicy::from_env`].
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TESTRIG_UTILIZATION_FRACTION") {
            self.utilization_fraction = parse_number("TESTRIG_UTILIZATION_FRACTION", &v)?;
        }
        if let Some(v) = lookup("TESTRIG_MEMORY_PER_WORKER_GIB") {
            self.memory_per_worker_gib = parse_number("TESTRIG_MEMORY_PER_WORKER_GIB", &v)?;
        }
        if let Some(v) = lookup("TESTRIG_MIN_WORKERS") {
            self.min_workers = parse_number("TESTRIG_MIN_WORKERS", &v)?;
        }
        if let Some(v) = lookup("TESTRIG_MAX_WORKERS") {
            self.max_workers = parse_number("TESTRIG_MAX_WORKERS", &v)?;
        }
        if let Some(v) = lookup("TESTRIG_SHARD_RATIO") {
            self.shard_ratio = parse_number("TESTRIG_SHARD_RATIO", &v)?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Check that the policy can produce sensible counts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for non-positive or non-finite ratios,
    /// a zero lower bound, or a lower bound above the upper bound.
    pub fn validate(&self) -> Result<()> {
        check_ratio("utilization_fraction", self.utilization_fraction)?;
        check_ratio("memory_per_worker_gib", self.memory_per_worker_gib)?;
        check_ratio("shard_ratio", self.shard_ratio)?;

        if self.min_workers == 0 {
            return Err(Error::Validation {
                field: "min_workers".into(),
                message: "Must be > 0".into(),
            });
        }
        if self.min_workers > self.max_workers {
            return Err(Error::Validation {
                field: "max_workers".into(),
                message: format!(
                    "max_workers ({}) must be >= min_workers ({})",
                    self.max_workers, self.min_workers
                ),
            });
        }
        Ok(())
    }
}

fn check_ratio(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::Validation {
            field: field.into(),
            message: format!("Must be a finite number > 0, got {value}"),
        })
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::Validation {
        field: field.into(),
        message: format!("Invalid number: '{value}'"),
    })
}
