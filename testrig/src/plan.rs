//! Run plans for the test runner.
//!
//! A [`RunPlan`] bundles what the runner needs before any test starts: the
//! active environment, its validated configuration, and how many workers and
//! shards to use. On CI the environment's static `performance.workers` is
//! used so runs are reproducible; elsewhere the count is sized from the host.

use crate::config::{ConfigResolver, EnvironmentConfig, EnvironmentName};
use crate::error::Result;
use crate::resources::{ResourceSizer, SystemProbe};
use serde::Serialize;
use std::env;
use std::fmt;

/// Where the worker count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerSource {
    /// The environment's static `performance.workers`.
    Static,
    /// Sized from host CPU and memory.
    Host,
}

impl fmt::Display for WorkerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Host => write!(f, "host"),
        }
    }
}

/// Everything the runner needs to start a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunPlan {
    /// Active environment.
    pub environment: EnvironmentName,
    /// Validated configuration for that environment.
    pub config: EnvironmentConfig,
    /// Parallel workers.
    pub workers: u32,
    /// Where `workers` came from.
    pub worker_source: WorkerSource,
    /// Shards derived from `workers`.
    pub shards: u32,
    /// Test retries (`web.retries`).
    pub retries: i32,
}

impl RunPlan {
    /// Build a plan for the environment selected by `TEST_ENV`.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::ConfigNotFound`](crate::Error::ConfigNotFound) and
    /// [`Error::ConfigValidation`](crate::Error::ConfigValidation) from the resolver.
    pub fn build<P: SystemProbe>(
        resolver: &ConfigResolver,
        sizer: &ResourceSizer<P>,
        ci: bool,
    ) -> Result<Self> {
        Self::build_for(resolver.resolve_current_environment(), resolver, sizer, ci)
    }

    /// Build a plan for an explicit environment.
    ///
    /// # Errors
    ///
    /// See [`RunPlan::build`].
    ///
    /// # Examples
    ///
    /// ```
    /// use testrig::config::{ConfigRegistry, ConfigResolver};
    /// use testrig::resources::{ResourceSizer, SizingPolicy, StaticProbe};
    /// use testrig::{EnvironmentName, RunPlan};
    ///
    /// let resolver = ConfigResolver::new(ConfigRegistry::builtin());
    /// let sizer = ResourceSizer::with_probe(
    ///     StaticProbe::from_gib(8, 16.0, "linux"),
    ///     SizingPolicy::default(),
    /// )
    /// .unwrap();
    ///
    /// let plan = RunPlan::build_for(EnvironmentName::Prod, &resolver, &sizer, false).unwrap();
    /// assert_eq!(plan.workers, 6);
    /// assert_eq!(plan.shards, 3);
    /// ```
    pub fn build_for<P: SystemProbe>(
        environment: EnvironmentName,
        resolver: &ConfigResolver,
        sizer: &ResourceSizer<P>,
        ci: bool,
    ) -> Result<Self> {
        let config = resolver.config_for(environment)?.clone();

        let (workers, worker_source) = if ci {
            (config.performance.workers, WorkerSource::Static)
        } else {
            (sizer.optimal_workers(), WorkerSource::Host)
        };
        let shards = sizer.optimal_shards_for(workers);

        log::debug!("plan for {environment}: {workers} {worker_source} worker(s), {shards} shard(s)");

        Ok(Self {
            environment,
            retries: config.web.retries,
            config,
            workers,
            worker_source,
            shards,
        })
    }

    /// Build a plan, detecting CI from the `CI` variable.
    ///
    /// # Errors
    ///
    /// See [`RunPlan::build`].
    pub fn from_env<P: SystemProbe>(
        resolver: &ConfigResolver,
        sizer: &ResourceSizer<P>,
    ) -> Result<Self> {
        Self::build(resolver, sizer, is_ci(env::var("CI").ok().as_deref()))
    }
}

/// Whether a `CI` value means "running on CI".
///
/// Any non-empty value other than `0` or `false` counts.
#[must_use]
pub fn is_ci(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => false,
        Some(v) => !(v == "0" || v.eq_ignore_ascii_case("false")),
    }
}
