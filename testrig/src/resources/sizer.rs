//! Worker and shard calculation.

use crate::error::Result;
use crate::resources::policy::SizingPolicy;
use crate::resources::probe::{HostProbe, SystemProbe, SystemResourceSnapshot};
use serde::Serialize;

/// Diagnostic summary of host resources and the derived counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemInfo {
    /// Logical CPU cores.
    pub cpu_count: usize,
    /// Total memory in GiB, rounded to two decimals.
    pub total_memory_gib: f64,
    /// Platform identifier.
    pub platform_name: String,
    /// Recommended parallel workers.
    pub optimal_workers: u32,
    /// Recommended shards.
    pub optimal_shards: u32,
}

/// Computes worker and shard counts from host resources.
///
/// Every query reads the probe again; nothing is cached between calls.
///
/// # Examples
///
/// ```
/// use testrig::resources::{ResourceSizer, SizingPolicy, StaticProbe};
///
/// // Two cores and 1 GiB: the memory bound is 0, the lower bound wins.
/// let probe = StaticProbe::from_gib(2, 1.0, "linux");
/// let sizer = ResourceSizer::with_probe(probe, SizingPolicy::default()).unwrap();
/// assert_eq!(sizer.optimal_workers(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceSizer<P = HostProbe> {
    probe: P,
    policy: SizingPolicy,
}

impl ResourceSizer<HostProbe> {
    /// Sizer for the current host with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            probe: HostProbe,
            policy: SizingPolicy::default(),
        }
    }
}

impl Default for ResourceSizer<HostProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SystemProbe> ResourceSizer<P> {
    /// Sizer over an arbitrary probe and policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) if the policy is invalid.
    pub fn with_probe(probe: P, policy: SizingPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { probe, policy })
    }

    /// The policy in use.
    #[must_use]
    pub fn policy(&self) -> &SizingPolicy {
        &self.policy
    }

    /// Read host resources now.
    pub fn capture_snapshot(&self) -> SystemResourceSnapshot {
        SystemResourceSnapshot::from(self.probe.read())
    }

    /// Recommended workers for a given snapshot.
    ///
    /// `min(floor(cpus * utilization), floor(memory / per_worker))`, clamped
    /// to `[min_workers, max_workers]`. On memory-starved hosts the result is
    /// still `min_workers`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn optimal_workers_for(&self, snapshot: &SystemResourceSnapshot) -> u32 {
        let cpu_bound = (snapshot.cpu_count as f64 * self.policy.utilization_fraction).floor();
        let memory_bound = (snapshot.total_memory_gib / self.policy.memory_per_worker_gib).floor();

        // Float to int casts saturate, so huge hosts land on max_workers.
        let raw = cpu_bound.min(memory_bound) as u32;
        let workers = raw.max(self.policy.min_workers).min(self.policy.max_workers);

        log::debug!(
            "sizing: cpu_bound={cpu_bound} memory_bound={memory_bound} workers={workers}"
        );
        workers
    }

    /// Recommended workers for the host as it is now.
    pub fn optimal_workers(&self) -> u32 {
        self.optimal_workers_for(&self.capture_snapshot())
    }

    /// Shards for a worker count: `max(1, floor(workers * shard_ratio))`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn optimal_shards_for(&self, workers: u32) -> u32 {
        let shards = (f64::from(workers) * self.policy.shard_ratio).floor() as u32;
        shards.max(1)
    }

    /// Shards for the host as it is now.
    pub fn optimal_shards(&self) -> u32 {
        self.optimal_shards_for(self.optimal_workers())
    }

    /// Fresh snapshot plus derived counts, for diagnostics.
    pub fn system_info(&self) -> SystemInfo {
        let snapshot = self.capture_snapshot();
        let optimal_workers = self.optimal_workers_for(&snapshot);

        SystemInfo {
            cpu_count: snapshot.cpu_count,
            total_memory_gib: (snapshot.total_memory_gib * 100.0).round() / 100.0,
            platform_name: snapshot.platform_name,
            optimal_workers,
            optimal_shards: self.optimal_shards_for(optimal_workers),
        }
    }
}
