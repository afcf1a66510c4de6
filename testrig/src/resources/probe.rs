//! Host introspection.

use serde::Serialize;
use sysinfo::System;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Raw values reported by a [`SystemProbe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostMetrics {
    /// Logical CPU cores.
    pub cpu_count: usize,
    /// Total physical memory in bytes.
    pub total_memory_bytes: u64,
    /// Platform identifier such as `linux` or `macos`.
    pub platform_name: String,
}

/// Source of host metrics.
///
/// Implementations are expected to always succeed; a host that cannot report
/// its CPUs or memory is not a modeled condition.
#[cfg_attr(test, mockall::automock)]
pub trait SystemProbe {
    /// Read the current host metrics.
    fn read(&self) -> HostMetrics;
}

/// Reads metrics from the machine the process runs on.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl SystemProbe for HostProbe {
    fn read(&self) -> HostMetrics {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu();

        let cpu_count = match sys.cpus().len() {
            0 => {
                let fallback =
                    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
                log::warn!("sysinfo reported no CPUs; using {fallback} from the scheduler");
                fallback
            }
            n => n,
        };

        HostMetrics {
            cpu_count,
            total_memory_bytes: sys.total_memory(),
            platform_name: std::env::consts::OS.to_string(),
        }
    }
}

/// Returns fixed metrics. Useful for previews and tests.
///
/// # Examples
///
/// ```
/// use testrig::resources::{StaticProbe, SystemProbe};
///
/// let probe = StaticProbe::new(4, 8 * 1024 * 1024 * 1024, "linux");
/// assert_eq!(probe.read().cpu_count, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticProbe {
    metrics: HostMetrics,
}

impl StaticProbe {
    /// Create a probe that always reports the given values.
    pub fn new(cpu_count: usize, total_memory_bytes: u64, platform_name: impl Into<String>) -> Self {
        Self {
            metrics: HostMetrics {
                cpu_count,
                total_memory_bytes,
                platform_name: platform_name.into(),
            },
        }
    }

    /// Create a probe from a memory size in GiB.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_gib(cpu_count: usize, total_memory_gib: f64, platform_name: &str) -> Self {
        Self::new(
            cpu_count,
            (total_memory_gib.max(0.0) * BYTES_PER_GIB) as u64,
            platform_name,
        )
    }
}

impl SystemProbe for StaticProbe {
    fn read(&self) -> HostMetrics {
        self.metrics.clone()
    }
}

/// Point-in-time view of host resources.
///
/// Captured fresh for every query and never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemResourceSnapshot {
    /// Logical CPU cores, at least 1.
    pub cpu_count: usize,
    /// Total memory in GiB (`bytes / 1024^3`).
    pub total_memory_gib: f64,
    /// Platform identifier.
    pub platform_name: String,
}

impl From<HostMetrics> for SystemResourceSnapshot {
    #[allow(clippy::cast_precision_loss)]
    fn from(metrics: HostMetrics) -> Self {
        Self {
            cpu_count: metrics.cpu_count.max(1),
            total_memory_gib: metrics.total_memory_bytes as f64 / BYTES_PER_GIB,
            platform_name: metrics.platform_name,
        }
    }
}
