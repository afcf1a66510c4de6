//! Host-aware worker and shard sizing.
//!
//! The sizer reads the host's logical CPU count and total memory through a
//! [`SystemProbe`] and turns them into a recommended number of parallel
//! workers and test shards, bounded by a [`SizingPolicy`].
//!
//! # Examples
//!
//! ```
//! use testrig::resources::{ResourceSizer, SizingPolicy, StaticProbe};
//!
//! let probe = StaticProbe::new(8, 16 * 1024 * 1024 * 1024, "linux");
//! let sizer = ResourceSizer::with_probe(probe, SizingPolicy::default()).unwrap();
//!
//! assert_eq!(sizer.optimal_workers(), 6);
//! assert_eq!(sizer.optimal_shards(), 3);
//! ```

pub mod policy;
pub mod probe;
pub mod sizer;

#[cfg(test)]
mod proptests;

pub use policy::SizingPolicy;
pub use probe::{HostMetrics, HostProbe, StaticProbe, SystemProbe, SystemResourceSnapshot};
pub use sizer::{ResourceSizer, SystemInfo};
