#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # testrig
//!
//! Environment configuration and worker sizing for end-to-end test runs.
//!
//! This library resolves which environment a test run targets, hands out a
//! validated configuration record for it, and sizes the runner's worker pool
//! from the host's CPU and memory.
//!
//! ## Core Types
//!
//! - [`EnvironmentName`] and [`ConfigRegistry`]: the closed set of environments and their records
//! - [`ConfigResolver`]: `TEST_ENV` detection and validated lookup
//! - [`ResourceSizer`] and [`SizingPolicy`]: worker and shard counts from host resources
//! - [`RunPlan`]: everything a runner needs before the first test starts
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: stderr diagnostics and the `log` backend
//!
//! ## Examples
//!
//! ```
//! use testrig::{ConfigRegistry, ConfigResolver, ResourceSizer, SizingPolicy};
//! use testrig::resources::StaticProbe;
//!
//! let resolver = ConfigResolver::new(ConfigRegistry::builtin());
//! let prod = resolver.get_config("prod").unwrap();
//! assert!(prod.api.retries >= 0);
//!
//! let sizer = ResourceSizer::with_probe(
//!     StaticProbe::from_gib(64, 256.0, "linux"),
//!     SizingPolicy::default(),
//! )
//! .unwrap();
//! assert_eq!(sizer.optimal_workers(), 16);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod plan;
pub mod resources;

// Re-export key types at crate root for convenience
pub use config::{ConfigRegistry, ConfigResolver, EnvironmentConfig, EnvironmentName};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use plan::{RunPlan, WorkerSource};
pub use resources::{ResourceSizer, SizingPolicy, SystemInfo, SystemResourceSnapshot};
