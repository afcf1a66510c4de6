//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `env`: Print the active environment name
//! - `show_config`: Show the configuration for an environment
//! - `validate`: Validate environment configurations
//! - `workers`: Print the recommended worker count
//! - `shards`: Print the recommended shard count
//! - `system_info`: Show host resources and derived counts
//! - `plan`: Show the full run plan
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod env;
pub mod plan;
pub mod shards;
pub mod show_config;
pub mod system_info;
pub mod validate;
pub mod workers;

pub use completions::CompletionsCommand;
pub use env::EnvCommand;
pub use plan::PlanCommand;
pub use shards::ShardsCommand;
pub use show_config::ShowConfigCommand;
pub use system_info::SystemInfoCommand;
pub use validate::ValidateCommand;
pub use workers::WorkersCommand;
