//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including registry loading, sizer construction and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use testrig::config::ConfigLoader;
use testrig::resources::HostProbe;
use testrig::{ConfigRegistry, ConfigResolver, Logger, ResourceSizer, SizingPolicy};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Registry file replacing the built-in records.
    pub config_file: Option<PathBuf>,

    /// Stderr logger at the resolved level.
    pub logger: Logger,
}

/// Output format shared by the reporting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

/// Load the environment registry.
///
/// Records come from `--config-file` when given, otherwise from the built-in
/// set. Per-environment override variables apply in both cases.
pub fn load_registry(global: &GlobalOptions) -> Result<ConfigRegistry, CliError> {
    let registry = match global.config_file {
        Some(ref path) => {
            global
                .logger
                .debug(&format!("Loading environments from {}", path.display()));
            ConfigLoader::load_file(path)?.with_overrides(|key| env::var(key).ok())
        }
        None => ConfigRegistry::from_env(),
    };

    Ok(registry)
}

/// Build a resolver over the loaded registry.
pub fn load_resolver(global: &GlobalOptions) -> Result<ConfigResolver, CliError> {
    Ok(ConfigResolver::new(load_registry(global)?))
}

/// Build a sizer for this host, honoring policy overrides from the environment.
pub fn host_sizer() -> Result<ResourceSizer<HostProbe>, CliError> {
    let policy = SizingPolicy::from_env()?;
    Ok(ResourceSizer::with_probe(HostProbe, policy)?)
}

/// Render a value as JSON or YAML, or through `human` for text output.
pub fn render<T, F>(format: OutputFormat, value: &T, human: F) -> Result<String, CliError>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Human => Ok(human(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?.trim_end().to_string()),
    }
}
