//! Show-config command implementation.
//!
//! This module implements the `show-config` command, which prints the
//! validated configuration for the active or a named environment.

use crate::error::CliError;
use crate::utils::{load_resolver, render, GlobalOptions, OutputFormat};
use clap::Args;
use std::fmt::Write;
use testrig::{EnvironmentConfig, EnvironmentName};

/// Show the configuration for an environment.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Environment to show (defaults to the one selected by TEST_ENV)
    #[arg(long, value_name = "NAME")]
    pub env: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: OutputFormat,
}

impl ShowConfigCommand {
    /// Execute the show-config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;

        // An explicit name is strict; the implicit one falls back to development
        let (name, config) = match self.env {
            Some(ref name) => (name.clone(), resolver.get_config(name)?),
            None => {
                let name = resolver.resolve_current_environment();
                (name.to_string(), resolver.config_for(name)?)
            }
        };

        let output = render(self.format, config, |c| format_config(&name, c))?;
        println!("{output}");
        Ok(())
    }
}

/// Human-readable rendering of one environment record.
pub fn format_config(name: &str, config: &EnvironmentConfig) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Environment: {name}");
    let _ = writeln!(out, "Web:");
    let _ = writeln!(out, "  Base URL:   {}", config.web.base_url);
    let _ = writeln!(out, "  Timeout:    {} ms", config.web.timeout_ms);
    let _ = writeln!(out, "  Retries:    {}", config.web.retries);
    let _ = writeln!(out, "API:");
    let _ = writeln!(out, "  Base URL:   {}", config.api.base_url);
    let _ = writeln!(out, "  Timeout:    {} ms", config.api.timeout_ms);
    let _ = writeln!(out, "  Retries:    {}", config.api.retries);
    for (header, value) in &config.api.headers {
        let _ = writeln!(out, "  Header:     {header}: {value}");
    }
    let _ = writeln!(out, "Database:");
    let _ = writeln!(out, "  Connection: {}", config.database.connection_string);
    let _ = writeln!(out, "  Timeout:    {} ms", config.database.timeout_ms);
    let _ = writeln!(out, "Features:");
    let _ = writeln!(out, "  Debug logging:   {}", config.features.debug_logging);
    let _ = writeln!(out, "  Mocking enabled: {}", config.features.mocking_enabled);
    let _ = writeln!(out, "  Skip auth:       {}", config.features.skip_auth);
    let _ = writeln!(out, "  Record video:    {}", config.features.record_video);
    let _ = writeln!(out, "Performance:");
    let _ = writeln!(out, "  Workers:         {}", config.performance.workers);
    let _ = write!(
        out,
        "  Max concurrency: {}",
        config.performance.max_concurrency
    );

    out
}

/// Parse an environment name given on the command line.
///
/// Unknown names are reported the same way a failed lookup is.
pub fn parse_environment(name: &str) -> Result<EnvironmentName, CliError> {
    name.parse().map_err(|_| {
        CliError::Library(testrig::Error::ConfigNotFound {
            name: name.to_string(),
        })
    })
}
