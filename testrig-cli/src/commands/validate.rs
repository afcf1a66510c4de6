//! Command to validate environment configurations.

use crate::commands::show_config::parse_environment;
use crate::error::CliError;
use crate::utils::{load_registry, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use testrig::config::{ConfigLoader, ConfigValidator, ValidationReport};
use testrig::{ConfigRegistry, ConfigResolver, EnvironmentName};

/// Validate environment configurations.
///
/// Checks the active environment unless `--env` or `--all` is given. With a
/// FILE, the records are read from that file as written.
#[derive(Args)]
pub struct ValidateCommand {
    /// Environment to validate
    #[arg(long, value_name = "NAME", conflicts_with = "all")]
    pub env: Option<String>,

    /// Validate every environment in the registry
    #[arg(long)]
    pub all: bool,

    /// Registry file to validate
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let registry = match self.file {
            Some(ref path) => {
                if let Some(ref ignored) = global.config_file {
                    global.logger.warn(&format!(
                        "ignoring --config-file {}; validating {}",
                        ignored.display(),
                        path.display()
                    ));
                }
                if !path.exists() {
                    return Err(CliError::InvalidArguments(format!(
                        "File not found: {}",
                        path.display()
                    )));
                }
                ConfigLoader::load_file(path)?
            }
            None => load_registry(global)?,
        };

        let reports = self.collect_reports(registry)?;

        let mut failed = 0;
        for (name, report) in &reports {
            if report.is_valid() {
                global.logger.info(&format!("{name}: valid"));
                println!("{name}: ok");
                continue;
            }

            failed += 1;
            println!("{name}: {} violation(s)", report.violations().len());
            for violation in report.violations() {
                println!("  - {violation}");
            }
        }

        if failed == 0 {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "Configuration validation failed for {failed} environment(s)"
            )))
        }
    }

    fn collect_reports(
        &self,
        registry: ConfigRegistry,
    ) -> Result<Vec<(EnvironmentName, ValidationReport)>, CliError> {
        let resolver = ConfigResolver::new(registry);

        if self.all {
            return Ok(resolver.validate_all());
        }

        let name = match self.env {
            Some(ref name) => parse_environment(name)?,
            None => resolver.resolve_current_environment(),
        };
        let config = resolver
            .registry()
            .get(name)
            .ok_or_else(|| testrig::Error::ConfigNotFound {
                name: name.to_string(),
            })?;

        Ok(vec![(name, ConfigValidator::report(config))])
    }
}
