//! Command to print the active environment.

use crate::error::CliError;
use crate::utils::{load_resolver, GlobalOptions};
use clap::Args;

/// Print the environment selected by `TEST_ENV`.
#[derive(Args)]
pub struct EnvCommand {}

impl EnvCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        println!("{}", resolver.resolve_current_environment());
        Ok(())
    }
}
