//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "testrig";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if global.logger.level() > testrig::LogLevel::Quiet {
            eprintln!("# Generating {} completion script", self.shell);
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# To enable completions:");
                eprintln!("#   {hint}");
            }
            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("eval \"$(testrig completions bash)\""),
        Shell::Zsh => Some("testrig completions zsh > ~/.zsh/completions/_testrig"),
        Shell::Fish => Some("testrig completions fish | source"),
        Shell::PowerShell => {
            Some("testrig completions powershell | Out-String | Invoke-Expression")
        }
        _ => None,
    }
}
