//! Main entry point for the testrig CLI.
//!
//! This is the command-line front end for testrig. It provides commands for
//! inspecting test environments and host sizing:
//! - `env`: Print the active environment
//! - `show-config`: Show an environment's configuration
//! - `validate`: Check environment records
//! - `workers` / `shards`: Print recommended counts
//! - `system-info`: Show host resources
//! - `plan`: Show the full run plan

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = testrig::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        logger.warn(&format!("library diagnostics disabled: {e}"));
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        config_file: cli.config_file,
        logger,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Env(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Workers(cmd) => cmd.execute(&global),
        cli::Command::Shards(cmd) => cmd.execute(&global),
        cli::Command::SystemInfo(cmd) => cmd.execute(&global),
        cli::Command::Plan(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            global.logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
