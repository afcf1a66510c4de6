//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, EnvCommand, PlanCommand, ShardsCommand, ShowConfigCommand,
    SystemInfoCommand, ValidateCommand, WorkersCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Environment configuration and worker sizing for end-to-end test runs.
#[derive(Parser)]
#[command(name = "testrig")]
#[command(
    version,
    about = "Resolve test environments and size worker pools",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load environment records from a YAML file instead of the built-in set
    #[arg(long, value_name = "PATH", global = true, env = "TESTRIG_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the active environment name
    Env(EnvCommand),

    /// Show the configuration for an environment
    ShowConfig(ShowConfigCommand),

    /// Validate environment configurations
    Validate(ValidateCommand),

    /// Print the recommended worker count for this host
    Workers(WorkersCommand),

    /// Print the recommended shard count for this host
    Shards(ShardsCommand),

    /// Show host resources and derived counts
    SystemInfo(SystemInfoCommand),

    /// Show the full run plan
    Plan(PlanCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
