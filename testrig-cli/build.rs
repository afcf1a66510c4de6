//! Build script for testrig-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("testrig")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve test environments and size worker pools")
        .long_about(
            "Command-line tool for resolving end-to-end test environments and sizing \
             the runner's worker pool from host CPU and memory",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-file")
                .long("config-file")
                .help("Load environment records from a YAML file instead of the built-in set")
                .value_name("PATH")
                .global(true)
                .env("TESTRIG_CONFIG_FILE"),
        )
        .subcommands(vec![
            Command::new("env")
                .about("Print the active environment name")
                .long_about("Print the environment selected by TEST_ENV (development when unset or unrecognized)"),
            Command::new("show-config")
                .about("Show the configuration for an environment")
                .long_about("Print the validated configuration for the active or a named environment"),
            Command::new("validate")
                .about("Validate environment configurations")
                .long_about("Check environment records and report every violated invariant"),
            Command::new("workers")
                .about("Print the recommended worker count for this host")
                .long_about("Size the worker pool from host CPU count and total memory"),
            Command::new("shards")
                .about("Print the recommended shard count for this host")
                .long_about("Derive the shard count from the recommended worker count"),
            Command::new("system-info")
                .about("Show host resources and derived counts")
                .long_about("Display CPU count, memory, platform and the derived worker and shard counts"),
            Command::new("plan")
                .about("Show the full run plan")
                .long_about("Display environment, configuration, workers and shards for a test run"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main testrig.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("testrig.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
