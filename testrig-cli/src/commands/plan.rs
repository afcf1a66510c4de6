//! Plan command implementation.
//!
//! This module implements the `plan` command, which prints everything a
//! test runner needs before starting: environment, configuration, workers
//! and shards.

use crate::commands::show_config::format_config;
use crate::error::CliError;
use crate::utils::{host_sizer, load_resolver, render, GlobalOptions, OutputFormat};
use clap::Args;
use testrig::RunPlan;

/// Show the full run plan.
#[derive(Args)]
pub struct PlanCommand {
    /// Use the environment's static worker count (implied when CI is set)
    #[arg(long)]
    pub ci: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: OutputFormat,
}

impl PlanCommand {
    /// Execute the plan command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        let sizer = host_sizer()?;

        if global.logger.is_verbose() {
            let snapshot = sizer.capture_snapshot();
            global.logger.info(&format!(
                "Host: {} CPU(s), {:.2} GiB, {}",
                snapshot.cpu_count, snapshot.total_memory_gib, snapshot.platform_name
            ));
        }

        let plan = if self.ci {
            RunPlan::build(&resolver, &sizer, true)?
        } else {
            RunPlan::from_env(&resolver, &sizer)?
        };

        println!("{}", render(self.format, &plan, format_plan)?);
        Ok(())
    }
}

fn format_plan(plan: &RunPlan) -> String {
    format!(
        "Workers: {} ({})\nShards:  {}\nRetries: {}\n\n{}",
        plan.workers,
        plan.worker_source,
        plan.shards,
        plan.retries,
        format_config(plan.environment.as_str(), &plan.config)
    )
}
