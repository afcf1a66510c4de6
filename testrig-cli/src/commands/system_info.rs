//! Command to show host resources and derived counts.

use crate::error::CliError;
use crate::utils::{host_sizer, render, GlobalOptions, OutputFormat};
use clap::Args;
use testrig::SystemInfo;

/// Show host resources and the worker and shard counts derived from them.
#[derive(Args)]
pub struct SystemInfoCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: OutputFormat,
}

impl SystemInfoCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let sizer = host_sizer()?;
        let policy = sizer.policy();
        global.logger.debug(&format!(
            "Policy: utilization={} per_worker={} GiB workers={}..={} shard_ratio={}",
            policy.utilization_fraction,
            policy.memory_per_worker_gib,
            policy.min_workers,
            policy.max_workers,
            policy.shard_ratio
        ));

        let info = sizer.system_info();
        println!("{}", render(self.format, &info, format_system_info)?);
        Ok(())
    }
}

fn format_system_info(info: &SystemInfo) -> String {
    format!(
        "CPU cores: {}\nMemory:    {:.2} GiB\nPlatform:  {}\nWorkers:   {}\nShards:    {}",
        info.cpu_count,
        info.total_memory_gib,
        info.platform_name,
        info.optimal_workers,
        info.optimal_shards
    )
}
