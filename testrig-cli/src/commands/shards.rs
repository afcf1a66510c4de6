//! Command to print the recommended shard count.

use crate::error::CliError;
use crate::utils::{host_sizer, GlobalOptions};
use clap::Args;

/// Print the recommended shard count for this host.
#[derive(Args)]
pub struct ShardsCommand {
    /// Derive shards from this worker count instead of sizing the host
    #[arg(long, value_name = "N")]
    pub workers: Option<u32>,
}

impl ShardsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let sizer = host_sizer()?;

        let workers = match self.workers {
            Some(n) => n,
            None => sizer.optimal_workers(),
        };
        global.logger.info(&format!("Workers: {workers}"));

        println!("{}", sizer.optimal_shards_for(workers));
        Ok(())
    }
}
