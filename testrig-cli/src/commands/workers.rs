//! Command to print the recommended worker count.

use crate::error::CliError;
use crate::utils::{host_sizer, GlobalOptions};
use clap::Args;

/// Print the recommended worker count for this host.
#[derive(Args)]
pub struct WorkersCommand {}

impl WorkersCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let sizer = host_sizer()?;
        let snapshot = sizer.capture_snapshot();

        global.logger.info(&format!(
            "Host: {} CPU(s), {:.2} GiB, {}",
            snapshot.cpu_count, snapshot.total_memory_gib, snapshot.platform_name
        ));

        println!("{}", sizer.optimal_workers_for(&snapshot));
        Ok(())
    }
}
