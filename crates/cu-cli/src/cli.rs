use clap::Parser;

use cu_core::models::RunMode;

/// Refresh the compose stack inside every running container that has newer
/// images available.
#[derive(Debug, Parser)]
#[command(name = "compose-updater", version)]
pub struct Args {
    /// Only report which containers would be updated; issue no changes
    #[arg(short = 'n', long, visible_alias = "dry-run")]
    pub simulate: bool,
}

impl Args {
    pub fn run_mode(&self) -> RunMode {
        if self.simulate {
            RunMode::Simulate
        } else {
            RunMode::Apply
        }
    }
}
