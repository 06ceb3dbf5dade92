//! Check command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::resolve_file;

#[derive(Args)]
pub struct CheckArgs {
    /// Cloud-config file (YAML or INI)
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Only resolve; skip the NSX-T connection and credential checks
    #[arg(long)]
    pub skip_nsxt: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let (config, format) = resolve_file(&args.path)?;

    if !args.skip_nsxt {
        config.nsxt.validate().with_context(|| {
            format!("Incomplete [NSXT] section in {}", args.path.display())
        })?;
    }

    if config.route.router_path.is_empty() {
        tracing::warn!("Route router path is empty in {}", args.path.display());
    }

    println!("OK ({})", format);
    if !config.route.router_path.is_empty() {
        println!("router path: {}", config.route.router_path);
    }
    Ok(())
}
