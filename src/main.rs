//! route-config: inspect and validate route controller cloud-config files

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
