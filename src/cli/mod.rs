//! Command-line interface for route-config
//!
//! Provides `show` and `check` subcommands over a cloud-config file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod show;
mod utils;

/// Resolve NSX-T route controller configuration
#[derive(Parser)]
#[command(name = "route-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

impl Cli {
    /// Fallback level when RUST_LOG does not say otherwise.
    fn log_level(&self) -> Level {
        match (self.verbose, self.quiet) {
            (true, _) => Level::DEBUG,
            (_, true) => Level::ERROR,
            _ => Level::WARN,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration (file + environment overrides)
    Show(show::ShowArgs),

    /// Resolve the configuration and report which format it was read as
    Check(check::CheckArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level());

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Check(args) => check::run(args),
    }
}

/// Diagnostics go to stderr so `show` output stays pipeable.
fn init_logging(level: Level) {
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
