//! Show command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use super::utils::resolve_file;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Cloud-config file (YAML or INI)
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Print passwords and tokens instead of masking them
    #[arg(long)]
    pub show_secrets: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let (config, format) = resolve_file(&args.path)?;
    tracing::debug!("Resolved {} as {}", args.path.display(), format);

    let config = if args.show_secrets { config } else { config.redacted() };
    let rendered = match args.format {
        OutputFormat::Yaml => serde_yaml::to_string(&config)?,
        OutputFormat::Json => serde_json::to_string_pretty(&config)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
