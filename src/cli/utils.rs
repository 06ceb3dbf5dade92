//! Shared CLI utilities.

use anyhow::{Context, Result};
use route_config::config::{Config, ConfigFormat, RouteConfigResolver};
use std::fs;
use std::path::Path;

/// Read `path` and resolve it against the process environment.
pub fn resolve_file(path: &Path) -> Result<(Config, ConfigFormat)> {
    let data = fs::read(path)
        .with_context(|| format!("Failed reading config file: {}", path.display()))?;

    RouteConfigResolver::new()
        .resolve_with_format(&data)
        .with_context(|| format!("Failed resolving config file: {}", path.display()))
}
