//! route-config: resolve NSX-T route controller configuration
//!
//! Reads the cloud-config as YAML (falling back to the deprecated INI format)
//! and overlays `NSXT_*` environment variables on top.

pub mod config;

pub use config::{read_route_config, Config, ConfigError, RouteConfig};
