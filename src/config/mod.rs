//! Route controller configuration
//!
//! Resolves the cloud-config from YAML or legacy INI, then applies
//! environment overrides (Env > File).

pub mod env;
pub mod error;
pub mod ini;
pub mod loader;
pub mod types;
pub mod validation;
pub mod yaml;

pub use env::{EnvLookup, ProcessEnv};
pub use error::{ConfigError, ConfigFormat, OverlayError, ParseError, ValidationError};
pub use ini::IniParser;
pub use loader::{read_route_config, ConfigParser, RouteConfigResolver};
pub use types::{Config, NsxtConfig, RouteConfig};
pub use yaml::YamlParser;
