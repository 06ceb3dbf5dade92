//! Route config resolution
//!
//! YAML is tried first; INI is a fallback for deployments that have not
//! migrated yet. Environment overrides are applied to whatever parsed.

use super::env::{EnvLookup, ProcessEnv};
use super::error::{ConfigError, ConfigFormat, ParseError};
use super::ini::IniParser;
use super::types::Config;
use super::yaml::YamlParser;

/// Turns a raw cloud-config buffer into a [`Config`].
pub trait ConfigParser {
    fn format(&self) -> ConfigFormat;
    fn parse(&self, data: &[u8]) -> Result<Config, ParseError>;
}

type BoxedParser = Box<dyn ConfigParser + Send + Sync>;
type BoxedEnv = Box<dyn EnvLookup + Send + Sync>;

/// Resolves route config from raw bytes.
///
/// Holds no state between calls, so one resolver can be shared across threads.
pub struct RouteConfigResolver {
    structured: BoxedParser,
    legacy: BoxedParser,
    env: BoxedEnv,
}

impl Default for RouteConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteConfigResolver {
    /// YAML, then INI, with overrides from the process environment.
    pub fn new() -> Self {
        Self {
            structured: Box::new(YamlParser),
            legacy: Box::new(IniParser),
            env: Box::new(ProcessEnv),
        }
    }

    pub fn with_structured_parser(
        mut self,
        parser: impl ConfigParser + Send + Sync + 'static,
    ) -> Self {
        self.structured = Box::new(parser);
        self
    }

    pub fn with_legacy_parser(mut self, parser: impl ConfigParser + Send + Sync + 'static) -> Self {
        self.legacy = Box::new(parser);
        self
    }

    pub fn with_env(mut self, env: impl EnvLookup + Send + Sync + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    pub fn resolve(&self, data: &[u8]) -> Result<Config, ConfigError> {
        self.resolve_with_format(data).map(|(cfg, _)| cfg)
    }

    /// Like [`resolve`](Self::resolve), also reporting which parser succeeded.
    pub fn resolve_with_format(&self, data: &[u8]) -> Result<(Config, ConfigFormat), ConfigError> {
        if data.is_empty() {
            return Err(ConfigError::InvalidInput);
        }

        let (mut cfg, format) = self.parse(data)?;

        // Env vars override config file entries if present
        cfg.route.from_env_with(self.env.as_ref())?;
        cfg.nsxt.from_env_with(self.env.as_ref())?;

        tracing::info!("Route config initialized");
        Ok((cfg, format))
    }

    /// Structured parse with legacy fallback. Only the legacy error survives
    /// when both fail.
    fn parse(&self, data: &[u8]) -> Result<(Config, ConfigFormat), ParseError> {
        let parsed = self
            .structured
            .parse(data)
            .map(|cfg| (cfg, self.structured.format()))
            .or_else(|err| {
                tracing::debug!(
                    "{} parse failed, trying {}: {}",
                    self.structured.format(),
                    self.legacy.format(),
                    err
                );
                self.legacy.parse(data).map(|cfg| (cfg, self.legacy.format()))
            })?;

        match parsed.1 {
            ConfigFormat::Yaml => tracing::info!("Route config parsed from YAML"),
            ConfigFormat::Ini => tracing::info!(
                "Route config parsed from INI. INI-based cloud-config is deprecated and will be removed in 2.0; please use YAML-based cloud-config"
            ),
        }
        Ok(parsed)
    }
}

/// Parse `config_data` as YAML, falling back to INI, then apply environment
/// overrides from the process environment.
pub fn read_route_config(config_data: &[u8]) -> Result<Config, ConfigError> {
    RouteConfigResolver::new().resolve(config_data)
}
