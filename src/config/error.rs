//! Error types for config resolution

use std::fmt;
use thiserror::Error;

/// Serialization format a config buffer was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// Structured cloud-config.
    Yaml,
    /// Deprecated flat cloud-config.
    Ini,
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Yaml => f.write_str("yaml"),
            ConfigFormat::Ini => f.write_str("ini"),
        }
    }
}

/// A parser rejected the input. Displays the parser's message as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub format: ConfigFormat,
    pub message: String,
}

impl ParseError {
    pub fn new(format: ConfigFormat, message: impl Into<String>) -> Self {
        Self { format, message: message.into() }
    }
}

/// An environment overlay rejected a variable.
///
/// No overlay produces this today; the overlay signatures return it so that
/// value checks can be added without changing callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OverlayError {
    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
}

/// The NSX-T section cannot be used to reach the manager.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("host is empty")]
    EmptyHost,

    #[error("password is empty")]
    EmptyPassword,

    #[error("vmc auth host must be provided if auth token is provided")]
    MissingVmcAuthHost,

    #[error("client cert file is required if client key file is provided")]
    MissingClientCertFile,

    #[error("client key file is required if client cert file is provided")]
    MissingClientKeyFile,

    #[error("user or vmc access token or client cert file must be set")]
    MissingCredentials,

    #[error("secret namespace is required if secret name is provided")]
    MissingSecretNamespace,
}

/// Library-wide error for [`crate::config::read_route_config`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The config buffer was empty.
    #[error("Invalid YAML/INI file")]
    InvalidInput,

    /// Neither format parsed. Carries the legacy parser's error.
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Overlay(#[from] OverlayError),
}
