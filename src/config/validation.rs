//! NSX-T section validation

use super::error::ValidationError;
use super::types::NsxtConfig;

impl NsxtConfig {
    /// See [`validate_nsxt`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_nsxt(self)
    }
}

/// Check that the NSX-T section names a manager and one complete way to
/// authenticate against it.
///
/// A credentials secret, when named, replaces inline credentials entirely.
/// Otherwise the first credential kind present decides what else is required:
/// VMC token, then user/password, then client certificate.
pub fn validate_nsxt(cfg: &NsxtConfig) -> Result<(), ValidationError> {
    if cfg.host.is_empty() {
        return Err(ValidationError::EmptyHost);
    }

    if !cfg.secret_name.is_empty() {
        if cfg.secret_namespace.is_empty() {
            return Err(ValidationError::MissingSecretNamespace);
        }
        return Ok(());
    }

    if !cfg.vmc_access_token.is_empty() {
        if cfg.vmc_auth_host.is_empty() {
            return Err(ValidationError::MissingVmcAuthHost);
        }
    } else if !cfg.user.is_empty() {
        if cfg.password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
    } else if !cfg.client_auth_key_file.is_empty() {
        if cfg.client_auth_cert_file.is_empty() {
            return Err(ValidationError::MissingClientCertFile);
        }
    } else if !cfg.client_auth_cert_file.is_empty() {
        return Err(ValidationError::MissingClientKeyFile);
    } else {
        return Err(ValidationError::MissingCredentials);
    }

    Ok(())
}
