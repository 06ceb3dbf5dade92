//! Resolved configuration types
//!
//! Field names follow the YAML cloud-config (camelCase). The legacy INI
//! spelling of each key lives in [`crate::config::ini`].

use serde::{Deserialize, Serialize};

const REDACTED: &str = "[REDACTED]";

/// Root configuration for the route controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Connection details for the NSX-T manager.
    pub nsxt: NsxtConfig,
    /// Route controller settings.
    pub route: RouteConfig,
}

/// Settings for the route controller itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteConfig {
    /// Policy path of the tier-1 router that routes are written to,
    /// e.g. `/infra/tier-1s/cluster-t1`.
    pub router_path: String,
}

/// NSX-T manager connection and credentials.
///
/// Empty strings mean "not set"; this mirrors how both file formats and the
/// environment overlay treat absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NsxtConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    /// Skip TLS certificate verification.
    pub insecure_flag: bool,
    pub remote_auth: bool,
    pub vmc_access_token: String,
    pub vmc_auth_host: String,
    pub client_auth_cert_file: String,
    pub client_auth_key_file: String,
    pub ca_file: String,
    /// Kubernetes secret holding credentials. When set, inline credentials
    /// are not required.
    pub secret_name: String,
    pub secret_namespace: String,
}

impl Config {
    /// Copy of this config with credentials masked, suitable for printing.
    pub fn redacted(&self) -> Config {
        let mut copy = self.clone();
        mask(&mut copy.nsxt.password);
        mask(&mut copy.nsxt.vmc_access_token);
        copy
    }
}

fn mask(value: &mut String) {
    if !value.is_empty() {
        *value = REDACTED.to_string();
    }
}
