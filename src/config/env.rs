//! Environment variable overlay
//!
//! Environment values take precedence over anything read from the config
//! file, but only when they are set to a non-empty value.

use super::error::OverlayError;
use super::types::{NsxtConfig, RouteConfig};
use std::collections::HashMap;

pub const NSXT_ROUTER_PATH: &str = "NSXT_ROUTER_PATH";

pub const NSXT_MANAGER_HOST: &str = "NSXT_MANAGER_HOST";
pub const NSXT_USERNAME: &str = "NSXT_USERNAME";
pub const NSXT_PASSWORD: &str = "NSXT_PASSWORD";
pub const NSXT_ALLOW_UNVERIFIED_SSL: &str = "NSXT_ALLOW_UNVERIFIED_SSL";
pub const NSXT_REMOTE_AUTH: &str = "NSXT_REMOTE_AUTH";
pub const NSXT_VMC_ACCESS_TOKEN: &str = "NSXT_VMC_ACCESS_TOKEN";
pub const NSXT_VMC_AUTH_HOST: &str = "NSXT_VMC_AUTH_HOST";
pub const NSXT_CLIENT_AUTH_CERT_FILE: &str = "NSXT_CLIENT_AUTH_CERT_FILE";
pub const NSXT_CLIENT_AUTH_KEY_FILE: &str = "NSXT_CLIENT_AUTH_KEY_FILE";
pub const NSXT_CA_FILE: &str = "NSXT_CA_FILE";
pub const NSXT_SECRET_NAME: &str = "NSXT_SECRET_NAME";
pub const NSXT_SECRET_NAMESPACE: &str = "NSXT_SECRET_NAMESPACE";

/// Read-only key/value source for overlay values.
pub trait EnvLookup {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Returns the value of `key` only when it is set and non-empty.
fn non_empty(env: &dyn EnvLookup, key: &str) -> Option<String> {
    env.var(key).filter(|v| !v.is_empty())
}

fn overlay_string(env: &dyn EnvLookup, key: &str, target: &mut String) {
    if let Some(value) = non_empty(env, key) {
        *target = value;
    }
}

/// Unparseable values leave `target` untouched.
fn overlay_bool(env: &dyn EnvLookup, key: &str, target: &mut bool) {
    if let Some(value) = non_empty(env, key) {
        match parse_bool(&value) {
            Some(parsed) => *target = parsed,
            None => tracing::warn!("Ignoring {}={:?}: not a boolean", key, value),
        }
    }
}

/// Boolean spellings accepted from environment variables.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[allow(clippy::wrong_self_convention)]
impl RouteConfig {
    /// Overlay values from the process environment.
    pub fn from_env(&mut self) -> Result<(), OverlayError> {
        self.from_env_with(&ProcessEnv)
    }

    /// Overlay values from `env`. Currently never fails.
    pub fn from_env_with(&mut self, env: &dyn EnvLookup) -> Result<(), OverlayError> {
        overlay_string(env, NSXT_ROUTER_PATH, &mut self.router_path);
        Ok(())
    }
}

#[allow(clippy::wrong_self_convention)]
impl NsxtConfig {
    /// Overlay values from the process environment.
    pub fn from_env(&mut self) -> Result<(), OverlayError> {
        self.from_env_with(&ProcessEnv)
    }

    /// Overlay values from `env`. Currently never fails; completeness of the
    /// section is checked separately by [`NsxtConfig::validate`].
    pub fn from_env_with(&mut self, env: &dyn EnvLookup) -> Result<(), OverlayError> {
        overlay_string(env, NSXT_MANAGER_HOST, &mut self.host);
        overlay_string(env, NSXT_USERNAME, &mut self.user);
        overlay_string(env, NSXT_PASSWORD, &mut self.password);
        overlay_bool(env, NSXT_ALLOW_UNVERIFIED_SSL, &mut self.insecure_flag);
        overlay_bool(env, NSXT_REMOTE_AUTH, &mut self.remote_auth);
        overlay_string(env, NSXT_VMC_ACCESS_TOKEN, &mut self.vmc_access_token);
        overlay_string(env, NSXT_VMC_AUTH_HOST, &mut self.vmc_auth_host);
        overlay_string(env, NSXT_CLIENT_AUTH_CERT_FILE, &mut self.client_auth_cert_file);
        overlay_string(env, NSXT_CLIENT_AUTH_KEY_FILE, &mut self.client_auth_key_file);
        overlay_string(env, NSXT_CA_FILE, &mut self.ca_file);
        overlay_string(env, NSXT_SECRET_NAME, &mut self.secret_name);
        overlay_string(env, NSXT_SECRET_NAMESPACE, &mut self.secret_namespace);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn route(path: &str) -> RouteConfig {
        RouteConfig { router_path: path.to_string() }
    }

    #[test]
    fn test_router_path_env_overrides_file_value() {
        let mut cfg = route("file-value");
        cfg.from_env_with(&env_of(&[(NSXT_ROUTER_PATH, "env-value")])).expect("overlay");
        assert_eq!(cfg.router_path, "env-value");
    }

    #[test]
    fn test_router_path_untouched_when_unset() {
        let mut cfg = route("file-value");
        cfg.from_env_with(&env_of(&[])).expect("overlay");
        assert_eq!(cfg.router_path, "file-value");
    }

    #[test]
    fn test_empty_router_path_env_behaves_like_unset() {
        let mut cfg = route("file-value");
        cfg.from_env_with(&env_of(&[(NSXT_ROUTER_PATH, "")])).expect("overlay");
        assert_eq!(cfg.router_path, "file-value");

        let mut empty = route("");
        empty.from_env_with(&env_of(&[(NSXT_ROUTER_PATH, "")])).expect("overlay");
        assert_eq!(empty.router_path, "");
    }

    #[test]
    fn test_route_overlay_is_idempotent() {
        let env = env_of(&[(NSXT_ROUTER_PATH, "/infra/tier-1s/env")]);
        let mut once = route("file-value");
        once.from_env_with(&env).expect("overlay");
        let mut twice = once.clone();
        twice.from_env_with(&env).expect("overlay");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |key: &str| (key == NSXT_ROUTER_PATH).then(|| "/infra/tier-1s/c".to_string());
        let mut cfg = RouteConfig::default();
        cfg.from_env_with(&lookup).expect("overlay");
        assert_eq!(cfg.router_path, "/infra/tier-1s/c");
    }

    #[test]
    fn test_nsxt_overlay_sets_fields() {
        let env = env_of(&[
            (NSXT_MANAGER_HOST, "nsx.example.com"),
            (NSXT_USERNAME, "admin"),
            (NSXT_PASSWORD, "secret"),
            (NSXT_ALLOW_UNVERIFIED_SSL, "true"),
            (NSXT_CA_FILE, "/etc/nsx/ca.pem"),
        ]);
        let mut cfg = NsxtConfig::default();
        cfg.from_env_with(&env).expect("overlay");
        assert_eq!(cfg.host, "nsx.example.com");
        assert_eq!(cfg.user, "admin");
        assert_eq!(cfg.password, "secret");
        assert!(cfg.insecure_flag);
        assert_eq!(cfg.ca_file, "/etc/nsx/ca.pem");
    }

    #[test]
    fn test_nsxt_overlay_keeps_file_values_when_env_empty() {
        let mut cfg = NsxtConfig {
            host: "file-host".to_string(),
            user: "file-user".to_string(),
            password: "file-pass".to_string(),
            insecure_flag: true,
            ..Default::default()
        };
        let env = env_of(&[(NSXT_MANAGER_HOST, ""), (NSXT_ALLOW_UNVERIFIED_SSL, "")]);
        cfg.from_env_with(&env).expect("overlay");
        assert_eq!(cfg.host, "file-host");
        assert!(cfg.insecure_flag);
    }

    #[test]
    fn test_nsxt_overlay_ignores_bad_bool() {
        let mut cfg = NsxtConfig { insecure_flag: true, ..Default::default() };
        cfg.from_env_with(&env_of(&[(NSXT_ALLOW_UNVERIFIED_SSL, "maybe")])).expect("overlay");
        assert!(cfg.insecure_flag);
    }

    #[test]
    fn test_nsxt_bool_can_be_turned_off_from_env() {
        let mut cfg = NsxtConfig {
            host: "h".to_string(),
            user: "u".to_string(),
            password: "p".to_string(),
            insecure_flag: true,
            ..Default::default()
        };
        cfg.from_env_with(&env_of(&[(NSXT_ALLOW_UNVERIFIED_SSL, "F")])).expect("overlay");
        assert!(!cfg.insecure_flag);
    }

    #[test]
    fn test_nsxt_overlay_accepts_incomplete_section() {
        let mut cfg = NsxtConfig::default();
        cfg.from_env_with(&env_of(&[(NSXT_USERNAME, "admin")])).expect("overlay never fails");
        assert_eq!(cfg.user, "admin");
        assert!(cfg.host.is_empty());
    }

    #[test]
    fn test_parse_bool_spellings() {
        for v in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(v), Some(true), "{v}");
        }
        for v in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(v), Some(false), "{v}");
        }
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("tRuE"), None);
    }
}
