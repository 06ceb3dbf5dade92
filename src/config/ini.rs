//! Legacy (INI) cloud-config parser
//!
//! The flat format predates the YAML cloud-config and is kept for existing
//! deployments:
//!
//! ```ini
//! [NSXT]
//! host = nsx.example.com
//! user = admin
//! password = "secret"
//! insecure-flag = true
//!
//! [Route]
//! router-path = /infra/tier-1s/cluster-t1
//! ```

use super::error::{ConfigFormat, ParseError};
use super::loader::ConfigParser;
use super::types::{Config, NsxtConfig, RouteConfig};
use ini::{Ini, ParseOption};

const SECTION_NSXT: &str = "nsxt";
const SECTION_ROUTE: &str = "route";

/// Parses the INI cloud-config. Section and key names are case-insensitive;
/// unknown sections and keys are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct IniParser;

impl ConfigParser for IniParser {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Ini
    }

    fn parse(&self, data: &[u8]) -> Result<Config, ParseError> {
        let text = std::str::from_utf8(data).map_err(|e| parse_error(e.to_string()))?;

        // Backslashes are literal so Windows-style paths survive. Quotes are
        // handled in `clean_value` so inline comments can be told apart.
        let opt =
            ParseOption { enabled_escape: false, enabled_quote: false, ..ParseOption::default() };
        let ini = Ini::load_from_str_opt(text, opt).map_err(|e| parse_error(e.to_string()))?;

        let mut cfg = Config::default();
        for (section, props) in ini.iter() {
            let Some(section) = section else {
                if !props.is_empty() {
                    tracing::debug!("Ignoring {} INI key(s) outside of any section", props.len());
                }
                continue;
            };

            let name = section.to_ascii_lowercase();
            for (key, raw) in props.iter() {
                let key = key.to_ascii_lowercase();
                let value = clean_value(raw);
                let value = value.as_str();
                let known = match name.as_str() {
                    SECTION_NSXT => apply_nsxt_key(&mut cfg.nsxt, section, &key, value)?,
                    SECTION_ROUTE => apply_route_key(&mut cfg.route, &key, value),
                    _ => false,
                };
                if !known {
                    tracing::debug!("Ignoring unknown INI key [{}] {}", section, key);
                }
            }
        }

        Ok(cfg)
    }
}

fn parse_error(message: String) -> ParseError {
    ParseError::new(ConfigFormat::Ini, message)
}

/// Unquote `raw`, or drop a trailing `;`/`#` comment from an unquoted value.
/// A comment marker only counts when preceded by whitespace.
fn clean_value(raw: &str) -> String {
    let raw = raw.trim();
    if let Some(rest) = raw.strip_prefix('"') {
        if let Some(end) = rest.find('"') {
            return rest[..end].to_string();
        }
    }

    let end = raw
        .char_indices()
        .find(|&(i, c)| (c == ';' || c == '#') && raw[..i].ends_with(char::is_whitespace))
        .map_or(raw.len(), |(i, _)| i);
    raw[..end].trim_end().to_string()
}

fn apply_route_key(cfg: &mut RouteConfig, key: &str, value: &str) -> bool {
    match key {
        "router-path" => cfg.router_path = value.to_string(),
        _ => return false,
    }
    true
}

fn apply_nsxt_key(
    cfg: &mut NsxtConfig,
    section: &str,
    key: &str,
    value: &str,
) -> Result<bool, ParseError> {
    let target = match key {
        "user" => &mut cfg.user,
        "password" => &mut cfg.password,
        "host" => &mut cfg.host,
        "vmc-access-token" => &mut cfg.vmc_access_token,
        "vmc-auth-host" => &mut cfg.vmc_auth_host,
        "client-auth-cert-file" => &mut cfg.client_auth_cert_file,
        "client-auth-key-file" => &mut cfg.client_auth_key_file,
        "ca-file" => &mut cfg.ca_file,
        "secret-name" => &mut cfg.secret_name,
        "secret-namespace" => &mut cfg.secret_namespace,
        "insecure-flag" => {
            cfg.insecure_flag = parse_ini_bool(section, key, value)?;
            return Ok(true);
        }
        "remote-auth" => {
            cfg.remote_auth = parse_ini_bool(section, key, value)?;
            return Ok(true);
        }
        _ => return Ok(false),
    };
    *target = value.to_string();
    Ok(true)
}

/// INI booleans: a key present with no value counts as `true`.
fn parse_ini_bool(section: &str, key: &str, value: &str) -> Result<bool, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(parse_error(format!(
            "invalid boolean value {:?} for {} in section [{}]",
            value, key, section
        ))),
    }
}
