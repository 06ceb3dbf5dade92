//! Structured (YAML) cloud-config parser

use super::error::{ConfigFormat, ParseError};
use super::loader::ConfigParser;
use super::types::Config;

/// Parses the YAML cloud-config:
///
/// ```yaml
/// nsxt:
///   host: nsx.example.com
///   user: admin
///   password: secret
///   insecureFlag: true
/// route:
///   routerPath: /infra/tier-1s/cluster-t1
/// ```
///
/// Missing sections and keys take their defaults; unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl ConfigParser for YamlParser {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Yaml
    }

    fn parse(&self, data: &[u8]) -> Result<Config, ParseError> {
        serde_yaml::from_slice(data).map_err(|e| ParseError::new(ConfigFormat::Yaml, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_document() {
        let data = br#"
nsxt:
  host: nsx.example.com
  user: admin
  password: secret
  insecureFlag: true
  caFile: /etc/nsx/ca.pem
  secretName: creds
  secretNamespace: kube-system
route:
  routerPath: /infra/tier-1s/cluster-t1
"#;
        let cfg = YamlParser.parse(data).expect("parse");
        assert_eq!(cfg.route.router_path, "/infra/tier-1s/cluster-t1");
        assert_eq!(cfg.nsxt.host, "nsx.example.com");
        assert_eq!(cfg.nsxt.user, "admin");
        assert!(cfg.nsxt.insecure_flag);
        assert!(!cfg.nsxt.remote_auth);
        assert_eq!(cfg.nsxt.ca_file, "/etc/nsx/ca.pem");
        assert_eq!(cfg.nsxt.secret_namespace, "kube-system");
    }

    #[test]
    fn test_missing_sections_default() {
        let cfg = YamlParser.parse(b"route:\n  routerPath: /infra/tier-1s/t1\n").expect("parse");
        assert_eq!(cfg.route.router_path, "/infra/tier-1s/t1");
        assert_eq!(cfg.nsxt, Default::default());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let cfg = YamlParser
            .parse(b"global:\n  port: 443\nroute:\n  routerPath: p\n  extra: 1\n")
            .expect("parse");
        assert_eq!(cfg.route.router_path, "p");
    }

    #[test]
    fn test_rejects_ini_document() {
        let data = b"[NSXT]\nhost = nsx.example.com\n\n[Route]\nrouter-path = /infra/tier-1s/t1\n";
        let err = YamlParser.parse(data).expect_err("ini is not yaml");
        assert_eq!(err.format, ConfigFormat::Yaml);
    }

    #[test]
    fn test_rejects_scalar_document() {
        assert!(YamlParser.parse(b"just some text").is_err());
    }

    #[test]
    fn test_rejects_wrong_field_type() {
        assert!(YamlParser.parse(b"nsxt:\n  insecureFlag: [1, 2]\n").is_err());
    }
}
