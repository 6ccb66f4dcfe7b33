/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed CLI configuration
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;

use anyhow::Context;
use global_tagging::{ExternalConfig, TagType};
use serde::{Deserialize, Serialize};

/// Settings that may be kept in a file instead of passed as flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub service_url: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    /// One of `noauth`, `bearertoken`, `basic`
    #[serde(default)]
    pub auth_type: Option<String>,
    #[serde(default)]
    pub bearer_token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub tag_type: Option<TagType>,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Layer the file's connection settings over `base`, usually the values
    /// read from the environment. Fields the file leaves out keep their
    /// `base` value.
    pub fn overlay(&self, base: ExternalConfig) -> ExternalConfig {
        ExternalConfig {
            auth_type: self.auth_type.clone().or(base.auth_type),
            bearer_token: self.bearer_token.clone().or(base.bearer_token),
            username: self.username.clone().or(base.username),
            password: self.password.clone().or(base.password),
            url: self.service_url.clone().or(base.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
service_url: https://tags.example.com
auth_type: bearertoken
bearer_token: abc
account_id: acct-1
tag_type: access
timeout_secs: 5
"#;
        let config: CliConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tag_type, Some(TagType::Access));
        assert_eq!(config.timeout_secs, Some(5));

        let external = config.overlay(ExternalConfig::default());
        assert_eq!(external.bearer_token.as_deref(), Some("abc"));
        assert_eq!(external.url.as_deref(), Some("https://tags.example.com"));
    }

    #[test]
    fn test_file_auth_type_keeps_environment_url_and_credentials() {
        let environment = ExternalConfig {
            auth_type: Some("bearertoken".to_string()),
            bearer_token: Some("env-token".to_string()),
            username: Some("env-user".to_string()),
            password: Some("env-pass".to_string()),
            url: Some("https://env.example.com".to_string()),
        };
        let config: CliConfig = serde_yaml::from_str("auth_type: basic\n").unwrap();

        let merged = config.overlay(environment);
        assert_eq!(merged.auth_type.as_deref(), Some("basic"));
        assert_eq!(merged.username.as_deref(), Some("env-user"));
        assert_eq!(merged.password.as_deref(), Some("env-pass"));
        assert_eq!(merged.url.as_deref(), Some("https://env.example.com"));
    }

    #[test]
    fn test_file_credentials_without_auth_type_are_kept() {
        let environment = ExternalConfig {
            auth_type: Some("basic".to_string()),
            ..ExternalConfig::default()
        };
        let yaml = "username: file-user\npassword: file-pass\nservice_url: https://file.example.com\n";
        let config: CliConfig = serde_yaml::from_str(yaml).unwrap();

        let merged = config.overlay(environment);
        assert_eq!(merged.auth_type.as_deref(), Some("basic"));
        assert_eq!(merged.username.as_deref(), Some("file-user"));
        assert_eq!(merged.password.as_deref(), Some("file-pass"));
        assert_eq!(merged.url.as_deref(), Some("https://file.example.com"));
    }

    #[test]
    fn test_empty_file_leaves_environment_untouched() {
        let environment = ExternalConfig {
            bearer_token: Some("env-token".to_string()),
            ..ExternalConfig::default()
        };
        let config: CliConfig = serde_yaml::from_str("account_id: acct-1\n").unwrap();
        assert_eq!(config.overlay(environment.clone()), environment);
    }
}
