/*
[INPUT]:  Process environment (<SERVICE>_AUTH_TYPE, <SERVICE>_URL, credentials)
[OUTPUT]: Authenticator and service URL resolved from external configuration
[POS]:    Auth layer - environment-driven client setup
[UPDATE]: When supporting new auth types or configuration keys
*/

use std::sync::Arc;

use config::{Config, Environment, Map};
use serde::Deserialize;
use tracing::debug;

use super::authenticator::{
    AUTH_TYPE_BASIC, AUTH_TYPE_BEARER_TOKEN, AUTH_TYPE_NOAUTH, Authenticator, BasicAuthenticator,
    BearerTokenAuthenticator, NoAuthAuthenticator,
};
use crate::http::{GlobalTaggingError, Result};

/// Service properties read from `<SERVICE>_*` variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExternalConfig {
    pub auth_type: Option<String>,
    pub bearer_token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub url: Option<String>,
}

impl ExternalConfig {
    /// Read the configuration for `service_name` from the process environment
    pub fn from_environment(service_name: &str) -> Result<Self> {
        Self::load(service_name, None)
    }

    /// Read the configuration for `service_name` from an explicit variable map
    pub fn from_map(service_name: &str, vars: Map<String, String>) -> Result<Self> {
        Self::load(service_name, Some(vars))
    }

    fn load(service_name: &str, vars: Option<Map<String, String>>) -> Result<Self> {
        let prefix = env_prefix(service_name);
        let settings = Config::builder()
            .add_source(Environment::with_prefix(&prefix).source(vars))
            .build()
            .map_err(|err| GlobalTaggingError::Config(err.to_string()))?;

        let external: Self = settings
            .try_deserialize()
            .map_err(|err| GlobalTaggingError::Config(err.to_string()))?;

        debug!(
            prefix = %prefix,
            auth_type = external.auth_type.as_deref().unwrap_or("<unset>"),
            url_set = external.url.is_some(),
            "loaded external service configuration"
        );
        Ok(external)
    }

    /// Build the authenticator these properties describe
    pub fn authenticator(&self) -> Result<Arc<dyn Authenticator>> {
        let auth_type = match self.auth_type.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => value.to_ascii_lowercase(),
            _ if self.bearer_token.is_some() => AUTH_TYPE_BEARER_TOKEN.to_string(),
            _ => {
                return Err(GlobalTaggingError::Config(
                    "no authentication type configured for service".to_string(),
                ));
            }
        };

        match auth_type.as_str() {
            AUTH_TYPE_NOAUTH => Ok(Arc::new(NoAuthAuthenticator::new())),
            AUTH_TYPE_BEARER_TOKEN => {
                let token = self.bearer_token.clone().ok_or_else(|| {
                    GlobalTaggingError::Config(
                        "auth type 'bearertoken' requires BEARER_TOKEN".to_string(),
                    )
                })?;
                Ok(Arc::new(BearerTokenAuthenticator::new(token)?))
            }
            AUTH_TYPE_BASIC => {
                let username = self.username.clone().unwrap_or_default();
                let password = self.password.clone().unwrap_or_default();
                Ok(Arc::new(BasicAuthenticator::new(username, password)?))
            }
            other => Err(GlobalTaggingError::Config(format!(
                "unsupported authentication type '{other}'"
            ))),
        }
    }
}

/// Load the authenticator configured for `service_name` in the environment
pub fn authenticator_from_environment(service_name: &str) -> Result<Arc<dyn Authenticator>> {
    ExternalConfig::from_environment(service_name)?.authenticator()
}

/// `global-tagging` -> `GLOBAL_TAGGING`
pub(crate) fn env_prefix(service_name: &str) -> String {
    service_name.replace('-', "_").to_ascii_uppercase()
}
