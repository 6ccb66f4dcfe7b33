/*
[INPUT]:  Outgoing request headers and configured credentials
[OUTPUT]: Authorization header applied to the request
[POS]:    Auth layer - pluggable request authentication
[UPDATE]: When adding new authenticator types or changing header format
*/

use std::fmt;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::http::{GlobalTaggingError, Result};

pub const AUTH_TYPE_NOAUTH: &str = "noauth";
pub const AUTH_TYPE_BEARER_TOKEN: &str = "bearertoken";
pub const AUTH_TYPE_BASIC: &str = "basic";

/// Trait for request authentication
///
/// The trait is async so that token-issuing authenticators can fetch
/// credentials before decorating the request.
#[async_trait]
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// Short identifier matching the `<SERVICE>_AUTH_TYPE` environment value
    fn auth_type(&self) -> &'static str;

    /// Add authentication headers to an outgoing request
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()>;
}

/// Sends requests without credentials
#[derive(Debug, Clone, Default)]
pub struct NoAuthAuthenticator;

impl NoAuthAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn auth_type(&self) -> &'static str {
        AUTH_TYPE_NOAUTH
    }

    async fn authenticate(&self, _headers: &mut HeaderMap) -> Result<()> {
        Ok(())
    }
}

/// Sends a caller-managed bearer token
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    token: String,
}

impl BearerTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(GlobalTaggingError::Authentication {
                message: "bearer token must not be empty".to_string(),
            });
        }
        Ok(Self { token })
    }

    /// Replace the token, e.g. after the caller refreshed it
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }
}

impl fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn auth_type(&self) -> &'static str {
        AUTH_TYPE_BEARER_TOKEN
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()> {
        let value = sensitive_header(format!("Bearer {}", self.token))?;
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// Sends HTTP basic credentials
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(GlobalTaggingError::Authentication {
                message: "basic authentication requires a username and a password".to_string(),
            });
        }
        if username.contains(':') {
            return Err(GlobalTaggingError::Authentication {
                message: "basic authentication username must not contain ':'".to_string(),
            });
        }
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn auth_type(&self) -> &'static str {
        AUTH_TYPE_BASIC
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()> {
        let encoded = BASE64.encode(format!("{}:{}", self.username, self.password));
        let value = sensitive_header(format!("Basic {encoded}"))?;
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

fn sensitive_header(raw: String) -> Result<HeaderValue> {
    let mut value =
        HeaderValue::from_str(&raw).map_err(|err| GlobalTaggingError::Authentication {
            message: format!("credential is not a valid header value: {err}"),
        })?;
    value.set_sensitive(true);
    Ok(value)
}
