/*
[INPUT]:  Service options (URL, name, authenticator, timeouts)
[OUTPUT]: Configured client plus the shared request dispatch primitive
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Request, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{Authenticator, ExternalConfig};
use crate::http::{GlobalTaggingError, Result};
use crate::types::DetailedResponse;

pub const DEFAULT_SERVICE_URL: &str = "https://tags.global-search-tagging.cloud.ibm.com";
pub const DEFAULT_SERVICE_NAME: &str = "global_tagging";

const JSON_MEDIA_TYPE: &str = "application/json";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("global-tagging-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Options accepted by the client constructors
#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
    pub service_url: Option<String>,
    pub service_name: Option<String>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
    pub config: ClientConfig,
}

impl ServiceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL of the service. A value without a scheme is read as a host
    /// and gets `https://`.
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }
}

/// Client for the Global Tagging API
#[derive(Debug, Clone)]
pub struct GlobalTaggingClient {
    http_client: Client,
    service_url: Url,
    service_name: String,
    authenticator: Arc<dyn Authenticator>,
    default_headers: HeaderMap,
}

impl GlobalTaggingClient {
    /// Create a client for the default service URL
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        Self::with_options(ServiceOptions::new().authenticator(authenticator))
    }

    /// Create a client from explicit options. An authenticator is required.
    pub fn with_options(options: ServiceOptions) -> Result<Self> {
        let authenticator = options.authenticator.ok_or_else(|| {
            GlobalTaggingError::Config("an authenticator must be provided".to_string())
        })?;
        let service_url = options
            .service_url
            .as_deref()
            .unwrap_or(DEFAULT_SERVICE_URL);
        let service_name = options
            .service_name
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());

        Self::build(&options.config, service_url, service_name, authenticator)
    }

    /// Create a client, filling in anything the options leave out from the
    /// `<SERVICE_NAME>_*` environment variables.
    pub fn new_instance(options: ServiceOptions) -> Result<Self> {
        let service_name = options
            .service_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        let external = ExternalConfig::from_environment(&service_name)?;
        Self::from_external(options, &external)
    }

    /// Create a client from options plus already-loaded external configuration.
    ///
    /// Explicit options win; the service URL falls back to the external URL
    /// and then to the default.
    pub fn from_external(options: ServiceOptions, external: &ExternalConfig) -> Result<Self> {
        let service_name = options
            .service_name
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        let authenticator = match options.authenticator {
            Some(authenticator) => authenticator,
            None => external.authenticator()?,
        };
        let service_url = options
            .service_url
            .or_else(|| external.url.clone())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

        Self::build(&options.config, &service_url, service_name, authenticator)
    }

    fn build(
        config: &ClientConfig,
        service_url: &str,
        service_name: String,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            service_url: parse_service_url(service_url)?,
            service_name,
            authenticator,
            default_headers: HeaderMap::new(),
        })
    }

    pub fn service_url(&self) -> &str {
        self.service_url.as_str().trim_end_matches('/')
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    pub fn set_service_url(&mut self, url: &str) -> Result<()> {
        self.service_url = parse_service_url(url)?;
        Ok(())
    }

    /// Headers sent with every request; per-call headers still take precedence
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    /// Build the full URL for an endpoint given as path segments.
    ///
    /// Segments are percent-encoded individually, so path parameters can
    /// carry characters such as `/` or `:`. A `.` or `..` segment is
    /// rejected: URL normalization would drop it and shorten the route.
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(**segment, "." | ".."))
        {
            return Err(GlobalTaggingError::Config(format!(
                "path parameter cannot be a dot segment: {segment:?}"
            )));
        }

        let mut url = self.service_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GlobalTaggingError::Config(format!(
                    "service URL cannot be used as a base: {}",
                    self.service_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Assemble a request without sending it.
    ///
    /// Header precedence, lowest first: media headers, client default
    /// headers, per-call headers.
    pub(crate) fn prepare<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&'static str, String)],
        body: Option<&B>,
        user_headers: &HeaderMap,
    ) -> Result<Request> {
        let url = self.endpoint_url(segments)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
        }
        merge_headers(&mut headers, &self.default_headers);
        merge_headers(&mut headers, user_headers);

        let mut builder = self.http_client.request(method, url).headers(headers);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }
        let request = builder.build()?;
        debug!(method = %request.method(), url = %request.url(), "prepared request");
        Ok(request)
    }

    /// Authenticate, send and decode a prepared request.
    ///
    /// Non-2xx responses become [`GlobalTaggingError::Api`]; transport
    /// errors pass through unchanged.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        mut request: Request,
    ) -> Result<DetailedResponse<T>> {
        self.authenticator
            .authenticate(request.headers_mut())
            .await?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        debug!(%method, %url, status = status.as_u16(), "received response");

        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "request failed");
            return Err(GlobalTaggingError::api_error(status, &body));
        }

        let result = if body.trim().is_empty() {
            serde_json::from_value(Value::Null)?
        } else {
            serde_json::from_str(&body)?
        };

        Ok(DetailedResponse {
            status,
            headers,
            result,
        })
    }
}

/// Parse a service URL. A value without a scheme, such as `custom.com`,
/// is taken as a host and gets `https://`.
fn parse_service_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let url = if raw.contains("://") {
        Url::parse(raw)?
    } else {
        Url::parse(&format!("https://{raw}"))?
    };
    if url.cannot_be_a_base() {
        return Err(GlobalTaggingError::Config(format!(
            "service URL cannot be used as a base: {raw}"
        )));
    }
    Ok(url)
}

/// Copy `source` into `target`, replacing every header name present in `source`
fn merge_headers(target: &mut HeaderMap, source: &HeaderMap) {
    for name in source.keys() {
        target.remove(name);
        for value in source.get_all(name) {
            target.append(name.clone(), value.clone());
        }
    }
}
