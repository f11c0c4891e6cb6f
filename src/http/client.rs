//! HTTP client with cookies and rate limiting
//!
//! Provides the reqwest-backed [`Transport`] that handles:
//! - Resolving endpoint paths against the configured base URL
//! - A shared cookie jar holding the login session
//! - Optional client-side rate limiting
//! - Mapping failed requests and non-success statuses to errors

use super::params::Params;
use super::rate_limit::RateLimiter;
use super::transport::Transport;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// HTTP client for the pr0gramm API
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: Arc<ClientConfig>,
    base_url: Url,
    jar: Arc<Jar>,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let base_url = parse_base_url(&config.base_url)?;
        let jar = Arc::new(Jar::default());

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .default_headers(build_headers(&config)?)
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        let http = Self {
            client,
            config: Arc::new(config),
            base_url,
            jar,
            rate_limiter,
        };

        if let Some(cookies) = http.config.cookies.clone() {
            http.add_cookies(&cookies);
        }

        Ok(http)
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL endpoint paths are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Shared cookie jar
    pub fn jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Add cookies from a raw `name=value; name2=value2` string
    pub fn add_cookies(&self, raw: &str) {
        for cookie in raw.split(';').map(str::trim).filter(|c| c.contains('=')) {
            self.jar
                .add_cookie_str(&format!("{cookie}; Path=/"), &self.base_url);
        }
    }

    /// Cookies that would be sent to the API, as a `Cookie` header string
    pub fn cookies(&self) -> Option<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Send a request and decode the JSON body
    async fn send(&self, method: Method, path: &str, params: &Params) -> Result<JsonValue> {
        let url = self.build_url(path)?;

        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let pairs = params.to_pairs();
        let mut req = self.client.request(method.clone(), url.clone());
        req = if method == Method::GET {
            req.query(&pairs)
        } else {
            req.form(&pairs)
        };

        let response = req.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let text = response.text().await.map_err(|e| self.classify(e))?;
        debug!("{} {} -> {} ({} bytes)", method, url.path(), status.as_u16(), text.len());

        if text.trim().is_empty() {
            return Ok(JsonValue::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    fn classify(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            return Error::Timeout {
                timeout_ms: self.config.timeout().as_millis() as u64,
            };
        }
        Error::Http(error)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, path: &str, query: &Params) -> Result<JsonValue> {
        self.send(Method::GET, path, query).await
    }

    async fn post(&self, path: &str, form: &Params) -> Result<JsonValue> {
        self.send(Method::POST, path, form).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.config.user_agent)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Parse the base URL, making sure relative joins keep its last segment
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut base = raw.trim_end_matches('/').to_string();
    base.push('/');
    Ok(Url::parse(&base)?)
}

fn build_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (key, value) in &config.default_headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| Error::config(format!("invalid header name '{key}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::config(format!("invalid value for header '{key}': {e}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}
