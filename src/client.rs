//! MBTA API client.
//!
//! Low-level HTTP client that handles the base URL, authentication header,
//! and response classification. Resource operations are implemented via the
//! `Get` and `List` traits on model types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Response};
use url::Url;

use crate::error::{self, MbtaError, Result};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";
const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";
const DEFAULT_USER_AGENT: &str = concat!("mbtapi/", env!("CARGO_PKG_VERSION"));

/// Options for creating an [`MbtaClient`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL; defaults to the public API.
    pub base_url: Option<String>,
    /// API key, sent as `x-api-key`. The API works without one at a reduced
    /// rate limit.
    pub api_key: Option<String>,
    /// User agent; a `mbtapi/<version>` default is used when unset.
    pub user_agent: Option<String>,
    /// Per-request timeout; defaults to 30 seconds. Callers needing
    /// finer-grained cancellation can also drop the operation future or wrap
    /// it in `tokio::time::timeout`.
    pub timeout: Option<Duration>,
}

/// Low-level MBTA API client.
///
/// This struct is cheaply cloneable and safe to share across tasks; clones
/// reference the same underlying connection pool, and no per-request state
/// is kept on the client.
#[derive(Clone)]
pub struct MbtaClient {
    http: Client,
    base_url: Arc<Url>,
    api_key: Option<String>,
}

impl std::fmt::Debug for MbtaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MbtaClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl MbtaClient {
    /// Create a new client using the given config options.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to build.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        // A trailing slash makes Url::join treat the last path segment as a
        // directory, so `/v3/stops` joins correctly regardless of how the
        // caller wrote the base.
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&base_url)?;

        let user_agent = config
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let http = Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .timeout(config.timeout.unwrap_or(Duration::from_secs(30)))
            .build()
            .map_err(MbtaError::Http)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            api_key: config.api_key,
        })
    }

    /// Create a client from environment variables.
    ///
    /// Reads `MBTA_API_KEY` and `MBTA_API_URL`; both are optional.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig {
            base_url: env::var("MBTA_API_URL").ok(),
            api_key: env::var("MBTA_API_KEY").ok(),
            ..Default::default()
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request and return the raw response body.
    #[tracing::instrument(skip(self, query))]
    pub(crate) async fn get_with_query(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<String> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;

        let mut request = self
            .http
            .get(url)
            .header(header::ACCEPT, JSON_API_MEDIA_TYPE);
        if let Some(api_key) = &self.api_key {
            request = request.header("x-api-key", api_key);
        }
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(MbtaError::Http)?;
        Self::check_response(response).await
    }

    /// Check the response status and hand failures to the error classifier.
    async fn check_response(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await.map_err(MbtaError::Http)?;

        if status.is_success() {
            return Ok(body);
        }
        Err(error::classify(status.as_u16(), &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug_hides_api_key() {
        let client = MbtaClient::new(ClientConfig {
            api_key: Some("secret-key".to_string()),
            ..Default::default()
        })
        .unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("MbtaClient"));
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn test_default_base_url() {
        let client = MbtaClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api-v3.mbta.com/");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let with_slash = MbtaClient::new(ClientConfig {
            base_url: Some("https://api-v3.mbta.com/".to_string()),
            ..Default::default()
        })
        .unwrap();
        let without_slash = MbtaClient::new(ClientConfig {
            base_url: Some("https://api-v3.mbta.com".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            with_slash.base_url().as_str(),
            without_slash.base_url().as_str()
        );
    }
}
