//! Client builder with typestate pattern.

use std::{marker::PhantomData, sync::Arc, time::Duration};

use reqwest::header::HeaderValue;
use url::Url;

use super::inner::ClientInner;
use crate::{Client, Error, config::RetryConfig, user_agent};

/// Marker type: URL not yet provided.
pub struct NoUrl;

/// Marker type: URL has been provided.
pub struct HasUrl;

/// Marker type: token not yet provided.
pub struct NoToken;

/// Marker type: token has been provided.
pub struct HasToken;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Builder for creating [`Client`] instances.
///
/// Uses the typestate pattern so the two required settings (URL and token)
/// must be provided before `build()` exists to call. Runtime validation
/// still applies: the URL must parse and the token must be non-empty.
///
/// ## Required Configuration
///
/// - `url()`: The Manage API endpoint (e.g. `https://connection.keboola.com`)
/// - `token()`: The Manage API token
///
/// ## Optional Configuration
///
/// - `retry_config()`: Backoff behavior for transient failures
///   (`max_tries` defaults to 10)
/// - `timeout()`: Per-request timeout (default 120s)
/// - `user_agent()`: Override the default User-Agent string
///
/// ## Example
///
/// ```rust,ignore
/// use kbc_manage::{Client, RetryConfig};
/// use std::time::Duration;
///
/// let client = Client::builder()
///     .url("https://connection.keboola.com")
///     .token("my-manage-token")
///     .retry_config(RetryConfig::new().with_max_tries(3))
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct ClientBuilder<UrlState, TokenState> {
    url: Option<String>,
    token: Option<String>,
    retry_config: RetryConfig,
    timeout: Duration,
    user_agent: Option<String>,
    _url_state: PhantomData<UrlState>,
    _token_state: PhantomData<TokenState>,
}

impl ClientBuilder<NoUrl, NoToken> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            url: None,
            token: None,
            retry_config: RetryConfig::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            _url_state: PhantomData,
            _token_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoUrl, NoToken> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ClientBuilder<NoUrl, T> {
    /// Sets the Manage API URL.
    pub fn url(self, url: impl Into<String>) -> ClientBuilder<HasUrl, T> {
        ClientBuilder {
            url: Some(url.into()),
            token: self.token,
            retry_config: self.retry_config,
            timeout: self.timeout,
            user_agent: self.user_agent,
            _url_state: PhantomData,
            _token_state: PhantomData,
        }
    }
}

impl<U> ClientBuilder<U, NoToken> {
    /// Sets the Manage API token.
    ///
    /// The token is sent verbatim in the `X-KBC-ManageApiToken` header on
    /// every request.
    pub fn token(self, token: impl Into<String>) -> ClientBuilder<U, HasToken> {
        ClientBuilder {
            url: self.url,
            token: Some(token.into()),
            retry_config: self.retry_config,
            timeout: self.timeout,
            user_agent: self.user_agent,
            _url_state: PhantomData,
            _token_state: PhantomData,
        }
    }
}

impl<U, T> ClientBuilder<U, T> {
    /// Sets the retry configuration.
    #[must_use]
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Sets the per-request timeout.
    ///
    /// This applies to each individual attempt, not to the whole retry
    /// sequence.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the default User-Agent string.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl ClientBuilder<HasUrl, HasToken> {
    /// Builds the client, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`Configuration`](crate::ErrorKind::Configuration) error
    /// when the URL does not parse as an absolute URL or the token is
    /// empty.
    pub fn build(self) -> Result<Client, Error> {
        // Typestate guarantees both are Some.
        let url = self.url.unwrap_or_default();
        let token = self.token.unwrap_or_default();

        let url = Url::parse(&url)
            .map_err(|e| Error::configuration(format!("invalid base URL {:?}: {}", url, e)))?;

        if token.is_empty() {
            return Err(Error::configuration("token must not be empty"));
        }
        // The token travels in a header, so it must be a valid header value.
        HeaderValue::from_str(&token)
            .map_err(|_| Error::configuration("token contains invalid header characters"))?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| user_agent::user_agent().to_string());

        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .map_err(|e| {
                Error::configuration(format!("failed to create HTTP client: {}", e)).with_source(e)
            })?;

        Ok(Client::from_inner(Arc::new(ClientInner {
            url,
            token,
            retry_config: self.retry_config,
            http_client,
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Client, ErrorKind};

    #[test]
    fn test_build_with_valid_config() {
        let client = Client::builder()
            .url("https://connection.keboola.com")
            .token("some-token")
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_rejects_invalid_url() {
        let err = Client::builder()
            .url("not a url")
            .token("some-token")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_build_rejects_empty_url() {
        let err = Client::builder()
            .url("")
            .token("some-token")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_build_rejects_empty_token() {
        let err = Client::builder()
            .url("https://connection.keboola.com")
            .token("")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_build_rejects_token_with_control_chars() {
        let err = Client::builder()
            .url("https://connection.keboola.com")
            .token("bad\ntoken")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
