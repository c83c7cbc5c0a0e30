//! Internal client implementation: the HTTP transport with retry.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::RetryConfig;
use crate::error::{Error, ErrorKind};

/// Header carrying the Manage API token on every request.
pub(crate) const TOKEN_HEADER: &str = "X-KBC-ManageApiToken";

pub(crate) struct ClientInner {
    /// The Manage API base URL.
    pub url: Url,

    /// The Manage API token, sent verbatim in [`TOKEN_HEADER`].
    pub token: String,

    /// Retry configuration.
    pub retry_config: RetryConfig,

    /// The long-lived HTTP client, constructed once and reused.
    pub http_client: reqwest::Client,
}

impl ClientInner {
    /// Joins a path against the base URL.
    fn build_url(&self, path: &str) -> Result<Url, Error> {
        self.url
            .join(path)
            .map_err(|e| Error::configuration(format!("invalid URL path {:?}: {}", path, e)))
    }

    /// Issues a request, retrying transient failures.
    ///
    /// A response with a status above 499, or a connect/timeout error, is
    /// retried until `max_tries` attempts have been made, sleeping
    /// `base_delay * multiplier^(n-1)` between attempts. Client errors
    /// (4xx) are never retried.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, Error> {
        let url = self.build_url(path)?;
        let max_tries = self.retry_config.max_tries.max(1);
        let mut attempt = 0u32;

        loop {
            attempt += 1;

            let mut request = self
                .http_client
                .request(method.clone(), url.clone())
                .header(TOKEN_HEADER, &self.token);
            if let Some(ref body) = body {
                request = request.json(body);
            }

            tracing::debug!(%method, %url, attempt, "sending request");

            match request.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();

                    // Server errors are retried; 4xx surface immediately.
                    if status > 499 && attempt < max_tries {
                        let delay = self.retry_config.delay_for_attempt(attempt);
                        tracing::warn!(status, attempt, ?delay, "server error, backing off");
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    return decode_response(response).await;
                }
                Err(e) if (e.is_connect() || e.is_timeout()) && attempt < max_tries => {
                    let delay = self.retry_config.delay_for_attempt(attempt);
                    tracing::warn!(error = %e, attempt, ?delay, "transport error, backing off");
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(map_transport_error(e)),
            }
        }
    }

    /// Makes a GET request.
    pub(crate) async fn get(&self, path: &str) -> Result<Value, Error> {
        self.request(Method::GET, path, None).await
    }

    /// Makes a POST request with a JSON body.
    pub(crate) async fn post<T>(&self, path: &str, body: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(serde_json::to_value(body)?))
            .await
    }

    /// Makes a POST request without a body.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<Value, Error> {
        self.request(Method::POST, path, None).await
    }

    /// Makes a PUT request with a JSON body.
    pub(crate) async fn put<T>(&self, path: &str, body: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(serde_json::to_value(body)?))
            .await
    }

    /// Makes a PUT request without a body.
    pub(crate) async fn put_empty(&self, path: &str) -> Result<Value, Error> {
        self.request(Method::PUT, path, None).await
    }

    /// Makes a PATCH request with a JSON body.
    pub(crate) async fn patch<T>(&self, path: &str, body: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, Some(serde_json::to_value(body)?))
            .await
    }

    /// Makes a DELETE request, discarding any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        self.request(Method::DELETE, path, None).await.map(|_| ())
    }
}

/// Decodes a response body and maps non-2xx statuses to errors.
///
/// A body under a `Content-Type` of exactly `application/json` is parsed;
/// anything else travels as `Value::String` with the raw body.
async fn decode_response(response: reqwest::Response) -> Result<Value, Error> {
    let status = response.status();

    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs);

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "application/json");

    let text = response.text().await.map_err(|e| {
        Error::protocol(format!("failed to read response body: {}", e)).with_source(e)
    })?;

    if status.is_success() {
        return if is_json {
            serde_json::from_str(&text).map_err(|e| {
                Error::protocol(format!("invalid JSON in response body: {}", e)).with_source(e)
            })
        } else {
            Ok(Value::String(text))
        };
    }

    // Error bodies are decoded best-effort; an undecodable body still has
    // to surface the HTTP status.
    let body = if is_json {
        serde_json::from_str(&text).unwrap_or(Value::String(text))
    } else {
        Value::String(text)
    };

    if status == StatusCode::SERVICE_UNAVAILABLE {
        let reason = body
            .get("reason")
            .and_then(Value::as_str)
            .unwrap_or("Maintenance")
            .to_string();
        return Err(Error::maintenance(reason, retry_after, body));
    }

    let code = body
        .get("code")
        .and_then(Value::as_str)
        .map(str::to_string);
    let message = body
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("HTTP error")
                .to_string()
        });

    Err(Error::api(status.as_u16(), code, message, body))
}

/// Maps a reqwest transport error to a client error.
fn map_transport_error(e: reqwest::Error) -> Error {
    let kind = if e.is_timeout() {
        ErrorKind::Timeout
    } else if e.is_connect() {
        ErrorKind::Connection
    } else {
        ErrorKind::Unknown
    };
    Error::new(kind, format!("request failed: {}", e)).with_source(e)
}
