//! Main error type for the Manage API client.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use super::ErrorKind;

/// Sentinel string code used when the server does not supply one.
pub const APPLICATION_ERROR: &str = "APPLICATION_ERROR";

/// The primary error type for Manage API operations.
///
/// `Error` carries everything a caller needs to branch on a failure:
/// - [`kind()`](Error::kind): category for `match` statements
/// - [`status()`](Error::status): HTTP status code, when the error came
///   from an HTTP response
/// - [`string_code()`](Error::string_code): the server's machine-readable
///   code (`"APPLICATION_ERROR"` when the server supplied none)
/// - [`retry_after()`](Error::retry_after): maintenance delay hint (503)
/// - [`context()`](Error::context): the decoded error body, verbatim
///
/// ## Example
///
/// ```rust
/// use kbc_manage::{Error, ErrorKind};
///
/// fn handle_error(err: Error) {
///     match err.kind() {
///         ErrorKind::Maintenance => {
///             if let Some(delay) = err.retry_after() {
///                 println!("down for maintenance, retry after {:?}", delay);
///             }
///         }
///         ErrorKind::NotFound => {
///             println!("gone: {}", err.string_code());
///         }
///         _ => {
///             println!("failed: {}", err);
///         }
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    /// The error category.
    kind: ErrorKind,

    /// Human-readable error message.
    message: Cow<'static, str>,

    /// HTTP status code, when the error originates from a response.
    status: Option<u16>,

    /// Server-supplied machine-readable string code.
    code: Option<String>,

    /// Retry delay from the `Retry-After` header (maintenance responses).
    retry_after: Option<Duration>,

    /// The decoded error body, verbatim.
    context: Option<serde_json::Value>,

    /// The underlying error, if any.
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kbc_manage::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::Configuration, "token must not be empty");
    /// assert_eq!(err.kind(), ErrorKind::Configuration);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            code: None,
            retry_after: None,
            context: None,
            source: None,
        }
    }

    /// Creates an error from a non-2xx HTTP response.
    ///
    /// `code` is the server's `code` field, `message` the server's `error`
    /// field (or the canonical status reason when absent), and `context`
    /// the decoded response body.
    pub fn api(
        status: u16,
        code: Option<String>,
        message: impl Into<Cow<'static, str>>,
        context: serde_json::Value,
    ) -> Self {
        Self {
            kind: ErrorKind::from_status(status),
            message: message.into(),
            status: Some(status),
            code,
            retry_after: None,
            context: Some(context),
            source: None,
        }
    }

    /// Creates a maintenance error from an HTTP 503 response.
    ///
    /// `reason` is the server's `reason` field and `retry_after` the parsed
    /// `Retry-After` header, when present.
    pub fn maintenance(
        reason: impl Into<Cow<'static, str>>,
        retry_after: Option<Duration>,
        context: serde_json::Value,
    ) -> Self {
        Self {
            kind: ErrorKind::Maintenance,
            message: reason.into(),
            status: Some(503),
            code: None,
            retry_after,
            context: Some(context),
            source: None,
        }
    }

    /// Returns the error kind for categorization.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the HTTP status code, when the error came from a response.
    #[inline]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the server's machine-readable string code.
    ///
    /// Falls back to the [`APPLICATION_ERROR`] sentinel when the server
    /// did not supply a `code` field.
    #[inline]
    pub fn string_code(&self) -> &str {
        self.code.as_deref().unwrap_or(APPLICATION_ERROR)
    }

    /// Returns the retry delay hint for maintenance errors.
    ///
    /// Populated from the `Retry-After` header of a 503 response; `None`
    /// when the header is absent or unparseable.
    #[inline]
    pub fn retry_after(&self) -> Option<Duration> {
        self.retry_after
    }

    /// Returns the decoded error body, verbatim as the server sent it.
    #[inline]
    pub fn context(&self) -> Option<&serde_json::Value> {
        self.context.as_ref()
    }

    /// Returns `true` if this error is generally safe to retry.
    ///
    /// Equivalent to `self.kind().is_retriable()`.
    #[inline]
    pub fn is_retriable(&self) -> bool {
        self.kind.is_retriable()
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors for common error types

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    /// Creates a connection error.
    pub fn connection(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Connection, message)
    }

    /// Creates a protocol error.
    pub fn protocol(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Protocol, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if let Some(status) = self.status {
            write!(f, " (HTTP {})", status)?;
        }
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::configuration(format!("invalid URL: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::protocol(format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::TimedOut => ErrorKind::Timeout,
            std::io::ErrorKind::ConnectionRefused
            | std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::ConnectionAborted
            | std::io::ErrorKind::NotConnected => ErrorKind::Connection,
            _ => ErrorKind::Unknown,
        };
        Error::new(kind, err.to_string()).with_source(err)
    }
}
