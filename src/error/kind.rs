//! Error kind enumeration for categorizing client errors.

/// Categorization of client errors.
///
/// This enum provides a stable interface for matching on error types,
/// enabling different handling strategies for different failure modes.
///
/// ## Retriable vs Non-Retriable
///
/// The transport retries a request only when the response status is above
/// 499 or the request failed at the connection level. The same
/// classification is exposed here for callers layering their own policies:
///
/// | ErrorKind         | Retriable | Action                     |
/// |-------------------|-----------|----------------------------|
/// | `Maintenance`     | Yes       | Wait for `retry_after()`   |
/// | `Internal`        | Yes       | Retry with backoff         |
/// | `Timeout`         | Yes       | Retry with backoff         |
/// | `Connection`      | Yes       | Retry with backoff         |
/// | `RateLimited`     | No*       | Pace requests client-side  |
/// | `Unauthorized`    | No        | Fix the token              |
/// | `Forbidden`       | No        | Fix permissions            |
/// | `NotFound`        | No        | Resource doesn't exist     |
/// | `Conflict`        | No        | Resolve the conflict first |
/// | `InvalidArgument` | No        | Fix the request            |
///
/// *429 is a client error and sits outside the transport's `> 499` retry
/// predicate, so the client never retries it automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Invalid request argument or payload.
    ///
    /// HTTP: 400 Bad Request
    ///
    /// **Not retriable.** Fix the input and retry.
    #[error("invalid argument")]
    InvalidArgument,

    /// Authentication failed (missing, invalid, or expired token).
    ///
    /// HTTP: 401 Unauthorized
    ///
    /// **Not retriable.** Fix the token and retry.
    #[error("unauthorized")]
    Unauthorized,

    /// The token is valid but lacks the required permission.
    ///
    /// HTTP: 403 Forbidden
    ///
    /// **Not retriable.** Fix permissions and retry.
    #[error("forbidden")]
    Forbidden,

    /// Requested resource was not found.
    ///
    /// HTTP: 404 Not Found
    ///
    /// **Not retriable.** The resource doesn't exist.
    #[error("not found")]
    NotFound,

    /// The request conflicts with the current state of the resource.
    ///
    /// HTTP: 409 Conflict
    ///
    /// **Not retriable.** Resolve the conflict first.
    #[error("conflict")]
    Conflict,

    /// Rate limit exceeded.
    ///
    /// HTTP: 429 Too Many Requests
    ///
    /// **Not retried by the transport** (the retry predicate is strictly
    /// status > 499). Pace requests on the caller side.
    #[error("rate limited")]
    RateLimited,

    /// The service is in maintenance mode.
    ///
    /// HTTP: 503 Service Unavailable
    ///
    /// **Retriable.** Use `Error::retry_after()` for the server's hint.
    #[error("maintenance")]
    Maintenance,

    /// Internal server error.
    ///
    /// HTTP: 500 and other 5xx statuses
    ///
    /// **Retriable.** The transport retries these with exponential backoff.
    #[error("internal error")]
    Internal,

    /// Request timed out on the client side.
    ///
    /// **Retriable.** Retry with exponential backoff.
    #[error("timeout")]
    Timeout,

    /// Connection error (DNS, TLS handshake, connection refused).
    ///
    /// **Retriable.** May indicate transient network issues.
    #[error("connection error")]
    Connection,

    /// Protocol error (the server returned a body the client could not
    /// decode, e.g. invalid JSON under an `application/json` content type).
    ///
    /// **Not retriable.** May indicate a proxy or version mismatch.
    #[error("protocol error")]
    Protocol,

    /// Configuration error (invalid URL, empty token).
    ///
    /// **Not retriable.** Fix the configuration.
    #[error("configuration error")]
    Configuration,

    /// Unknown or unexpected error.
    ///
    /// **Not retriable** by default.
    #[error("unknown error")]
    Unknown,
}

impl ErrorKind {
    /// Returns `true` if errors of this kind are generally safe to retry.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            ErrorKind::Maintenance | ErrorKind::Internal | ErrorKind::Timeout | ErrorKind::Connection
        )
    }

    /// Maps an HTTP status code to an error kind.
    ///
    /// 503 maps to [`ErrorKind::Maintenance`]; every other 5xx maps to
    /// [`ErrorKind::Internal`].
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::InvalidArgument,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            429 => ErrorKind::RateLimited,
            503 => ErrorKind::Maintenance,
            500..=599 => ErrorKind::Internal,
            _ => ErrorKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(400, ErrorKind::InvalidArgument)]
    #[test_case(401, ErrorKind::Unauthorized)]
    #[test_case(403, ErrorKind::Forbidden)]
    #[test_case(404, ErrorKind::NotFound)]
    #[test_case(409, ErrorKind::Conflict)]
    #[test_case(429, ErrorKind::RateLimited)]
    #[test_case(500, ErrorKind::Internal)]
    #[test_case(502, ErrorKind::Internal)]
    #[test_case(503, ErrorKind::Maintenance)]
    #[test_case(504, ErrorKind::Internal)]
    #[test_case(418, ErrorKind::Unknown)]
    fn test_from_status(status: u16, expected: ErrorKind) {
        assert_eq!(ErrorKind::from_status(status), expected);
    }

    #[test]
    fn test_retriable_classification() {
        assert!(ErrorKind::Maintenance.is_retriable());
        assert!(ErrorKind::Internal.is_retriable());
        assert!(ErrorKind::Timeout.is_retriable());
        assert!(ErrorKind::Connection.is_retriable());

        assert!(!ErrorKind::RateLimited.is_retriable());
        assert!(!ErrorKind::Unauthorized.is_retriable());
        assert!(!ErrorKind::NotFound.is_retriable());
        assert!(!ErrorKind::Configuration.is_retriable());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorKind::Maintenance.to_string(), "maintenance");
        assert_eq!(ErrorKind::NotFound.to_string(), "not found");
    }
}
