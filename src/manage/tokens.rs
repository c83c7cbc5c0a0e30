//! Token operations.

use serde_json::Value;

use crate::Error;
use crate::client::Client;

/// Client for Manage API token operations.
///
/// Access via `client.tokens()`.
///
/// ## Example
///
/// ```rust,ignore
/// let token = client.tokens().verify().await?;
/// println!("token owner: {}", token["user"]["email"]);
/// ```
#[derive(Clone)]
pub struct TokensClient {
    client: Client,
}

impl TokensClient {
    /// Creates a new tokens client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Verifies the configured token and returns its metadata.
    pub async fn verify(&self) -> Result<Value, Error> {
        self.client.inner().get("/manage/tokens/verify").await
    }
}

impl std::fmt::Debug for TokensClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokensClient").finish_non_exhaustive()
    }
}
