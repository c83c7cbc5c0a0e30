//! UI app registry.

use serde_json::Value;

use crate::Error;
use crate::client::Client;

/// Client for registered UI apps.
///
/// Access via `client.ui_apps()`.
#[derive(Clone)]
pub struct UiAppsClient {
    client: Client,
}

impl UiAppsClient {
    /// Creates a new UI apps client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists registered UI apps.
    pub async fn list(&self) -> Result<Value, Error> {
        self.client.inner().get("/manage/ui-apps").await
    }

    /// Removes a UI app from the registry by name.
    pub async fn delete(&self, name: &str) -> Result<(), Error> {
        let path = format!("/manage/ui-apps/{}", urlencoding::encode(name));
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for UiAppsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiAppsClient").finish_non_exhaustive()
    }
}
