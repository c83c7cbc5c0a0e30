//! Admin (user) management.

use serde::Serialize;
use serde_json::Value;

use crate::Error;
use crate::client::Client;

/// Client for a single admin, addressed by email or numeric id.
///
/// Access via `client.user("alice@example.com")` or `client.user("123")`.
#[derive(Clone)]
pub struct UserClient {
    client: Client,
    email_or_id: String,
}

impl UserClient {
    /// Creates a new user client.
    pub(crate) fn new(client: Client, email_or_id: String) -> Self {
        Self { client, email_or_id }
    }

    fn base_path(&self) -> String {
        format!("/manage/users/{}", urlencoding::encode(&self.email_or_id))
    }

    /// Gets the admin's details.
    pub async fn get(&self) -> Result<Value, Error> {
        self.client.inner().get(&self.base_path()).await
    }

    /// Updates the admin.
    pub async fn update(&self, request: UpdateUserRequest) -> Result<Value, Error> {
        self.client.inner().put(&self.base_path(), &request).await
    }

    /// Lists the features assigned to the admin.
    pub async fn features(&self) -> Result<Value, Error> {
        let path = format!("{}/features", self.base_path());
        self.client.inner().get(&path).await
    }

    /// Assigns a feature to the admin by name.
    pub async fn add_feature(&self, feature: impl Into<String>) -> Result<Value, Error> {
        let path = format!("{}/features", self.base_path());
        self.client
            .inner()
            .post(&path, &serde_json::json!({ "feature": feature.into() }))
            .await
    }

    /// Removes a feature from the admin by name.
    pub async fn remove_feature(&self, feature: &str) -> Result<(), Error> {
        let path = format!("{}/features/{}", self.base_path(), urlencoding::encode(feature));
        self.client.inner().delete(&path).await
    }

    /// Clears the admin's multi-factor authentication setup.
    ///
    /// The admin is prompted to set up MFA again on next login.
    pub async fn disable_mfa(&self) -> Result<(), Error> {
        let path = format!("{}/mfa", self.base_path());
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for UserClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserClient")
            .field("email_or_id", &self.email_or_id)
            .finish_non_exhaustive()
    }
}

/// Request to update an admin. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UpdateUserRequest {
    /// Creates a new empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Client;

    #[test]
    fn test_base_path_percent_encodes_email() {
        let client = Client::builder()
            .url("http://localhost")
            .token("test-token")
            .build()
            .unwrap();

        let user = UserClient::new(client, "alice@example.com".to_string());
        assert_eq!(user.base_path(), "/manage/users/alice%40example.com");
    }
}
