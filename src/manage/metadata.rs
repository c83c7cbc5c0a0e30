//! Key/value metadata attached to maintainers, organizations, and projects.
//!
//! The endpoints are identical across the three owner kinds; only the path
//! prefix differs, so one client serves all of them.

use serde::Serialize;
use serde_json::Value;

use crate::Error;
use crate::client::Client;

/// Client for the metadata of one owner entity.
///
/// Access via `.metadata()` on
/// [`MaintainerClient`](crate::manage::MaintainerClient),
/// [`OrganizationClient`](crate::manage::OrganizationClient), or
/// [`ProjectClient`](crate::manage::ProjectClient).
#[derive(Clone)]
pub struct MetadataClient {
    client: Client,
    base_path: String,
}

impl MetadataClient {
    /// Creates a metadata client rooted at the owner's path.
    pub(crate) fn new(client: Client, base_path: String) -> Self {
        Self { client, base_path }
    }

    /// Lists all metadata records of the owner.
    pub async fn list(&self) -> Result<Value, Error> {
        let path = format!("{}/metadata", self.base_path);
        self.client.inner().get(&path).await
    }

    /// Sets metadata records, upserting by key within a provider.
    pub async fn set(&self, metadata: Vec<MetadataEntry>) -> Result<Value, Error> {
        let path = format!("{}/metadata", self.base_path);
        self.client
            .inner()
            .post(&path, &serde_json::json!({ "metadata": metadata }))
            .await
    }

    /// Deletes a single metadata record by its id.
    pub async fn delete(&self, metadata_id: u64) -> Result<(), Error> {
        let path = format!("{}/metadata/{}", self.base_path, metadata_id);
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for MetadataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataClient")
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

/// One key/value pair for [`MetadataClient::set`].
#[derive(Debug, Clone, Serialize)]
pub struct MetadataEntry {
    /// Metadata key.
    pub key: String,
    /// Metadata value.
    pub value: String,
    /// Provider namespace; the server default is `"user"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl MetadataEntry {
    /// Creates a new entry with the server-default provider.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            provider: None,
        }
    }

    /// Sets the provider namespace.
    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

#[cfg(test)]
mod wiremock_tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::Client;

    async fn create_mock_client(server: &MockServer) -> Client {
        Client::builder()
            .url(server.uri())
            .token("test-token")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_set_project_metadata() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/manage/projects/42/metadata"))
            .and(body_json(serde_json::json!({
                "metadata": [{"key": "costCenter", "value": "cc-7", "provider": "system"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "key": "costCenter", "value": "cc-7"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let records = client
            .project(42)
            .metadata()
            .set(vec![MetadataEntry::new("costCenter", "cc-7").with_provider("system")])
            .await
            .unwrap();

        assert_eq!(records[0]["key"], "costCenter");
    }

    #[tokio::test]
    async fn test_list_organization_metadata() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/manage/organizations/123/metadata"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"id": 1, "key": "tier"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let records = client.organization(123).metadata().list().await.unwrap();

        assert_eq!(records[0]["key"], "tier");
    }

    #[tokio::test]
    async fn test_delete_metadata_record() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/manage/maintainers/5/metadata/99"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        client.maintainer(5).metadata().delete(99).await.unwrap();
    }
}
