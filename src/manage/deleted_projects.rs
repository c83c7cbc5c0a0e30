//! Deleted project listing and restoration.

use serde_json::Value;

use crate::Error;
use crate::client::Client;
use crate::manage::types::with_query;

/// Client for soft-deleted projects.
///
/// Access via `client.deleted_projects()`. Projects land here after
/// [`ProjectClient::delete`](crate::manage::ProjectClient::delete) and stay
/// restorable until purged.
#[derive(Clone)]
pub struct DeletedProjectsClient {
    client: Client,
}

impl DeletedProjectsClient {
    /// Creates a new deleted-projects client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists deleted projects, optionally filtered and paginated.
    pub async fn list(&self, options: ListDeletedProjectsOptions) -> Result<Value, Error> {
        let mut parts = Vec::new();
        if let Some(organization_id) = options.organization_id {
            parts.push(("organizationId", organization_id.to_string()));
        }
        if let Some(name) = options.name {
            parts.push(("name", name));
        }
        if let Some(offset) = options.offset {
            parts.push(("offset", offset.to_string()));
        }
        if let Some(limit) = options.limit {
            parts.push(("limit", limit.to_string()));
        }
        let path = with_query("/manage/deleted-projects".to_string(), parts);
        self.client.inner().get(&path).await
    }

    /// Gets a single deleted project.
    pub async fn get(&self, project_id: u64) -> Result<Value, Error> {
        let path = format!("/manage/deleted-projects/{}", project_id);
        self.client.inner().get(&path).await
    }

    /// Restores a deleted project.
    pub async fn undelete(
        &self,
        project_id: u64,
        options: UndeleteProjectOptions,
    ) -> Result<Value, Error> {
        let path = format!("/manage/deleted-projects/{}/undelete", project_id);
        self.client.inner().post(&path, &options).await
    }

    /// Permanently purges the data of a deleted project.
    ///
    /// Purging is asynchronous on the server; the returned document describes
    /// the purge process, not its completion.
    pub async fn purge(&self, project_id: u64) -> Result<Value, Error> {
        let path = format!("/manage/deleted-projects/{}/purge", project_id);
        self.client.inner().post_empty(&path).await
    }
}

impl std::fmt::Debug for DeletedProjectsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeletedProjectsClient").finish_non_exhaustive()
    }
}

/// Filtering and pagination options for [`DeletedProjectsClient::list`].
#[derive(Debug, Clone, Default)]
pub struct ListDeletedProjectsOptions {
    /// Restrict to projects deleted from this organization.
    pub organization_id: Option<u64>,
    /// Restrict to projects whose name matches.
    pub name: Option<String>,
    /// Pagination offset.
    pub offset: Option<u64>,
    /// Pagination limit.
    pub limit: Option<u64>,
}

impl ListDeletedProjectsOptions {
    /// Creates empty options (no filtering, server-default pagination).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to one organization.
    #[must_use]
    pub fn with_organization_id(mut self, organization_id: u64) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    /// Restricts the listing by project name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the pagination offset.
    #[must_use]
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the pagination limit.
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Options for [`DeletedProjectsClient::undelete`].
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UndeleteProjectOptions {
    /// Expiration of the restored project, in days from now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_days: Option<u32>,
}

impl UndeleteProjectOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expiration of the restored project.
    #[must_use]
    pub fn with_expiration_days(mut self, days: u32) -> Self {
        self.expiration_days = Some(days);
        self
    }
}

#[cfg(test)]
mod wiremock_tests {
    use wiremock::matchers::{body_json, method, path, query_param};
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
    async fn test_list_with_filters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/manage/deleted-projects"))
            .and(query_param("organizationId", "123"))
            .and(query_param("limit", "5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"id": 42, "name": "gone"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let projects = client
            .deleted_projects()
            .list(
                ListDeletedProjectsOptions::new()
                    .with_organization_id(123)
                    .with_limit(5),
            )
            .await
            .unwrap();

        assert_eq!(projects[0]["name"], "gone");
    }

    #[tokio::test]
    async fn test_undelete_with_expiration() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/manage/deleted-projects/42/undelete"))
            .and(body_json(serde_json::json!({"expirationDays": 14})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 42})))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let restored = client
            .deleted_projects()
            .undelete(42, UndeleteProjectOptions::new().with_expiration_days(14))
            .await
            .unwrap();

        assert_eq!(restored["id"], 42);
    }

    #[tokio::test]
    async fn test_purge() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/manage/deleted-projects/42/purge"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"commandExecutionId": "abc"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let process = client.deleted_projects().purge(42).await.unwrap();

        assert_eq!(process["commandExecutionId"], "abc");
    }
}
