//! Project management.
//!
//! Projects are created under an organization
//! ([`OrganizationClient::create_project`](crate::manage::OrganizationClient::create_project));
//! everything after creation is project-scoped and lives here.

use serde::Serialize;
use serde_json::Value;

use crate::Error;
use crate::client::Client;
use crate::manage::metadata::MetadataClient;
use crate::manage::types::InviteRequest;

/// Client for project-scoped operations.
///
/// Access via `client.project(id)`.
///
/// ## Example
///
/// ```rust,ignore
/// let project = client.project(42);
///
/// let detail = project.get().await?;
///
/// // Membership
/// project.add_user(AddProjectUserRequest::new("alice@example.com")
///     .with_role("guest")
///     .with_expiration_seconds(3600)
/// ).await?;
///
/// // Capabilities
/// project.add_feature("new-transformations-only").await?;
/// project.assign_storage_backend(7).await?;
/// ```
#[derive(Clone)]
pub struct ProjectClient {
    client: Client,
    project_id: u64,
}

impl ProjectClient {
    /// Creates a new project client.
    pub(crate) fn new(client: Client, project_id: u64) -> Self {
        Self { client, project_id }
    }

    /// Returns the project id.
    pub fn project_id(&self) -> u64 {
        self.project_id
    }

    /// Gets the project details.
    pub async fn get(&self) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}", self.project_id);
        self.client.inner().get(&path).await
    }

    /// Updates the project.
    pub async fn update(&self, request: UpdateProjectRequest) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}", self.project_id);
        self.client.inner().put(&path, &request).await
    }

    /// Soft-deletes the project.
    ///
    /// The project moves to the deleted-projects list and can be restored
    /// via [`DeletedProjectsClient::undelete`](crate::manage::DeletedProjectsClient::undelete)
    /// until it expires or is purged.
    pub async fn delete(&self) -> Result<(), Error> {
        let path = format!("/manage/projects/{}", self.project_id);
        self.client.inner().delete(&path).await
    }

    // Membership

    /// Lists the project's admins.
    pub async fn users(&self) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/users", self.project_id);
        self.client.inner().get(&path).await
    }

    /// Adds an admin to the project.
    pub async fn add_user(&self, request: AddProjectUserRequest) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/users", self.project_id);
        self.client.inner().post(&path, &request).await
    }

    /// Changes an admin's role in the project.
    pub async fn update_user_role(
        &self,
        user_id: u64,
        role: impl Into<String>,
    ) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/users/{}", self.project_id, user_id);
        self.client
            .inner()
            .patch(&path, &serde_json::json!({ "role": role.into() }))
            .await
    }

    /// Removes an admin from the project.
    pub async fn remove_user(&self, user_id: u64) -> Result<(), Error> {
        let path = format!("/manage/projects/{}/users/{}", self.project_id, user_id);
        self.client.inner().delete(&path).await
    }

    /// Returns a client for invitation management.
    pub fn invitations(&self) -> ProjectInvitationsClient {
        ProjectInvitationsClient {
            client: self.client.clone(),
            project_id: self.project_id,
        }
    }

    /// Returns a client for join-request management.
    pub fn join_requests(&self) -> ProjectJoinRequestsClient {
        ProjectJoinRequestsClient {
            client: self.client.clone(),
            project_id: self.project_id,
        }
    }

    /// Requests access to the project as the calling admin.
    ///
    /// Creates a join request that a project admin approves or rejects
    /// via [`join_requests()`](Self::join_requests).
    pub async fn request_access(&self) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/request-access", self.project_id);
        self.client.inner().post_empty(&path).await
    }

    // Features

    /// Lists the features assigned to the project.
    pub async fn features(&self) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/features", self.project_id);
        self.client.inner().get(&path).await
    }

    /// Assigns a feature to the project by name.
    pub async fn add_feature(&self, feature: impl Into<String>) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/features", self.project_id);
        self.client
            .inner()
            .post(&path, &serde_json::json!({ "feature": feature.into() }))
            .await
    }

    /// Removes a feature from the project by name.
    pub async fn remove_feature(&self, feature: &str) -> Result<(), Error> {
        let path = format!(
            "/manage/projects/{}/features/{}",
            self.project_id,
            urlencoding::encode(feature)
        );
        self.client.inner().delete(&path).await
    }

    // Storage backend

    /// Assigns a registered storage backend to the project.
    pub async fn assign_storage_backend(&self, storage_backend_id: u64) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/storage-backend", self.project_id);
        self.client
            .inner()
            .post(
                &path,
                &serde_json::json!({ "storageBackendId": storage_backend_id }),
            )
            .await
    }

    /// Removes the project's storage backend assignment.
    pub async fn remove_storage_backend(&self) -> Result<(), Error> {
        let path = format!("/manage/projects/{}/storage-backend", self.project_id);
        self.client.inner().delete(&path).await
    }

    // Limits

    /// Sets (upserts) limits on the project.
    pub async fn set_limits(&self, limits: Vec<LimitValue>) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/limits", self.project_id);
        self.client
            .inner()
            .post(&path, &serde_json::json!({ "limits": limits }))
            .await
    }

    /// Removes a limit from the project by name.
    pub async fn remove_limit(&self, name: &str) -> Result<(), Error> {
        let path = format!(
            "/manage/projects/{}/limits/{}",
            self.project_id,
            urlencoding::encode(name)
        );
        self.client.inner().delete(&path).await
    }

    // Tokens

    /// Creates a Storage API token in the project.
    pub async fn create_storage_token(
        &self,
        request: CreateStorageTokenRequest,
    ) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/tokens", self.project_id);
        self.client.inner().post(&path, &request).await
    }

    // Organization / lifecycle

    /// Moves the project to another organization.
    pub async fn move_to_organization(&self, organization_id: u64) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/organizations", self.project_id);
        self.client
            .inner()
            .post(&path, &serde_json::json!({ "organizationId": organization_id }))
            .await
    }

    /// Disables the project.
    pub async fn disable(&self, request: DisableProjectRequest) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/disabled", self.project_id);
        self.client.inner().post(&path, &request).await
    }

    /// Re-enables a disabled project.
    pub async fn enable(&self) -> Result<(), Error> {
        let path = format!("/manage/projects/{}/disabled", self.project_id);
        self.client.inner().delete(&path).await
    }

    /// Returns a client for project metadata.
    pub fn metadata(&self) -> MetadataClient {
        MetadataClient::new(
            self.client.clone(),
            format!("/manage/projects/{}", self.project_id),
        )
    }
}

impl std::fmt::Debug for ProjectClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectClient")
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

/// Client for project invitation management.
///
/// Access via `project.invitations()`. The invited admin answers via
/// [`CurrentUserClient`](crate::manage::CurrentUserClient).
#[derive(Clone)]
pub struct ProjectInvitationsClient {
    client: Client,
    project_id: u64,
}

impl ProjectInvitationsClient {
    /// Lists pending invitations.
    pub async fn list(&self) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/invitations", self.project_id);
        self.client.inner().get(&path).await
    }

    /// Gets a single invitation.
    pub async fn get(&self, invitation_id: u64) -> Result<Value, Error> {
        let path = format!(
            "/manage/projects/{}/invitations/{}",
            self.project_id, invitation_id
        );
        self.client.inner().get(&path).await
    }

    /// Invites an admin to the project.
    pub async fn invite(&self, request: InviteRequest) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/invitations", self.project_id);
        self.client.inner().post(&path, &request).await
    }

    /// Cancels a pending invitation.
    pub async fn cancel(&self, invitation_id: u64) -> Result<(), Error> {
        let path = format!(
            "/manage/projects/{}/invitations/{}",
            self.project_id, invitation_id
        );
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for ProjectInvitationsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectInvitationsClient")
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

/// Client for project join-request management (the approving side).
///
/// Access via `project.join_requests()`. Join requests are created by the
/// requesting admin via
/// [`ProjectClient::request_access`](ProjectClient::request_access).
#[derive(Clone)]
pub struct ProjectJoinRequestsClient {
    client: Client,
    project_id: u64,
}

impl ProjectJoinRequestsClient {
    /// Lists open join requests.
    pub async fn list(&self) -> Result<Value, Error> {
        let path = format!("/manage/projects/{}/join-requests", self.project_id);
        self.client.inner().get(&path).await
    }

    /// Gets a single join request.
    pub async fn get(&self, request_id: u64) -> Result<Value, Error> {
        let path = format!(
            "/manage/projects/{}/join-requests/{}",
            self.project_id, request_id
        );
        self.client.inner().get(&path).await
    }

    /// Approves a join request, adding the requester to the project.
    pub async fn approve(&self, request_id: u64) -> Result<Value, Error> {
        let path = format!(
            "/manage/projects/{}/join-requests/{}",
            self.project_id, request_id
        );
        self.client.inner().put_empty(&path).await
    }

    /// Rejects a join request.
    pub async fn reject(&self, request_id: u64) -> Result<(), Error> {
        let path = format!(
            "/manage/projects/{}/join-requests/{}",
            self.project_id, request_id
        );
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for ProjectJoinRequestsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectJoinRequestsClient")
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

/// Request to update a project. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    /// New project name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New project type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    /// Project expiration, in days from now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_days: Option<u32>,
    /// Data retention window for dropped tables, in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_retention_time_in_days: Option<u32>,
}

impl UpdateProjectRequest {
    /// Creates a new empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the project type.
    #[must_use]
    pub fn with_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = Some(project_type.into());
        self
    }

    /// Sets the project expiration in days from now.
    #[must_use]
    pub fn with_expiration_days(mut self, days: u32) -> Self {
        self.expiration_days = Some(days);
        self
    }

    /// Sets the data retention window in days.
    #[must_use]
    pub fn with_data_retention_time_in_days(mut self, days: u32) -> Self {
        self.data_retention_time_in_days = Some(days);
        self
    }
}

/// Request to add an admin to a project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProjectUserRequest {
    /// Email address of the admin to add.
    pub email: String,
    /// Role granted in the project (e.g. `"admin"`, `"guest"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Audit reason recorded with the membership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Automatic removal after this many seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_seconds: Option<u64>,
}

impl AddProjectUserRequest {
    /// Creates a new request for the given email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: None,
            reason: None,
            expiration_seconds: None,
        }
    }

    /// Sets the role granted in the project.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the audit reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the automatic removal delay in seconds.
    #[must_use]
    pub fn with_expiration_seconds(mut self, seconds: u64) -> Self {
        self.expiration_seconds = Some(seconds);
        self
    }
}

/// A single limit value for [`ProjectClient::set_limits`].
#[derive(Debug, Clone, Serialize)]
pub struct LimitValue {
    /// Limit name (e.g. `"storage.jobsParallelism"`).
    pub name: String,
    /// Limit value.
    pub value: i64,
}

impl LimitValue {
    /// Creates a new limit value.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Request to create a Storage API token in a project.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStorageTokenRequest {
    /// Token description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Token lifetime in seconds; omitted means no expiration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// Whether the token may manage buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_buckets: Option<bool>,
    /// Whether the token may manage other tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_tokens: Option<bool>,
    /// Whether the token may read all file uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_read_all_file_uploads: Option<bool>,
}

impl CreateStorageTokenRequest {
    /// Creates a new empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the token lifetime in seconds.
    #[must_use]
    pub fn with_expires_in(mut self, seconds: u64) -> Self {
        self.expires_in = Some(seconds);
        self
    }

    /// Sets whether the token may manage buckets.
    #[must_use]
    pub fn with_can_manage_buckets(mut self, can: bool) -> Self {
        self.can_manage_buckets = Some(can);
        self
    }

    /// Sets whether the token may manage other tokens.
    #[must_use]
    pub fn with_can_manage_tokens(mut self, can: bool) -> Self {
        self.can_manage_tokens = Some(can);
        self
    }

    /// Sets whether the token may read all file uploads.
    #[must_use]
    pub fn with_can_read_all_file_uploads(mut self, can: bool) -> Self {
        self.can_read_all_file_uploads = Some(can);
        self
    }
}

/// Request to disable a project.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableProjectRequest {
    /// Reason shown to the project's admins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_reason: Option<String>,
    /// Estimated end of the outage, shown to the project's admins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_end_time: Option<String>,
}

impl DisableProjectRequest {
    /// Creates a new empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reason shown to the project's admins.
    #[must_use]
    pub fn with_disable_reason(mut self, reason: impl Into<String>) -> Self {
        self.disable_reason = Some(reason.into());
        self
    }

    /// Sets the estimated end of the outage.
    #[must_use]
    pub fn with_estimated_end_time(mut self, end_time: impl Into<String>) -> Self {
        self.estimated_end_time = Some(end_time.into());
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
    async fn test_get_project() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/manage/projects/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 42,
                "name": "sandbox",
                "organization": {"id": 123},
                "features": ["new-transformations-only"]
            })))
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let project = client.project(42).get().await.unwrap();

        assert_eq!(project["name"], "sandbox");
        assert_eq!(project["features"][0], "new-transformations-only");
    }

    #[tokio::test]
    async fn test_update_project_uses_put() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/manage/projects/42"))
            .and(body_json(serde_json::json!({"name": "renamed"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 42, "name": "renamed"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let project = client
            .project(42)
            .update(UpdateProjectRequest::new().with_name("renamed"))
            .await
            .unwrap();

        assert_eq!(project["name"], "renamed");
    }

    #[tokio::test]
    async fn test_add_user_with_expiration() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/manage/projects/42/users"))
            .and(body_json(serde_json::json!({
                "email": "alice@example.com",
                "role": "guest",
                "expirationSeconds": 3600
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 8, "role": "guest"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let member = client
            .project(42)
            .add_user(
                AddProjectUserRequest::new("alice@example.com")
                    .with_role("guest")
                    .with_expiration_seconds(3600),
            )
            .await
            .unwrap();

        assert_eq!(member["role"], "guest");
    }

    #[tokio::test]
    async fn test_feature_assignment() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/manage/projects/42/features"))
            .and(body_json(serde_json::json!({"feature": "queuev2"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/manage/projects/42/features/queuev2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        client.project(42).add_feature("queuev2").await.unwrap();
        client.project(42).remove_feature("queuev2").await.unwrap();
    }

    #[tokio::test]
    async fn test_assign_storage_backend() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/manage/projects/42/storage-backend"))
            .and(body_json(serde_json::json!({"storageBackendId": 7})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 42, "backend": "snowflake"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let project = client.project(42).assign_storage_backend(7).await.unwrap();

        assert_eq!(project["backend"], "snowflake");
    }

    #[tokio::test]
    async fn test_set_limits() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/manage/projects/42/limits"))
            .and(body_json(serde_json::json!({
                "limits": [{"name": "storage.jobsParallelism", "value": 10}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let result = client
            .project(42)
            .set_limits(vec![LimitValue::new("storage.jobsParallelism", 10)])
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_join_request_approval() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/manage/projects/42/join-requests/12"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 12, "status": "approved"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let approved = client.project(42).join_requests().approve(12).await.unwrap();

        assert_eq!(approved["status"], "approved");
    }

    #[tokio::test]
    async fn test_disable_and_enable() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/manage/projects/42/disabled"))
            .and(body_json(serde_json::json!({"disableReason": "billing"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"isDisabled": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/manage/projects/42/disabled"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        client
            .project(42)
            .disable(DisableProjectRequest::new().with_disable_reason("billing"))
            .await
            .unwrap();
        client.project(42).enable().await.unwrap();
    }
}
