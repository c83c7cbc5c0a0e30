//! Organization management.

use serde::Serialize;
use serde_json::Value;

use crate::Error;
use crate::client::Client;
use crate::manage::metadata::MetadataClient;
use crate::manage::types::InviteRequest;

/// Client for listing organizations.
///
/// Access via `client.organizations()`. Organizations are created under a
/// maintainer, see
/// [`MaintainerClient::create_organization`](crate::manage::MaintainerClient::create_organization).
#[derive(Clone)]
pub struct OrganizationsClient {
    client: Client,
}

impl OrganizationsClient {
    /// Creates a new organizations client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists all organizations the token has access to.
    pub async fn list(&self) -> Result<Value, Error> {
        self.client.inner().get("/manage/organizations").await
    }
}

impl std::fmt::Debug for OrganizationsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationsClient").finish_non_exhaustive()
    }
}

/// Client for organization-scoped operations.
///
/// Access via `client.organization(id)`.
///
/// ## Example
///
/// ```rust,ignore
/// let org = client.organization(123);
///
/// let detail = org.get().await?;
/// let projects = org.projects().await?;
///
/// org.invitations()
///     .invite(InviteRequest::new("alice@example.com"))
///     .await?;
/// ```
#[derive(Clone)]
pub struct OrganizationClient {
    client: Client,
    organization_id: u64,
}

impl OrganizationClient {
    /// Creates a new organization client.
    pub(crate) fn new(client: Client, organization_id: u64) -> Self {
        Self {
            client,
            organization_id,
        }
    }

    /// Returns the organization id.
    pub fn organization_id(&self) -> u64 {
        self.organization_id
    }

    /// Gets the organization details.
    pub async fn get(&self) -> Result<Value, Error> {
        let path = format!("/manage/organizations/{}", self.organization_id);
        self.client.inner().get(&path).await
    }

    /// Updates the organization.
    pub async fn update(&self, request: UpdateOrganizationRequest) -> Result<Value, Error> {
        let path = format!("/manage/organizations/{}", self.organization_id);
        self.client.inner().patch(&path, &request).await
    }

    /// Deletes the organization.
    ///
    /// The organization must not own any projects.
    pub async fn delete(&self) -> Result<(), Error> {
        let path = format!("/manage/organizations/{}", self.organization_id);
        self.client.inner().delete(&path).await
    }

    /// Lists the organization's projects.
    pub async fn projects(&self) -> Result<Value, Error> {
        let path = format!("/manage/organizations/{}/projects", self.organization_id);
        self.client.inner().get(&path).await
    }

    /// Creates a project in the organization.
    pub async fn create_project(&self, request: CreateProjectRequest) -> Result<Value, Error> {
        let path = format!("/manage/organizations/{}/projects", self.organization_id);
        self.client.inner().post(&path, &request).await
    }

    /// Lists the organization's admins.
    pub async fn users(&self) -> Result<Value, Error> {
        let path = format!("/manage/organizations/{}/users", self.organization_id);
        self.client.inner().get(&path).await
    }

    /// Adds an existing admin to the organization by email.
    pub async fn add_user(&self, email: impl Into<String>) -> Result<Value, Error> {
        let path = format!("/manage/organizations/{}/users", self.organization_id);
        self.client
            .inner()
            .post(&path, &serde_json::json!({ "email": email.into() }))
            .await
    }

    /// Removes an admin from the organization.
    pub async fn remove_user(&self, user_id: u64) -> Result<(), Error> {
        let path = format!(
            "/manage/organizations/{}/users/{}",
            self.organization_id, user_id
        );
        self.client.inner().delete(&path).await
    }

    /// Returns a client for invitation management.
    pub fn invitations(&self) -> OrganizationInvitationsClient {
        OrganizationInvitationsClient {
            client: self.client.clone(),
            organization_id: self.organization_id,
        }
    }

    /// Returns a client for organization metadata.
    pub fn metadata(&self) -> MetadataClient {
        MetadataClient::new(
            self.client.clone(),
            format!("/manage/organizations/{}", self.organization_id),
        )
    }
}

impl std::fmt::Debug for OrganizationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationClient")
            .field("organization_id", &self.organization_id)
            .finish_non_exhaustive()
    }
}

/// Client for organization invitation management.
///
/// Access via `org.invitations()`. The invited admin answers via
/// [`CurrentUserClient`](crate::manage::CurrentUserClient).
#[derive(Clone)]
pub struct OrganizationInvitationsClient {
    client: Client,
    organization_id: u64,
}

impl OrganizationInvitationsClient {
    /// Lists pending invitations.
    pub async fn list(&self) -> Result<Value, Error> {
        let path = format!("/manage/organizations/{}/invitations", self.organization_id);
        self.client.inner().get(&path).await
    }

    /// Gets a single invitation.
    pub async fn get(&self, invitation_id: u64) -> Result<Value, Error> {
        let path = format!(
            "/manage/organizations/{}/invitations/{}",
            self.organization_id, invitation_id
        );
        self.client.inner().get(&path).await
    }

    /// Invites an admin to the organization.
    pub async fn invite(&self, request: InviteRequest) -> Result<Value, Error> {
        let path = format!("/manage/organizations/{}/invitations", self.organization_id);
        self.client.inner().post(&path, &request).await
    }

    /// Cancels a pending invitation.
    pub async fn cancel(&self, invitation_id: u64) -> Result<(), Error> {
        let path = format!(
            "/manage/organizations/{}/invitations/{}",
            self.organization_id, invitation_id
        );
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for OrganizationInvitationsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationInvitationsClient")
            .field("organization_id", &self.organization_id)
            .finish_non_exhaustive()
    }
}

/// Request to create a new organization (posted under a maintainer).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    /// The organization name.
    pub name: String,
    /// CRM identifier, when the maintainer tracks one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crm_id: Option<String>,
}

impl CreateOrganizationRequest {
    /// Creates a new request with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            crm_id: None,
        }
    }

    /// Sets the CRM identifier.
    #[must_use]
    pub fn with_crm_id(mut self, crm_id: impl Into<String>) -> Self {
        self.crm_id = Some(crm_id.into());
        self
    }
}

/// Request to update an organization. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationRequest {
    /// New organization name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether maintainer members may join the organization's projects
    /// without an invitation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_auto_join: Option<bool>,
    /// New CRM identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crm_id: Option<String>,
}

impl UpdateOrganizationRequest {
    /// Creates a new empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the organization name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets whether maintainer members may join projects without an
    /// invitation.
    #[must_use]
    pub fn with_allow_auto_join(mut self, allow: bool) -> Self {
        self.allow_auto_join = Some(allow);
        self
    }

    /// Sets the CRM identifier.
    #[must_use]
    pub fn with_crm_id(mut self, crm_id: impl Into<String>) -> Self {
        self.crm_id = Some(crm_id.into());
        self
    }
}

/// Request to create a project (posted under an organization).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// The project name.
    pub name: String,
    /// Project type (e.g. `"production"`, `"poc"`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    /// Default storage backend for the project (e.g. `"snowflake"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_backend: Option<String>,
    /// Data retention window for dropped tables, in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_retention_time_in_days: Option<u32>,
}

impl CreateProjectRequest {
    /// Creates a new request with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_type: None,
            default_backend: None,
            data_retention_time_in_days: None,
        }
    }

    /// Sets the project type.
    #[must_use]
    pub fn with_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = Some(project_type.into());
        self
    }

    /// Sets the default storage backend.
    #[must_use]
    pub fn with_default_backend(mut self, backend: impl Into<String>) -> Self {
        self.default_backend = Some(backend.into());
        self
    }

    /// Sets the data retention window in days.
    #[must_use]
    pub fn with_data_retention_time_in_days(mut self, days: u32) -> Self {
        self.data_retention_time_in_days = Some(days);
        self
    }
}


#[cfg(test)]
mod wiremock_tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::manage::InviteRequest;
    use crate::Client;

    async fn create_mock_client(server: &MockServer) -> Client {
        Client::builder()
            .url(server.uri())
            .token("test-token")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_organization() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/manage/organizations/123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 123,
                "name": "acme-prod",
                "maintainer": {"id": 100}
            })))
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let org = client.organization(123).get().await.unwrap();

        assert_eq!(org["name"], "acme-prod");
    }

    #[tokio::test]
    async fn test_update_organization_uses_patch() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/manage/organizations/123"))
            .and(body_json(serde_json::json!({"allowAutoJoin": false})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 123, "allowAutoJoin": false})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let org = client
            .organization(123)
            .update(UpdateOrganizationRequest::new().with_allow_auto_join(false))
            .await
            .unwrap();

        assert_eq!(org["allowAutoJoin"], false);
    }

    #[tokio::test]
    async fn test_create_project_under_organization() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/manage/organizations/123/projects"))
            .and(body_json(serde_json::json!({"name": "sandbox", "type": "poc"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"id": 42, "name": "sandbox"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let project = client
            .organization(123)
            .create_project(CreateProjectRequest::new("sandbox").with_type("poc"))
            .await
            .unwrap();

        assert_eq!(project["id"], 42);
    }

    #[tokio::test]
    async fn test_invite_admin() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/manage/organizations/123/invitations"))
            .and(body_json(serde_json::json!({"email": "alice@example.com"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"id": 55, "email": "alice@example.com"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let invitation = client
            .organization(123)
            .invitations()
            .invite(InviteRequest::new("alice@example.com"))
            .await
            .unwrap();

        assert_eq!(invitation["id"], 55);
    }

    #[tokio::test]
    async fn test_remove_user() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/manage/organizations/123/users/8"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        assert!(client.organization(123).remove_user(8).await.is_ok());
    }
}
