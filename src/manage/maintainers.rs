//! Maintainer management.
//!
//! A maintainer is the top-level tenant grouping; it owns organizations and
//! has its own member and invitation lists.

use serde::Serialize;
use serde_json::Value;

use crate::Error;
use crate::client::Client;
use crate::manage::metadata::MetadataClient;
use crate::manage::organizations::CreateOrganizationRequest;
use crate::manage::types::InviteRequest;

/// Client for listing and creating maintainers.
///
/// Access via `client.maintainers()`.
#[derive(Clone)]
pub struct MaintainersClient {
    client: Client,
}

impl MaintainersClient {
    /// Creates a new maintainers client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists all maintainers the token has access to.
    pub async fn list(&self) -> Result<Value, Error> {
        self.client.inner().get("/manage/maintainers").await
    }

    /// Creates a new maintainer.
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// let maintainer = client.maintainers().create(
    ///     CreateMaintainerRequest::new("acme")
    ///         .with_zendesk_url("https://acme.zendesk.com"),
    /// ).await?;
    /// ```
    pub async fn create(&self, request: CreateMaintainerRequest) -> Result<Value, Error> {
        self.client.inner().post("/manage/maintainers", &request).await
    }
}

impl std::fmt::Debug for MaintainersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaintainersClient").finish_non_exhaustive()
    }
}

/// Client for maintainer-scoped operations.
///
/// Access via `client.maintainer(id)`.
///
/// ## Example
///
/// ```rust,ignore
/// let maintainer = client.maintainer(100);
///
/// let detail = maintainer.get().await?;
/// let orgs = maintainer.organizations().await?;
/// maintainer.members().add("alice@example.com").await?;
/// ```
#[derive(Clone)]
pub struct MaintainerClient {
    client: Client,
    maintainer_id: u64,
}

impl MaintainerClient {
    /// Creates a new maintainer client.
    pub(crate) fn new(client: Client, maintainer_id: u64) -> Self {
        Self {
            client,
            maintainer_id,
        }
    }

    /// Returns the maintainer id.
    pub fn maintainer_id(&self) -> u64 {
        self.maintainer_id
    }

    /// Gets the maintainer details.
    pub async fn get(&self) -> Result<Value, Error> {
        let path = format!("/manage/maintainers/{}", self.maintainer_id);
        self.client.inner().get(&path).await
    }

    /// Updates the maintainer.
    pub async fn update(&self, request: UpdateMaintainerRequest) -> Result<Value, Error> {
        let path = format!("/manage/maintainers/{}", self.maintainer_id);
        self.client.inner().patch(&path, &request).await
    }

    /// Deletes the maintainer.
    pub async fn delete(&self) -> Result<(), Error> {
        let path = format!("/manage/maintainers/{}", self.maintainer_id);
        self.client.inner().delete(&path).await
    }

    /// Joins the maintainer as the calling admin.
    ///
    /// Requires a privileged token; regular admins go through an
    /// invitation instead.
    pub async fn join(&self) -> Result<Value, Error> {
        let path = format!("/manage/maintainers/{}/join", self.maintainer_id);
        self.client.inner().post_empty(&path).await
    }

    /// Lists the organizations owned by this maintainer.
    pub async fn organizations(&self) -> Result<Value, Error> {
        let path = format!("/manage/maintainers/{}/organizations", self.maintainer_id);
        self.client.inner().get(&path).await
    }

    /// Creates an organization under this maintainer.
    pub async fn create_organization(
        &self,
        request: CreateOrganizationRequest,
    ) -> Result<Value, Error> {
        let path = format!("/manage/maintainers/{}/organizations", self.maintainer_id);
        self.client.inner().post(&path, &request).await
    }

    /// Returns a client for member management.
    pub fn members(&self) -> MaintainerMembersClient {
        MaintainerMembersClient {
            client: self.client.clone(),
            maintainer_id: self.maintainer_id,
        }
    }

    /// Returns a client for invitation management.
    pub fn invitations(&self) -> MaintainerInvitationsClient {
        MaintainerInvitationsClient {
            client: self.client.clone(),
            maintainer_id: self.maintainer_id,
        }
    }

    /// Returns a client for maintainer metadata.
    pub fn metadata(&self) -> MetadataClient {
        MetadataClient::new(
            self.client.clone(),
            format!("/manage/maintainers/{}", self.maintainer_id),
        )
    }
}

impl std::fmt::Debug for MaintainerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaintainerClient")
            .field("maintainer_id", &self.maintainer_id)
            .finish_non_exhaustive()
    }
}

/// Client for maintainer member management.
///
/// Access via `maintainer.members()`.
#[derive(Clone)]
pub struct MaintainerMembersClient {
    client: Client,
    maintainer_id: u64,
}

impl MaintainerMembersClient {
    /// Lists the maintainer's members.
    pub async fn list(&self) -> Result<Value, Error> {
        let path = format!("/manage/maintainers/{}/users", self.maintainer_id);
        self.client.inner().get(&path).await
    }

    /// Adds an existing admin to the maintainer by email.
    pub async fn add(&self, email: impl Into<String>) -> Result<Value, Error> {
        let path = format!("/manage/maintainers/{}/users", self.maintainer_id);
        self.client
            .inner()
            .post(&path, &serde_json::json!({ "email": email.into() }))
            .await
    }

    /// Removes a member from the maintainer.
    pub async fn remove(&self, user_id: u64) -> Result<(), Error> {
        let path = format!("/manage/maintainers/{}/users/{}", self.maintainer_id, user_id);
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for MaintainerMembersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaintainerMembersClient")
            .field("maintainer_id", &self.maintainer_id)
            .finish_non_exhaustive()
    }
}

/// Client for maintainer invitation management.
///
/// Access via `maintainer.invitations()`. The invited admin answers via
/// [`CurrentUserClient`](crate::manage::CurrentUserClient).
#[derive(Clone)]
pub struct MaintainerInvitationsClient {
    client: Client,
    maintainer_id: u64,
}

impl MaintainerInvitationsClient {
    /// Lists pending invitations.
    pub async fn list(&self) -> Result<Value, Error> {
        let path = format!("/manage/maintainers/{}/invitations", self.maintainer_id);
        self.client.inner().get(&path).await
    }

    /// Gets a single invitation.
    pub async fn get(&self, invitation_id: u64) -> Result<Value, Error> {
        let path = format!(
            "/manage/maintainers/{}/invitations/{}",
            self.maintainer_id, invitation_id
        );
        self.client.inner().get(&path).await
    }

    /// Invites an admin to the maintainer.
    pub async fn invite(&self, request: InviteRequest) -> Result<Value, Error> {
        let path = format!("/manage/maintainers/{}/invitations", self.maintainer_id);
        self.client.inner().post(&path, &request).await
    }

    /// Cancels a pending invitation.
    pub async fn cancel(&self, invitation_id: u64) -> Result<(), Error> {
        let path = format!(
            "/manage/maintainers/{}/invitations/{}",
            self.maintainer_id, invitation_id
        );
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for MaintainerInvitationsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaintainerInvitationsClient")
            .field("maintainer_id", &self.maintainer_id)
            .finish_non_exhaustive()
    }
}

/// Request to create a new maintainer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintainerRequest {
    /// The maintainer name.
    pub name: String,
    /// Default MySQL connection id for new projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_connection_mysql_id: Option<u64>,
    /// Default Redshift connection id for new projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_connection_redshift_id: Option<u64>,
    /// Default Snowflake connection id for new projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_connection_snowflake_id: Option<u64>,
    /// Support desk URL shown to the maintainer's organizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zendesk_url: Option<String>,
}

impl CreateMaintainerRequest {
    /// Creates a new request with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_connection_mysql_id: None,
            default_connection_redshift_id: None,
            default_connection_snowflake_id: None,
            zendesk_url: None,
        }
    }

    /// Sets the default Snowflake connection id.
    #[must_use]
    pub fn with_default_connection_snowflake_id(mut self, id: u64) -> Self {
        self.default_connection_snowflake_id = Some(id);
        self
    }

    /// Sets the support desk URL.
    #[must_use]
    pub fn with_zendesk_url(mut self, url: impl Into<String>) -> Self {
        self.zendesk_url = Some(url.into());
        self
    }
}

/// Request to update a maintainer. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintainerRequest {
    /// New maintainer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New default Snowflake connection id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_connection_snowflake_id: Option<u64>,
    /// New support desk URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zendesk_url: Option<String>,
}

impl UpdateMaintainerRequest {
    /// Creates a new empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maintainer name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the default Snowflake connection id.
    #[must_use]
    pub fn with_default_connection_snowflake_id(mut self, id: u64) -> Self {
        self.default_connection_snowflake_id = Some(id);
        self
    }

    /// Sets the support desk URL.
    #[must_use]
    pub fn with_zendesk_url(mut self, url: impl Into<String>) -> Self {
        self.zendesk_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_maintainer_request_serialization() {
        let req = CreateMaintainerRequest::new("acme")
            .with_default_connection_snowflake_id(7)
            .with_zendesk_url("https://acme.zendesk.com");

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["name"], "acme");
        assert_eq!(json["defaultConnectionSnowflakeId"], 7);
        assert_eq!(json["zendeskUrl"], "https://acme.zendesk.com");
        assert!(json.get("defaultConnectionMysqlId").is_none());
    }

    #[test]
    fn test_update_maintainer_request_empty() {
        let json = serde_json::to_value(UpdateMaintainerRequest::new()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
