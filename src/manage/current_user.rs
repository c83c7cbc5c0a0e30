//! Operations on the calling admin: invitations and join requests
//! addressed to them.

use serde_json::Value;

use crate::Error;
use crate::client::Client;

/// Client for invitations and join requests addressed to the calling admin.
///
/// Access via `client.current_user()`.
///
/// Invitations are created on the target resource (see the maintainer,
/// organization, and project clients); this client is how the invited admin
/// sees and answers them.
///
/// ## Example
///
/// ```rust,ignore
/// let me = client.current_user();
///
/// // Answer a pending project invitation
/// for invitation in me.project_invitations().await?.as_array().unwrap() {
///     me.accept_project_invitation(invitation["id"].as_u64().unwrap()).await?;
/// }
/// ```
#[derive(Clone)]
pub struct CurrentUserClient {
    client: Client,
}

impl CurrentUserClient {
    /// Creates a new current-user client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    // Organization invitations

    /// Lists pending organization invitations addressed to the calling admin.
    pub async fn organization_invitations(&self) -> Result<Value, Error> {
        self.client
            .inner()
            .get("/manage/current-user/organizations-invitations")
            .await
    }

    /// Gets a single organization invitation.
    pub async fn organization_invitation(&self, invitation_id: u64) -> Result<Value, Error> {
        let path = format!(
            "/manage/current-user/organizations-invitations/{}",
            invitation_id
        );
        self.client.inner().get(&path).await
    }

    /// Accepts an organization invitation.
    pub async fn accept_organization_invitation(&self, invitation_id: u64) -> Result<Value, Error> {
        let path = format!(
            "/manage/current-user/organizations-invitations/{}",
            invitation_id
        );
        self.client.inner().put_empty(&path).await
    }

    /// Declines an organization invitation.
    pub async fn decline_organization_invitation(&self, invitation_id: u64) -> Result<(), Error> {
        let path = format!(
            "/manage/current-user/organizations-invitations/{}",
            invitation_id
        );
        self.client.inner().delete(&path).await
    }

    // Project invitations

    /// Lists pending project invitations addressed to the calling admin.
    pub async fn project_invitations(&self) -> Result<Value, Error> {
        self.client
            .inner()
            .get("/manage/current-user/projects-invitations")
            .await
    }

    /// Gets a single project invitation.
    pub async fn project_invitation(&self, invitation_id: u64) -> Result<Value, Error> {
        let path = format!("/manage/current-user/projects-invitations/{}", invitation_id);
        self.client.inner().get(&path).await
    }

    /// Accepts a project invitation.
    pub async fn accept_project_invitation(&self, invitation_id: u64) -> Result<Value, Error> {
        let path = format!("/manage/current-user/projects-invitations/{}", invitation_id);
        self.client.inner().put_empty(&path).await
    }

    /// Declines a project invitation.
    pub async fn decline_project_invitation(&self, invitation_id: u64) -> Result<(), Error> {
        let path = format!("/manage/current-user/projects-invitations/{}", invitation_id);
        self.client.inner().delete(&path).await
    }

    // Maintainer invitations

    /// Lists pending maintainer invitations addressed to the calling admin.
    pub async fn maintainer_invitations(&self) -> Result<Value, Error> {
        self.client
            .inner()
            .get("/manage/current-user/maintainers-invitations")
            .await
    }

    /// Gets a single maintainer invitation.
    pub async fn maintainer_invitation(&self, invitation_id: u64) -> Result<Value, Error> {
        let path = format!(
            "/manage/current-user/maintainers-invitations/{}",
            invitation_id
        );
        self.client.inner().get(&path).await
    }

    /// Accepts a maintainer invitation.
    pub async fn accept_maintainer_invitation(&self, invitation_id: u64) -> Result<Value, Error> {
        let path = format!(
            "/manage/current-user/maintainers-invitations/{}",
            invitation_id
        );
        self.client.inner().put_empty(&path).await
    }

    /// Declines a maintainer invitation.
    pub async fn decline_maintainer_invitation(&self, invitation_id: u64) -> Result<(), Error> {
        let path = format!(
            "/manage/current-user/maintainers-invitations/{}",
            invitation_id
        );
        self.client.inner().delete(&path).await
    }

    // Project join requests

    /// Lists the calling admin's open project join requests.
    pub async fn project_join_requests(&self) -> Result<Value, Error> {
        self.client
            .inner()
            .get("/manage/current-user/projects-join-requests")
            .await
    }

    /// Gets a single project join request.
    pub async fn project_join_request(&self, request_id: u64) -> Result<Value, Error> {
        let path = format!("/manage/current-user/projects-join-requests/{}", request_id);
        self.client.inner().get(&path).await
    }

    /// Withdraws a project join request.
    pub async fn delete_project_join_request(&self, request_id: u64) -> Result<(), Error> {
        let path = format!("/manage/current-user/projects-join-requests/{}", request_id);
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for CurrentUserClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentUserClient").finish_non_exhaustive()
    }
}
