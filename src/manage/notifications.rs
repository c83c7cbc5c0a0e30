//! Notifications and announcements.

use serde::Serialize;
use serde_json::Value;

use crate::Error;
use crate::client::Client;

/// Client for the calling admin's notifications and for publishing
/// announcements.
///
/// Access via `client.notifications()`.
#[derive(Clone)]
pub struct NotificationsClient {
    client: Client,
}

impl NotificationsClient {
    /// Creates a new notifications client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists the calling admin's notifications, newest first.
    pub async fn list(&self) -> Result<Value, Error> {
        self.client.inner().get("/manage/notifications").await
    }

    /// Publishes an announcement.
    ///
    /// Project-scoped announcements reach the admins of that project;
    /// announcements without a project reach everyone.
    pub async fn announce(&self, request: AnnouncementRequest) -> Result<Value, Error> {
        self.client.inner().post("/manage/notifications", &request).await
    }

    /// Marks notifications as read.
    pub async fn mark_read(&self, notification_ids: &[u64]) -> Result<Value, Error> {
        self.client
            .inner()
            .post(
                "/manage/notifications/read",
                &serde_json::json!({ "notifications": notification_ids }),
            )
            .await
    }
}

impl std::fmt::Debug for NotificationsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationsClient").finish_non_exhaustive()
    }
}

/// Request to publish an announcement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementRequest {
    /// Announcement title.
    pub title: String,
    /// Announcement body.
    pub message: String,
    /// Restrict the announcement to one project's admins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
}

impl AnnouncementRequest {
    /// Creates a new global announcement.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            project_id: None,
        }
    }

    /// Restricts the announcement to one project.
    #[must_use]
    pub fn with_project_id(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }
}
