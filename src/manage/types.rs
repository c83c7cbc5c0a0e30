//! Common types shared by the resource clients.

use serde::Serialize;

/// Request to invite an admin by email.
///
/// Used by maintainer, organization, and project invitation clients; the
/// optional role only applies where the target resource distinguishes
/// member roles.
///
/// ## Example
///
/// ```rust
/// use kbc_manage::manage::InviteRequest;
///
/// let req = InviteRequest::new("alice@example.com").with_role("guest");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteRequest {
    /// Email address of the admin to invite.
    pub email: String,
    /// Role granted on acceptance, where the resource supports roles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl InviteRequest {
    /// Creates a new invitation request for the given email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: None,
        }
    }

    /// Sets the role granted on acceptance.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Appends URL-encoded query parameters to a path.
///
/// Returns the path untouched when there are no parameters.
pub(crate) fn with_query(path: String, parts: Vec<(&'static str, String)>) -> String {
    if parts.is_empty() {
        return path;
    }
    let query = parts
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}
