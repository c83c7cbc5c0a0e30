//! Feature flag registry.
//!
//! Features are defined once here and then assigned to projects
//! ([`ProjectClient::add_feature`](crate::manage::ProjectClient::add_feature))
//! or admins ([`UserClient::add_feature`](crate::manage::UserClient::add_feature)).

use serde::Serialize;
use serde_json::Value;

use crate::Error;
use crate::client::Client;
use crate::manage::types::with_query;

/// Client for the feature registry.
///
/// Access via `client.features()`.
#[derive(Clone)]
pub struct FeaturesClient {
    client: Client,
}

impl FeaturesClient {
    /// Creates a new features client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists registered features, optionally filtered by type.
    pub async fn list(&self, options: ListFeaturesOptions) -> Result<Value, Error> {
        let mut parts = Vec::new();
        if let Some(feature_type) = options.feature_type {
            parts.push(("type", feature_type));
        }
        let path = with_query("/manage/features".to_string(), parts);
        self.client.inner().get(&path).await
    }

    /// Registers a new feature.
    pub async fn create(&self, request: CreateFeatureRequest) -> Result<Value, Error> {
        self.client.inner().post("/manage/features", &request).await
    }
}

impl std::fmt::Debug for FeaturesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeaturesClient").finish_non_exhaustive()
    }
}

/// Client for a single registered feature.
///
/// Access via `client.feature(id)`.
#[derive(Clone)]
pub struct FeatureClient {
    client: Client,
    feature_id: u64,
}

impl FeatureClient {
    /// Creates a new feature client.
    pub(crate) fn new(client: Client, feature_id: u64) -> Self {
        Self { client, feature_id }
    }

    /// Returns the feature id.
    pub fn feature_id(&self) -> u64 {
        self.feature_id
    }

    /// Gets the feature definition.
    pub async fn get(&self) -> Result<Value, Error> {
        let path = format!("/manage/features/{}", self.feature_id);
        self.client.inner().get(&path).await
    }

    /// Updates the feature definition.
    pub async fn update(&self, request: UpdateFeatureRequest) -> Result<Value, Error> {
        let path = format!("/manage/features/{}", self.feature_id);
        self.client.inner().patch(&path, &request).await
    }

    /// Removes the feature from the registry.
    pub async fn delete(&self) -> Result<(), Error> {
        let path = format!("/manage/features/{}", self.feature_id);
        self.client.inner().delete(&path).await
    }

    /// Lists the projects the feature is assigned to.
    pub async fn projects(&self) -> Result<Value, Error> {
        let path = format!("/manage/features/{}/projects", self.feature_id);
        self.client.inner().get(&path).await
    }

    /// Lists the admins the feature is assigned to.
    pub async fn admins(&self) -> Result<Value, Error> {
        let path = format!("/manage/features/{}/admins", self.feature_id);
        self.client.inner().get(&path).await
    }
}

impl std::fmt::Debug for FeatureClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureClient")
            .field("feature_id", &self.feature_id)
            .finish_non_exhaustive()
    }
}

/// Filtering options for [`FeaturesClient::list`].
#[derive(Debug, Clone, Default)]
pub struct ListFeaturesOptions {
    /// Restrict to one feature type (e.g. `"project"`, `"admin"`).
    pub feature_type: Option<String>,
}

impl ListFeaturesOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to one feature type.
    #[must_use]
    pub fn with_type(mut self, feature_type: impl Into<String>) -> Self {
        self.feature_type = Some(feature_type.into());
        self
    }
}

/// Request to register a new feature.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeatureRequest {
    /// Machine name used when assigning the feature.
    pub name: String,
    /// Feature type, scoping what it can be assigned to.
    #[serde(rename = "type")]
    pub feature_type: String,
    /// Human-readable title.
    pub title: String,
    /// Longer description shown in administration UIs.
    pub description: String,
    /// Whether project admins may toggle the feature themselves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_be_managed_by_admin: Option<bool>,
    /// Whether the feature may be toggled through the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_be_managed_via_api: Option<bool>,
}

impl CreateFeatureRequest {
    /// Creates a new request with the required fields.
    pub fn new(
        name: impl Into<String>,
        feature_type: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            feature_type: feature_type.into(),
            title: title.into(),
            description: description.into(),
            can_be_managed_by_admin: None,
            can_be_managed_via_api: None,
        }
    }

    /// Sets whether project admins may toggle the feature themselves.
    #[must_use]
    pub fn with_can_be_managed_by_admin(mut self, can: bool) -> Self {
        self.can_be_managed_by_admin = Some(can);
        self
    }

    /// Sets whether the feature may be toggled through the API.
    #[must_use]
    pub fn with_can_be_managed_via_api(mut self, can: bool) -> Self {
        self.can_be_managed_via_api = Some(can);
        self
    }
}

/// Request to update a feature definition. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeatureRequest {
    /// New human-readable title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether project admins may toggle the feature themselves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_be_managed_by_admin: Option<bool>,
    /// Whether the feature may be toggled through the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_be_managed_via_api: Option<bool>,
}

impl UpdateFeatureRequest {
    /// Creates a new empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets whether project admins may toggle the feature themselves.
    #[must_use]
    pub fn with_can_be_managed_by_admin(mut self, can: bool) -> Self {
        self.can_be_managed_by_admin = Some(can);
        self
    }

    /// Sets whether the feature may be toggled through the API.
    #[must_use]
    pub fn with_can_be_managed_via_api(mut self, can: bool) -> Self {
        self.can_be_managed_via_api = Some(can);
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
    async fn test_list_features_by_type() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/manage/features"))
            .and(query_param("type", "admin"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"id": 1, "name": "beta-ui"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let features = client
            .features()
            .list(ListFeaturesOptions::new().with_type("admin"))
            .await
            .unwrap();

        assert_eq!(features[0]["name"], "beta-ui");
    }

    #[tokio::test]
    async fn test_create_feature() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/manage/features"))
            .and(body_json(serde_json::json!({
                "name": "queuev2",
                "type": "project",
                "title": "Queue v2",
                "description": "New job queue"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"id": 9, "name": "queuev2"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let feature = client
            .features()
            .create(CreateFeatureRequest::new(
                "queuev2",
                "project",
                "Queue v2",
                "New job queue",
            ))
            .await
            .unwrap();

        assert_eq!(feature["id"], 9);
    }

    #[tokio::test]
    async fn test_update_feature_uses_patch() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/manage/features/9"))
            .and(body_json(serde_json::json!({"title": "Queue v2 GA"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 9, "title": "Queue v2 GA"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let feature = client
            .feature(9)
            .update(UpdateFeatureRequest::new().with_title("Queue v2 GA"))
            .await
            .unwrap();

        assert_eq!(feature["title"], "Queue v2 GA");
    }

    #[tokio::test]
    async fn test_feature_projects() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/manage/features/9/projects"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([{"id": 42}])),
            )
            .mount(&server)
            .await;

        let client = create_mock_client(&server).await;
        let projects = client.feature(9).projects().await.unwrap();

        assert_eq!(projects[0]["id"], 42);
    }
}
