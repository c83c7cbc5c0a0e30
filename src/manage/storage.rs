//! File storage and storage backend registration.
//!
//! These registries hold the stack-level storage resources that projects are
//! assigned to via
//! [`ProjectClient::assign_storage_backend`](crate::manage::ProjectClient::assign_storage_backend).

use serde::Serialize;
use serde_json::Value;

use crate::Error;
use crate::client::Client;

/// Client for registered file storages (S3 and compatible).
///
/// Access via `client.file_storage()`.
#[derive(Clone)]
pub struct FileStorageClient {
    client: Client,
}

impl FileStorageClient {
    /// Creates a new file storage client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists registered file storages.
    pub async fn list(&self) -> Result<Value, Error> {
        self.client.inner().get("/manage/file-storage").await
    }

    /// Registers a new file storage.
    pub async fn create(&self, request: CreateFileStorageRequest) -> Result<Value, Error> {
        self.client.inner().post("/manage/file-storage", &request).await
    }
}

impl std::fmt::Debug for FileStorageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStorageClient").finish_non_exhaustive()
    }
}

/// Client for registered storage backends (data warehouses).
///
/// Access via `client.storage_backends()`.
#[derive(Clone)]
pub struct StorageBackendsClient {
    client: Client,
}

impl StorageBackendsClient {
    /// Creates a new storage backends client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists registered storage backends.
    pub async fn list(&self) -> Result<Value, Error> {
        self.client.inner().get("/manage/storage-backend").await
    }

    /// Registers a new storage backend.
    pub async fn create(&self, request: CreateStorageBackendRequest) -> Result<Value, Error> {
        self.client
            .inner()
            .post("/manage/storage-backend", &request)
            .await
    }

    /// Removes a storage backend from the registry.
    ///
    /// Fails with a conflict while any project is still assigned to it.
    pub async fn delete(&self, storage_backend_id: u64) -> Result<(), Error> {
        let path = format!("/manage/storage-backend/{}", storage_backend_id);
        self.client.inner().delete(&path).await
    }
}

impl std::fmt::Debug for StorageBackendsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageBackendsClient").finish_non_exhaustive()
    }
}

/// Request to register a file storage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileStorageRequest {
    /// Storage provider (e.g. `"aws"`).
    pub provider: String,
    /// Provider region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Bucket receiving uploaded files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_bucket: Option<String>,
    /// Access key id used by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_key: Option<String>,
    /// Secret access key used by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_secret: Option<String>,
    /// Owner label for operational bookkeeping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl CreateFileStorageRequest {
    /// Creates a new request for the given provider.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            region: None,
            files_bucket: None,
            aws_key: None,
            aws_secret: None,
            owner: None,
        }
    }

    /// Sets the provider region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the bucket receiving uploaded files.
    #[must_use]
    pub fn with_files_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.files_bucket = Some(bucket.into());
        self
    }

    /// Sets the access key id.
    #[must_use]
    pub fn with_aws_key(mut self, key: impl Into<String>) -> Self {
        self.aws_key = Some(key.into());
        self
    }

    /// Sets the secret access key.
    #[must_use]
    pub fn with_aws_secret(mut self, secret: impl Into<String>) -> Self {
        self.aws_secret = Some(secret.into());
        self
    }

    /// Sets the owner label.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

impl std::fmt::Debug for CreateStorageBackendRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateStorageBackendRequest")
            .field("backend", &self.backend)
            .field("host", &self.host)
            .field("username", &self.username)
            .field("region", &self.region)
            .field("warehouse", &self.warehouse)
            .finish_non_exhaustive()
    }
}

/// Request to register a storage backend.
///
/// The `Debug` impl omits the password.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStorageBackendRequest {
    /// Backend kind (e.g. `"snowflake"`, `"redshift"`).
    pub backend: String,
    /// Hostname of the warehouse.
    pub host: String,
    /// Service account username.
    pub username: String,
    /// Service account password.
    pub password: String,
    /// Provider region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Warehouse name, for backends that need one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,
}

impl CreateStorageBackendRequest {
    /// Creates a new request with the required connection fields.
    pub fn new(
        backend: impl Into<String>,
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            backend: backend.into(),
            host: host.into(),
            username: username.into(),
            password: password.into(),
            region: None,
            warehouse: None,
        }
    }

    /// Sets the provider region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the warehouse name.
    #[must_use]
    pub fn with_warehouse(mut self, warehouse: impl Into<String>) -> Self {
        self.warehouse = Some(warehouse.into());
        self
    }
}
