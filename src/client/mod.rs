//! Client types for connecting to the Manage API.
//!
//! The client uses a hierarchical structure:
//! - [`Client`]: top-level client, owns the HTTP connection pool and token
//! - resource clients (`client.maintainer(id)`, `client.project(id)`, ...)
//! - nested sub-clients (`.invitations()`, `.metadata()`, ...)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kbc_manage::prelude::*;
//!
//! let client = Client::builder()
//!     .url("https://connection.keboola.com")
//!     .token("my-manage-token")
//!     .build()?;
//!
//! let detail = client.project(42).get().await?;
//! ```

mod builder;
mod inner;

pub use builder::ClientBuilder;

use std::sync::Arc;

use crate::manage::{
    CommandsClient, CurrentUserClient, DeletedProjectsClient, FeatureClient, FeaturesClient,
    FileStorageClient, MaintainerClient, MaintainersClient, NotificationsClient,
    OrganizationClient, OrganizationsClient, ProjectClient, StorageBackendsClient, TokensClient,
    UiAppsClient, UserClient,
};

/// The Manage API client.
///
/// This is the main entry point for the crate. Create a client using
/// [`Client::builder()`], then navigate to the resource you need.
///
/// ## Thread Safety
///
/// `Client` is `Clone` and thread-safe. It holds a single long-lived HTTP
/// connection pool that is shared by every clone and sub-client.
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder<builder::NoUrl, builder::NoToken> {
        ClientBuilder::new()
    }

    /// Returns the base URL of the client.
    pub fn url(&self) -> &str {
        self.inner.url.as_str()
    }

    /// Returns a client for token operations.
    pub fn tokens(&self) -> TokensClient {
        TokensClient::new(self.clone())
    }

    /// Returns a client for operations on the calling admin
    /// (invitations and join requests addressed to them).
    pub fn current_user(&self) -> CurrentUserClient {
        CurrentUserClient::new(self.clone())
    }

    /// Returns a client for listing and creating maintainers.
    pub fn maintainers(&self) -> MaintainersClient {
        MaintainersClient::new(self.clone())
    }

    /// Returns a maintainer-scoped client.
    pub fn maintainer(&self, id: u64) -> MaintainerClient {
        MaintainerClient::new(self.clone(), id)
    }

    /// Returns a client for listing organizations.
    pub fn organizations(&self) -> OrganizationsClient {
        OrganizationsClient::new(self.clone())
    }

    /// Returns an organization-scoped client.
    pub fn organization(&self, id: u64) -> OrganizationClient {
        OrganizationClient::new(self.clone(), id)
    }

    /// Returns a project-scoped client.
    pub fn project(&self, id: u64) -> ProjectClient {
        ProjectClient::new(self.clone(), id)
    }

    /// Returns a client for deleted projects.
    pub fn deleted_projects(&self) -> DeletedProjectsClient {
        DeletedProjectsClient::new(self.clone())
    }

    /// Returns a client for listing and creating features.
    pub fn features(&self) -> FeaturesClient {
        FeaturesClient::new(self.clone())
    }

    /// Returns a feature-scoped client.
    pub fn feature(&self, id: u64) -> FeatureClient {
        FeatureClient::new(self.clone(), id)
    }

    /// Returns a user-scoped client.
    ///
    /// `email_or_id` accepts either the user's email address or their
    /// numeric id.
    pub fn user(&self, email_or_id: impl Into<String>) -> UserClient {
        UserClient::new(self.clone(), email_or_id.into())
    }

    /// Returns a client for file storage registrations.
    pub fn file_storage(&self) -> FileStorageClient {
        FileStorageClient::new(self.clone())
    }

    /// Returns a client for storage backend registrations.
    pub fn storage_backends(&self) -> StorageBackendsClient {
        StorageBackendsClient::new(self.clone())
    }

    /// Returns a client for UI applications.
    pub fn ui_apps(&self) -> UiAppsClient {
        UiAppsClient::new(self.clone())
    }

    /// Returns a client for server-side commands.
    pub fn commands(&self) -> CommandsClient {
        CommandsClient::new(self.clone())
    }

    /// Returns a client for notifications.
    pub fn notifications(&self) -> NotificationsClient {
        NotificationsClient::new(self.clone())
    }

    /// Creates a client from the inner implementation.
    pub(crate) fn from_inner(inner: Arc<inner::ClientInner>) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner client.
    pub(crate) fn inner(&self) -> &inner::ClientInner {
        &self.inner
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The token is deliberately not printed.
        f.debug_struct("Client")
            .field("url", &self.inner.url.as_str())
            .finish_non_exhaustive()
    }
}
