//! Resource clients for the Manage API.
//!
//! Every method here is a thin wrapper: it builds a path (and a query
//! string from a typed options struct where the endpoint takes one), picks
//! an HTTP verb, and delegates to the transport. Responses come back as
//! opaque [`serde_json::Value`] payloads; the server owns every schema and
//! the client never reinterprets them.
//!
//! ## API Hierarchy
//!
//! ```rust,ignore
//! let client = Client::builder().url(url).token(token).build()?;
//!
//! // Token verification
//! let token = client.tokens().verify().await?;
//!
//! // Maintainer context
//! let maintainer = client.maintainer(100);
//! let orgs = maintainer.organizations().await?;
//! maintainer.invitations().invite(InviteRequest::new("alice@example.com")).await?;
//!
//! // Organization context
//! let org = client.organization(123);
//! let project = org.create_project(CreateProjectRequest::new("sandbox")).await?;
//!
//! // Project context
//! let project = client.project(42);
//! project.add_feature("new-transformations-only").await?;
//! project.metadata().set(vec![MetadataEntry::new("costCenter", "42A")]).await?;
//!
//! // Invitations addressed to the calling admin
//! client.current_user().accept_project_invitation(987).await?;
//! ```

mod commands;
mod current_user;
mod deleted_projects;
mod features;
mod maintainers;
mod metadata;
mod notifications;
mod organizations;
mod projects;
mod storage;
mod tokens;
mod types;
mod ui_apps;
mod users;

// Re-export token types
pub use tokens::TokensClient;

// Re-export current-user types
pub use current_user::CurrentUserClient;

// Re-export maintainer types
pub use maintainers::{
    CreateMaintainerRequest, MaintainerClient, MaintainerInvitationsClient,
    MaintainerMembersClient, MaintainersClient, UpdateMaintainerRequest,
};

// Re-export organization types
pub use organizations::{
    CreateOrganizationRequest, CreateProjectRequest, OrganizationClient,
    OrganizationInvitationsClient, OrganizationsClient, UpdateOrganizationRequest,
};

// Re-export project types
pub use projects::{
    AddProjectUserRequest, CreateStorageTokenRequest, DisableProjectRequest,
    LimitValue, ProjectClient, ProjectInvitationsClient, ProjectJoinRequestsClient,
    UpdateProjectRequest,
};

// Re-export deleted-project types
pub use deleted_projects::{
    DeletedProjectsClient, ListDeletedProjectsOptions, UndeleteProjectOptions,
};

// Re-export feature types
pub use features::{
    CreateFeatureRequest, FeatureClient, FeaturesClient, ListFeaturesOptions, UpdateFeatureRequest,
};

// Re-export user types
pub use users::{UpdateUserRequest, UserClient};

// Re-export metadata types
pub use metadata::{MetadataClient, MetadataEntry};

// Re-export storage types
pub use storage::{
    CreateFileStorageRequest, CreateStorageBackendRequest, FileStorageClient,
    StorageBackendsClient,
};

// Re-export remaining flat resources
pub use commands::{CommandsClient, RunCommandRequest};
pub use notifications::{AnnouncementRequest, NotificationsClient};
pub use ui_apps::UiAppsClient;

// Re-export common types
pub use types::InviteRequest;
