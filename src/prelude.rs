//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy importing:
//!
//! ```rust
//! use kbc_manage::prelude::*;
//! ```
//!
//! This provides access to:
//! - Core client types
//! - Error types
//! - Resource clients and their request types

pub use crate::{
    client::{Client, ClientBuilder},
    config::RetryConfig,
    error::{APPLICATION_ERROR, Error, ErrorKind, Result},
    manage::{
        AddProjectUserRequest, AnnouncementRequest, CommandsClient, CreateFeatureRequest,
        CreateFileStorageRequest, CreateMaintainerRequest, CreateOrganizationRequest,
        CreateProjectRequest, CreateStorageBackendRequest, CreateStorageTokenRequest,
        CurrentUserClient, DeletedProjectsClient, DisableProjectRequest, FeatureClient,
        FeaturesClient, FileStorageClient, InviteRequest, LimitValue, ListDeletedProjectsOptions,
        ListFeaturesOptions, MaintainerClient, MaintainerInvitationsClient,
        MaintainerMembersClient, MaintainersClient, MetadataClient, MetadataEntry,
        NotificationsClient, OrganizationClient, OrganizationInvitationsClient,
        OrganizationsClient, ProjectClient, ProjectInvitationsClient, ProjectJoinRequestsClient,
        RunCommandRequest, StorageBackendsClient, TokensClient, UiAppsClient,
        UndeleteProjectOptions, UpdateFeatureRequest, UpdateMaintainerRequest,
        UpdateOrganizationRequest, UpdateProjectRequest, UpdateUserRequest, UserClient,
    },
};
