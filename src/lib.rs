//! # Keboola Manage API client
//!
//! Rust client for the Keboola Manage API, the control plane for
//! maintainers, organizations, projects, users, features, and storage
//! backends.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kbc_manage::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), kbc_manage::Error> {
//!     let client = Client::builder()
//!         .url("https://connection.keboola.com")
//!         .token(std::env::var("KBC_MANAGE_API_TOKEN").unwrap())
//!         .build()?;
//!
//!     // Verify the token
//!     let token = client.tokens().verify().await?;
//!     println!("token: {}", token["description"]);
//!
//!     // Navigate the resource tree
//!     let projects = client.organization(123).projects().await?;
//!     println!("projects: {}", projects);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Client Hierarchy**: `Client` → resource clients
//!   (`client.maintainer(id)`, `client.project(id)`, ...) → nested
//!   sub-clients (`.invitations()`, `.metadata()`, ...)
//! - **Opaque Payloads**: the server owns every response schema; methods
//!   return [`serde_json::Value`] and the client never reinterprets it
//! - **Retries**: requests answered with a status above 499, or failing
//!   with a connect/timeout error, are retried with exponential backoff
//!   (2^(n-1) seconds between attempts, at most `max_tries` attempts,
//!   default 10)
//! - **Errors**: every failure surfaces as [`Error`]; branch on
//!   [`Error::kind`], [`Error::status`], or [`Error::string_code`]
//!
//! ## Features
//!
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod client;
pub mod config;
pub mod error;

// Resource clients (the Manage API surface)
pub mod manage;

// User-Agent string
mod user_agent;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder};
pub use config::RetryConfig;
pub use error::{APPLICATION_ERROR, Error, ErrorKind};
