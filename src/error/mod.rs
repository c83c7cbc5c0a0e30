//! Error types for the Manage API client.
//!
//! The client uses a single [`Error`] type carrying an [`ErrorKind`] for
//! categorization, the HTTP status when applicable, the server's
//! machine-readable string code, and the decoded error body as context.

#[allow(clippy::module_inception)]
mod error;
mod kind;

pub use error::{APPLICATION_ERROR, Error};
pub use kind::ErrorKind;

/// A convenient `Result` alias for Manage API operations.
pub type Result<T> = std::result::Result<T, Error>;
