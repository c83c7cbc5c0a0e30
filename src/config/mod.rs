//! Client configuration types.

mod retry;

pub use retry::RetryConfig;
