//! User-Agent header generation.
//!
//! Provides a consistent User-Agent string for every request, to help with
//! usage analytics, debugging, and deprecation planning on the server side.

use std::sync::OnceLock;

/// Client name used in the User-Agent string.
const CLIENT_NAME: &str = "kbc-manage-rust";

/// Client version from Cargo.toml.
const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cached User-Agent string (computed once on first access).
static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns the User-Agent string for client requests.
///
/// Format: `kbc-manage-rust/0.1.0 (rust/1.92; linux/x86_64)`
///
/// The string is computed once and cached for subsequent calls.
pub fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        format!(
            "{}/{} ({}; {}/{})",
            CLIENT_NAME,
            CLIENT_VERSION,
            rust_version(),
            os_name(),
            std::env::consts::ARCH,
        )
    })
}

/// Returns the Rust version string.
fn rust_version() -> &'static str {
    // This is set at compile time by cargo
    concat!("rust/", env!("CARGO_PKG_RUST_VERSION"))
}

/// Returns a normalized OS name.
fn os_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        os => os,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_format() {
        let ua = user_agent();

        // Should start with client name and version
        assert!(ua.starts_with("kbc-manage-rust/"));

        // Should contain rust version
        assert!(ua.contains("rust/"));

        // Should contain OS and arch
        assert!(ua.contains(std::env::consts::ARCH));

        // Should be properly formatted with parentheses
        assert!(ua.contains('('));
        assert!(ua.contains(')'));
    }

    #[test]
    fn test_user_agent_cached() {
        // Multiple calls should return the same reference
        let ua1 = user_agent();
        let ua2 = user_agent();
        assert!(std::ptr::eq(ua1, ua2));
    }
}
