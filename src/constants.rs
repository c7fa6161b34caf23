//! Shared constants
//!

/// Where the dogs live. Always ends with a `/`.
pub const BASE_URL: &str = "https://httpstatusdogs.com/";

/// Default per-request timeout, the site has been known to hang.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("httpdogs/", env!("CARGO_PKG_VERSION"));

/// Largest page or image body we'll read (16MiB).
pub const MAX_BODY_BYTES: u64 = 16 * 1024 * 1024;

#[cfg(test)]
/// Base URL used in tests
pub const TEST_BASE_URL: &str = "https://example.com/";
