pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "quill";
#[cfg(windows)]
pub const EXEC_NAME: &str = "quill.exe";

pub const API_BASE_URL: &str = "https://api.quillpay.io";
pub const SANDBOX_API_BASE_URL: &str = "https://api.sandbox.quillpay.io";

// date-versioned, bumped when the gateway wire format changes
pub const GATEWAY_VERSION: &str = "2024-02-01";

pub const AUTH_STORE_PATH: &str = ".quill/auth.json";
pub const CONTEXT_STORE_PATH: &str = ".quill/context.json";
pub const CONFIGURATION_STORE_PATH: &str = ".quill/configuration.json";

/// Cached gateway configuration goes stale after this many milliseconds.
pub const CONFIGURATION_CACHE_TTL_MS: i64 = 5 * 60 * 1000;
