//! Infrastructure layer constants
//!
//! Domain constants (schemes, option names) live in
//! `tiercache_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tiercache.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tiercache";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TIERCACHE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default connection string, an in-process store without sweep
pub const DEFAULT_CACHE_URL: &str = "memory://";

/// Default ttl applied by callers that do not choose one (0 = permanent)
pub const CACHE_DEFAULT_TTL_SECS: i64 = 0;

/// Cache namespace separator
pub const CACHE_NAMESPACE_SEPARATOR: &str = ":";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "TIERCACHE_LOG";

/// File name prefix of rotated log files
pub const LOG_FILE_PREFIX: &str = "tiercache";
